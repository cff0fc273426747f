use std::time::Duration;

use async_trait::async_trait;
use sacristan_common::config::Config;
use sacristan_common::error::GenerationError;
use sacristan_common::generation::TextGenerator;
use tracing::{debug, warn};

/// Exponential delay schedule with "equal jitter".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub base: Duration,
    pub max: Duration,
}

impl Backoff {
    /// Upper bound of the wait after the `attempt`-th failure (1-based).
    pub fn ceiling(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base.saturating_mul(factor).min(self.max)
    }

    /// Actual wait: uniformly drawn from `[ceiling / 2, ceiling]`.
    pub fn delay(&self, attempt: u32) -> Duration {
        let ceiling = self.ceiling(attempt);
        let half = ceiling / 2;
        let spread = (ceiling - half).as_millis() as u64;
        half + Duration::from_millis(rand::random_range(0..=spread))
    }
}

/// Retries transient failures of the wrapped generator with backoff.
///
/// Refusals, incomplete answers and credential errors pass through untouched:
/// sending the same prompt again would not change them.
pub struct RetryingGenerator<G> {
    inner: G,
    max_attempts: u32,
    backoff: Backoff,
}

impl<G: TextGenerator> RetryingGenerator<G> {
    pub fn new(inner: G, config: &Config) -> Self {
        Self {
            inner,
            max_attempts: config.max_attempts.max(1),
            backoff: Backoff {
                base: config.base_delay,
                max: config.max_delay,
            },
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G: TextGenerator> TextGenerator for RetryingGenerator<G> {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut attempt = 1;
        loop {
            match self.inner.generate(prompt).await {
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    let delay = self.backoff.delay(attempt);
                    warn!(attempt, ?delay, error = %e, "transient generation failure, backing off");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => {
                    debug!(attempt, ok = result.is_ok(), "generation call finished");
                    return result;
                }
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
