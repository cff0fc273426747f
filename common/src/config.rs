use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Attempts per collaborator call when the failure is transient
    /// (rate limit, server error). Includes the first attempt.
    pub max_attempts: u32,
    /// Delay before the first backoff retry. Doubles on every further attempt.
    pub base_delay: Duration,
    /// Upper bound for a single backoff delay.
    pub max_delay: Duration,
    /// Extracted readings shorter than this (after trimming) are treated as
    /// truncated and replaced by the fallback note.
    pub min_reading_len: usize,
    /// Entries kept by the bounded history store.
    pub history_limit: usize,
    /// Suppresses decorative terminal output.
    ///
    /// 0 prints everything, 1 drops banners and headers, 2 prints results only.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            min_reading_len: 20,
            history_limit: 5,
            quiet: 0,
        }
    }
}
