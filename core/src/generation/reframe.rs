//! Bounded reframing retry for one half of a liturgy.
//!
//! ```text
//! Initial ──ok──────────────────────────────► Done
//!    │ refusal / incomplete                     ▲
//!    ▼                                          │ ok
//! Refused ──► Reframed ──(single call)──────────┤
//!    │                       │ any error        │
//!    │ other error           ▼                  │
//!    └─────────────────►  Failed  ◄─────────────┘
//! ```
//!
//! `Reframed` never leads back to `Refused`, so every run ends after at most
//! two collaborator calls (each of which may have its own transient backoff).

use sacristan_common::error::{GenerationError, LiturgyError};
use sacristan_common::generation::{Half, TextGenerator};
use tracing::{info, warn};

use crate::prompt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReframeState {
    Initial,
    Refused(GenerationError),
    Reframed(String),
    Done(String),
    Failed(GenerationError),
}

/// Text of one half, and whether it needed the reframed prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHalf {
    pub half: Half,
    pub text: String,
    pub reframed: bool,
}

pub async fn generate_half(
    generator: &dyn TextGenerator,
    half: Half,
    prompt: &str,
) -> Result<GeneratedHalf, LiturgyError> {
    let mut state = ReframeState::Initial;
    let mut reframed = false;

    loop {
        state = match state {
            ReframeState::Initial => match call(generator, prompt).await {
                Ok(text) => ReframeState::Done(text),
                Err(e) if e.is_reframable() => ReframeState::Refused(e),
                Err(e) => ReframeState::Failed(e),
            },
            ReframeState::Refused(reason) => {
                warn!(%half, %reason, "retrying once with a reframed prompt");
                reframed = true;
                ReframeState::Reframed(prompt::reframe(half, prompt))
            }
            ReframeState::Reframed(reframed_prompt) => match call(generator, &reframed_prompt).await {
                Ok(text) => ReframeState::Done(text),
                Err(e) => ReframeState::Failed(e),
            },
            ReframeState::Done(text) => {
                info!(%half, reframed, chars = text.chars().count(), "half generated");
                return Ok(GeneratedHalf { half, text, reframed });
            }
            ReframeState::Failed(source) => {
                return Err(LiturgyError::Generation { half, source });
            }
        };
    }
}

/// A successful call with nothing but whitespace counts as incomplete.
async fn call(generator: &dyn TextGenerator, prompt: &str) -> Result<String, GenerationError> {
    let text = generator.generate(prompt).await?;
    if text.trim().is_empty() {
        return Err(GenerationError::IncompleteGeneration("empty response".into()));
    }
    Ok(text)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::scripted::ScriptedGenerator;

    fn refusal() -> Result<String, GenerationError> {
        Err(GenerationError::ContentPolicyRefusal("RECITATION".into()))
    }

    #[tokio::test]
    async fn success_needs_a_single_call() {
        let generator = ScriptedGenerator::sequence(vec![Ok("ordo".into())]);
        let out = generate_half(&generator, Half::Structure, "p").await.unwrap();
        assert_eq!(out.text, "ordo");
        assert!(!out.reframed);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn refusal_is_retried_once_with_reframed_prompt() {
        let generator = ScriptedGenerator::sequence(vec![refusal(), Ok("lecturas".into())]);
        let out = generate_half(&generator, Half::Readings, "pedir lecturas").await.unwrap();
        assert_eq!(out.text, "lecturas");
        assert!(out.reframed);

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0], "pedir lecturas");
        assert_eq!(prompts[1], prompt::reframe(Half::Readings, "pedir lecturas"));
    }

    #[tokio::test]
    async fn second_refusal_fails_without_a_third_call() {
        let generator = ScriptedGenerator::sequence(vec![refusal(), refusal(), Ok("nunca".into())]);
        let err = generate_half(&generator, Half::Readings, "p").await.unwrap_err();
        assert!(matches!(
            err,
            LiturgyError::Generation {
                half: Half::Readings,
                source: GenerationError::ContentPolicyRefusal(_)
            }
        ));
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn empty_text_is_reframed_like_a_refusal() {
        let generator = ScriptedGenerator::sequence(vec![Ok("  \n".into()), Ok("ordo".into())]);
        let out = generate_half(&generator, Half::Structure, "p").await.unwrap();
        assert!(out.reframed);
        assert!(generator.prompts()[1].contains("ESQUELETO"));
    }

    #[tokio::test]
    async fn auth_errors_fail_immediately() {
        let generator = ScriptedGenerator::sequence(vec![
            Err(GenerationError::Auth("403".into())),
            Ok("nunca".into()),
        ]);
        let err = generate_half(&generator, Half::Structure, "p").await.unwrap_err();
        assert!(matches!(
            err,
            LiturgyError::Generation {
                source: GenerationError::Auth(_),
                ..
            }
        ));
        assert_eq!(generator.calls(), 1);
    }
}
