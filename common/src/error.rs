//! # Error Taxonomy
//!
//! Two layers of failure exist:
//!
//! * [`GenerationError`]: what a text-generation collaborator can report for a
//!   single call. The variant decides the retry policy applied to it.
//! * [`LiturgyError`]: what a caller of the core can observe. Validation
//!   problems are raised synchronously, generation problems only after the
//!   bounded retries are exhausted.

use thiserror::Error;

use crate::generation::Half;

/// Outcome classes of a single call to the text-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Network, rate-limit or server failure. Retried with backoff.
    #[error("transient service failure: {0}")]
    Transient(String),
    /// Invalid or missing credentials. Never retried.
    #[error("credentials rejected: {0}")]
    Auth(String),
    /// The collaborator declined to generate, citing its content policy.
    #[error("content policy refusal: {0}")]
    ContentPolicyRefusal(String),
    /// The collaborator answered without usable text.
    #[error("generation returned no usable text: {0}")]
    IncompleteGeneration(String),
}

impl GenerationError {
    /// Failures that the backoff layer is allowed to retry verbatim.
    pub fn is_transient(&self) -> bool {
        matches!(self, GenerationError::Transient(_))
    }

    /// Failures that warrant one retry with a reframed prompt.
    ///
    /// Repeating the identical prompt would reproduce the same answer, so these
    /// are never handled by the backoff layer.
    pub fn is_reframable(&self) -> bool {
        matches!(
            self,
            GenerationError::ContentPolicyRefusal(_) | GenerationError::IncompleteGeneration(_)
        )
    }
}

#[derive(Debug, Error)]
pub enum LiturgyError {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("unsupported tradition: {0}")]
    UnsupportedTradition(String),

    #[error("{half} generation failed: {source}")]
    Generation {
        half: Half,
        #[source]
        source: GenerationError,
    },
}

impl LiturgyError {
    /// True for errors caused by caller input rather than by a collaborator.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LiturgyError::InvalidDate(_) | LiturgyError::UnsupportedTradition(_)
        )
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
