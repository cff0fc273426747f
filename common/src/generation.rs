use std::fmt;

use async_trait::async_trait;

use crate::error::GenerationError;

/// The two independent requests issued per liturgy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    /// The full ordo with placeholder markers for the readings.
    Structure,
    /// The biblical texts only, each introduced by its marker.
    Readings,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::Structure => write!(f, "structure"),
            Half::Readings => write!(f, "readings"),
        }
    }
}

/// Defines the contract for the external text-completion service.
///
/// Implementations must map their failures onto the [`GenerationError`]
/// variants; the retry policy of the core depends on that distinction.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
