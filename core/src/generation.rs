//! # Generation Layer
//!
//! Calls to the external text-generation collaborator, wrapped in two retry
//! policies that never overlap:
//!
//! * [`backoff::RetryingGenerator`] repeats the identical prompt on transient
//!   failures, with exponential backoff.
//! * [`reframe::generate_half`] retries a refused or empty half once, with a
//!   reframed prompt.
//!
//! [`command::CommandGenerator`] is the process-backed collaborator used by the
//! CLI; [`scripted::ScriptedGenerator`] answers from a script.

pub mod backoff;
pub mod command;
pub mod reframe;
pub mod scripted;

pub use backoff::RetryingGenerator;
pub use command::CommandGenerator;
pub use reframe::{GeneratedHalf, generate_half};
pub use scripted::ScriptedGenerator;
