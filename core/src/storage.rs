//! Adapters for the storage ports.
//!
//! * [`memory`]: process-local stores, used by tests and one-shot embeddings.
//! * [`json`]: JSON files under a data directory, used by the command line.

pub mod json;
pub mod memory;

pub use json::{JsonHistory, JsonSettings};
pub use memory::{MemoryHistory, MemorySettings};
