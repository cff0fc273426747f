//! # Sacristan Common
//!
//! Shared vocabulary of the workspace: the liturgical domain models, the error
//! taxonomy, runtime configuration and the port traits that the core consumes.
//!
//! Nothing in this crate performs IO. Implementations of the ports live in
//! `sacristan-core` (in-memory and process-backed adapters) or in the caller.

pub mod config;
pub mod error;
pub mod generation;
pub mod liturgy;
pub mod macros;
pub mod storage;
