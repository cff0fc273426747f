//! # Sacristan Core
//!
//! Calendar and document-assembly engine behind the liturgy generator.
//!
//! ## Pipeline
//! ```text
//! CalendarDate ─► calendar::classify ─► prompt::build_prompts ─► PromptPair
//!                                                                   │
//!                        ┌──────────── tokio::join! ────────────────┤
//!                        ▼                                          ▼
//!              structure half (reframe once)          readings half (reframe once)
//!                        └──────────────► merge::merge_documents ◄──┘
//! ```
//!
//! * **[`calendar`]**: Easter/Advent date math and the day classifier. Pure, total.
//! * **[`prompt`]**: assembles the structure and readings requests. Pure.
//! * **[`merge`]**: splices generated texts together. Never fails; degrades instead.
//! * **[`generation`]**: backoff layer, reframing state machine, process-backed generator.
//! * **[`service`]**: the `LiturgyService` use case tying everything together.
//! * **[`storage`]**: history and settings stores, in memory or as JSON files.

pub mod calendar;
pub mod generation;
pub mod merge;
pub mod prompt;
pub mod service;
pub mod storage;
