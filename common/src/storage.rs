//! # Storage Ports
//!
//! Contracts for the two pieces of state that outlive a single request: the log
//! of generated documents and the user's preferences. The core never keeps
//! either one in a global; the caller injects an implementation.

use async_trait::async_trait;

use crate::liturgy::celebration::Celebration;
use crate::liturgy::date::CalendarDate;
use crate::liturgy::tradition::Tradition;

/// A finished document plus the metadata it is filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub title: String,
    pub tradition: Tradition,
    pub date: CalendarDate,
    pub content: String,
}

/// Defines the contract for the document history (cloud log, local cache).
///
/// Recording is fire-and-forget from the core's point of view: an error here is
/// logged by the caller of [`HistoryStore::record`] and never fails a generation.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn record(&self, entry: HistoryEntry) -> anyhow::Result<()>;

    /// Most recent entries first.
    async fn recent(&self) -> anyhow::Result<Vec<HistoryEntry>>;
}

/// Defines the contract for persisted user preferences.
pub trait SettingsStore: Send + Sync {
    fn preferred_tradition(&self) -> Option<Tradition>;
    fn save_preferred_tradition(&self, tradition: Tradition) -> anyhow::Result<()>;

    fn preferred_celebration(&self) -> Option<Celebration>;
    fn save_preferred_celebration(&self, celebration: Celebration) -> anyhow::Result<()>;
}
