use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;
use async_trait::async_trait;
use sacristan_common::liturgy::celebration::Celebration;
use sacristan_common::liturgy::tradition::Tradition;
use sacristan_common::storage::{HistoryEntry, HistoryStore, SettingsStore};

/// Keeps the newest `limit` documents, newest first.
pub struct MemoryHistory {
    limit: usize,
    entries: Mutex<VecDeque<HistoryEntry>>,
}

impl MemoryHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: Mutex::new(VecDeque::with_capacity(limit)),
        }
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, VecDeque<HistoryEntry>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("history lock poisoned"))
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn record(&self, entry: HistoryEntry) -> anyhow::Result<()> {
        let mut entries = self.lock()?;
        entries.push_front(entry);
        entries.truncate(self.limit);
        Ok(())
    }

    async fn recent(&self) -> anyhow::Result<Vec<HistoryEntry>> {
        Ok(self.lock()?.iter().cloned().collect())
    }
}

#[derive(Default)]
pub struct MemorySettings {
    tradition: Mutex<Option<Tradition>>,
    celebration: Mutex<Option<Celebration>>,
}

fn store<T>(slot: &Mutex<Option<T>>, value: T) -> anyhow::Result<()> {
    let mut slot = slot.lock().map_err(|_| anyhow!("settings lock poisoned"))?;
    *slot = Some(value);
    Ok(())
}

impl SettingsStore for MemorySettings {
    fn preferred_tradition(&self) -> Option<Tradition> {
        self.tradition.lock().ok().and_then(|t| *t)
    }

    fn save_preferred_tradition(&self, tradition: Tradition) -> anyhow::Result<()> {
        store(&self.tradition, tradition)
    }

    fn preferred_celebration(&self) -> Option<Celebration> {
        self.celebration.lock().ok().and_then(|c| *c)
    }

    fn save_preferred_celebration(&self, celebration: Celebration) -> anyhow::Result<()> {
        store(&self.celebration, celebration)
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
