//! # File-Backed Stores
//!
//! History and settings kept as JSON files, typically under the user's data
//! directory:
//!
//! ```text
//! <data dir>/
//! ├── history.json    newest document first, at most `limit` entries
//! └── settings.json   { "tradition": "anglican", "celebration": "HOY_CALENDARIO" }
//! ```
//!
//! A missing file reads as empty. An unreadable file is logged and also reads
//! as empty, so a corrupted store never blocks generation; the next write
//! replaces it.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use sacristan_common::liturgy::celebration::Celebration;
use sacristan_common::liturgy::tradition::Tradition;
use sacristan_common::storage::{HistoryEntry, HistoryStore, SettingsStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const HISTORY_FILE: &str = "history.json";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    title: String,
    tradition: String,
    date: String,
    content: String,
}

impl From<&HistoryEntry> for StoredEntry {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            title: entry.title.clone(),
            tradition: entry.tradition.id().to_string(),
            date: entry.date.to_string(),
            content: entry.content.clone(),
        }
    }
}

impl TryFrom<StoredEntry> for HistoryEntry {
    type Error = anyhow::Error;

    fn try_from(stored: StoredEntry) -> anyhow::Result<Self> {
        Ok(HistoryEntry {
            tradition: stored.tradition.parse()?,
            date: stored.date.parse()?,
            title: stored.title,
            content: stored.content,
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoredSettings {
    tradition: Option<String>,
    celebration: Option<String>,
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// `None` when the file does not exist yet.
fn missing_as_none(result: io::Result<Vec<u8>>, path: &Path) -> anyhow::Result<Option<Vec<u8>>> {
    match result {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
    }
}

/// Document history in a single JSON array, newest first.
pub struct JsonHistory {
    path: PathBuf,
    limit: usize,
    // Serializes read-modify-write cycles within the process.
    lock: tokio::sync::Mutex<()>,
}

impl JsonHistory {
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
            lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn in_dir(dir: &Path, limit: usize) -> Self {
        Self::new(dir.join(HISTORY_FILE), limit)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> anyhow::Result<Vec<StoredEntry>> {
        let Some(bytes) = missing_as_none(tokio::fs::read(&self.path).await, &self.path)? else {
            return Ok(Vec::new());
        };
        let values: Vec<serde_json::Value> = match serde_json::from_slice(&bytes) {
            Ok(values) => values,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history file is not a JSON array, starting over");
                return Ok(Vec::new());
            }
        };
        Ok(values
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value(value)
                    .inspect_err(|e| warn!(path = %self.path.display(), error = %e, "skipping malformed history entry"))
                    .ok()
            })
            .collect())
    }

    async fn save(&self, entries: &[StoredEntry]) -> anyhow::Result<()> {
        if let Some(dir) = parent_dir(&self.path) {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let bytes = serde_json::to_vec_pretty(entries)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

#[async_trait]
impl HistoryStore for JsonHistory {
    async fn record(&self, entry: HistoryEntry) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(0, StoredEntry::from(&entry));
        entries.truncate(self.limit);
        self.save(&entries).await?;
        debug!(path = %self.path.display(), kept = entries.len(), "history recorded");
        Ok(())
    }

    async fn recent(&self) -> anyhow::Result<Vec<HistoryEntry>> {
        let _guard = self.lock.lock().await;
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter_map(|stored| {
                HistoryEntry::try_from(stored)
                    .inspect_err(|e| warn!(error = %e, "skipping unreadable history entry"))
                    .ok()
            })
            .collect())
    }
}

/// User preferences in a small JSON object.
pub struct JsonSettings {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SETTINGS_FILE))
    }

    fn load(&self) -> StoredSettings {
        let bytes = match missing_as_none(std::fs::read(&self.path), &self.path) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return StoredSettings::default(),
            Err(e) => {
                warn!(error = %e, "could not read settings");
                return StoredSettings::default();
            }
        };
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "ignoring malformed settings file");
            StoredSettings::default()
        })
    }

    fn update(&self, apply: impl FnOnce(&mut StoredSettings)) -> anyhow::Result<()> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("settings lock poisoned"))?;
        let mut settings = self.load();
        apply(&mut settings);
        if let Some(dir) = parent_dir(&self.path) {
            std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let file = std::fs::File::create(&self.path)
            .with_context(|| format!("writing {}", self.path.display()))?;
        serde_json::to_writer_pretty(file, &settings)?;
        Ok(())
    }
}

impl SettingsStore for JsonSettings {
    fn preferred_tradition(&self) -> Option<Tradition> {
        self.load().tradition?.parse().ok()
    }

    fn save_preferred_tradition(&self, tradition: Tradition) -> anyhow::Result<()> {
        self.update(|s| s.tradition = Some(tradition.id().to_string()))
    }

    fn preferred_celebration(&self) -> Option<Celebration> {
        self.load().celebration?.parse().ok()
    }

    fn save_preferred_celebration(&self, celebration: Celebration) -> anyhow::Result<()> {
        self.update(|s| s.celebration = Some(celebration.key().to_string()))
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
