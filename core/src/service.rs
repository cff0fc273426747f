//! # Liturgy Generation Service
//!
//! Implements the "generate a liturgy" use case.
//!
//! The service classifies the day, builds both prompts, runs the structure and
//! readings halves concurrently, merges them and files the result in the
//! history store. Its collaborators are injected as port traits.
//!
//! History writes run in the background; [`LiturgyService::flush_history`]
//! waits for the ones still in flight.

use std::mem;
use std::sync::{Arc, Mutex, PoisonError};

use sacristan_common::config::Config;
use sacristan_common::error::LiturgyError;
use sacristan_common::generation::{Half, TextGenerator};
use sacristan_common::liturgy::date::CalendarDate;
use sacristan_common::liturgy::season::SeasonClassification;
use sacristan_common::liturgy::tradition::Tradition;
use sacristan_common::storage::{HistoryEntry, HistoryStore, SettingsStore};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::generation::{GeneratedHalf, RetryingGenerator, generate_half};
use crate::merge;
use crate::prompt::{self, PromptContext, PromptPair};

pub use sacristan_common::liturgy::celebration::Celebration;

/// Tradition used when neither the caller nor the settings name one.
pub const DEFAULT_TRADITION: Tradition = Tradition::Anglican;

/// What to do when the readings half cannot be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingsPolicy {
    /// Surface the failure to the caller.
    #[default]
    Required,
    /// Merge anyway; every reading becomes the fallback note.
    BestEffort,
}

/// Outcome of both halves, each independent of the other.
#[derive(Debug)]
pub struct HalfResults {
    pub structure: Result<GeneratedHalf, LiturgyError>,
    pub readings: Result<GeneratedHalf, LiturgyError>,
}

#[derive(Debug, Clone)]
pub struct LiturgyDocument {
    pub date: CalendarDate,
    pub tradition: Tradition,
    pub classification: SeasonClassification,
    pub title: String,
    pub content: String,
    /// Halves that only succeeded with the reframed prompt.
    pub reframed: Vec<Half>,
    /// Reading markers that received the fallback note.
    pub pending_readings: Vec<&'static str>,
}

pub struct LiturgyService {
    generator: Box<dyn TextGenerator>,
    history: Arc<dyn HistoryStore>,
    settings: Box<dyn SettingsStore>,
    config: Config,
    pending_records: Mutex<JoinSet<()>>,
}

impl LiturgyService {
    /// Transient failures of `generator` are retried with backoff as
    /// configured in `config`.
    pub fn new<G: TextGenerator + 'static>(
        generator: G,
        history: Box<dyn HistoryStore>,
        settings: Box<dyn SettingsStore>,
        config: Config,
    ) -> Self {
        Self {
            generator: Box::new(RetryingGenerator::new(generator, &config)),
            history: Arc::from(history),
            settings,
            config,
            pending_records: Mutex::new(JoinSet::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The explicit choice wins and is remembered; otherwise the stored
    /// preference, otherwise [`DEFAULT_TRADITION`].
    pub fn resolve_tradition(&self, explicit: Option<Tradition>) -> Tradition {
        match explicit {
            Some(tradition) => {
                if let Err(e) = self.settings.save_preferred_tradition(tradition) {
                    warn!(error = %e, "could not save the preferred tradition");
                }
                tradition
            }
            None => self.settings.preferred_tradition().unwrap_or(DEFAULT_TRADITION),
        }
    }

    /// Same precedence as [`Self::resolve_tradition`], defaulting to today.
    pub fn resolve_celebration(&self, explicit: Option<Celebration>) -> Celebration {
        match explicit {
            Some(celebration) => {
                if let Err(e) = self.settings.save_preferred_celebration(celebration) {
                    warn!(error = %e, "could not save the preferred celebration");
                }
                celebration
            }
            None => self.settings.preferred_celebration().unwrap_or_default(),
        }
    }

    pub async fn generate(
        &self,
        date: CalendarDate,
        tradition: Tradition,
    ) -> Result<LiturgyDocument, LiturgyError> {
        self.generate_with(date, tradition, ReadingsPolicy::Required).await
    }

    pub async fn generate_with(
        &self,
        date: CalendarDate,
        tradition: Tradition,
        policy: ReadingsPolicy,
    ) -> Result<LiturgyDocument, LiturgyError> {
        let ctx = PromptContext::new(date, tradition);
        info!(%date, %tradition, label = %ctx.classification.feast_label, "generating liturgy");

        let prompts = prompt::build_prompts_for(&ctx);
        let HalfResults { structure, readings } = self.generate_halves(&prompts).await;

        let structure = structure.inspect_err(|e| error!(error = %e, "structure half failed"))?;
        let readings = match (readings, policy) {
            (Ok(readings), _) => Some(readings),
            (Err(e), ReadingsPolicy::BestEffort) => {
                warn!(error = %e, "readings unavailable, merging with fallback notes");
                None
            }
            (Err(e), ReadingsPolicy::Required) => {
                error!(error = %e, "readings half failed");
                return Err(e);
            }
        };

        let readings_text = readings.as_ref().map_or("", |r| r.text.as_str());
        let merged = merge::merge_with_outcome(&structure.text, readings_text, &self.config);

        let reframed = [Some(&structure), readings.as_ref()]
            .into_iter()
            .flatten()
            .filter(|h| h.reframed)
            .map(|h| h.half)
            .collect();

        let document = LiturgyDocument {
            date,
            tradition,
            title: ctx.classification.feast_label.clone(),
            classification: ctx.classification,
            content: merged.text,
            reframed,
            pending_readings: merged.pending,
        };

        self.record(&document);
        Ok(document)
    }

    /// Runs both halves concurrently; neither outcome affects the other.
    ///
    /// Dropping the returned future cancels both in-flight calls.
    pub async fn generate_halves(&self, prompts: &PromptPair) -> HalfResults {
        let generator = self.generator.as_ref();
        let (structure, readings) = tokio::join!(
            generate_half(generator, Half::Structure, prompts.get(Half::Structure)),
            generate_half(generator, Half::Readings, prompts.get(Half::Readings)),
        );
        HalfResults { structure, readings }
    }

    /// Includes every document generated so far by this service.
    pub async fn recent_history(&self) -> Vec<HistoryEntry> {
        self.flush_history().await;
        self.history.recent().await.unwrap_or_else(|e| {
            warn!(error = %e, "could not read history");
            Vec::new()
        })
    }

    /// Waits for the history writes started by earlier generations.
    pub async fn flush_history(&self) {
        let mut pending = {
            let mut set = self.pending_records.lock().unwrap_or_else(PoisonError::into_inner);
            mem::take(&mut *set)
        };
        while let Some(joined) = pending.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "history write did not complete");
            }
        }
    }

    fn record(&self, document: &LiturgyDocument) {
        let entry = HistoryEntry {
            title: document.title.clone(),
            tradition: document.tradition,
            date: document.date,
            content: document.content.clone(),
        };
        let history = Arc::clone(&self.history);
        let mut pending = self.pending_records.lock().unwrap_or_else(PoisonError::into_inner);
        while pending.try_join_next().is_some() {}
        pending.spawn(async move {
            match history.record(entry).await {
                Ok(()) => debug!("document recorded in history"),
                Err(e) => warn!(error = %e, "could not record the document in history"),
            }
        });
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
