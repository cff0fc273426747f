//! # Document Merger
//!
//! Splices the readings half into the structure half and cleans the result.
//!
//! 1. Extract each reading section from the readings text ([`markers::extract`]).
//! 2. Replace each reading marker in the structure with its section, or with a
//!    fallback note when the section is missing or too short.
//! 3. Substitute every `[[INSERTAR_...]]` key with its canonical text
//!    ([`FixedTextTable`]).
//! 4. Strip code fences, HTML wrappers and LaTeX ([`sanitize`]).
//! 5. Style the remaining `[[...]]` annotations as rubrics ([`render`]).
//!
//! Merging never fails. Missing content degrades to an inline note so the
//! document stays complete.

pub mod fixed_text;
pub mod markers;
pub mod render;
pub mod sanitize;

use std::borrow::Cow;
use std::collections::HashMap;

use sacristan_common::config::Config;
use tracing::warn;

pub use fixed_text::FixedTextTable;
use markers::READING_MARKERS;

/// Replaces a reading whose text did not arrive.
pub const FALLBACK_NOTE: &str = "*Texto bíblico pendiente: consulte el leccionario.*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub text: String,
    /// Reading markers of the structure that received real content.
    pub resolved: Vec<&'static str>,
    /// Reading markers of the structure that fell back to [`FALLBACK_NOTE`].
    pub pending: Vec<&'static str>,
}

pub fn merge_documents(structure: &str, readings: &str, config: &Config) -> String {
    merge_with_outcome(structure, readings, config).text
}

pub fn merge_with_outcome(structure: &str, readings: &str, config: &Config) -> MergeOutcome {
    let sections: HashMap<&'static str, String> = READING_MARKERS
        .iter()
        .filter_map(|&marker| {
            let content = markers::extract(readings, marker)?;
            (content.chars().count() >= config.min_reading_len).then_some((marker, content))
        })
        .collect();

    let mut resolved = Vec::new();
    let mut pending = Vec::new();
    let spliced = markers::rewrite(structure, |tag| {
        let marker = READING_MARKERS.iter().copied().find(|m| tag.is(m))?;
        match sections.get(marker) {
            Some(content) => {
                resolved.push(marker);
                Some(Cow::Owned(content.clone()))
            }
            None => {
                warn!(marker, "reading missing or truncated, inserting fallback note");
                pending.push(marker);
                Some(Cow::Borrowed(FALLBACK_NOTE))
            }
        }
    });

    let table = FixedTextTable::global();
    let substituted = markers::rewrite(&spliced, |tag| table.lookup(tag).map(Cow::Borrowed));

    let text = render::render_rubrics(&sanitize::sanitize(&substituted));
    MergeOutcome {
        text,
        resolved,
        pending,
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
