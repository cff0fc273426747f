use std::path::Path;

use colored::*;
use sacristan_common::config::Config;
use sacristan_common::generation::Half;
use sacristan_core::prompt;
use sacristan_common::storage::SettingsStore;
use sacristan_core::service::DEFAULT_TRADITION;
use sacristan_core::storage::JsonSettings;

use crate::commands::Target;
use crate::mprint;
use crate::terminal::print;

/// Falls back on the saved preferences without updating them.
pub fn prompts(target: &Target, data_dir: &Path, cfg: &Config) -> anyhow::Result<()> {
    let settings = JsonSettings::in_dir(data_dir);
    let tradition = target
        .tradition
        .or_else(|| settings.preferred_tradition())
        .unwrap_or(DEFAULT_TRADITION);
    let celebration = target
        .celebration
        .or_else(|| settings.preferred_celebration())
        .unwrap_or_default();
    let date = celebration.resolve(target.reference_date()?);
    let pair = prompt::build_prompts(date, tradition);

    if cfg.quiet == 0 {
        print::set_key_width(["Fecha", "Tradición", "Celebración"]);
        print::aligned_line("Fecha", date.long_label());
        print::aligned_line("Tradición", tradition.label());
        print::aligned_line("Celebración", celebration.key().dimmed());
    }

    for half in [Half::Structure, Half::Readings] {
        print::header(&format!("{half} prompt"), cfg.quiet);
        mprint!(pair.get(half));
        mprint!();
    }
    Ok(())
}
