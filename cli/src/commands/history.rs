use std::path::Path;

use anyhow::bail;
use colored::*;
use sacristan_common::config::Config;
use sacristan_common::storage::HistoryStore;
use sacristan_common::{info, success};
use sacristan_core::storage::JsonHistory;

use crate::mprint;
use crate::terminal::{format, print};

pub async fn history(show: Option<usize>, data_dir: &Path, cfg: &Config) -> anyhow::Result<()> {
    let store = JsonHistory::in_dir(data_dir, cfg.history_limit);
    let entries = store.recent().await?;

    if let Some(idx) = show {
        let Some(entry) = entries.get(idx) else {
            bail!("no history entry at position {idx} ({} stored)", entries.len());
        };
        mprint!(&entry.content);
        return Ok(());
    }

    if entries.is_empty() {
        info!("Sin documentos en {}", store.path().display());
        return Ok(());
    }

    for (idx, entry) in entries.iter().enumerate() {
        print::tree_head(idx, &entry.title.bold().to_string());
        print::as_tree_one_level(format::history_entry_to_details(entry));
    }
    if cfg.quiet == 0 {
        print::fat_separator();
    }
    success!("{} documentos guardados; `history --show N` imprime uno", entries.len());
    Ok(())
}
