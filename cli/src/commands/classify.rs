use colored::*;
use sacristan_common::config::Config;
use sacristan_common::liturgy::date::CalendarDate;
use sacristan_common::liturgy::season::SeasonClassification;
use sacristan_core::calendar;

use crate::commands;
use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn classify(date: Option<CalendarDate>, cfg: &Config) -> anyhow::Result<()> {
    let date = match date {
        Some(date) => date,
        None => commands::today()?,
    };

    let classification = calendar::classify(date);
    print_classification(&classification, cfg);
    Ok(())
}

pub fn print_classification(classification: &SeasonClassification, cfg: &Config) {
    match cfg.quiet {
        2 => {
            mprint!(&format!(
                "{} | {} | {}",
                classification.feast_label, classification.season, classification.color
            ));
        }
        _ => {
            print::tree_head(0, &classification.feast_label.bold().to_string());
            print::as_tree_one_level(format::classification_to_details(classification));
            if cfg.quiet == 0 {
                print::fat_separator();
                print::centerln(&format!(
                    "{}",
                    classification.season.label().color(colors::vestment(classification.color))
                ));
            }
        }
    }
}
