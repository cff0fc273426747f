use crate::terminal::colors;
use colored::*;
use sacristan_common::liturgy::season::{Rank, SeasonClassification};
use sacristan_common::storage::HistoryEntry;
use sacristan_core::calendar::LiturgicalYear;

pub type Detail = (String, ColoredString);

pub fn rank_label(rank: Rank) -> &'static str {
    match rank {
        Rank::Solemnity => "Solemnidad",
        Rank::Sunday => "Domingo",
        Rank::Weekday => "Feria",
    }
}

pub fn color_swatch(classification: &SeasonClassification) -> ColoredString {
    let color = colors::vestment(classification.color);
    format!("■ {}", classification.color.label()).color(color).bold()
}

pub fn classification_to_details(classification: &SeasonClassification) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Fecha".to_string(), classification.date.long_label().normal()),
        ("Tiempo".to_string(), classification.season.label().color(colors::PRIMARY)),
        ("Color".to_string(), color_swatch(classification)),
        ("Rango".to_string(), rank_label(classification.rank).normal()),
        ("Ciclo".to_string(), classification.cycle_text().color(colors::ACCENT)),
    ];

    if let Some(week) = classification.ordinary_week {
        details.push(("Semana".to_string(), week.week.to_string().normal()));
    }

    if let Some(proper) = classification.proper_number() {
        details.push(("Propio".to_string(), format!("Proper {proper}").normal()));
    }

    let omissions: Vec<&str> = classification
        .omissions()
        .iter()
        .map(|omission| omission.directive())
        .collect();
    if !omissions.is_empty() {
        details.push((
            "Omitir".to_string(),
            omissions.join(" · ").color(colors::RUBRIC),
        ));
    }

    details
}

pub fn history_entry_to_details(entry: &HistoryEntry) -> Vec<Detail> {
    vec![
        ("Fecha".to_string(), entry.date.long_label().normal()),
        ("Tradición".to_string(), entry.tradition.label().color(colors::PRIMARY)),
        (
            "Longitud".to_string(),
            format!("{} caracteres", entry.content.chars().count()).dimmed(),
        ),
    ]
}

pub fn year_to_details(year: &LiturgicalYear) -> Vec<Detail> {
    [
        ("Bautismo", year.baptism_of_the_lord),
        ("Ceniza", year.ash_wednesday),
        ("Laetare", year.laetare()),
        ("Ramos", year.palm_sunday),
        ("Pascua", year.easter),
        ("Ascensión", year.ascension),
        ("Pentecostés", year.pentecost),
        ("Trinidad", year.trinity_sunday),
        ("Corpus", year.corpus_christi),
        ("Cristo Rey", year.christ_the_king),
        ("Adviento", year.advent_start),
        ("Gaudete", year.gaudete()),
        ("Navidad", year.christmas),
    ]
    .into_iter()
    .map(|(key, date)| (key.to_string(), date.long_label().normal()))
    .collect()
}
