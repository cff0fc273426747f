//! # Prompt Builder
//!
//! Assembles the two requests sent to the text-generation collaborator for one
//! liturgy:
//!
//! * the **structure** prompt asks for the full ordo, with `[[MARKER]]`
//!   placeholders where the readings go;
//! * the **readings** prompt asks only for the biblical texts, each introduced
//!   by its marker.
//!
//! Splitting the work this way isolates failures: a refusal on the readings
//! leaves the structure usable, and vice versa.
//!
//! Everything here is string assembly. The only failure mode is a malformed
//! date or tradition, reported by [`build_prompts_from_input`].

pub mod rules;
pub mod templates;

use sacristan_common::error::LiturgyError;
use sacristan_common::generation::Half;
use sacristan_common::liturgy::date::CalendarDate;
use sacristan_common::liturgy::season::{Rank, SeasonClassification};
use sacristan_common::liturgy::tradition::Tradition;

use crate::calendar;
use crate::merge::markers::{self, EVANGELIO, LECTURA_1, LECTURA_2, SALMO};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub structure: String,
    pub readings: String,
}

impl PromptPair {
    pub fn get(&self, half: Half) -> &str {
        match half {
            Half::Structure => &self.structure,
            Half::Readings => &self.readings,
        }
    }
}

/// Everything a template needs to know about the requested day.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub date: CalendarDate,
    pub tradition: Tradition,
    pub classification: SeasonClassification,
}

impl PromptContext {
    pub fn new(date: CalendarDate, tradition: Tradition) -> Self {
        Self {
            date,
            tradition,
            classification: calendar::classify(date),
        }
    }

    /// Sundays and solemnities carry a second reading; the 1962 books never do.
    pub fn has_second_reading(&self) -> bool {
        self.tradition != Tradition::Tridentine && self.classification.rank != Rank::Weekday
    }

    /// Reading markers expected in both halves, in liturgical order.
    pub fn reading_markers(&self) -> Vec<&'static str> {
        if self.has_second_reading() {
            vec![LECTURA_1, SALMO, LECTURA_2, EVANGELIO]
        } else {
            vec![LECTURA_1, SALMO, EVANGELIO]
        }
    }

    fn header(&self) -> String {
        let c = &self.classification;
        let mut lines = vec![
            format!("FECHA: {}.", self.date.long_label()),
            format!("TRADICIÓN: {}.", self.tradition.label().to_uppercase()),
            format!("TÍTULO LITÚRGICO (Auto-Calculado): {}.", c.feast_label),
            format!("TIEMPO: {}. COLOR: {}.", c.season, c.color),
        ];
        if self.tradition.uses_three_year_lectionary() {
            lines.push(format!("CICLO: {}.", c.cycle_text()));
        }
        if matches!(self.tradition, Tradition::Anglican | Tradition::Ordinariate) {
            if let Some(proper) = c.proper_number() {
                lines.push(format!("PROPIO: Proper {proper} (Leccionario Común Revisado)."));
            }
        }
        lines.join("\n")
    }
}

/// Builds both prompts for an already validated date and tradition.
pub fn build_prompts(date: CalendarDate, tradition: Tradition) -> PromptPair {
    build_prompts_for(&PromptContext::new(date, tradition))
}

/// Builds both prompts for a day that has already been classified.
pub fn build_prompts_for(ctx: &PromptContext) -> PromptPair {
    PromptPair {
        structure: structure_prompt(ctx),
        readings: readings_prompt(ctx),
    }
}

/// Validates raw caller input, then builds both prompts.
pub fn build_prompts_from_input(date: &str, tradition: &str) -> Result<PromptPair, LiturgyError> {
    let date: CalendarDate = date.parse()?;
    let tradition: Tradition = tradition.parse()?;
    Ok(build_prompts(date, tradition))
}

fn structure_prompt(ctx: &PromptContext) -> String {
    let template = match ctx.tradition {
        Tradition::RomanCatholic => templates::roman_catholic(ctx),
        Tradition::Anglican => templates::anglican(ctx),
        Tradition::Ordinariate => templates::ordinariate(ctx),
        Tradition::Tridentine => templates::tridentine(ctx),
    };

    [
        ctx.header(),
        rules::FORMAT_RULES.to_string(),
        rules::COPYRIGHT_CLAUSE.to_string(),
        format!(
            "REGLAS DE OMISIÓN ACTIVAS:\n{}",
            rules::omission_directives(&ctx.classification.omissions())
        ),
        template,
        "LECTURAS: NO escribas el texto bíblico en este documento. Deja cada marcador \
         [[LECTURA_...]], [[SALMO]] y [[EVANGELIO]] exactamente como se indica, en su propia línea."
            .to_string(),
    ]
    .join("\n\n")
}

fn readings_prompt(ctx: &PromptContext) -> String {
    let source = if ctx.tradition.uses_three_year_lectionary() {
        format!(
            "Lecturas del día según el leccionario de la tradición indicada (ciclo {}).",
            ctx.classification.cycle_text()
        )
    } else {
        "Lecturas del Propio del Día según el Missale Romanum 1962.".to_string()
    };

    let slots: Vec<String> = ctx
        .reading_markers()
        .into_iter()
        .map(|m| format!("{}\n**Cita bíblica**\nTexto completo...", markers::tag(m)))
        .collect();

    [
        ctx.header(),
        source,
        "Devuelve ÚNICAMENTE los textos bíblicos, sin comentarios ni oraciones. \
         Cada lectura empieza con su marcador en una línea propia, seguido de la cita en \
         **negrita** y del texto completo. NO RESUMAS LA ESCRITURA."
            .to_string(),
        rules::COPYRIGHT_CLAUSE.to_string(),
        format!("FORMATO EXACTO:\n{}", slots.join("\n\n")),
    ]
    .join("\n\n")
}

/// Rewrites a refused prompt with a more defensive framing.
///
/// The readings half asserts the public-domain status of the translations it
/// asks for; the structure half falls back to a skeleton without any fixed
/// prayer text.
pub fn reframe(half: Half, prompt: &str) -> String {
    let framing = match half {
        Half::Readings => rules::PUBLIC_DOMAIN_FRAMING,
        Half::Structure => rules::SKELETON_FRAMING,
    };
    format!("{framing}\n\n{prompt}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn structure_prompt_carries_label_cycle_and_rules() {
        let pair = build_prompts(date(2026, 1, 18), Tradition::RomanCatholic);
        assert!(pair.structure.contains("2º Domingo del Tiempo Ordinario"));
        assert!(pair.structure.contains("CICLO: A (Mateo) | Año II (Par)"));
        assert!(pair.structure.contains("NO uses tablas Markdown"));
        assert!(pair.structure.contains("DERECHOS DE AUTOR"));
        assert!(pair.structure.contains("FECHA: domingo, 18 de enero de 2026."));
    }

    #[test]
    fn ash_wednesday_prompt_has_omission_directives() {
        let pair = build_prompts(date(2026, 2, 18), Tradition::RomanCatholic);
        assert!(pair.structure.contains("OMITIR EL 'GLORIA'"));
        assert!(pair.structure.contains("OMITIR EL 'ALELUYA'"));
    }

    #[test]
    fn readings_prompt_lists_only_markers_for_the_day() {
        let sunday = build_prompts(date(2026, 1, 18), Tradition::RomanCatholic);
        assert!(sunday.readings.contains("[[LECTURA_2]]"));

        let weekday = build_prompts(date(2026, 1, 13), Tradition::RomanCatholic);
        assert!(weekday.readings.contains("[[LECTURA_1]]"));
        assert!(weekday.readings.contains("[[EVANGELIO]]"));
        assert!(!weekday.readings.contains("[[LECTURA_2]]"));
    }

    #[test]
    fn tridentine_prompts_skip_cycles() {
        let pair = build_prompts(date(2026, 1, 18), Tradition::Tridentine);
        assert!(!pair.structure.contains("CICLO:"));
        assert!(pair.readings.contains("Missale Romanum 1962"));
    }

    #[test]
    fn anglican_prompt_names_the_proper_after_pentecost() {
        let pair = build_prompts(date(2026, 6, 14), Tradition::Anglican);
        assert!(pair.structure.contains("PROPIO: Proper 6"));

        let catholic = build_prompts(date(2026, 6, 14), Tradition::RomanCatholic);
        assert!(!catholic.structure.contains("PROPIO:"));
    }

    #[test]
    fn every_tradition_gets_a_distinct_template() {
        let d = date(2026, 1, 18);
        let prompts: Vec<String> = Tradition::ALL
            .iter()
            .map(|t| build_prompts(d, *t).structure)
            .collect();
        for (i, a) in prompts.iter().enumerate() {
            for b in &prompts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn building_is_deterministic() {
        let d = date(2026, 3, 15);
        assert_eq!(
            build_prompts(d, Tradition::Ordinariate),
            build_prompts(d, Tradition::Ordinariate)
        );
    }

    #[test]
    fn prebuilt_context_gives_the_same_prompts() {
        for tradition in Tradition::ALL {
            let d = date(2026, 4, 5);
            let ctx = PromptContext::new(d, tradition);
            assert_eq!(build_prompts_for(&ctx), build_prompts(d, tradition));
        }
    }

    #[test]
    fn malformed_input_is_a_validation_error() {
        let err = build_prompts_from_input("2026-02-30", "anglican").unwrap_err();
        assert!(matches!(err, LiturgyError::InvalidDate(_)));
        assert!(err.is_validation());

        let err = build_prompts_from_input("2026-01-18", "coptic").unwrap_err();
        assert!(matches!(err, LiturgyError::UnsupportedTradition(_)));

        assert!(build_prompts_from_input("2026-01-18", "Anglicana").is_ok());
    }

    #[test]
    fn reframing_prepends_a_defensive_framing() {
        let readings = reframe(Half::Readings, "original");
        assert!(readings.contains("DOMINIO PÚBLICO"));
        assert!(readings.ends_with("original"));

        let structure = reframe(Half::Structure, "original");
        assert!(structure.contains("ESQUELETO"));
        assert!(structure.ends_with("original"));
    }
}
