//! Structural templates, one per tradition.
//!
//! Each template lists the sections of the rite in order. Reading slots carry
//! their `[[MARKER]]` so the merger can splice the readings half in later, and
//! fixed prayers carry their `[[INSERTAR_...]]` key. Sections suppressed by the
//! day's omissions are left out of the outline altogether.

use sacristan_common::liturgy::season::{Omission, Season};

use super::PromptContext;
use crate::merge::markers::{self, EVANGELIO, LECTURA_1, LECTURA_2, SALMO};

/// Numbered list of sections.
#[derive(Default)]
struct Outline {
    steps: Vec<String>,
}

impl Outline {
    fn step(&mut self, text: impl Into<String>) -> &mut Self {
        self.steps.push(text.into());
        self
    }

    fn render(&self) -> String {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn reading_slot(title: &str, marker: &str) -> String {
    format!(
        "   - {title}: escribe solo el título y, en una línea aparte, {}",
        markers::tag(marker)
    )
}

fn word_section(ctx: &PromptContext, titles: [&str; 4]) -> String {
    let [first, psalm, second, gospel] = titles;
    let mut lines = vec![
        "Liturgia de la Palabra:".to_string(),
        reading_slot(first, LECTURA_1),
        reading_slot(psalm, SALMO),
    ];
    if ctx.has_second_reading() {
        lines.push(reading_slot(second, LECTURA_2));
    }
    if ctx.classification.omits(Omission::Alleluia) {
        lines.push("   - Aclamación antes del Evangelio (SIN ALELUYA).".to_string());
    } else {
        lines.push("   - Aleluya con su verso.".to_string());
    }
    lines.push(reading_slot(gospel, EVANGELIO));
    lines.join("\n")
}

fn gloria(ctx: &PromptContext) -> Option<&'static str> {
    (!ctx.classification.omits(Omission::Gloria)).then_some("Gloria [[INSERTAR_GLORIA]]")
}

fn creed(ctx: &PromptContext) -> Option<&'static str> {
    (!ctx.classification.omits(Omission::Creed)).then_some("Credo [[INSERTAR_CREDO]]")
}

fn join_present(parts: &[Option<&str>]) -> String {
    parts.iter().flatten().copied().collect::<Vec<_>>().join(", ")
}

pub fn roman_catholic(ctx: &PromptContext) -> String {
    let mut outline = Outline::default();
    outline
        .step(format!(
            "Ritos Iniciales ({}).",
            join_present(&[
                Some("Antífona de Entrada"),
                Some("Saludo"),
                Some("Acto Penitencial [[INSERTAR_YO_CONFIESO]]"),
                Some("Kyrie"),
                gloria(ctx),
                Some("Oración Colecta"),
            ])
        ))
        .step(word_section(
            ctx,
            ["Primera Lectura", "Salmo Responsorial", "Segunda Lectura", "Evangelio"],
        ))
        .step(format!(
            "{}.",
            join_present(&[
                Some("Homilía (bosquejo breve)"),
                creed(ctx),
                Some("Oración Universal (peticiones ligadas al tema de las lecturas)"),
            ])
        ))
        .step(
            "Liturgia Eucarística (Ofertorio, Oración sobre las Ofrendas, Prefacio, \
             Santo [[INSERTAR_SANTO]], Plegaria Eucarística [Consagración], \
             Padre Nuestro [[INSERTAR_PADRE_NUESTRO]], La Paz, Cordero de Dios [[INSERTAR_CORDERO]], \
             Comunión, Oración después de la Comunión).",
        )
        .step("Rito de Conclusión (Bendición, Despedida).");

    format!(
        "INSTRUCCIONES ESPECÍFICAS: Usa el Misal Romano (Conferencia Episcopal Mexicana).\n\
         ESTRUCTURA (COMPLETA Y DETALLADA):\n{}",
        outline.render()
    )
}

pub fn anglican(ctx: &PromptContext) -> String {
    let mut outline = Outline::default();
    outline
        .step(format!(
            "Ritos de Entrada ({}).",
            join_present(&[
                Some("Himno de Entrada"),
                Some("Aclamación"),
                Some("Colecta de Pureza"),
                Some("Sumario de la Ley o Decálogo"),
                Some("Kyrie"),
                gloria(ctx),
                Some("Colecta del Día"),
            ])
        ))
        .step(word_section(
            ctx,
            ["Lección del Antiguo Testamento", "Salmo", "Epístola", "Santo Evangelio"],
        ))
        .step(format!(
            "{}.",
            join_present(&[
                Some("Sermón (bosquejo breve)"),
                creed(ctx),
                Some("Oración de los Fieles basada en el tema central de las lecturas"),
                Some("Confesión y Absolución [[INSERTAR_YO_CONFIESO]]"),
                Some("La Paz"),
            ])
        ))
        .step(
            "Santa Comunión (Ofertorio, Sursum Corda, Sanctus [[INSERTAR_SANTO]], \
             Plegaria de Consagración, Padre Nuestro [[INSERTAR_PADRE_NUESTRO]], \
             Oración de Acceso a la Gracia [Humble Access], Agnus Dei [[INSERTAR_CORDERO]], \
             Comunión, Oración de Post-Comunión).",
        )
        .step("Bendición y Despedida.");

    format!(
        "INSTRUCCIONES ESPECÍFICAS: Usa el Libro de Oración Común 2019 (ACNA).\n\
         ESTRUCTURA (COMPLETA Y DETALLADA):\n{}",
        outline.render()
    )
}

pub fn ordinariate(ctx: &PromptContext) -> String {
    let season = ctx.classification.season;
    let mut entrance = vec![Some("Introito"), Some("Colecta de Pureza")];
    if matches!(season, Season::Advent | Season::Lent) {
        entrance.push(Some("Decálogo"));
    } else {
        entrance.push(Some("Sumario de la Ley"));
    }
    entrance.extend([Some("Kyrie"), gloria(ctx), Some("Colecta")]);

    let mut outline = Outline::default();
    if season == Season::Advent {
        outline.step("Encendido de la Corona de Adviento (oración y rúbrica para la vela).");
    }
    outline
        .step(format!("Ritos de Entrada ({}).", join_present(&entrance)))
        .step(word_section(
            ctx,
            ["Primera Lectura", "Gradual / Salmo", "Epístola", "Evangelio"],
        ))
        .step(format!(
            "{}.",
            join_present(&[
                Some("Sermón (bosquejo breve)"),
                creed(ctx),
                Some("Oración de los Fieles"),
                Some("Confesión [[INSERTAR_YO_CONFIESO]]"),
            ])
        ))
        .step(
            "Liturgia Eucarística (Ofertorio, Orate Fratres, Oración sobre las Ofrendas, \
             Sursum Corda, Sanctus [[INSERTAR_SANTO]], Canon Romano, \
             Padre Nuestro [[INSERTAR_PADRE_NUESTRO]], Prayer of Humble Access, \
             Agnus Dei [[INSERTAR_CORDERO]], Comunión, Post-Comunión).",
        )
        .step("Bendición y Despedida.");

    format!(
        "INSTRUCCIONES ESPECÍFICAS: Usa 'Divine Worship: The Missal'. Lenguaje sacro ('vosotros').\n\
         ESTRUCTURA (COMPLETA Y DETALLADA):\n{}",
        outline.render()
    )
}

pub fn tridentine(ctx: &PromptContext) -> String {
    let mut outline = Outline::default();
    outline
        .step("Ritos al Pie del Altar (Salmo 42, Confiteor [[INSERTAR_YO_CONFIESO]], Absolución).")
        .step(format!(
            "{}.",
            join_present(&[Some("Introito"), Some("Kyrie"), gloria(ctx), Some("Colecta")])
        ))
        .step(format!(
            "Misa de los Catecúmenos:\n{}\n{}\n{}",
            reading_slot("Epístola", LECTURA_1),
            reading_slot("Gradual (con sus versos)", SALMO),
            reading_slot("Evangelio", EVANGELIO),
        ));
    if let Some(credo) = creed(ctx) {
        outline.step(format!("{credo}."));
    }
    outline
        .step("Ofertorio (Suscipe Sancte Pater, Offerimus tibi), Lavabo, Orate Fratres, Secreta.")
        .step(
            "Canon Romano (Prefacio, Sanctus [[INSERTAR_SANTO]], Canon resumido para el pueblo \
             destacando la Consagración, Pater Noster [[INSERTAR_PADRE_NUESTRO]]).",
        )
        .step("Agnus Dei [[INSERTAR_CORDERO]], Comunión, Postcomunión.")
        .step("Ritos Finales y Último Evangelio (Juan 1:1-14).");

    format!(
        "ROL: Maestro de Ceremonias (Missale Romanum 1962).\n\
         REGLA DE ORO: la celebración es el Propio del Día correspondiente a la fecha.\n\
         NO USES CICLOS A/B/C.\n\
         ESTRUCTURA (Bilingüe Latín/Español):\n{}",
        outline.render()
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
