#![cfg(test)]
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sacristan_common::config::Config;
use sacristan_common::error::{GenerationError, LiturgyError};
use sacristan_common::generation::{Half, TextGenerator};
use sacristan_common::liturgy::date::CalendarDate;
use sacristan_common::liturgy::tradition::Tradition;
use sacristan_core::generation::CommandGenerator;
use sacristan_core::merge::FALLBACK_NOTE;
use sacristan_core::prompt;
use sacristan_core::service::{LiturgyService, ReadingsPolicy};
use sacristan_common::liturgy::celebration::Celebration;
use sacristan_core::storage::{JsonHistory, JsonSettings, MemoryHistory, MemorySettings};

const STRUCTURE: &str = "```markdown\n# Santa Misa\n[[Todos se ponen de pie]]\n[[INSERTAR_GLORIA]]\n## Liturgia de la Palabra\n[[LECTURA_1]]\n[[SALMO]]\n[[LECTURA_2]]\n[[EVANGELIO]]\n[[INSERTAR_CREDO]]\n```";

const READINGS: &str = "[[LECTURA_1]]\nLectura del libro del profeta Isaías. Así dice el Señor.\n\
[[SALMO]]\nEl Señor es mi pastor, nada me falta; en verdes praderas me hace reposar.\n\
[[LECTURA_2]]\nLectura de la primera carta del apóstol san Pablo a los Corintios.\n\
[[EVANGELIO]]\nLectura del santo Evangelio según san Juan. En aquel tiempo, $\\dagger$ dijo Jesús.";

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

fn is_readings(prompt: &str) -> bool {
    prompt.contains("Devuelve ÚNICAMENTE los textos bíblicos")
}

/// Refuses the readings unless the prompt was reframed, counting calls per half.
#[derive(Default)]
struct RecitationGuard {
    structure_calls: Arc<AtomicUsize>,
    readings_calls: Arc<AtomicUsize>,
    always_refuse: bool,
}

#[async_trait]
impl TextGenerator for RecitationGuard {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if !is_readings(prompt) {
            self.structure_calls.fetch_add(1, Ordering::SeqCst);
            return Ok(STRUCTURE.to_string());
        }
        self.readings_calls.fetch_add(1, Ordering::SeqCst);
        if self.always_refuse || !prompt.contains("DOMINIO PÚBLICO") {
            return Err(GenerationError::ContentPolicyRefusal("finishReason: RECITATION".into()));
        }
        Ok(READINGS.to_string())
    }
}

fn service_with(generator: impl TextGenerator + 'static) -> LiturgyService {
    LiturgyService::new(
        generator,
        Box::new(MemoryHistory::new(5)),
        Box::new(MemorySettings::default()),
        Config::default(),
    )
}

#[tokio::test]
async fn readings_refusal_gets_exactly_one_reframed_retry() {
    let guard = RecitationGuard::default();
    let structure_calls = guard.structure_calls.clone();
    let readings_calls = guard.readings_calls.clone();
    let service = service_with(guard);

    let doc = service.generate(date(2026, 1, 18), Tradition::RomanCatholic).await.unwrap();

    assert_eq!(readings_calls.load(Ordering::SeqCst), 2);
    assert_eq!(structure_calls.load(Ordering::SeqCst), 1);
    assert_eq!(doc.reframed, vec![Half::Readings]);

    let content = &doc.content;
    assert!(!content.contains("```"));
    assert!(content.contains("Así dice el Señor."));
    assert!(content.contains("dijo Jesús"));
    assert!(content.contains('†'));
    assert!(content.contains("<span class=\"rubric\">Todos se ponen de pie</span>"));
    assert!(!content.contains("[["));

    let first = content.find("Isaías").unwrap();
    let psalm = content.find("mi pastor").unwrap();
    let second = content.find("Corintios").unwrap();
    let gospel = content.find("san Juan").unwrap();
    assert!(first < psalm && psalm < second && second < gospel);
}

#[tokio::test]
async fn persistent_refusal_leaves_the_structure_half_intact() {
    let guard = RecitationGuard {
        always_refuse: true,
        ..RecitationGuard::default()
    };
    let readings_calls = guard.readings_calls.clone();
    let service = service_with(guard);

    let prompts = prompt::build_prompts(date(2026, 1, 18), Tradition::Anglican);
    let results = service.generate_halves(&prompts).await;

    let structure = results.structure.unwrap();
    assert_eq!(structure.text, STRUCTURE);
    assert!(!structure.reframed);
    assert!(matches!(
        results.readings,
        Err(LiturgyError::Generation {
            half: Half::Readings,
            source: GenerationError::ContentPolicyRefusal(_)
        })
    ));
    assert_eq!(readings_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn best_effort_merge_marks_every_reading_pending() {
    let service = service_with(RecitationGuard {
        always_refuse: true,
        ..RecitationGuard::default()
    });

    let doc = service
        .generate_with(date(2026, 2, 18), Tradition::RomanCatholic, ReadingsPolicy::BestEffort)
        .await
        .unwrap();

    assert_eq!(doc.title, "Miércoles de Ceniza");
    assert_eq!(doc.pending_readings.len(), 4);
    assert_eq!(doc.content.matches(FALLBACK_NOTE).count(), 4);
    assert_eq!(service.recent_history().await.len(), 1);
}

#[tokio::test]
async fn command_generator_drives_the_whole_pipeline() {
    let script = r#"input=$(cat)
case "$input" in
  *"DOMINIO PÚBLICO"*) printf '[[LECTURA_1]]\nLectura del libro del Génesis, en el principio.\n[[EVANGELIO]]\nLectura del santo Evangelio según san Marcos.\n' ;;
  *"Devuelve ÚNICAMENTE"*) echo 'finishReason: RECITATION' >&2; exit 1 ;;
  *) printf '# Misa\n[[INSERTAR_GLORIA]]\n[[LECTURA_1]]\n[[EVANGELIO]]\n' ;;
esac"#;
    let generator = CommandGenerator::new("sh", vec!["-c".into(), script.into()]);
    let service = service_with(generator);

    let doc = service.generate(date(2026, 7, 15), Tradition::Anglican).await.unwrap();

    assert_eq!(doc.reframed, vec![Half::Readings]);
    assert!(doc.content.contains("en el principio."));
    assert!(doc.content.contains("san Marcos."));
    assert!(doc.content.contains("Gloria a Dios en el cielo"));
}

#[tokio::test]
async fn documents_and_preferences_outlive_the_service() {
    let dir = tempfile::TempDir::new().unwrap();
    let open = |dir: &std::path::Path| {
        LiturgyService::new(
            RecitationGuard::default(),
            Box::new(JsonHistory::in_dir(dir, 5)),
            Box::new(JsonSettings::in_dir(dir)),
            Config::default(),
        )
    };

    let first = open(dir.path());
    let tradition = first.resolve_tradition(Some(Tradition::Ordinariate));
    let celebration = first.resolve_celebration(Some(Celebration::NextSunday));
    let day = celebration.resolve(date(2026, 1, 14));
    let doc = first.generate(day, tradition).await.unwrap();
    first.flush_history().await;
    drop(first);

    let second = open(dir.path());
    assert_eq!(second.resolve_tradition(None), Tradition::Ordinariate);
    assert_eq!(second.resolve_celebration(None), Celebration::NextSunday);
    let history = second.recent_history().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].date, date(2026, 1, 18));
    assert_eq!(history[0].content, doc.content);
}
