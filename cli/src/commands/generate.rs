use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use colored::*;
use sacristan_common::config::Config;
use sacristan_common::{success, warn};
use sacristan_core::calendar;
use sacristan_core::generation::CommandGenerator;
use sacristan_core::service::{LiturgyDocument, LiturgyService, ReadingsPolicy};
use sacristan_core::storage::{JsonHistory, JsonSettings};

use crate::commands::Target;
use crate::commands::classify::print_classification;
use crate::terminal::{print, spinner};

pub struct Request {
    pub target: Target,
    pub generator: String,
    pub best_effort: bool,
    pub output: Option<PathBuf>,
    pub data_dir: PathBuf,
}

pub async fn generate(request: Request, cfg: Config) -> anyhow::Result<()> {
    let reference = request.target.reference_date()?;
    let generator = CommandGenerator::from_command_line(&request.generator)?;
    let program = generator.program().to_string();

    let service = LiturgyService::new(
        generator,
        Box::new(JsonHistory::in_dir(&request.data_dir, cfg.history_limit)),
        Box::new(JsonSettings::in_dir(&request.data_dir)),
        cfg.clone(),
    );
    let tradition = service.resolve_tradition(request.target.tradition);
    let date = service.resolve_celebration(request.target.celebration).resolve(reference);
    let policy = if request.best_effort {
        ReadingsPolicy::BestEffort
    } else {
        ReadingsPolicy::Required
    };

    if cfg.quiet < 2 {
        print_classification(&calendar::classify(date), &cfg);
        print::set_key_width(["Tradición", "Generador"]);
        print::aligned_line("Tradición", tradition.label());
        print::aligned_line("Generador", program.as_str());
    }

    let start_time = Instant::now();
    spinner::report_stage("Redactando estructura y lecturas...");
    let result = service.generate_with(date, tradition, policy).await;
    service.flush_history().await;
    spinner::finish();

    let document = result.with_context(|| format!("drafting the liturgy for {date}"))?;
    report(&document, start_time.elapsed().as_secs_f64(), &cfg);

    match &request.output {
        Some(path) => {
            tokio::fs::write(path, &document.content)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            success!("Documento guardado en {}", path.display());
        }
        None => println!("{}", document.content),
    }

    Ok(())
}

fn report(document: &LiturgyDocument, seconds: f64, cfg: &Config) {
    for half in &document.reframed {
        warn!("La parte '{half}' necesitó un segundo intento reformulado");
    }
    if !document.pending_readings.is_empty() {
        warn!(
            "Lecturas pendientes: {}",
            document.pending_readings.join(", ")
        );
    }

    let title = document.title.bold().green();
    let elapsed = format!("{seconds:.2}s").bold().yellow();
    let summary = format!("{title} ({}) listo en {elapsed}", document.tradition.label());

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&summary);
        }
        _ => success!("{}", summary),
    }
}
