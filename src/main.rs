//! Wiring. Entry point: pick a scenario source, replay it, print the results.
//! No business logic here; grading is delegated to GradingService.

use dotenv::dotenv;
use gradebook::adapters::scenario::{JsonScenarioFile, ReferenceScenario};
use gradebook::ports::ScenarioSource;
use gradebook::shared::config::AppConfig;
use gradebook::usecases::GradingService;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded, using defaults");
        AppConfig::default()
    });
    let locale = cfg.locale_or_default();

    // --- Scenario: JSON file if configured, otherwise the reference data ---
    let source: Box<dyn ScenarioSource> = match cfg.scenario_path.as_deref() {
        Some(path) => Box::new(JsonScenarioFile::new(path)),
        None => Box::new(ReferenceScenario::new()),
    };
    let mut service = match GradingService::load(source.as_ref()) {
        Ok(service) => service,
        Err(e) if cfg.scenario_path.is_some() => {
            warn!(error = %e, "falling back to built-in reference scenario");
            GradingService::load(&ReferenceScenario::new())?
        }
        Err(e) => return Err(e.into()),
    };

    let stats = service.run()?;
    info!(
        accepted = stats.accepted,
        refused = stats.refused,
        "session complete"
    );

    for rendering in service.render_all(locale) {
        println!("{}\n", rendering);
    }

    for summary in service.course_averages() {
        println!(
            "{}: students {:.2}, lecturers {:.2}",
            summary.course, summary.students, summary.lecturers
        );
    }

    if let Some(path) = cfg.csv_path.as_deref() {
        let sheet = service.grade_sheet()?;
        std::fs::write(path, sheet)
            .map_err(|e| anyhow::anyhow!("write grade sheet {}: {}", path, e))?;
        info!(path, "grade sheet written");
    }

    Ok(())
}
