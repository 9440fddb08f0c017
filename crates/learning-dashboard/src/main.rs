mod bootstrap;

use anyhow::{Context, Result};
use dashboard_core::settings::Settings;
use dashboard_data::reports;
use dashboard_data::{LearningDataset, PipelineConfig};
use dashboard_ui::app::App;
use dashboard_ui::text_view::render_text;
use dashboard_ui::views::{self, ViewKind};

fn main() -> Result<()> {
    let settings = Settings::load();

    let state_dir = bootstrap::ensure_directories()?;
    let log_file =
        bootstrap::resolve_log_file(&settings.format, settings.log_file.as_ref(), &state_dir);
    bootstrap::setup_logging(&settings.log_level, log_file.as_deref())?;

    tracing::info!("Learning Dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Format: {}, Theme: {}, Data: {}",
        settings.view,
        settings.format,
        settings.theme,
        settings.data_dir.display()
    );

    let view: ViewKind = settings.view.parse()?;

    let config = PipelineConfig::new(&settings.data_dir);
    let dataset = LearningDataset::load(&config)
        .with_context(|| format!("Could not load data from {}", settings.data_dir.display()))?;
    tracing::info!(
        "Dataset ready: {} merged rows, {} students",
        dataset.len(),
        dataset.students().len()
    );

    match settings.format.as_str() {
        "text" => {
            let sections = views::build_view(view, &dataset);
            print!("{}", render_text(views::entry(view).title, &sections));
        }
        "json" => {
            let sections = views::build_view(view, &dataset);
            println!("{}", reports::to_json_pretty(view.name(), &sections)?);
        }
        _ => {
            App::new(&dataset, view, &settings.theme).run()?;
        }
    }

    Ok(())
}
