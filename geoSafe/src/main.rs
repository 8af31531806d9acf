use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use geosafe::alerts::alerter::{Alerter, ConsoleAlerter};
use geosafe::alerts::assistant::GeoSafeAssistant;
use geosafe::analysis::batch::{analyze_routes, BatchOptions};
use geosafe::analysis::reporting::print_route_summary;
use geosafe::cli::cli::Args;
use geosafe::config::assistant_config::AssistantConfig;
use geosafe::config::constants::{DEFAULT_ROUTE_NAME, DEMO_CURVE, DEMO_SURFACE};
use geosafe::data::path_loader::{self, NamedRoute};
use geosafe::data::poi::GeoPath;
use geosafe::utils::csv_export::CsvExporter;
use geosafe::utils::logging;

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing())?;

    let mut config = match args.config() {
        Some(path) => AssistantConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => AssistantConfig::default(),
    };
    apply_overrides(&mut config, &args);

    let alerter: Arc<dyn Alerter> = Arc::new(ConsoleAlerter::new(config.alert.speech_rate));
    let assistant = GeoSafeAssistant::from_config(&config, alerter)?;
    if !assistant.profile().recognised {
        let known: Vec<&str> = config.friction_table.surfaces().map(|(name, _)| name).collect();
        warn!(
            surface = %config.surface,
            mu = assistant.mu(),
            known = %known.join(", "),
            "Unknown surface, using dry coefficient"
        );
    }

    let routes = load_input(&args)?;
    let speed = args
        .current_speed_kmh()
        .context("--speed is required when analysing --path-file or --points input")?;
    info!(routes = routes.len(), surface = %assistant.profile().surface, speed, "Analysing");

    let options = BatchOptions {
        parallel: args.parallel(),
        show_progress: args.progress(),
        announce: true,
    };
    let reports = analyze_routes(&assistant, &routes, speed, options);
    print_route_summary(&reports);

    if let Some(output_dir) = args.output() {
        let exporter = CsvExporter::new(output_dir, true)
            .with_context(|| format!("Failed to create output directory {}", output_dir))?;
        let path = exporter.export_route_reports(&reports)?;
        println!("Report written to {}", path.display());
    }

    logging::print_timing_report();
    Ok(())
}

fn apply_overrides(config: &mut AssistantConfig, args: &Args) {
    if let Some(surface) = args.surface() {
        config.surface = surface.to_string();
    } else if args.is_demo() && args.config().is_none() {
        config.surface = DEMO_SURFACE.to_string();
    }
    if let Some(gravity) = args.gravity() {
        config.gravity = gravity;
    }
    if args.no_alerts() {
        config.alert.enabled = false;
    }
}

fn load_input(args: &Args) -> Result<Vec<NamedRoute>> {
    if let Some(file) = args.path_file() {
        return path_loader::load_routes(file)
            .with_context(|| format!("Failed to load routes from {}", file));
    }

    let path = match args.points() {
        Some(points) => path_loader::parse_points(points).context("Failed to parse --points")?,
        None => {
            println!("No path given, running the sharp-curve demonstration");
            GeoPath::from_degrees(&DEMO_CURVE)?
        }
    };

    Ok(vec![NamedRoute {
        name: DEFAULT_ROUTE_NAME.to_string(),
        path,
    }])
}
