use clap::Parser;

use crate::config::constants::DEMO_SPEED_KMH;

#[derive(Parser, Debug)]
#[command(author, version, about = "Safe cornering speed advisor for GPS paths", long_about = None)]
pub struct Args {
    #[arg(short = 'f', long, requires = "speed", help = "CSV file with lat,lon columns and an optional route column")]
    path_file: Option<String>,

    #[arg(short = 'p', long, help = "Inline points as \"lat,lon;lat,lon;...\"", conflicts_with = "path_file", requires = "speed", allow_hyphen_values = true)]
    points: Option<String>,

    #[arg(short, long, help = "Surface condition (dry, wet, icy, or a config-defined name)")]
    surface: Option<String>,

    #[arg(long, value_parser = parse_speed, help = "Observed speed in km/h (required with --path-file or --points)")]
    speed: Option<f64>,

    #[arg(short, long, help = "Gravitational acceleration in m/s²")]
    gravity: Option<f64>,

    #[arg(short, long, help = "JSON config file")]
    config: Option<String>,

    #[arg(short, long, help = "Directory for the CSV route report")]
    output: Option<String>,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    parallel: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    no_alerts: bool,

    #[arg(long, default_value_t = false)]
    progress: bool,
}

fn parse_speed(value: &str) -> Result<f64, String> {
    let speed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !speed.is_finite() || speed < 0.0 {
        return Err(format!("speed must be a finite, non-negative km/h value, got {}", value));
    }
    Ok(speed)
}

// Add getter methods for all fields
impl Args {
    pub fn path_file(&self) -> Option<&str> {
        self.path_file.as_deref()
    }

    pub fn points(&self) -> Option<&str> {
        self.points.as_deref()
    }

    pub fn surface(&self) -> Option<&str> {
        self.surface.as_deref()
    }

    pub fn speed(&self) -> Option<f64> {
        self.speed
    }

    pub fn gravity(&self) -> Option<f64> {
        self.gravity
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn no_alerts(&self) -> bool {
        self.no_alerts
    }

    pub fn progress(&self) -> bool {
        self.progress
    }

    /// Observed speed, or the demonstration speed when running the demo.
    pub fn current_speed_kmh(&self) -> Option<f64> {
        self.speed.or_else(|| self.is_demo().then_some(DEMO_SPEED_KMH))
    }

    /// True when neither a file nor inline points were given.
    pub fn is_demo(&self) -> bool {
        self.path_file.is_none() && self.points.is_none()
    }
}
