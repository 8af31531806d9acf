// Main module declarations for the GeoSafe curve-speed assistant

pub mod error;

// Geometry core: distance, curvature, path scanning and speed advice
pub mod core {
    pub mod geodesic;
    pub mod curvature;
    pub mod path_scanner;
    pub mod speed_advisor;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod friction;
    pub mod assistant_config;
}

// Coordinate model and data loaders
pub mod data {
    pub mod poi;
    pub mod path_loader;
}

// Alert delivery and the assistant that drives it
pub mod alerts {
    pub mod alerter;
    pub mod assistant;
}

// Batch analysis and reporting
pub mod analysis {
    pub mod batch;
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::alerts::assistant::GeoSafeAssistant;
pub use crate::core::path_scanner::{scan_path, PathScan};
pub use crate::core::speed_advisor::{assess, safe_speed, CurveAssessment};
pub use crate::data::poi::{GeoPath, GeoPoint};
pub use crate::error::GeoSafeError;
