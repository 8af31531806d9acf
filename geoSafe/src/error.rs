//! Error types for the GeoSafe assistant

use thiserror::Error;

/// Errors reported by the assistant.
///
/// Degenerate geometry (collinear triples, paths shorter than three points)
/// and unknown surface names are not errors; they resolve to an infinite
/// radius or the dry-surface coefficient respectively.
#[derive(Error, Debug)]
pub enum GeoSafeError {
    /// Latitude or longitude outside its valid range, or not finite
    #[error("Invalid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Friction table unusable for lookups
    #[error("Invalid friction table: {0}")]
    InvalidFrictionTable(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Inline point list could not be parsed
    #[error("Invalid point list: {0}")]
    InvalidPoints(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, GeoSafeError>;
