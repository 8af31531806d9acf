use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::constants::{DEFAULT_SPEECH_RATE, DRY_SURFACE, STANDARD_GRAVITY};
use crate::config::friction::{FrictionProfile, FrictionTable};
use crate::error::{GeoSafeError, Result};
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    pub enabled: bool,
    pub speech_rate: u32, // Words per minute for speech-capable alerters
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speech_rate: DEFAULT_SPEECH_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub surface: String,
    pub gravity: f64,                   // m/s²
    pub friction_table: FrictionTable,
    pub alert: AlertConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            surface: DRY_SURFACE.to_string(),
            gravity: STANDARD_GRAVITY,
            friction_table: FrictionTable::default(),
            alert: AlertConfig::default(),
        }
    }
}

impl AssistantConfig {
    /// Read a JSON config file; missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let _timing = logging::start_timing("load_config",
            OperationCategory::FileIO { subcategory: FileIOType::ConfigLoad });

        let contents = fs::read_to_string(path.as_ref())?;
        let config: AssistantConfig = serde_json::from_str(&contents)?;
        config.validate()?;

        info!(path = %path.as_ref().display(), surface = %config.surface, "Loaded assistant config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(GeoSafeError::InvalidConfig(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        Ok(())
    }

    pub fn friction_profile(&self) -> FrictionProfile {
        FrictionProfile::resolve(&self.friction_table, &self.surface)
    }
}
