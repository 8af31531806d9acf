use std::sync::Arc;

use tracing::{debug, info};

use super::alerter::{caution_message, Alerter, TracingAlerter};
use crate::config::assistant_config::AssistantConfig;
use crate::config::constants::STANDARD_GRAVITY;
use crate::config::friction::{FrictionProfile, FrictionTable};
use crate::core::path_scanner::scan_path;
use crate::core::speed_advisor::{assess, CurveAssessment};
use crate::data::poi::GeoPath;
use crate::error::{GeoSafeError, Result};
use crate::utils::logging::{self, OperationCategory};

/// Calculates safe cornering speeds for a surface condition and announces
/// a caution through the injected [`Alerter`] when the driver is too fast.
#[derive(Clone)]
pub struct GeoSafeAssistant {
    profile: FrictionProfile,
    gravity: f64,
    alerts_enabled: bool,
    alerter: Arc<dyn Alerter>,
}

impl GeoSafeAssistant {
    /// Assistant on the built-in friction table, alerting via `tracing`.
    pub fn new(surface: &str) -> Self {
        Self {
            profile: FrictionProfile::resolve(&FrictionTable::default(), surface),
            gravity: STANDARD_GRAVITY,
            alerts_enabled: true,
            alerter: Arc::new(TracingAlerter),
        }
    }

    pub fn from_config(config: &AssistantConfig, alerter: Arc<dyn Alerter>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            profile: config.friction_profile(),
            gravity: config.gravity,
            alerts_enabled: config.alert.enabled,
            alerter,
        })
    }

    pub fn with_alerter(mut self, alerter: Arc<dyn Alerter>) -> Self {
        self.alerter = alerter;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Result<Self> {
        if !(gravity.is_finite() && gravity > 0.0) {
            return Err(GeoSafeError::InvalidConfig(format!(
                "gravity must be positive, got {}",
                gravity
            )));
        }
        self.gravity = gravity;
        Ok(self)
    }

    pub fn with_alerts_enabled(mut self, enabled: bool) -> Self {
        self.alerts_enabled = enabled;
        self
    }

    pub fn profile(&self) -> &FrictionProfile {
        &self.profile
    }

    pub fn mu(&self) -> f64 {
        self.profile.mu
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Scan and assess without alerting.
    pub fn analyze(&self, path: &GeoPath, current_speed_kmh: f64) -> CurveAssessment {
        let scan = scan_path(path);

        let _timing = logging::start_timing("assess", OperationCategory::SpeedAdvice);
        assess(scan.min_radius_m, self.profile.mu, self.gravity, current_speed_kmh)
            .with_window(scan.sharpest_window)
    }

    pub fn analyze_and_alert(&self, path: &GeoPath, current_speed_kmh: f64) -> CurveAssessment {
        let assessment = self.analyze(path, current_speed_kmh);

        match assessment.safe_speed_kmh {
            Some(safe) => info!(
                "Curve radius: {:.1}m | Threshold: {}km/h",
                assessment.radius_m, safe
            ),
            None => debug!(points = path.len(), "No curvature detected, path is straight"),
        }

        if self.alerts_enabled {
            if let Some(message) = caution_message(&assessment) {
                self.alerter.announce(&message);
            }
        }

        assessment
    }
}

impl std::fmt::Debug for GeoSafeAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoSafeAssistant")
            .field("profile", &self.profile)
            .field("gravity", &self.gravity)
            .field("alerts_enabled", &self.alerts_enabled)
            .finish()
    }
}
