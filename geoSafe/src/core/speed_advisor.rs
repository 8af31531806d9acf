//! Critical cornering speed under a friction limit

use serde::Serialize;

use crate::config::constants::KMH_PER_MPS;

/// Result of comparing the observed speed with a curve's critical speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveAssessment {
    /// Curvature radius in meters, `INFINITY` for a straight path
    pub radius_m: f64,
    /// Truncated critical speed, `None` for a straight path
    pub safe_speed_kmh: Option<u32>,
    pub current_speed_kmh: f64,
    /// Strictly faster than the safe speed
    pub exceeded: bool,
    /// Start index of the window the radius came from, when known
    pub sharpest_window: Option<usize>,
}

impl CurveAssessment {
    pub fn is_straight(&self) -> bool {
        self.safe_speed_kmh.is_none()
    }

    pub fn with_window(mut self, window: Option<usize>) -> Self {
        self.sharpest_window = window;
        self
    }
}

/// Maximum speed in km/h keeping lateral acceleration within `mu * g`.
///
/// v = sqrt(mu * g * r), converted to km/h and truncated toward zero so the
/// advice never rounds up. Returns `None` for an infinite radius.
///
/// `mu` must lie in (0, 1] and `g` must be positive; both are checked in
/// debug builds. Radii large enough to exceed `u32::MAX` km/h (reachable
/// through roundoff on near-collinear triples) saturate at `u32::MAX`.
pub fn safe_speed(radius_m: f64, mu: f64, g: f64) -> Option<u32> {
    debug_assert!(mu > 0.0 && mu <= 1.0, "friction coefficient out of (0, 1]: {}", mu);
    debug_assert!(g.is_finite() && g > 0.0, "gravity must be positive: {}", g);

    if radius_m.is_infinite() {
        return None;
    }

    let lateral_limit = mu * g * radius_m;
    if lateral_limit.is_nan() || lateral_limit <= 0.0 {
        return Some(0);
    }

    let critical_kmh = lateral_limit.sqrt() * KMH_PER_MPS;
    Some(critical_kmh.trunc().min(f64::from(u32::MAX)) as u32)
}

/// `current_speed_kmh` must not be NaN; checked in debug builds.
pub fn assess(radius_m: f64, mu: f64, g: f64, current_speed_kmh: f64) -> CurveAssessment {
    debug_assert!(!current_speed_kmh.is_nan(), "current speed is NaN");

    let safe_speed_kmh = safe_speed(radius_m, mu, g);
    let exceeded = safe_speed_kmh.map_or(false, |safe| current_speed_kmh > f64::from(safe));

    CurveAssessment {
        radius_m,
        safe_speed_kmh,
        current_speed_kmh,
        exceeded,
        sharpest_window: None,
    }
}
