//! Sharpest-curve search along a path

use serde::Serialize;
use tracing::debug;

use super::curvature::radius_of_curvature;
use crate::config::constants::CURVE_WINDOW;
use crate::data::poi::GeoPath;
use crate::utils::logging::{self, OperationCategory};

/// Outcome of scanning a path for its tightest curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathScan {
    /// Smallest circumradius over all 3-point windows, `INFINITY` if none
    pub min_radius_m: f64,
    /// Start index of the first window achieving `min_radius_m`
    pub sharpest_window: Option<usize>,
}

impl PathScan {
    pub fn straight() -> Self {
        Self {
            min_radius_m: f64::INFINITY,
            sharpest_window: None,
        }
    }

    pub fn is_straight(&self) -> bool {
        self.min_radius_m.is_infinite()
    }
}

/// Slide a 3-point window over `path` and keep the minimum radius.
///
/// No smoothing is applied, so one noisy fix can yield a spuriously tight
/// radius. Paths with fewer than three points scan as straight.
pub fn scan_path(path: &GeoPath) -> PathScan {
    let _timing = logging::start_timing("scan_path", OperationCategory::PathScan);

    let mut scan = PathScan::straight();
    for (index, window) in path.points().windows(CURVE_WINDOW).enumerate() {
        let radius = radius_of_curvature(&window[0], &window[1], &window[2]);
        if radius < scan.min_radius_m {
            scan.min_radius_m = radius;
            scan.sharpest_window = Some(index);
        }
    }

    debug!(
        points = path.len(),
        min_radius_m = scan.min_radius_m,
        window = ?scan.sharpest_window,
        "Path scan complete"
    );
    scan
}
