//! Assess many routes at once
//!
//! Each route is independent and the assistant is immutable, so routes are
//! analysed on the rayon pool without coordination.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::alerts::assistant::GeoSafeAssistant;
use crate::core::speed_advisor::CurveAssessment;
use crate::data::path_loader::NamedRoute;
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub route: String,
    pub points: usize,
    pub surface: String,
    pub mu: f64,
    pub assessment: CurveAssessment,
}

#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub parallel: bool,
    pub show_progress: bool,
    /// Announce through the assistant's alerter for exceeded routes
    pub announce: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            show_progress: false,
            announce: false,
        }
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} routes")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

/// Assess every route at `current_speed_kmh`; reports keep input order.
pub fn analyze_routes(
    assistant: &GeoSafeAssistant,
    routes: &[NamedRoute],
    current_speed_kmh: f64,
    options: BatchOptions,
) -> Vec<RouteReport> {
    let _timing = logging::start_timing("analyze_routes", OperationCategory::BatchAnalysis);
    let bar = progress_bar(routes.len(), options.show_progress);

    let analyse = |route: &NamedRoute| {
        let assessment = if options.announce {
            assistant.analyze_and_alert(&route.path, current_speed_kmh)
        } else {
            assistant.analyze(&route.path, current_speed_kmh)
        };
        bar.inc(1);

        RouteReport {
            route: route.name.clone(),
            points: route.path.len(),
            surface: assistant.profile().surface.clone(),
            mu: assistant.mu(),
            assessment,
        }
    };

    let reports: Vec<RouteReport> = if options.parallel {
        routes.par_iter().map(analyse).collect()
    } else {
        routes.iter().map(analyse).collect()
    };
    bar.finish_and_clear();

    let exceeded = reports.iter().filter(|r| r.assessment.exceeded).count();
    info!(routes = reports.len(), exceeded, "Batch analysis complete");
    reports
}
