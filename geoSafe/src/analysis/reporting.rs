use super::batch::RouteReport;
use crate::core::speed_advisor::CurveAssessment;

/// One-line description of an assessment, e.g. for console summaries.
pub fn describe(assessment: &CurveAssessment) -> String {
    match assessment.safe_speed_kmh {
        Some(safe) => format!(
            "radius {:.1} m, safe {} km/h, current {:.1} km/h{}",
            assessment.radius_m,
            safe,
            assessment.current_speed_kmh,
            if assessment.exceeded { " -> TOO FAST" } else { "" }
        ),
        None => format!("straight, current {:.1} km/h", assessment.current_speed_kmh),
    }
}

pub fn print_route_summary(reports: &[RouteReport]) {
    println!("\nCurve Speed Summary");
    println!("----------------------------------------");
    for report in reports {
        println!(
            "{} ({} points, {} mu={:.2}): {}",
            report.route,
            report.points,
            report.surface,
            report.mu,
            describe(&report.assessment)
        );
    }

    let exceeded = reports.iter().filter(|r| r.assessment.exceeded).count();
    let tightest = reports
        .iter()
        .map(|r| r.assessment.radius_m)
        .fold(f64::INFINITY, f64::min);
    println!("----------------------------------------");
    println!("Routes: {}, over safe speed: {}", reports.len(), exceeded);
    if tightest.is_finite() {
        println!("Tightest radius: {:.1} m", tightest);
    }
}
