/// End-to-end tests for the curve speed assistant
///
/// Run with: cargo test --test integration_tests -- --nocapture

use std::io::Write;
use std::sync::Arc;

use geosafe::alerts::alerter::RecordingAlerter;
use geosafe::analysis::batch::{analyze_routes, BatchOptions};
use geosafe::config::friction::coefficient_for;
use geosafe::core::curvature::radius_of_curvature;
use geosafe::core::geodesic::distance;
use geosafe::data::path_loader::load_routes;
use geosafe::utils::csv_export::CsvExporter;
use geosafe::{assess, safe_speed, scan_path, GeoPath, GeoPoint, GeoSafeAssistant};

const SHARP_TURN: [(f64, f64); 3] = [(12.9716, 77.5946), (12.9717, 77.5947), (12.9718, 77.5946)];

#[test]
fn test_sharp_turn_in_the_wet() {
    println!("\n=== Test: Sharp Turn, Wet Surface ===");
    let path = GeoPath::from_degrees(&SHARP_TURN).unwrap();
    let scan = scan_path(&path);

    assert!(scan.min_radius_m > 10.0 && scan.min_radius_m < 100.0, "radius {}", scan.min_radius_m);

    let assessment = assess(scan.min_radius_m, coefficient_for("wet"), 9.81, 60.0);
    println!("✓ Radius {:.1} m, safe speed {:?} km/h", assessment.radius_m, assessment.safe_speed_kmh);

    let safe = assessment.safe_speed_kmh.expect("curved path has a safe speed");
    assert!(safe > 0);
    assert_eq!(safe, 23);
    assert!(assessment.exceeded);
}

#[test]
fn test_straight_path_never_alerts() {
    println!("\n=== Test: Straight Path ===");
    let path = GeoPath::from_degrees(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]).unwrap();
    let scan = scan_path(&path);
    assert!(scan.min_radius_m.is_infinite());

    for speed in [0.0, 50.0, 130.0, 400.0] {
        let assessment = assess(scan.min_radius_m, coefficient_for("icy"), 9.81, speed);
        assert!(!assessment.exceeded);
        assert_eq!(assessment.safe_speed_kmh, None);
    }
    println!("✓ No alert at any speed");
}

#[test]
fn test_two_point_path_cannot_be_assessed() {
    let path = GeoPath::from_degrees(&SHARP_TURN[..2]).unwrap();
    let recorder = Arc::new(RecordingAlerter::new());
    let assistant = GeoSafeAssistant::new("wet").with_alerter(recorder.clone());

    let assessment = assistant.analyze_and_alert(&path, 120.0);
    assert!(assessment.radius_m.is_infinite());
    assert!(!assessment.exceeded);
    assert!(recorder.messages().is_empty());
}

#[test]
fn test_unknown_surface_defaults_to_dry() {
    assert_eq!(coefficient_for("muddy"), 0.7);
    assert_eq!(GeoSafeAssistant::new("muddy").mu(), coefficient_for("dry"));
}

#[test]
fn test_geometry_properties() {
    let points: Vec<GeoPoint> = [(12.9716, 77.5946), (-41.29, 174.78), (64.14, -21.94), (0.0, 0.0)]
        .iter()
        .map(|&(lat, lon)| GeoPoint::new(lat, lon).unwrap())
        .collect();

    for a in &points {
        assert_eq!(distance(a, a), 0.0);
        for b in &points {
            assert_eq!(distance(a, b), distance(b, a));
            assert!(distance(a, b) >= 0.0);
        }
    }

    let (p1, p2, p3) = (points[0], points[1], points[2]);
    let forward = radius_of_curvature(&p1, &p2, &p3);
    let reverse = radius_of_curvature(&p3, &p2, &p1);
    assert!(((forward - reverse) / forward).abs() < 1e-9);

    assert_eq!(safe_speed(0.0, 0.7, 9.81), Some(0));
}

#[test]
fn test_csv_routes_to_report() {
    println!("\n=== Test: CSV Routes To Report ===");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("routes.csv");
    {
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "route,lat,lon").unwrap();
        for (lat, lon) in SHARP_TURN {
            writeln!(file, "hairpin,{},{}", lat, lon).unwrap();
        }
        for lon in [0.0, 1.0, 2.0] {
            writeln!(file, "equator,0,{}", lon).unwrap();
        }
    }

    let routes = load_routes(&input).unwrap();
    assert_eq!(routes.len(), 2);

    let recorder = Arc::new(RecordingAlerter::new());
    let assistant = GeoSafeAssistant::new("wet").with_alerter(recorder.clone());
    let options = BatchOptions { announce: true, ..BatchOptions::default() };
    let reports = analyze_routes(&assistant, &routes, 60.0, options);

    assert_eq!(reports[0].route, "hairpin");
    assert!(reports[0].assessment.exceeded);
    assert!(reports[1].assessment.is_straight());
    assert_eq!(
        recorder.messages(),
        vec!["Caution. Sharp curve ahead. Reduce speed to 23 kilometers per hour."]
    );

    let exporter = CsvExporter::new(dir.path().join("out"), false).unwrap();
    let report_path = exporter.export_route_reports(&reports).unwrap();
    let contents = std::fs::read_to_string(report_path).unwrap();
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.contains("hairpin"));
    println!("✓ Report:\n{}", contents);
}

#[test]
fn test_scan_is_idempotent() {
    let path = GeoPath::from_degrees(&[
        (47.3769, 8.5417),
        (47.3772, 8.5421),
        (47.3771, 8.5428),
        (47.3766, 8.5431),
    ])
    .unwrap();
    let first = scan_path(&path);
    let second = scan_path(&path);
    assert_eq!(first, second);
    assert!(first.min_radius_m.is_finite());
}
