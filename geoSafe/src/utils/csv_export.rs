use std::path::{Path, PathBuf};

use chrono::Local;
use csv::Writer;
use tracing::info;

use crate::analysis::batch::RouteReport;
use crate::error::Result;
use crate::utils::logging::{self, FileIOType, OperationCategory};

pub const REPORT_FILE_NAME: &str = "route_reports.csv";

const REPORT_HEADER: [&str; 10] = [
    "Route",
    "Points",
    "Surface",
    "Friction (mu)",
    "Radius (m)",
    "Safe Speed (km/h)",
    "Current Speed (km/h)",
    "Exceeded",
    "Sharpest Window",
    "Analysed At",
];

/// Writes route reports into a timestamped directory under `output_dir`.
pub struct CsvExporter {
    output_dir: PathBuf,
    timestamp: String,
    verbose_logging: bool,
}

impl CsvExporter {
    pub fn new(output_dir: impl AsRef<Path>, verbose_logging: bool) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();

        let full_path = output_dir.as_ref().join(&timestamp);
        std::fs::create_dir_all(&full_path)?;

        Ok(Self {
            output_dir: full_path,
            timestamp,
            verbose_logging,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export one row per route; returns the written file's path.
    pub fn export_route_reports(&self, reports: &[RouteReport]) -> Result<PathBuf> {
        let _timing = logging::start_timing("export_route_reports",
            OperationCategory::FileIO { subcategory: FileIOType::ReportSave });

        let report_path = self.output_dir.join(REPORT_FILE_NAME);
        let mut writer = Writer::from_path(&report_path)?;
        writer.write_record(REPORT_HEADER)?;

        for report in reports {
            let assessment = &report.assessment;
            let radius = if assessment.radius_m.is_finite() {
                format!("{:.2}", assessment.radius_m)
            } else {
                "inf".to_string()
            };

            writer.write_record([
                report.route.clone(),
                report.points.to_string(),
                report.surface.clone(),
                format!("{:.2}", report.mu),
                radius,
                assessment.safe_speed_kmh.map(|s| s.to_string()).unwrap_or_default(),
                format!("{:.1}", assessment.current_speed_kmh),
                assessment.exceeded.to_string(),
                assessment.sharpest_window.map(|w| w.to_string()).unwrap_or_default(),
                self.timestamp.clone(),
            ])?;
        }
        writer.flush()?;

        if self.verbose_logging {
            info!(rows = reports.len(), path = %report_path.display(), "Exported route reports");
        }
        Ok(report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::speed_advisor::assess;

    fn report(route: &str, radius: f64, window: Option<usize>) -> RouteReport {
        RouteReport {
            route: route.to_string(),
            points: 3,
            surface: "wet".to_string(),
            mu: 0.4,
            assessment: assess(radius, 0.4, 9.81, 60.0).with_window(window),
        }
    }

    #[test]
    fn test_exports_one_row_per_route() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path(), false).unwrap();
        assert!(exporter.output_dir().starts_with(dir.path()));

        let path = exporter
            .export_route_reports(&[report("hairpin, north", 11.12, Some(0)), report("straight", f64::INFINITY, None)])
            .unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.get(5), Some("Safe Speed (km/h)"));

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(0), Some("hairpin, north"));
        assert_eq!(rows[0].get(4), Some("11.12"));
        assert_eq!(rows[0].get(5), Some("23"));
        assert_eq!(rows[0].get(7), Some("true"));
        assert_eq!(rows[1].get(4), Some("inf"));
        assert_eq!(rows[1].get(5), Some(""));
        assert_eq!(rows[1].get(7), Some("false"));
    }
}
