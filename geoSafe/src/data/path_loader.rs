use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use super::poi::{GeoPath, GeoPoint};
use crate::config::constants::DEFAULT_ROUTE_NAME;
use crate::error::{GeoSafeError, Result};
use crate::utils::logging::{self, FileIOType, OperationCategory};

/// A path with the name it was loaded under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRoute {
    pub name: String,
    pub path: GeoPath,
}

struct ColumnLayout {
    lat: usize,
    lon: usize,
    route: Option<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |wanted: &[&str]| {
            headers
                .iter()
                .position(|h| wanted.contains(&h.trim().to_lowercase().as_str()))
        };

        let lat = find(&["lat", "latitude"])
            .ok_or_else(|| GeoSafeError::InvalidPoints("missing 'lat' column".to_string()))?;
        let lon = find(&["lon", "lng", "longitude"])
            .ok_or_else(|| GeoSafeError::InvalidPoints("missing 'lon' column".to_string()))?;
        let route = find(&["route", "route_id"]);

        Ok(Self { lat, lon, route })
    }
}

fn parse_field(record: &StringRecord, index: usize, name: &str, line: u64) -> Result<f64> {
    let raw = record
        .get(index)
        .ok_or_else(|| GeoSafeError::InvalidPoints(format!("line {}: missing {}", line, name)))?;
    raw.trim()
        .parse()
        .map_err(|_| GeoSafeError::InvalidPoints(format!("line {}: invalid {} '{}'", line, name, raw)))
}

/// Read routes from CSV.
///
/// Requires `lat` and `lon` columns; an optional `route` column groups rows
/// into separate routes, listed in order of first appearance. Rows keep
/// their file order within a route.
pub fn load_routes_from_reader<R: Read>(reader: R) -> Result<Vec<NamedRoute>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let layout = ColumnLayout::from_headers(reader.headers()?)?;
    let mut routes: Vec<NamedRoute> = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let lat = parse_field(&record, layout.lat, "latitude", line)?;
        let lon = parse_field(&record, layout.lon, "longitude", line)?;
        let point = GeoPoint::new(lat, lon)?;

        let name = layout
            .route
            .and_then(|index| record.get(index))
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_ROUTE_NAME);

        match routes.iter_mut().find(|route| route.name == name) {
            Some(route) => route.path.push(point),
            None => routes.push(NamedRoute {
                name: name.to_string(),
                path: GeoPath::new(vec![point]),
            }),
        }
    }

    for route in &routes {
        debug!(route = %route.name, points = route.path.len(), "Loaded route");
    }
    Ok(routes)
}

pub fn load_routes(csv_path: impl AsRef<Path>) -> Result<Vec<NamedRoute>> {
    let _timing = logging::start_timing("load_routes",
        OperationCategory::FileIO { subcategory: FileIOType::PathLoad });

    let file = File::open(csv_path.as_ref())?;
    let routes = load_routes_from_reader(file)?;

    info!(path = %csv_path.as_ref().display(), routes = routes.len(), "Loaded route file");
    Ok(routes)
}

/// Parse an inline list such as `"12.97,77.59; 12.98,77.60"`.
pub fn parse_points(input: &str) -> Result<GeoPath> {
    let mut path = GeoPath::default();

    for pair in input.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (lat, lon) = pair
            .split_once(',')
            .ok_or_else(|| GeoSafeError::InvalidPoints(format!("expected 'lat,lon', got '{}'", pair)))?;

        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| GeoSafeError::InvalidPoints(format!("invalid number '{}'", value.trim())))
        };
        path.push(GeoPoint::new(parse(lat)?, parse(lon)?)?);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_single_route_without_route_column() {
        let csv = "lat,lon\n12.9716,77.5946\n12.9717,77.5947\n12.9718,77.5946\n";
        let routes = load_routes_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].name, "default");
        assert_eq!(routes[0].path.len(), 3);
        assert_eq!(routes[0].path.points()[1].lon(), 77.5947);
    }

    #[test]
    fn test_groups_by_route_in_first_appearance_order() {
        let csv = "route,latitude,longitude\nb,0,0\na,1,1\nb,0,1\na,1,2\nb,0,2\n";
        let routes = load_routes_from_reader(csv.as_bytes()).unwrap();
        let names: Vec<_> = routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(routes[0].path.len(), 3);
        assert_eq!(routes[1].path.points()[1].lon(), 2.0);
    }

    #[test]
    fn test_rejects_out_of_range_coordinate() {
        let csv = "lat,lon\n0,0\n95.0,10\n";
        assert!(matches!(
            load_routes_from_reader(csv.as_bytes()),
            Err(GeoSafeError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_rejects_missing_columns_and_bad_numbers() {
        assert!(load_routes_from_reader("x,y\n1,2\n".as_bytes()).is_err());
        assert!(matches!(
            load_routes_from_reader("lat,lon\nabc,1\n".as_bytes()),
            Err(GeoSafeError::InvalidPoints(_))
        ));
    }

    #[test]
    fn test_load_routes_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lat,lon").unwrap();
        writeln!(file, "0,0").unwrap();
        writeln!(file, "0,1").unwrap();
        let routes = load_routes(file.path()).unwrap();
        assert_eq!(routes[0].path.len(), 2);
    }

    #[test]
    fn test_parse_points() {
        let path = parse_points("12.9716,77.5946; 12.9717, 77.5947 ;12.9718,77.5946;").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.points()[2].lat(), 12.9718);

        assert!(parse_points("").unwrap().is_empty());
        assert!(matches!(parse_points("1.0;2.0"), Err(GeoSafeError::InvalidPoints(_))));
        assert!(matches!(parse_points("100,0"), Err(GeoSafeError::InvalidCoordinate { .. })));
    }
}
