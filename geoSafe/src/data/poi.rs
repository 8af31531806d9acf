use serde::Serialize;
use crate::config::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::error::{GeoSafeError, Result};

/// A latitude/longitude pair in degrees.
///
/// Construction validates the ranges, so every `GeoPoint` in circulation is
/// safe to feed into the trigonometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let lat_ok = lat.is_finite() && (MIN_LATITUDE..=MAX_LATITUDE).contains(&lat);
        let lon_ok = lon.is_finite() && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon);
        if !lat_ok || !lon_ok {
            return Err(GeoSafeError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = GeoSafeError;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self> {
        GeoPoint::new(lat, lon)
    }
}

/// Ordered points in direction of travel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoPath {
    points: Vec<GeoPoint>,
}

impl GeoPath {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Build a path from raw degree pairs, rejecting the first invalid one.
    pub fn from_degrees(pairs: &[(f64, f64)]) -> Result<Self> {
        let points = pairs
            .iter()
            .map(|&pair| GeoPoint::try_from(pair))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { points })
    }

    pub fn push(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_boundary_coordinates() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            GeoPoint::new(91.0, 0.0),
            Err(GeoSafeError::InvalidCoordinate { .. })
        ));
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_path_from_degrees_stops_at_invalid_point() {
        let result = GeoPath::from_degrees(&[(0.0, 0.0), (120.0, 0.0), (0.0, 1.0)]);
        match result {
            Err(GeoSafeError::InvalidCoordinate { lat, .. }) => assert_eq!(lat, 120.0),
            other => panic!("expected invalid coordinate, got {:?}", other),
        }
    }

    #[test]
    fn test_path_preserves_order() {
        let path = GeoPath::from_degrees(&[(1.0, 2.0), (3.0, 4.0)]).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.points()[0].lat(), 1.0);
        assert_eq!(path.points()[1].lon(), 4.0);
    }
}
