//! Great-circle distance between coordinates

use crate::config::constants::EARTH_RADIUS_M;
use crate::data::poi::GeoPoint;

/// Haversine distance in meters on a sphere of radius [`EARTH_RADIUS_M`].
pub fn distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let lat1 = p1.lat().to_radians();
    let lat2 = p2.lat().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (p2.lon() - p1.lon()).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    EARTH_RADIUS_M * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
