//! Local curvature radius from three consecutive points
//!
//! The three points are treated as a planar triangle whose sides are the
//! great-circle distances between them; the circumradius of that triangle
//! stands in for the road's radius of curvature. This is a coarse estimate
//! compared to a continuous curve fit.

use super::geodesic::distance;
use crate::data::poi::GeoPoint;

/// Circumradius in meters of the triangle (p1, p2, p3).
///
/// Returns `f64::INFINITY` when Heron's area term is not positive, i.e. the
/// points are collinear, coincident, or close enough that roundoff breaks
/// the strict triangle inequality. Callers read that as a straight segment.
pub fn radius_of_curvature(p1: &GeoPoint, p2: &GeoPoint, p3: &GeoPoint) -> f64 {
    let a = distance(p1, p2);
    let b = distance(p2, p3);
    let c = distance(p3, p1);

    let s = (a + b + c) / 2.0;
    let area_term = s * (s - a) * (s - b) * (s - c);

    if area_term <= 0.0 {
        return f64::INFINITY;
    }

    (a * b * c) / (4.0 * area_term.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_collinear_points_are_straight() {
        let r = radius_of_curvature(&pt(0.0, 0.0), &pt(0.0, 1.0), &pt(0.0, 2.0));
        assert!(r.is_infinite());

        let r = radius_of_curvature(&pt(0.0, 0.0), &pt(1.0, 0.0), &pt(2.0, 0.0));
        assert!(r.is_infinite());
    }

    #[test]
    fn test_coincident_points_are_straight() {
        let p = pt(45.0, 7.0);
        assert!(radius_of_curvature(&p, &p, &p).is_infinite());
    }

    #[test]
    fn test_sharp_turn_radius() {
        let r = radius_of_curvature(
            &pt(12.9716, 77.5946),
            &pt(12.9717, 77.5947),
            &pt(12.9718, 77.5946),
        );
        assert!((r - 11.12).abs() < 0.05, "got {}", r);
    }

    #[test]
    fn test_reverse_order_gives_same_radius() {
        let (p1, p2, p3) = (pt(12.9716, 77.5946), pt(12.9717, 77.5947), pt(12.9718, 77.5946));
        let forward = radius_of_curvature(&p1, &p2, &p3);
        let reverse = radius_of_curvature(&p3, &p2, &p1);
        assert!(((forward - reverse) / forward).abs() < 1e-9);
    }

    #[test]
    fn test_gentler_bend_has_larger_radius() {
        let sharp = radius_of_curvature(&pt(0.0, 0.0), &pt(0.001, 0.001), &pt(0.002, 0.0));
        let gentle = radius_of_curvature(&pt(0.0, 0.0), &pt(0.001, 0.0002), &pt(0.002, 0.0));
        assert!(gentle > sharp);
    }
}
