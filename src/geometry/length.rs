//! Geodesic path length.

use geo::{Distance, Geodesic};

use crate::models::GeoPoint;

const M_PER_KM: f64 = 1000.0;

/// Length of a path in km, summing ellipsoidal geodesic distances between
/// consecutive points.
///
/// Works on the original geographic coordinates so paths crossing UTM zone
/// boundaries are measured consistently.
pub fn path_length(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| Geodesic.distance(pair[0].to_geo(), pair[1].to_geo()))
        .sum::<f64>()
        / M_PER_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint { lat, lon }
    }

    #[test]
    fn test_path_length_short_meridian_step() {
        let length = path_length(&[pt(0.0, 0.0), pt(0.01, 0.0)]);
        assert!((length - 1.11).abs() / 1.11 < 0.01, "length {}", length);
    }

    #[test]
    fn test_path_length_trivial_inputs() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[pt(63.43, 10.39)]), 0.0);
        assert_eq!(path_length(&[pt(63.43, 10.39), pt(63.43, 10.39)]), 0.0);
    }

    #[test]
    fn test_path_length_is_additive() {
        let a = pt(63.40, 10.30);
        let b = pt(63.41, 10.35);
        let c = pt(63.45, 10.32);
        let whole = path_length(&[a, b, c]);
        let parts = path_length(&[a, b]) + path_length(&[b, c]);
        assert!((whole - parts).abs() < 1e-12);
        assert!(whole > path_length(&[a, c]));
    }

    #[test]
    fn test_path_length_across_zone_boundary() {
        // lon 6.0 separates zones 31 and 32; one degree at the equator is ~111.3 km
        let length = path_length(&[pt(0.0, 5.5), pt(0.0, 6.5)]);
        assert!((length - 111.32).abs() < 0.1, "length {}", length);
    }
}
