//! Great-circle distance (haversine) in miles

use crate::domain::entities::Coordinate;

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance between two coordinates in miles.
///
/// NaN inputs propagate to a NaN result.
pub fn haversine_miles(a: &Coordinate, b: &Coordinate) -> f64 {
    let (lat1, lon1) = (a.latitude.to_radians(), a.longitude.to_radians());
    let (lat2, lon2) = (b.latitude.to_radians(), b.longitude.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push near-antipodal points just past 1
    let h = if h > 1.0 { 1.0 } else { h };

    2.0 * EARTH_RADIUS_MILES * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distance in miles, or `0.0` when either side is absent.
pub fn great_circle_distance(a: Option<&Coordinate>, b: Option<&Coordinate>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => haversine_miles(a, b),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAN_FRANCISCO: Coordinate = Coordinate {
        latitude: 37.7749,
        longitude: -122.4194,
    };
    const OAKLAND: Coordinate = Coordinate {
        latitude: 37.8044,
        longitude: -122.2712,
    };

    #[test]
    fn test_same_point_is_zero() {
        for c in [SAN_FRANCISCO, OAKLAND, Coordinate::new(-90.0, 180.0)] {
            assert_eq!(haversine_miles(&c, &c), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            (SAN_FRANCISCO, OAKLAND),
            (Coordinate::new(52.52, 13.405), Coordinate::new(48.8566, 2.3522)),
            (Coordinate::new(-33.8688, 151.2093), Coordinate::new(40.7128, -74.006)),
        ];
        for (a, b) in pairs {
            assert!((haversine_miles(&a, &b) - haversine_miles(&b, &a)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_san_francisco_to_oakland() {
        let d = haversine_miles(&SAN_FRANCISCO, &OAKLAND);
        assert!((d - 8.4).abs() < 0.2, "got {d}");
    }

    #[test]
    fn test_longitude_wraparound() {
        let across = haversine_miles(&Coordinate::new(0.0, 179.0), &Coordinate::new(0.0, -179.0));
        let two_degrees = haversine_miles(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 2.0));
        assert!((across - two_degrees).abs() < 1e-6);
        assert!(across < 140.0);
    }

    #[test]
    fn test_antipodes_are_half_circumference() {
        let d = haversine_miles(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_MILES).abs() < 1e-6);
    }

    #[test]
    fn test_absent_side_is_zero() {
        assert_eq!(great_circle_distance(None, Some(&OAKLAND)), 0.0);
        assert_eq!(great_circle_distance(Some(&SAN_FRANCISCO), None), 0.0);
        assert_eq!(great_circle_distance(None, None), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let d = haversine_miles(&Coordinate::new(f64::NAN, 0.0), &OAKLAND);
        assert!(d.is_nan());
    }
}
