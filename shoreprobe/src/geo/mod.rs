//! Spherical-earth navigation math.
//!
//! Bearing, great-circle distance and destination-point projection used to
//! place probe points and to measure cached land points against the vessel.
//!
//! # Conventions
//!
//! - Latitude: degrees north (-90 to 90)
//! - Longitude: degrees east (-180 to 180)
//! - Bearing: degrees true (0-360, 0=north, 90=east)
//! - Distance: meters

mod types;

pub use types::Coordinate;

use std::f64::consts::PI;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// Radians to degrees conversion factor.
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Projected coordinates are rounded to this many decimal places.
const DESTINATION_PRECISION: f64 = 1e6;

/// Normalize a bearing into `[0, 360)`.
#[inline]
pub fn normalize_bearing(bearing_deg: f64) -> f64 {
    let b = bearing_deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if b >= 360.0 {
        0.0
    } else {
        b
    }
}

/// Signed difference `bearing - heading`, wrapped into `(-180, 180]`.
///
/// # Example
///
/// ```
/// use shoreprobe::geo::relative_angle;
///
/// assert_eq!(relative_angle(10.0, 0.0), 10.0);
/// assert_eq!(relative_angle(5.0, 355.0), 10.0);
/// assert_eq!(relative_angle(350.0, 10.0), -20.0);
/// ```
pub fn relative_angle(bearing_deg: f64, heading_deg: f64) -> f64 {
    let mut a = (bearing_deg - heading_deg) % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a <= -180.0 {
        a += 360.0;
    }
    a
}

/// Calculate the initial great-circle bearing from one position to another.
///
/// Returns the forward azimuth in degrees, normalized to `[0, 360)`.
///
/// # Example
///
/// ```
/// use shoreprobe::geo::{bearing, Coordinate};
///
/// let b = bearing(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
/// assert!((b - 90.0).abs() < 1e-9);
/// ```
pub fn bearing(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude * DEG_TO_RAD;
    let lat2_rad = to.latitude * DEG_TO_RAD;
    let delta_lon = (to.longitude - from.longitude) * DEG_TO_RAD;

    let y = delta_lon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lon.cos();

    normalize_bearing(y.atan2(x) * RAD_TO_DEG)
}

/// Calculate the great-circle distance between two positions in meters.
///
/// Uses the haversine formula, which stays accurate over the short
/// distances between a vessel and nearby shore.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.latitude * DEG_TO_RAD;
    let lat2_rad = b.latitude * DEG_TO_RAD;
    let delta_lat = (b.latitude - a.latitude) * DEG_TO_RAD;
    let delta_lon = (b.longitude - a.longitude) * DEG_TO_RAD;

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Project a position along a bearing for a given distance.
///
/// The result is rounded to 6 decimal places of degrees (roughly 0.1 m).
///
/// # Example
///
/// ```
/// use shoreprobe::geo::{destination, Coordinate};
///
/// let p = destination(Coordinate::new(0.0, 0.0), 0.0, 111_195.0);
/// assert!((p.latitude - 1.0).abs() < 1e-4);
/// assert_eq!(p.longitude, 0.0);
/// ```
pub fn destination(origin: Coordinate, bearing_deg: f64, distance_m: f64) -> Coordinate {
    let lat1_rad = origin.latitude * DEG_TO_RAD;
    let lon1_rad = origin.longitude * DEG_TO_RAD;
    let bearing_rad = bearing_deg * DEG_TO_RAD;
    let angular_distance = distance_m / EARTH_RADIUS_M;

    let sin_lat1 = lat1_rad.sin();
    let cos_lat1 = lat1_rad.cos();
    let sin_d = angular_distance.sin();
    let cos_d = angular_distance.cos();

    let lat2_rad = (sin_lat1 * cos_d + cos_lat1 * sin_d * bearing_rad.cos()).asin();
    let lon2_rad =
        lon1_rad + (bearing_rad.sin() * sin_d * cos_lat1).atan2(cos_d - sin_lat1 * lat2_rad.sin());

    Coordinate::new(
        round_degrees(lat2_rad * RAD_TO_DEG),
        round_degrees(lon2_rad * RAD_TO_DEG),
    )
}

#[inline]
fn round_degrees(deg: f64) -> f64 {
    (deg * DESTINATION_PRECISION).round() / DESTINATION_PRECISION
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const KIEL: Coordinate = Coordinate::new(54.3233, 10.1228);

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = Coordinate::new(0.0, 0.0);
        assert!((bearing(origin, Coordinate::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((bearing(origin, Coordinate::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((bearing(origin, Coordinate::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing(origin, Coordinate::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_is_never_negative() {
        let b = bearing(KIEL, Coordinate::new(54.3240, 10.1200));
        assert!((0.0..360.0).contains(&b), "bearing {} out of range", b);
        assert!(b > 270.0);
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance(KIEL, KIEL), 0.0);
    }

    #[test]
    fn test_destination_zero_distance_is_origin() {
        assert_eq!(destination(KIEL, 123.0, 0.0), KIEL);
    }

    #[test]
    fn test_destination_rounds_to_six_places() {
        let p = destination(KIEL, 45.0, 25.0);
        let scaled = p.latitude * 1e6;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn test_destination_matches_distance_and_bearing() {
        let p = destination(KIEL, 90.0, 40.0);
        assert!((distance(KIEL, p) - 40.0).abs() < 0.2);
        assert!((bearing(KIEL, p) - 90.0).abs() < 0.5);
    }

    #[test]
    fn test_normalize_bearing() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert_eq!(normalize_bearing(-45.0), 315.0);
        assert_eq!(normalize_bearing(405.0), 45.0);
    }

    #[test]
    fn test_relative_angle_wraps() {
        assert_eq!(relative_angle(0.0, 0.0), 0.0);
        assert_eq!(relative_angle(180.0, 0.0), 180.0);
        assert_eq!(relative_angle(0.0, 180.0), 180.0);
        assert_eq!(relative_angle(359.0, 1.0), -2.0);
        assert_eq!(relative_angle(1.0, 359.0), 2.0);
    }

    proptest! {
        #[test]
        fn prop_distance_is_symmetric(
            lat1 in -80.0f64..80.0, lon1 in -179.0f64..179.0,
            lat2 in -80.0f64..80.0, lon2 in -179.0f64..179.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            prop_assert!((distance(a, b) - distance(b, a)).abs() < 1e-6);
            prop_assert_eq!(distance(a, a), 0.0);
        }

        #[test]
        fn prop_bearing_in_range(
            lat1 in -80.0f64..80.0, lon1 in -179.0f64..179.0,
            lat2 in -80.0f64..80.0, lon2 in -179.0f64..179.0,
        ) {
            let b = bearing(Coordinate::new(lat1, lon1), Coordinate::new(lat2, lon2));
            prop_assert!((0.0..360.0).contains(&b));
        }

        #[test]
        fn prop_destination_zero_is_identity(
            lat in -80.0f64..80.0, lon in -179.0f64..179.0, brg in 0.0f64..360.0,
        ) {
            let origin = Coordinate::new(lat, lon);
            let p = destination(origin, brg, 0.0);
            prop_assert!((p.latitude - lat).abs() < 1e-6);
            prop_assert!((p.longitude - lon).abs() < 1e-6);
        }
    }
}
