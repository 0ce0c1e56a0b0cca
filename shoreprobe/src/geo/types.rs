//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// Equality is exact field equality with no tolerance. The shore cache
/// relies on this to suppress duplicate land points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (positive north).
    pub latitude: f64,
    /// Longitude in degrees (positive east).
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Renders the coordinate as `"lat, lng"`, the form the water oracle accepts.
    pub fn to_query_string(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }

    /// Squared planar distance in degree space.
    ///
    /// Only meaningful for ordering nearby points; it is not a geodesic distance.
    #[inline]
    pub fn planar_distance_sq(&self, other: &Coordinate) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lng = self.longitude - other.longitude;
        d_lat * d_lat + d_lng * d_lng
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
