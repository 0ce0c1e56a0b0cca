//! Result types for shore proximity queries.

use serde::Serialize;

/// Default number of cached land points inspected per query.
pub const DEFAULT_SCAN_LIMIT: usize = 50;

/// Default half-width of the heading cone for the straightest shore, in degrees.
pub const DEFAULT_ALIGNMENT_TOLERANCE_DEG: f64 = 20.0;

/// Land point most closely aligned with the vessel heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StraightShore {
    /// Great-circle distance in whole meters.
    #[serde(rename = "dist")]
    pub distance: u32,
    /// Bearing from the vessel in whole degrees.
    pub bearing: u32,
    /// Absolute deviation from the heading in whole degrees.
    pub relative_angle: u32,
}

/// Land point closest to the vessel regardless of heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NearestShore {
    /// Great-circle distance in whole meters.
    #[serde(rename = "dist")]
    pub distance: u32,
    /// Bearing from the vessel in whole degrees.
    pub bearing: u32,
}

/// Nearest-shore metrics for a position and heading.
///
/// Both sub-results are selected independently from the same scan window,
/// so `shortest.distance <= straightest.distance` is not guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ShoreMetrics {
    /// Closest-to-heading land point within the alignment tolerance.
    #[serde(rename = "straight")]
    pub straightest: Option<StraightShore>,
    /// Closest land point within the scan window.
    pub shortest: Option<NearestShore>,
}

impl ShoreMetrics {
    /// Metrics with no shore data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Distance to the straight-ahead shore in meters, if known.
    pub fn straight_distance(&self) -> Option<u32> {
        self.straightest.map(|s| s.distance)
    }
}

/// Tuning for shore cache queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoreCacheConfig {
    /// Maximum land points inspected per query, nearest first.
    pub scan_limit: usize,
    /// Land points must deviate from the heading by less than this many degrees.
    pub alignment_tolerance_deg: f64,
}

impl Default for ShoreCacheConfig {
    fn default() -> Self {
        Self {
            scan_limit: DEFAULT_SCAN_LIMIT,
            alignment_tolerance_deg: DEFAULT_ALIGNMENT_TOLERANCE_DEG,
        }
    }
}

impl ShoreCacheConfig {
    /// Set the scan window size.
    pub fn with_scan_limit(mut self, scan_limit: usize) -> Self {
        self.scan_limit = scan_limit;
        self
    }

    /// Set the heading cone half-width.
    pub fn with_alignment_tolerance(mut self, degrees: f64) -> Self {
        self.alignment_tolerance_deg = degrees;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metrics_serialize_as_null() {
        let json = serde_json::to_value(ShoreMetrics::empty()).unwrap();
        assert_eq!(json, serde_json::json!({"straight": null, "shortest": null}));
    }

    #[test]
    fn test_metrics_wire_names() {
        let metrics = ShoreMetrics {
            straightest: Some(StraightShore {
                distance: 40,
                bearing: 10,
                relative_angle: 10,
            }),
            shortest: Some(NearestShore {
                distance: 35,
                bearing: 80,
            }),
        };
        let json = serde_json::to_value(metrics).unwrap();
        assert_eq!(json["straight"]["dist"], 40);
        assert_eq!(json["straight"]["relative_angle"], 10);
        assert_eq!(json["shortest"]["dist"], 35);
        assert_eq!(json["shortest"]["bearing"], 80);
        assert_eq!(metrics.straight_distance(), Some(40));
    }

    #[test]
    fn test_config_defaults_and_builder() {
        let config = ShoreCacheConfig::default();
        assert_eq!(config.scan_limit, 50);
        assert_eq!(config.alignment_tolerance_deg, 20.0);

        let config = config.with_scan_limit(10).with_alignment_tolerance(5.0);
        assert_eq!(config.scan_limit, 10);
        assert_eq!(config.alignment_tolerance_deg, 5.0);
    }
}
