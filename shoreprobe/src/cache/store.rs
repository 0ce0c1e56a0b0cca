//! Append-only store of classified land points.

use parking_lot::RwLock;

use super::types::{NearestShore, ShoreCacheConfig, ShoreMetrics, StraightShore};
use crate::geo::{bearing, distance, relative_angle, Coordinate};

/// Land points discovered during a mission.
///
/// The store only grows: points are never evicted or rewritten. Writers take
/// a short exclusive lock to append; queries copy the points out under a read
/// lock and do all sorting on that copy.
#[derive(Debug, Default)]
pub struct ShoreCache {
    points: RwLock<Vec<Coordinate>>,
    config: ShoreCacheConfig,
}

impl ShoreCache {
    /// Create an empty cache with default query tuning.
    pub fn new() -> Self {
        Self::with_config(ShoreCacheConfig::default())
    }

    /// Create an empty cache with custom query tuning.
    pub fn with_config(config: ShoreCacheConfig) -> Self {
        Self {
            points: RwLock::new(Vec::new()),
            config,
        }
    }

    /// Query tuning in effect.
    pub fn config(&self) -> &ShoreCacheConfig {
        &self.config
    }

    /// Append a land point unless an identical coordinate is already stored.
    ///
    /// Returns `true` if the point was appended.
    pub fn insert(&self, point: Coordinate) -> bool {
        let mut points = self.points.write();
        if points.contains(&point) {
            return false;
        }
        points.push(point);
        true
    }

    /// Insert several points, returning how many were new.
    pub fn extend<I>(&self, points: I) -> usize
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut added = 0;
        for point in points {
            if self.insert(point) {
                added += 1;
            }
        }
        added
    }

    /// Number of land points stored.
    pub fn len(&self) -> usize {
        self.points.read().len()
    }

    /// Whether no land points are stored yet.
    pub fn is_empty(&self) -> bool {
        self.points.read().is_empty()
    }

    /// Copy of all stored points in insertion order.
    pub fn snapshot(&self) -> Vec<Coordinate> {
        self.points.read().clone()
    }

    /// The land points a query at `position` would inspect, nearest first.
    ///
    /// Ordering uses squared planar distance in degrees, not geodesic
    /// distance, and the window is capped at the configured scan limit.
    pub fn scan_window(&self, position: Coordinate) -> Vec<Coordinate> {
        let mut window = self.snapshot();
        window.sort_by(|a, b| {
            a.planar_distance_sq(&position)
                .total_cmp(&b.planar_distance_sq(&position))
        });
        window.truncate(self.config.scan_limit);
        window
    }

    /// Compute nearest-shore metrics for a position and heading.
    pub fn query(&self, position: Coordinate, heading: f64) -> ShoreMetrics {
        let mut smallest_deviation = f64::INFINITY;
        let mut straightest = None;
        let mut shortest: Option<(f64, f64)> = None;

        for point in self.scan_window(position) {
            let d = distance(position, point);
            let b = bearing(position, point);
            let deviation = relative_angle(b, heading).round().abs();

            if deviation < smallest_deviation && deviation < self.config.alignment_tolerance_deg {
                smallest_deviation = deviation;
                straightest = Some(StraightShore {
                    distance: whole_meters(d),
                    bearing: whole_degrees(b),
                    relative_angle: deviation as u32,
                });
            }

            if shortest.map_or(true, |(shortest_d, _)| d < shortest_d) {
                shortest = Some((d, b));
            }
        }

        ShoreMetrics {
            straightest,
            shortest: shortest.map(|(d, b)| NearestShore {
                distance: whole_meters(d),
                bearing: whole_degrees(b),
            }),
        }
    }
}

#[inline]
fn whole_meters(meters: f64) -> u32 {
    meters.round() as u32
}

#[inline]
fn whole_degrees(degrees: f64) -> u32 {
    (degrees.round() as u32) % 360
}
