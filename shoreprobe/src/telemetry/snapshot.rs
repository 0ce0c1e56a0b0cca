//! Point-in-time telemetry snapshot.

use std::fmt;
use std::time::Duration;

/// An immutable copy of the probe counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TelemetrySnapshot {
    /// How long collection has been running
    pub uptime: Duration,
    /// Probe cycles run
    pub probes: u64,
    /// Coordinates submitted to the oracle
    pub points_submitted: u64,
    /// Land points newly added to the cache
    pub land_points_learned: u64,
    /// Failed classification rounds
    pub oracle_failures: u64,
}

impl TelemetrySnapshot {
    /// Fraction of submitted points that turned out to be new land (0.0 - 1.0).
    pub fn land_yield(&self) -> f64 {
        if self.points_submitted == 0 {
            0.0
        } else {
            self.land_points_learned as f64 / self.points_submitted as f64
        }
    }
}

impl fmt::Display for TelemetrySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} probes, {} points submitted, {} land learned ({:.1}%), {} failures",
            self.probes,
            self.points_submitted,
            self.land_points_learned,
            self.land_yield() * 100.0,
            self.oracle_failures
        )
    }
}
