//! Lock-free atomic probe counters.

use super::TelemetrySnapshot;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Lock-free counters for the probe loop.
///
/// All operations use `Relaxed` ordering; the counters are independent
/// measurements.
#[derive(Debug)]
pub struct ProbeTelemetry {
    /// When collection started
    start_time: Instant,
    /// Probe cycles run
    probes: AtomicU64,
    /// Coordinates submitted to the oracle (the billed quantity)
    points_submitted: AtomicU64,
    /// Land points newly added to the cache
    land_points_learned: AtomicU64,
    /// Classification rounds that yielded nothing due to an error
    oracle_failures: AtomicU64,
}

impl Default for ProbeTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeTelemetry {
    /// Creates a new telemetry instance.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            probes: AtomicU64::new(0),
            points_submitted: AtomicU64::new(0),
            land_points_learned: AtomicU64::new(0),
            oracle_failures: AtomicU64::new(0),
        }
    }

    /// Record a probe cycle and the number of points it submitted.
    pub fn probe_submitted(&self, points: usize) {
        self.probes.fetch_add(1, Ordering::Relaxed);
        self.points_submitted
            .fetch_add(points as u64, Ordering::Relaxed);
    }

    /// Record land points newly added to the cache.
    pub fn land_learned(&self, count: usize) {
        self.land_points_learned
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record a failed classification round.
    pub fn oracle_failed(&self) {
        self.oracle_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            uptime: self.start_time.elapsed(),
            probes: self.probes.load(Ordering::Relaxed),
            points_submitted: self.points_submitted.load(Ordering::Relaxed),
            land_points_learned: self.land_points_learned.load(Ordering::Relaxed),
            oracle_failures: self.oracle_failures.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_counters_start_at_zero() {
        let snapshot = ProbeTelemetry::new().snapshot();
        assert_eq!(snapshot.probes, 0);
        assert_eq!(snapshot.points_submitted, 0);
        assert_eq!(snapshot.land_points_learned, 0);
        assert_eq!(snapshot.oracle_failures, 0);
    }

    #[test]
    fn test_counters_accumulate() {
        let telemetry = ProbeTelemetry::new();
        telemetry.probe_submitted(3);
        telemetry.probe_submitted(3);
        telemetry.land_learned(2);
        telemetry.oracle_failed();

        let snapshot = telemetry.snapshot();
        assert_eq!(snapshot.probes, 2);
        assert_eq!(snapshot.points_submitted, 6);
        assert_eq!(snapshot.land_points_learned, 2);
        assert_eq!(snapshot.oracle_failures, 1);
    }

    #[test]
    fn test_concurrent_updates() {
        let telemetry = Arc::new(ProbeTelemetry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let telemetry = Arc::clone(&telemetry);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        telemetry.probe_submitted(3);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(telemetry.snapshot().points_submitted, 2400);
    }
}
