//! Probe telemetry for observability.
//!
//! Tracks how many coordinates were submitted to the water oracle and how
//! many of them paid off as new land points, using lock-free atomic
//! counters.
//!
//! ```text
//! ShoreProbeService ─────► ProbeTelemetry ─────► TelemetrySnapshot
//!                          (atomic counters)     (point-in-time copy)
//! ```

mod metrics;
mod snapshot;

pub use metrics::ProbeTelemetry;
pub use snapshot::TelemetrySnapshot;
