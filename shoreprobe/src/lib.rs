//! Shoreprobe - nearest-shoreline awareness for a moving vessel
//!
//! Given the vessel's position and heading, this library reports the
//! distance and bearing to the nearest known shore. Land is discovered by
//! submitting a few candidate points ahead of the vessel to a remote
//! water/land classification service each cycle; every land point found is
//! kept in an in-memory cache so later cycles can answer locally.
//!
//! # Modules
//!
//! - [`geo`] - bearing, distance and destination on a spherical Earth
//! - [`cache`] - append-only land point cache and proximity queries
//! - [`planner`] - adaptive choice of probe points
//! - [`oracle`] - batched water/land classification client
//! - [`service`] - the probe cycle and change detection
//! - [`config`], [`logging`], [`telemetry`] - ambient support

pub mod cache;
pub mod config;
pub mod geo;
pub mod logging;
pub mod oracle;
pub mod planner;
pub mod service;
pub mod telemetry;

pub use cache::{ShoreCache, ShoreMetrics};
pub use geo::Coordinate;
pub use service::ShoreProbeService;
