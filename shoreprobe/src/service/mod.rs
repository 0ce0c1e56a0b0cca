//! Shore probe service.
//!
//! Ties the cache, planner and oracle together into one probe cycle:
//!
//! ```text
//! (position, bearing, alternate)
//!        │
//!        ▼
//!   ShoreCache::query ──► metrics (returned to caller)
//!        │
//!        ▼
//!   ProbePlanner::plan ──► 3 candidates ──► WaterOracle ──► land points
//!                                                              │
//!                                            ShoreCache::insert ◄┘
//! ```

mod change;
mod error;
mod probe;

pub use change::ChangeDetector;
pub use error::ServiceError;
pub use probe::ShoreProbeService;
