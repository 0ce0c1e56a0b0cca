//! Shore cache: land points learned from the water oracle.
//!
//! The cache grows for the lifetime of the process and answers proximity
//! queries against a live vessel position.
//!
//! # Query model
//!
//! Each query copies the stored points, orders the copy by squared planar
//! distance to the vessel and inspects only the first
//! [`DEFAULT_SCAN_LIMIT`] entries. From that window two independent results
//! are chosen:
//!
//! - **straightest**: the point whose bearing deviates least from the heading,
//!   if the deviation is below the alignment tolerance
//! - **shortest**: the point with the smallest great-circle distance
//!
//! ```
//! use shoreprobe::cache::ShoreCache;
//! use shoreprobe::geo::Coordinate;
//!
//! let cache = ShoreCache::new();
//! cache.insert(Coordinate::new(54.3241, 10.1230));
//! let metrics = cache.query(Coordinate::new(54.3233, 10.1228), 10.0);
//! assert_eq!(metrics.straightest.map(|s| s.relative_angle), Some(2));
//! assert!(metrics.shortest.is_some());
//! ```

mod store;
mod types;

pub use store::ShoreCache;
pub use types::{
    NearestShore, ShoreCacheConfig, ShoreMetrics, StraightShore, DEFAULT_ALIGNMENT_TOLERANCE_DEG,
    DEFAULT_SCAN_LIMIT,
};
