//! Configuration structs and their defaults.

use crate::cache::ShoreCacheConfig;
use crate::oracle::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::planner::DEFAULT_SHORE_DISTANCE_M;

/// Top-level configuration for a shore probe.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    /// Water oracle connection settings.
    pub oracle: OracleSettings,
    /// Shore cache query tuning.
    pub cache: ShoreCacheConfig,
    /// Straight-ahead distance assumed when no shore is known, in meters.
    pub default_shore_distance_m: f64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            oracle: OracleSettings::default(),
            cache: ShoreCacheConfig::default(),
            default_shore_distance_m: DEFAULT_SHORE_DISTANCE_M,
        }
    }
}

impl ProbeConfig {
    /// Set the oracle access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.oracle.access_token = Some(token.into());
        self
    }

    /// Set the oracle endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.oracle.endpoint = endpoint.into();
        self
    }

    /// Set the oracle request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.oracle.timeout_secs = secs;
        self
    }

    /// Set the shore cache query tuning.
    pub fn with_cache(mut self, cache: ShoreCacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Set the assumed straight-ahead distance.
    pub fn with_default_shore_distance(mut self, meters: f64) -> Self {
        self.default_shore_distance_m = meters;
        self
    }
}

/// Water oracle connection settings.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleSettings {
    /// Classification endpoint URL.
    pub endpoint: String,
    /// Access credential appended to each request.
    pub access_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
