//! The shore probe cycle.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::change::ChangeDetector;
use super::error::ServiceError;
use crate::cache::{ShoreCache, ShoreMetrics};
use crate::config::ProbeConfig;
use crate::geo::Coordinate;
use crate::oracle::{OnWaterOracle, ReqwestClient, WaterOracle};
use crate::planner::{ProbeBracket, ProbePlanner, DEFAULT_SHORE_DISTANCE_M};
use crate::telemetry::ProbeTelemetry;

/// Digital shore sensor: reports nearest-shore metrics and learns new land.
///
/// Each [`probe`](Self::probe) answers from the cache first and only then
/// submits new candidate points, so land learned in one cycle shows up in
/// the metrics of the next.
///
/// # Example
///
/// ```ignore
/// use shoreprobe::config::ProbeConfig;
/// use shoreprobe::geo::Coordinate;
/// use shoreprobe::service::ShoreProbeService;
///
/// let config = ProbeConfig::default().with_access_token("TOKEN");
/// let mut shore = ShoreProbeService::from_config("shore", &config)?;
///
/// let metrics = shore.probe(Coordinate::new(54.3233, 10.1228), 45.0, false);
/// if shore.has_changed() {
///     println!("{:?}", metrics.straightest);
/// }
/// ```
pub struct ShoreProbeService<O: WaterOracle> {
    name: String,
    cache: Arc<ShoreCache>,
    planner: ProbePlanner,
    oracle: O,
    default_shore_distance_m: f64,
    value: Option<ShoreMetrics>,
    changes: ChangeDetector<Option<ShoreMetrics>>,
    telemetry: Arc<ProbeTelemetry>,
}

impl<O: WaterOracle> ShoreProbeService<O> {
    /// Create a service over a shared cache and an oracle.
    pub fn new(name: impl Into<String>, cache: Arc<ShoreCache>, oracle: O) -> Self {
        Self {
            name: name.into(),
            cache,
            planner: ProbePlanner::new(),
            oracle,
            default_shore_distance_m: DEFAULT_SHORE_DISTANCE_M,
            value: None,
            changes: ChangeDetector::new(None),
            telemetry: Arc::new(ProbeTelemetry::new()),
        }
    }

    /// Set the straight-ahead distance assumed when no shore is known.
    pub fn with_default_shore_distance(mut self, meters: f64) -> Self {
        self.default_shore_distance_m = meters;
        self
    }

    /// Report into a shared telemetry instance.
    pub fn with_telemetry(mut self, telemetry: Arc<ProbeTelemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared land point cache.
    pub fn cache(&self) -> &Arc<ShoreCache> {
        &self.cache
    }

    pub fn telemetry(&self) -> &Arc<ProbeTelemetry> {
        &self.telemetry
    }

    /// The metrics most recently reported, if any.
    pub fn value(&self) -> Option<ShoreMetrics> {
        self.value
    }

    /// Compute metrics from the cache alone, without contacting the oracle.
    pub fn shore_distance(&mut self, position: Coordinate, bearing: f64) -> ShoreMetrics {
        let metrics = self.cache.query(position, bearing);
        self.value = Some(metrics);
        metrics
    }

    /// Run one probe cycle and return the metrics as they were before it.
    ///
    /// A failed classification round is logged and leaves the cache as is.
    pub fn probe(&mut self, position: Coordinate, bearing: f64, alternate: bool) -> ShoreMetrics {
        let metrics = self.shore_distance(position, bearing);

        let distance = metrics
            .straight_distance()
            .map(f64::from)
            .unwrap_or(self.default_shore_distance_m);
        let candidates = self.planner.plan(position, bearing, alternate, distance);

        debug!(
            sensor = %self.name,
            bracket = ProbeBracket::select(distance, alternate).name(),
            distance_m = distance,
            points = candidates.len(),
            "Submitting probe points"
        );
        self.telemetry.probe_submitted(candidates.len());

        let land = match self.oracle.try_classify(&candidates) {
            Ok(land) => land,
            Err(e) => {
                warn!(sensor = %self.name, error = %e, "Water classification failed");
                self.telemetry.oracle_failed();
                Vec::new()
            }
        };

        let learned = self.cache.extend(land);
        if learned > 0 {
            info!(
                sensor = %self.name,
                learned,
                cached = self.cache.len(),
                "Learned new land points"
            );
            self.telemetry.land_learned(learned);
        }

        metrics
    }

    /// [`probe`](Self::probe) taking raw latitude and longitude.
    pub fn probe_at(
        &mut self,
        latitude: f64,
        longitude: f64,
        bearing: f64,
        alternate: bool,
    ) -> ShoreMetrics {
        self.probe(Coordinate::new(latitude, longitude), bearing, alternate)
    }

    /// Whether the reported metrics differ from those seen at the last call.
    pub fn has_changed(&mut self) -> bool {
        self.changes.has_changed(&self.value)
    }
}

impl ShoreProbeService<OnWaterOracle<ReqwestClient>> {
    /// Build a service backed by the HTTP water oracle and a fresh cache.
    pub fn from_config(
        name: impl Into<String>,
        config: &ProbeConfig,
    ) -> Result<Self, ServiceError> {
        let token = config
            .oracle
            .access_token
            .clone()
            .ok_or(ServiceError::MissingAccessToken)?;

        let client = ReqwestClient::with_timeout(config.oracle.timeout_secs)?;
        let oracle = OnWaterOracle::with_endpoint(client, config.oracle.endpoint.clone(), token);
        let cache = Arc::new(ShoreCache::with_config(config.cache.clone()));

        Ok(Self::new(name, cache, oracle)
            .with_default_shore_distance(config.default_shore_distance_m))
    }
}
