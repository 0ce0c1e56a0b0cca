//! Water oracle traits and errors.

use serde::Deserialize;
use thiserror::Error;

use crate::geo::Coordinate;

/// Errors from a classification round.
///
/// These never escape a probe: the caller treats any of them as
/// "no land learned this cycle".
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OracleError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The request did not complete within the client timeout.
    #[error("classification request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("classification service returned HTTP {0}")]
    Status(u16),

    /// The response body was not a list of classifications.
    #[error("malformed classification response: {0}")]
    Parse(String),
}

/// A service that classifies coordinates as water or land.
pub trait WaterOracle: Send + Sync {
    /// Submit all points in one request and return the ones that are land.
    fn try_classify(&self, points: &[Coordinate]) -> Result<Vec<Coordinate>, OracleError>;

    /// Fail-soft variant of [`try_classify`](Self::try_classify).
    ///
    /// Any error is logged and reported as an empty result.
    fn classify(&self, points: &[Coordinate]) -> Vec<Coordinate> {
        self.try_classify(points).unwrap_or_else(|e| {
            tracing::warn!(error = %e, points = points.len(), "Water classification failed");
            Vec::new()
        })
    }
}

/// One entry of a classification response.
///
/// Every field is optional so that incomplete entries can be skipped
/// without rejecting the rest of the batch.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ClassificationEntry {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub water: Option<bool>,
}

impl ClassificationEntry {
    /// The coordinate of this entry if it is complete and classified as land.
    pub fn land_point(&self) -> Option<Coordinate> {
        match (self.lat, self.lon, self.water) {
            (Some(lat), Some(lon), Some(false)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }
}
