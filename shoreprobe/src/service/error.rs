//! Service construction errors.

use thiserror::Error;

use crate::oracle::OracleError;

/// Errors that can occur while wiring up a shore probe service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No oracle access token was configured.
    #[error("Configuration error: oracle access token is not set")]
    MissingAccessToken,

    /// The oracle HTTP client could not be created.
    #[error("Failed to create oracle client: {0}")]
    OracleClient(#[from] OracleError),
}
