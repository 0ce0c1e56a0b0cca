//! HTTP client abstraction for testability

use std::sync::Arc;
use std::time::Duration;

use super::types::OracleError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP POST request with a JSON body.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    /// * `body` - JSON request body
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn post(&self, url: &str, body: String) -> Result<Vec<u8>, OracleError>;
}

impl<C: HttpClient + ?Sized> HttpClient for Arc<C> {
    fn post(&self, url: &str, body: String) -> Result<Vec<u8>, OracleError> {
        (**self).post(url, body)
    }
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with the default timeout.
    pub fn new() -> Result<Self, OracleError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, OracleError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| OracleError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn post(&self, url: &str, body: String) -> Result<Vec<u8>, OracleError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(map_transport_error)?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(OracleError::Status(response.status().as_u16()));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(map_transport_error)
    }
}

fn map_transport_error(e: reqwest::Error) -> OracleError {
    if e.is_timeout() {
        OracleError::Timeout
    } else {
        OracleError::Http(format!("Request failed: {}", e))
    }
}
