//! Water oracle client.
//!
//! Submits candidate coordinates to a remote water/land classification
//! service and reports which of them are land.
//!
//! ```ignore
//! use shoreprobe::oracle::{OnWaterOracle, ReqwestClient, WaterOracle};
//!
//! let oracle = OnWaterOracle::new(ReqwestClient::new()?, token);
//! let land = oracle.classify(&candidates);
//! ```

mod http;
mod onwater;
mod types;

pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use onwater::{OnWaterOracle, DEFAULT_ENDPOINT};
pub use types::{OracleError, WaterOracle};

#[cfg(test)]
pub use http::tests::MockHttpClient;
