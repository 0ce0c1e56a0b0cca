//! Probe configuration.
//!
//! Settings can be built in code with the `with_*` setters or loaded from an
//! INI file:
//!
//! ```ini
//! [oracle]
//! endpoint = https://api.onwater.io/api/v1/results
//! access_token = YOUR_TOKEN
//! timeout = 10
//!
//! [probe]
//! default_distance = 100
//! scan_limit = 50
//! alignment_tolerance = 20
//! ```

mod file;
mod parser;
mod settings;

pub use file::ConfigFileError;
pub use settings::{OracleSettings, ProbeConfig};
