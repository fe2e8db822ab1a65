//! Infrastructure for the Placepick client: HTTP transport and
//! configuration loading.

pub mod config;
pub mod http_transport;
pub mod paths;

pub use config::{ApiConfig, ClientConfig};
pub use http_transport::HttpTransport;
pub use paths::PlacepickPaths;
