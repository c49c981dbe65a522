//! Local HTTP relay for a browser frontend talking to a delivery-service API.
//!
//! The frontend posts a JSON envelope describing an upstream call to
//! `/api/proxy`; the relay reissues it with the session header attached and
//! hands back the upstream status and (gunzipped) body unchanged.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{ProxyEnvelope, Relay, RelayError, RelayResponse};
