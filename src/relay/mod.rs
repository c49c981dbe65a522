//! Request relay subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/proxy body
//!     → envelope.rs (decode ProxyEnvelope)
//!     → outbound.rs (method, URL, headers, body)
//!     → client.rs (execute with total timeout, collect body)
//!     → decode.rs (gzip removal, best-effort)
//!     → RelayResponse (upstream status + body)
//! ```
//!
//! # Design Decisions
//! - Stateless: each envelope is relayed independently, never retried
//! - Upstream status and payload are passed back verbatim
//! - Decoding failures degrade to a returned body, never an error

pub mod client;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod outbound;

pub use client::{Relay, RelayResponse};
pub use decode::{decode_body, DecodedBody, DegradedPath};
pub use envelope::ProxyEnvelope;
pub use error::{BuildError, RelayError, RelayResult};
pub use outbound::OutboundRequest;
