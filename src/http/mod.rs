//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID + trace layers)
//!     → handlers.rs (/api/health, /api/proxy; anything else → ServeDir)
//!     → [relay executes the upstream call]
//!     → response.rs (status + body, or plain-text error)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRelayRequestId, RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
