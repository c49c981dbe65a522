//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → every subscriber's recv() completes
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → graceful shutdown of the HTTP server
//! ```
//!
//! # Design Decisions
//! - In-flight requests finish before the server returns
//! - Programmatic trigger and OS signals end up in the same path

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
