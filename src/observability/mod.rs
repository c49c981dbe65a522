//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and relay produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (request counters, latency histogram, degraded paths)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus scrape endpoint, when enabled
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to every handler log line
//! - Metric calls are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
