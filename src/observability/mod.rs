//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / http produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID recorded on every request span
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
