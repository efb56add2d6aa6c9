//! # sikt-telemetry
//!
//! Observability support for the sikt toolkit: structured logging
//! bootstrap and process-local metrics.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
