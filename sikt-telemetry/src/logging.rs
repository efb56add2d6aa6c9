//! ## sikt-telemetry::logging
//! **Structured logging with `tracing`**
//!
//! One-shot subscriber installation for binaries. Filtering follows
//! `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    pub fn init() {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_thread_names(true)
            .init()
    }

    pub fn log_processed(count: usize) {
        tracing::info!(count, "records processed");
    }
}
