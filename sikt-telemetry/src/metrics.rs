//! ## sikt-telemetry::metrics
//! **Prometheus counters for the record pipeline**

use prometheus::{Counter, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub records_appended: Counter,
    pub records_projected: Counter,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let records_appended = Counter::new(
            "sikt_records_appended_total",
            "Total records appended to accumulators",
        )
        .expect("valid counter definition");
        let records_projected = Counter::new(
            "sikt_records_projected_total",
            "Total records emitted by the filter-and-project routine",
        )
        .expect("valid counter definition");

        registry
            .register(Box::new(records_appended.clone()))
            .expect("fresh registry");
        registry
            .register(Box::new(records_projected.clone()))
            .expect("fresh registry");

        Self {
            registry,
            records_appended,
            records_projected,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_default())
    }

    pub fn inc_appended(&self, n: usize) {
        self.records_appended.inc_by(n as f64);
    }

    pub fn inc_projected(&self, n: usize) {
        self.records_projected.inc_by(n as f64);
    }
}
