//! Prometheus metrics backend for chroma.
//!
//! Implements [`chroma_metrics::MetricsRecorder`] using native Prometheus
//! counters, gauges, and histograms.
//!
//! # Usage
//!
//! Call [`install()`] once at startup before any metrics are recorded:
//! ```ignore
//! chroma_metrics_prometheus::install();
//! ```

use chroma_metrics::{LoadOutcome, MetricsRecorder};
use prometheus::{
    register_counter, register_counter_vec, register_gauge, register_gauge_vec,
    register_histogram, Counter, CounterVec, Gauge, GaugeVec, Histogram,
};

/// Domain-specific Prometheus metrics for the color-cycle service.
pub struct Metrics {
    pub build_info: GaugeVec,

    // === Cycle ===
    pub state_loads: CounterVec,
    pub cycles_started: Counter,
    pub colors_advanced: Counter,
    pub cycle_position: Gauge,

    // === Storage ===
    pub storage_read_latency: Histogram,
    pub storage_write_latency: Histogram,
    pub persist_failures: Counter,
}

impl Metrics {
    fn new() -> Self {
        let io_buckets = vec![
            0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0,
        ];

        let build_info = register_gauge_vec!(
            "chroma_build_info",
            "Service build information",
            &["version"]
        )
        .expect("register chroma_build_info");
        build_info
            .with_label_values(&[env!("CARGO_PKG_VERSION")])
            .set(1.0);

        Self {
            build_info,

            // Cycle
            state_loads: register_counter_vec!(
                "chroma_state_loads_total",
                "State loads by outcome (loaded, absent, corrupt)",
                &["outcome"]
            )
            .expect("register chroma_state_loads_total"),

            cycles_started: register_counter!(
                "chroma_cycles_started_total",
                "Fresh permutations started by an advance"
            )
            .expect("register chroma_cycles_started_total"),

            colors_advanced: register_counter!(
                "chroma_colors_advanced_total",
                "Colors handed out by the next-color endpoint"
            )
            .expect("register chroma_colors_advanced_total"),

            cycle_position: register_gauge!(
                "chroma_cycle_position",
                "Cursor position within the current permutation"
            )
            .expect("register chroma_cycle_position"),

            // Storage
            storage_read_latency: register_histogram!(
                "chroma_storage_read_latency_seconds",
                "State record read latency",
                io_buckets.clone()
            )
            .expect("register chroma_storage_read_latency_seconds"),

            storage_write_latency: register_histogram!(
                "chroma_storage_write_latency_seconds",
                "State record write latency",
                io_buckets
            )
            .expect("register chroma_storage_write_latency_seconds"),

            persist_failures: register_counter!(
                "chroma_persist_failures_total",
                "Failed state record writes"
            )
            .expect("register chroma_persist_failures_total"),
        }
    }
}

/// Prometheus-backed [`MetricsRecorder`].
pub struct PrometheusRecorder {
    metrics: Metrics,
}

impl PrometheusRecorder {
    fn new() -> Self {
        Self {
            metrics: Metrics::new(),
        }
    }
}

impl MetricsRecorder for PrometheusRecorder {
    // ── Storage ──────────────────────────────────────────────────────

    fn record_storage_read(&self, latency_secs: f64) {
        self.metrics.storage_read_latency.observe(latency_secs);
    }

    fn record_storage_write(&self, latency_secs: f64) {
        self.metrics.storage_write_latency.observe(latency_secs);
    }

    fn record_persist_failure(&self) {
        self.metrics.persist_failures.inc();
    }

    // ── Cycle ────────────────────────────────────────────────────────

    fn record_state_load(&self, outcome: LoadOutcome) {
        self.metrics
            .state_loads
            .with_label_values(&[outcome.as_str()])
            .inc();
    }

    fn record_cycle_started(&self) {
        self.metrics.cycles_started.inc();
    }

    fn record_color_advanced(&self) {
        self.metrics.colors_advanced.inc();
    }

    fn set_cycle_position(&self, index: usize) {
        self.metrics.cycle_position.set(index as f64);
    }
}

/// Install the Prometheus metrics recorder as the global backend.
///
/// Idempotent — safe to call multiple times (e.g., in tests). Only the
/// first call creates and registers the Prometheus metrics.
pub fn install() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        chroma_metrics::set_global_recorder(Box::new(PrometheusRecorder::new()));
    });
}

/// Gather and encode all registered Prometheus metrics as text format.
///
/// Returns `(content_type, encoded_body)` suitable for an HTTP response.
pub fn encode_metrics() -> Result<(String, Vec<u8>), String> {
    use prometheus::{Encoder, TextEncoder};
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let content_type = encoder.format_type().to_string();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| format!("{e}"))?;
    Ok((content_type, buffer))
}
