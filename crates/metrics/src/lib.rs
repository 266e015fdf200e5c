//! Metrics facade for chroma.
//!
//! Provides a [`MetricsRecorder`] trait with domain-specific methods and default
//! no-op implementations. A global singleton recorder is accessed via [`recorder()`],
//! and convenience free functions delegate to it.
//!
//! # Usage
//!
//! Callers record metrics via free functions:
//! ```ignore
//! chroma_metrics::record_storage_read(latency_secs);
//! chroma_metrics::record_color_advanced();
//! ```
//!
//! At startup, install a backend:
//! ```ignore
//! chroma_metrics_prometheus::install();
//! ```
//!
//! Tests and binaries that never install a backend get the no-op recorder.

use std::sync::OnceLock;

// ═══════════════════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════════════════

/// How a state load was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A valid persisted record was used.
    Loaded,
    /// No record existed; a fresh cycle was synthesized.
    Absent,
    /// The record was unreadable or invalid; a fresh cycle was synthesized.
    Corrupt,
}

impl LoadOutcome {
    /// Label value used by metric backends.
    pub fn as_str(self) -> &'static str {
        match self {
            LoadOutcome::Loaded => "loaded",
            LoadOutcome::Absent => "absent",
            LoadOutcome::Corrupt => "corrupt",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Trait
// ═══════════════════════════════════════════════════════════════════════

/// Domain-specific metrics recording trait.
///
/// All methods have default no-op implementations so backends only need
/// to override the metrics they care about.
#[allow(unused_variables)]
pub trait MetricsRecorder: Send + Sync + 'static {
    // ── Storage ──────────────────────────────────────────────────────

    /// Record a state read latency.
    fn record_storage_read(&self, latency_secs: f64) {}

    /// Record a state write latency.
    fn record_storage_write(&self, latency_secs: f64) {}

    /// Record a failed state write.
    fn record_persist_failure(&self) {}

    // ── Cycle ────────────────────────────────────────────────────────

    /// Record how a state load was resolved.
    fn record_state_load(&self, outcome: LoadOutcome) {}

    /// Record a new permutation being started.
    fn record_cycle_started(&self) {}

    /// Record a color handed out by an advance.
    fn record_color_advanced(&self) {}

    /// Set the cursor position gauge.
    fn set_cycle_position(&self, index: usize) {}
}

// ═══════════════════════════════════════════════════════════════════════
// Global singleton
// ═══════════════════════════════════════════════════════════════════════

struct NoopRecorder;
impl MetricsRecorder for NoopRecorder {}

static RECORDER: OnceLock<Box<dyn MetricsRecorder>> = OnceLock::new();

/// Install a global metrics recorder.
///
/// Can only be called once. Subsequent calls are silently ignored.
pub fn set_global_recorder(recorder: Box<dyn MetricsRecorder>) {
    let _ = RECORDER.set(recorder);
}

/// Get the global metrics recorder.
///
/// Returns a no-op recorder if none has been installed.
#[inline]
pub fn recorder() -> &'static dyn MetricsRecorder {
    RECORDER.get().map(|r| r.as_ref()).unwrap_or(&NoopRecorder)
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience free functions
// ═══════════════════════════════════════════════════════════════════════

// ── Storage ──────────────────────────────────────────────────────────

/// Record a state read latency.
#[inline]
pub fn record_storage_read(latency_secs: f64) {
    recorder().record_storage_read(latency_secs);
}

/// Record a state write latency.
#[inline]
pub fn record_storage_write(latency_secs: f64) {
    recorder().record_storage_write(latency_secs);
}

/// Record a failed state write.
#[inline]
pub fn record_persist_failure() {
    recorder().record_persist_failure();
}

// ── Cycle ────────────────────────────────────────────────────────────

/// Record how a state load was resolved.
#[inline]
pub fn record_state_load(outcome: LoadOutcome) {
    recorder().record_state_load(outcome);
}

/// Record a new permutation being started.
#[inline]
pub fn record_cycle_started() {
    recorder().record_cycle_started();
}

/// Record a color handed out by an advance.
#[inline]
pub fn record_color_advanced() {
    recorder().record_color_advanced();
}

/// Set the cursor position gauge.
#[inline]
pub fn set_cycle_position(index: usize) {
    recorder().set_cycle_position(index);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_without_backend_are_noops() {
        record_storage_read(0.001);
        record_storage_write(0.002);
        record_persist_failure();
        record_state_load(LoadOutcome::Corrupt);
        record_cycle_started();
        record_color_advanced();
        set_cycle_position(3);
    }

    #[test]
    fn test_load_outcome_labels() {
        assert_eq!(LoadOutcome::Loaded.as_str(), "loaded");
        assert_eq!(LoadOutcome::Absent.as_str(), "absent");
        assert_eq!(LoadOutcome::Corrupt.as_str(), "corrupt");
    }
}
