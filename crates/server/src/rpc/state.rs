//! Shared state for RPC handlers.

use chroma_cycle::CycleManager;
use chroma_storage::StateStore;
use std::sync::Arc;
use std::time::Instant;

/// The cycle manager as shared between handlers.
///
/// The store is boxed so the server is independent of the backend chosen at
/// startup (file or memory).
pub type SharedCycleManager = Arc<CycleManager<Box<dyn StateStore>>>;

/// Shared state for RPC handlers.
#[derive(Clone)]
pub struct RpcState {
    /// Owner of the persisted cycle record.
    pub cycle: SharedCycleManager,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
    /// Whether `GET /metrics` is served.
    pub metrics_enabled: bool,
}

impl RpcState {
    /// Create state for a freshly started server.
    pub fn new(cycle: SharedCycleManager, metrics_enabled: bool) -> Self {
        Self {
            cycle,
            start_time: Instant::now(),
            metrics_enabled,
        }
    }
}
