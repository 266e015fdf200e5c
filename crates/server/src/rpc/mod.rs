//! HTTP API for the color cycle.
//!
//! # Cycle
//!
//! - `GET /api/state` - Current color, cursor, and whether the cycle is complete
//! - `POST /api/next-color` - Hand out the next color and persist the advance
//!   (500 if the state cannot be saved)
//!
//! # Health & Observability
//!
//! - `GET /health` - Liveness probe (always returns 200 if server running)
//! - `GET /metrics` - Prometheus metrics in text format (when enabled)
//!
//! # Example
//!
//! ```ignore
//! let cycle = Arc::new(CycleManager::new(Box::new(JsonFileStore::new("db.json")) as _));
//! let config = RpcServerConfig {
//!     listen_addr: "0.0.0.0:3000".parse()?,
//!     metrics_enabled: true,
//! };
//! let server = RpcServer::new(config, cycle);
//! server.serve().await?;
//! ```

mod handlers;
mod routes;
mod server;
mod state;
mod types;

pub use routes::create_router;
pub use server::{RpcServer, RpcServerConfig, RpcServerError, RpcServerHandle};
pub use state::{RpcState, SharedCycleManager};
pub use types::*;
