//! HTTP service for the shuffled color cycle.
//!
//! Wires the [`CycleManager`] into an axum server:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      chroma-server                       │
//! │                                                          │
//! │  axum router (tokio)                                     │
//! │    GET  /api/state ──────┐                               │
//! │    POST /api/next-color ─┼─► spawn_blocking              │
//! │                          │     └─ CycleManager (mutex)   │
//! │    GET  /health          │          └─ StateStore        │
//! │    GET  /metrics         │               └─ db.json      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`rpc`]: routes, handlers and the server/handle pair
//! - [`config`]: TOML configuration with defaults
//! - [`telemetry`]: tracing subscriber setup
//!
//! [`CycleManager`]: chroma_cycle::CycleManager

pub mod config;
pub mod rpc;
pub mod telemetry;

pub use config::ServiceConfig;
pub use telemetry::init_logging;
