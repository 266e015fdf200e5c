//! Chroma Server
//!
//! HTTP service handing out colors from a shuffled 12-color cycle.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults (0.0.0.0:3000, ./db.json)
//! chroma-server
//!
//! # Start with configuration file
//! chroma-server --config chroma.toml
//!
//! # Override the state file and discard any stored cycle first
//! chroma-server --state-file /var/lib/chroma/db.json --reset
//! ```
//!
//! # Configuration
//!
//! See `ServiceConfig` for all configuration options. Example TOML:
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:3000"
//!
//! [storage]
//! state_file = "./db.json"
//!
//! [metrics]
//! enabled = true
//! ```

use anyhow::{Context, Result};
use chroma_cycle::CycleManager;
use chroma_server::rpc::{RpcServer, RpcServerConfig};
use chroma_server::{init_logging, ServiceConfig};
use chroma_storage::{JsonFileStore, MemoryStore, StateStore};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

/// Chroma Server
///
/// Serves the current color and hands out the next one from a shuffled cycle.
#[derive(Parser, Debug)]
#[command(name = "chroma-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:3000 (overrides config)
    #[arg(long)]
    listen_addr: Option<String>,

    /// Path to the JSON state file (overrides config)
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Fixed shuffle seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level filter (overrides RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Path to log file (redirects all logs to this file)
    #[arg(long)]
    logfile: Option<PathBuf>,

    /// Disable the /metrics endpoint
    #[arg(long)]
    no_metrics: bool,

    /// Clear the stored cycle state on startup
    #[arg(long)]
    reset: bool,

    /// Keep state in memory only
    #[arg(long)]
    ephemeral: bool,
}

/// Apply CLI overrides to the configuration.
fn apply_overrides(config: &mut ServiceConfig, cli: &Cli) {
    if let Some(ref listen_addr) = cli.listen_addr {
        config.server.listen_addr = listen_addr.clone();
    }

    if let Some(ref state_file) = cli.state_file {
        config.storage.state_file = state_file.clone();
    }

    if let Some(seed) = cli.seed {
        config.shuffle.seed = Some(seed);
    }

    if let Some(ref logfile) = cli.logfile {
        config.telemetry.log_file = Some(logfile.clone());
    }

    if cli.no_metrics {
        config.metrics.enabled = false;
    }

    if cli.ephemeral {
        config.storage.ephemeral = true;
    }
}

/// Resolve when Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging init) so the log file setting applies
    let mut config = match &cli.config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };
    apply_overrides(&mut config, &cli);

    let _log_guard = init_logging(&cli.log_level, config.telemetry.log_file.as_deref())?;

    info!("Chroma server starting...");

    if config.metrics.enabled {
        chroma_metrics_prometheus::install();
    }

    let store: Box<dyn StateStore> = if config.storage.ephemeral {
        warn!("Ephemeral mode: cycle state will not survive a restart");
        Box::new(MemoryStore::new())
    } else {
        info!(path = %config.storage.state_file.display(), "Using state file");
        Box::new(JsonFileStore::new(&config.storage.state_file))
    };

    let cycle = match config.shuffle.seed {
        Some(seed) => {
            info!(seed, "Using fixed shuffle seed");
            CycleManager::with_seed(store, seed)
        }
        None => CycleManager::new(store),
    };

    if cli.reset {
        cycle.reset().context("Failed to reset stored cycle state")?;
    }

    let rpc_config = RpcServerConfig {
        listen_addr: config.listen_addr()?,
        metrics_enabled: config.metrics.enabled,
    };
    let handle = RpcServer::new(rpc_config, Arc::new(cycle))
        .start()
        .await
        .context("Failed to start RPC server")?;

    info!(
        addr = %handle.local_addr(),
        "Chroma server started, press Ctrl+C to stop"
    );

    shutdown_signal().await;
    handle.abort();

    info!("Chroma server shutdown complete");
    Ok(())
}
