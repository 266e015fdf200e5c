//! Service configuration.
//!
//! Loaded from an optional TOML file; every section and key has a default,
//! so an empty file (or no file) yields a working local setup:
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:3000"
//!
//! [storage]
//! state_file = "./db.json"
//! ephemeral = false
//!
//! [shuffle]
//! seed = 42
//!
//! [metrics]
//! enabled = true
//!
//! [telemetry]
//! log_file = "./chroma.log"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// State record location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Shuffle source configuration
    #[serde(default)]
    pub shuffle: ShuffleConfig,

    /// Metrics configuration
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

/// State record configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON state file
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    /// Keep state in memory only (lost on restart)
    #[serde(default)]
    pub ephemeral: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            ephemeral: false,
        }
    }
}

fn default_state_file() -> PathBuf {
    PathBuf::from("./db.json")
}

/// Shuffle source configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShuffleConfig {
    /// Fixed RNG seed for reproducible permutations (OS entropy when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Metrics configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Serve Prometheus metrics on `GET /metrics`
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
        }
    }
}

fn default_metrics_enabled() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetryConfig {
    /// Optional log file path. If provided, logs are written to this file.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse the configured listen address.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.server
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address: {}", self.server.listen_addr))
    }
}
