//! RPC server implementation.

use super::routes::create_router;
use super::state::{RpcState, SharedCycleManager};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors from the RPC server.
#[derive(Debug, Error)]
pub enum RpcServerError {
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

/// Configuration for the RPC server.
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    /// Address to listen on.
    pub listen_addr: SocketAddr,
    /// Enable metrics endpoint.
    pub metrics_enabled: bool,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            metrics_enabled: true,
        }
    }
}

/// Handle for controlling a running RPC server.
pub struct RpcServerHandle {
    /// Task handle for the server.
    task: JoinHandle<()>,
    /// Address actually bound (resolves port 0).
    local_addr: SocketAddr,
}

impl RpcServerHandle {
    /// The bound address.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Abort the server.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Wait for the server to finish.
    pub async fn join(self) -> Result<(), tokio::task::JoinError> {
        self.task.await
    }
}

/// HTTP server for the color cycle API.
pub struct RpcServer {
    config: RpcServerConfig,
    state: RpcState,
}

impl RpcServer {
    /// Create a new RPC server around a shared cycle manager.
    pub fn new(config: RpcServerConfig, cycle: SharedCycleManager) -> Self {
        let state = RpcState::new(cycle, config.metrics_enabled);
        Self { config, state }
    }

    /// Start the server and return a handle for control.
    pub async fn start(self) -> Result<RpcServerHandle, RpcServerError> {
        let router = create_router(self.state);

        let listener = tokio::net::TcpListener::bind(self.config.listen_addr).await?;
        let local_addr = listener.local_addr()?;
        info!(addr = %local_addr, "RPC server listening");

        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                error!(error = ?e, "RPC server error");
            }
        });

        Ok(RpcServerHandle { task, local_addr })
    }

    /// Start and serve until shutdown (convenience method).
    pub async fn serve(self) -> Result<(), RpcServerError> {
        let handle = self.start().await?;
        let _ = handle.join().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_cycle::CycleManager;
    use chroma_storage::{MemoryStore, StateStore};
    use std::sync::Arc;

    fn test_cycle() -> SharedCycleManager {
        let store: Box<dyn StateStore> = Box::new(MemoryStore::new());
        Arc::new(CycleManager::with_seed(store, 1))
    }

    #[test]
    fn test_default_config() {
        let config = RpcServerConfig::default();
        assert_eq!(config.listen_addr.port(), 3000);
        assert!(config.metrics_enabled);
    }

    #[tokio::test]
    async fn test_server_start_on_ephemeral_port() {
        let config = RpcServerConfig {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            metrics_enabled: false,
        };
        let handle = RpcServer::new(config, test_cycle()).start().await.unwrap();

        assert_ne!(handle.local_addr().port(), 0);
        handle.abort();
        assert!(handle.join().await.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_server_bind_conflict() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let taken = listener.local_addr().unwrap();

        let config = RpcServerConfig {
            listen_addr: taken,
            metrics_enabled: false,
        };
        let result = RpcServer::new(config, test_cycle()).start().await;
        assert!(matches!(result, Err(RpcServerError::BindError(_))));
    }
}
