//! HTTP server for Roster

use axum::Router;
use roster_core::{RosterError, Service};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::connectors;
use crate::executor::QueryExecutor;
use crate::handlers::AgentsHandler;
use crate::state::AppState;

/// Build the Axum router
///
/// Every method and path lands in the dispatcher, which does its own
/// classification; there are no axum routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(AgentsHandler::dispatch)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Runtime server for Roster
pub struct Runtime {
    service: Service,
    executor: Arc<QueryExecutor>,
}

impl Runtime {
    /// Create a new runtime, connecting to the configured store
    pub async fn new(service: Service) -> Result<Self, RosterError> {
        let connector = connectors::connect(&service.store).await?;
        let executor = Arc::new(QueryExecutor::new(connector));

        Ok(Self { service, executor })
    }

    /// Create a new runtime with an optional port override
    pub async fn with_port_override(
        service: Service,
        port_override: Option<u16>,
    ) -> Result<Self, RosterError> {
        let service = match port_override {
            Some(port) => service.with_port(port),
            None => service,
        };
        Self::new(service).await
    }

    /// Start the server
    pub async fn run(&self) -> Result<(), RosterError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.service.port()));
        let app = router(AppState::new(self.executor.clone()));

        info!("Starting Roster server on http://{}", addr);
        info!("Store: {}", self.service.store.connector);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| RosterError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .map_err(|e| RosterError::Server(format!("Server error: {}", e)))?;

        info!("Server stopped");
        self.shutdown().await?;

        Ok(())
    }

    /// Wait for shutdown signal
    async fn shutdown_signal() {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                warn!("Failed to listen for CTRL+C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                debug!("Received CTRL+C, shutting down...");
            }
            _ = terminate => {
                debug!("Received SIGTERM, shutting down...");
            }
        }
    }

    /// Gracefully shutdown the runtime
    pub async fn shutdown(&self) -> Result<(), RosterError> {
        info!("Closing store connections...");
        if let Err(e) = self.executor.connector().close().await {
            warn!("Error closing store: {}", e);
        }
        info!("Shutdown complete");
        Ok(())
    }

    /// Get the service configuration
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Get the executor
    pub fn executor(&self) -> &QueryExecutor {
        &self.executor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::StoreConfig;
    use roster_types::Connector;

    fn memory_service() -> Service {
        Service::new(StoreConfig::new(Connector::Sqlite, "sqlite::memory:"))
    }

    #[tokio::test]
    async fn test_runtime_creation() {
        let runtime = Runtime::new(memory_service()).await.unwrap();
        assert_eq!(runtime.service().port(), 8080);
        assert_eq!(
            runtime.executor().connector().connector_type(),
            Connector::Sqlite
        );
    }

    #[tokio::test]
    async fn test_runtime_with_port_override() {
        let runtime = Runtime::with_port_override(memory_service(), Some(3000))
            .await
            .unwrap();
        assert_eq!(runtime.service().port(), 3000);
    }

    #[tokio::test]
    async fn test_runtime_unreachable_store() {
        let service = Service::new(StoreConfig::new(
            Connector::Sqlite,
            "sqlite:///nonexistent/dir/agents.db",
        ));
        assert!(Runtime::new(service).await.is_err());
    }

    #[tokio::test]
    async fn test_shutdown_closes_store() {
        let runtime = Runtime::new(memory_service()).await.unwrap();
        runtime.shutdown().await.unwrap();
        assert!(runtime.executor().connector().health_check().await.is_err());
    }
}
