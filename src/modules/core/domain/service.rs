//! Root service configuration

use serde::{Deserialize, Serialize};

use super::{ServerConfig, StoreConfig};

/// Root configuration that represents a Roster configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Relational store holding the agents relation
    pub store: StoreConfig,

    /// Server configuration (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Service {
    /// Create a new service configuration with default server settings
    pub fn new(store: StoreConfig) -> Self {
        Self {
            store,
            server: None,
        }
    }

    /// Get the server port, defaulting to 8080
    pub fn port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(8080)
    }

    /// Get the log level, defaulting to 1 (INFO)
    pub fn log_level(&self) -> u8 {
        self.server
            .as_ref()
            .and_then(|s| s.log_level)
            .unwrap_or(1)
    }

    /// Override the configured port
    pub fn with_port(mut self, port: u16) -> Self {
        match self.server {
            Some(ref mut server) => server.port = Some(port),
            None => {
                self.server = Some(ServerConfig {
                    port: Some(port),
                    log_level: None,
                })
            }
        }
        self
    }
}
