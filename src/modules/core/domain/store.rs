//! Relational store configuration

use roster_types::Connector;
use serde::{Deserialize, Serialize};

use super::PoolConfig;

/// Relational store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store connector type
    pub connector: Connector,

    /// Connection URL (supports environment variable substitution)
    pub url: String,

    /// Connection pool configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolConfig>,
}

impl StoreConfig {
    /// Create a new store configuration with default pool settings
    pub fn new(connector: Connector, url: impl Into<String>) -> Self {
        Self {
            connector,
            url: url.into(),
            pool: None,
        }
    }

    /// Pool settings, falling back to defaults
    pub fn pool(&self) -> PoolConfig {
        self.pool.clone().unwrap_or_default()
    }
}
