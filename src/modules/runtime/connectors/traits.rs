//! Connector trait definition

use async_trait::async_trait;
use roster_core::RosterError;
use roster_types::{Connector as ConnectorType, Row};

/// Result type for row set queries
pub type ConnectorResult = Vec<Row>;

/// A typed positional parameter bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Text(String),
    Int(i64),
}

impl From<&str> for QueryParam {
    fn from(value: &str) -> Self {
        QueryParam::Text(value.to_string())
    }
}

impl From<String> for QueryParam {
    fn from(value: String) -> Self {
        QueryParam::Text(value)
    }
}

impl From<i64> for QueryParam {
    fn from(value: i64) -> Self {
        QueryParam::Int(value)
    }
}

/// Trait for relational store connectors
///
/// Connectors only read: statements are prepared with positional placeholders,
/// parameters are bound in order, and rows come back as column-name maps.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Execute a statement and return every row
    async fn fetch_all(
        &self,
        statement: &str,
        params: &[QueryParam],
    ) -> Result<ConnectorResult, RosterError>;

    /// Execute a statement and return the first row, if any
    async fn fetch_optional(
        &self,
        statement: &str,
        params: &[QueryParam],
    ) -> Result<Option<Row>, RosterError>;

    /// Close the connection and release resources
    async fn close(&self) -> Result<(), RosterError>;

    /// Check if the connection is healthy
    async fn health_check(&self) -> Result<(), RosterError>;

    /// Get the connector type
    fn connector_type(&self) -> ConnectorType;
}
