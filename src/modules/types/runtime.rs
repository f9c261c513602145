//! Runtime type definitions for response payloads

use serde::{Deserialize, Serialize};

/// A single store row, keyed by column name in the order the store returned them
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Service metadata returned by `/` and `/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub service: String,
    pub version: String,
    pub status: String,
    /// Row count over the whole relation, whatever the status
    pub agents_count: i64,
    pub endpoints: Vec<String>,
}

/// Paginated listing of active agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentListResponse {
    pub agents: Vec<Row>,
    pub count: usize,
    /// Effective limit after defaulting
    pub limit: i64,
    /// Effective offset after defaulting
    pub offset: i64,
}

impl AgentListResponse {
    pub fn new(agents: Vec<Row>, limit: i64, offset: i64) -> Self {
        Self {
            count: agents.len(),
            agents,
            limit,
            offset,
        }
    }
}

/// Active agents sharing a single type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsByTypeResponse {
    #[serde(rename = "type")]
    pub agent_type: String,
    pub agents: Vec<Row>,
    pub count: usize,
}

impl AgentsByTypeResponse {
    pub fn new(agent_type: impl Into<String>, agents: Vec<Row>) -> Self {
        Self {
            agent_type: agent_type.into(),
            count: agents.len(),
            agents,
        }
    }
}

/// Substring search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub agents: Vec<Row>,
    pub count: usize,
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, agents: Vec<Row>) -> Self {
        Self {
            query: query.into(),
            count: agents.len(),
            agents,
        }
    }
}

/// Per-type row count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub agent_type: Option<String>,
    pub count: i64,
}

/// Aggregate counts over every row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: i64,
    /// Ordered by count, largest group first
    pub by_type: Vec<TypeCount>,
}

/// Error body shared by every failing route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Only set for unmatched routes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorResponse {
    /// Create an error body with just a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            path: None,
        }
    }

    /// Create the error body for an unmatched route
    pub fn not_found(path: impl Into<String>) -> Self {
        Self {
            error: "Not found".to_string(),
            path: Some(path.into()),
        }
    }
}
