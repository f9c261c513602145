//! Error types for Roster

use thiserror::Error;

/// Main error type for Roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Configuration file parsing error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store connection error
    #[error("Database error: {0}")]
    Database(String),

    /// Query execution error
    #[error("Query execution failed: {0}")]
    QueryExecution(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Environment variable not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
}

impl RosterError {
    /// Returns true if this error should be logged at error level
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            RosterError::Database(_)
                | RosterError::QueryExecution(_)
                | RosterError::Server(_)
        )
    }

    /// The underlying failure message, without the variant's label
    pub fn message(&self) -> String {
        match self {
            RosterError::Config(m)
            | RosterError::Validation(m)
            | RosterError::Database(m)
            | RosterError::QueryExecution(m)
            | RosterError::Server(m)
            | RosterError::EnvVarNotFound(m) => m.clone(),
            RosterError::Io(e) => e.to_string(),
            RosterError::Json(e) => e.to_string(),
        }
    }
}
