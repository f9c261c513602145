//! Store connector type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported relational store connector types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connector {
    /// SQLite database file (or in-memory database)
    Sqlite,
    /// PostgreSQL database
    Postgres,
    /// MySQL database
    Mysql,
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connector::Sqlite => write!(f, "sqlite"),
            Connector::Postgres => write!(f, "postgres"),
            Connector::Mysql => write!(f, "mysql"),
        }
    }
}

impl FromStr for Connector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Connector::Sqlite),
            "postgres" | "postgresql" => Ok(Connector::Postgres),
            "mysql" => Ok(Connector::Mysql),
            _ => Err(format!("Unknown connector type: {}", s)),
        }
    }
}

impl Connector {
    /// SQL function producing a random value for `ORDER BY`
    pub fn random_function(&self) -> &'static str {
        match self {
            Connector::Mysql => "RAND()",
            Connector::Sqlite | Connector::Postgres => "RANDOM()",
        }
    }

    /// Returns true if this connector expects numbered (`$1`) placeholders
    pub fn uses_numbered_placeholders(&self) -> bool {
        matches!(self, Connector::Postgres)
    }
}
