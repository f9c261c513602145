//! Store connectors for Roster
//!
//! This module provides async connectors for the relational stores that can
//! host the agents relation: SQLite, PostgreSQL and MySQL.

mod mysql;
mod postgres;
mod sqlite;
mod traits;
mod value;

pub use mysql::MySqlConnector;
pub use postgres::PostgresConnector;
pub use sqlite::SqliteConnector;
pub use traits::{Connector, ConnectorResult, QueryParam};

use roster_core::{RosterError, StoreConfig};
use roster_types::Connector as ConnectorType;
use std::sync::Arc;
use tracing::info;

/// Open a connector for the configured store and verify it answers
pub async fn connect(store: &StoreConfig) -> Result<Arc<dyn Connector>, RosterError> {
    let pool = store.pool();
    let connector: Arc<dyn Connector> = match store.connector {
        ConnectorType::Sqlite => Arc::new(SqliteConnector::with_config(&store.url, &pool).await?),
        ConnectorType::Postgres => {
            Arc::new(PostgresConnector::with_config(&store.url, &pool).await?)
        }
        ConnectorType::Mysql => Arc::new(MySqlConnector::with_config(&store.url, &pool).await?),
    };

    connector.health_check().await?;
    info!("Connected to {} store", connector.connector_type());

    Ok(connector)
}

/// Query failure carrying the store's own message, without driver framing
pub(crate) fn query_failure(e: sqlx::Error) -> RosterError {
    let message = match e.as_database_error() {
        Some(db) => db.message().to_string(),
        None => e.to_string(),
    };
    RosterError::QueryExecution(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_sqlite_memory() {
        let store = StoreConfig::new(ConnectorType::Sqlite, "sqlite::memory:");
        let connector = connect(&store).await.unwrap();
        assert_eq!(connector.connector_type(), ConnectorType::Sqlite);
    }

    #[tokio::test]
    async fn test_connect_unreachable_store() {
        let store = StoreConfig::new(
            ConnectorType::Sqlite,
            "sqlite:///nonexistent/dir/agents.db",
        );
        let result = connect(&store).await;
        assert!(matches!(result, Err(RosterError::Database(_))));
    }

    #[test]
    fn test_query_failure_without_database_error() {
        let err = query_failure(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RosterError::QueryExecution(_)));
        assert_eq!(err.message(), sqlx::Error::PoolTimedOut.to_string());
    }
}
