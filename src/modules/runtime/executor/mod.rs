//! Query execution module
//!
//! Binds request parameters to the fixed agent statements and runs them
//! against the configured store. Every method issues exactly one query.

mod statements;

pub use statements::{contains_pattern, number_placeholders, Statements};

use roster_core::agent::{ACTIVE_STATUS, SEARCH_LIMIT};
use roster_core::RosterError;
use roster_types::runtime::TypeCount;
use roster_types::Row;
use std::sync::Arc;

use crate::connectors::{Connector, ConnectorResult};

/// Query executor for the agents relation
pub struct QueryExecutor {
    connector: Arc<dyn Connector>,
    statements: Statements,
}

impl QueryExecutor {
    /// Create a new query executor, rendering statements for the connector's dialect
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        let statements = Statements::for_connector(connector.connector_type());
        Self {
            connector,
            statements,
        }
    }

    /// Row count over every agent, whatever the status
    pub async fn count_all(&self) -> Result<i64, RosterError> {
        let row = self
            .connector
            .fetch_optional(&self.statements.count_all, &[])
            .await?;
        Ok(row.as_ref().map(|r| int_column(r, "total")).unwrap_or(0))
    }

    /// Active agents ordered by name, one page at a time
    pub async fn list_active(&self, limit: i64, offset: i64) -> Result<ConnectorResult, RosterError> {
        self.connector
            .fetch_all(
                &self.statements.list_active,
                &[ACTIVE_STATUS.into(), limit.into(), offset.into()],
            )
            .await
    }

    /// Agent with exactly this id, whatever the status
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Row>, RosterError> {
        self.connector
            .fetch_optional(&self.statements.find_by_id, &[id.into()])
            .await
    }

    /// Active agents of one type ordered by name
    pub async fn list_by_type(&self, agent_type: &str) -> Result<ConnectorResult, RosterError> {
        self.connector
            .fetch_all(
                &self.statements.list_by_type,
                &[agent_type.into(), ACTIVE_STATUS.into()],
            )
            .await
    }

    /// One active agent picked at random
    pub async fn random_active(&self) -> Result<Option<Row>, RosterError> {
        self.connector
            .fetch_optional(&self.statements.random_active, &[ACTIVE_STATUS.into()])
            .await
    }

    /// Active agents whose name, type or capabilities contain `q`
    pub async fn search(&self, q: &str) -> Result<ConnectorResult, RosterError> {
        let pattern = contains_pattern(q);
        self.connector
            .fetch_all(
                &self.statements.search,
                &[
                    pattern.as_str().into(),
                    pattern.as_str().into(),
                    pattern.into(),
                    ACTIVE_STATUS.into(),
                    SEARCH_LIMIT.into(),
                ],
            )
            .await
    }

    /// Agent counts grouped by type, largest group first
    pub async fn count_by_type(&self) -> Result<Vec<TypeCount>, RosterError> {
        let rows = self
            .connector
            .fetch_all(&self.statements.count_by_type, &[])
            .await?;

        Ok(rows
            .iter()
            .map(|row| TypeCount {
                agent_type: row.get("type").and_then(|v| v.as_str()).map(String::from),
                count: int_column(row, "count"),
            })
            .collect())
    }

    /// Get the underlying connector
    pub fn connector(&self) -> &Arc<dyn Connector> {
        &self.connector
    }
}

/// Integer aggregate from a row; drivers differ on how they type `COUNT(*)`
fn int_column(row: &Row, column: &str) -> i64 {
    match row.get(column) {
        Some(serde_json::Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(serde_json::Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::SqliteConnector;
    use serde_json::json;

    async fn executor() -> QueryExecutor {
        let store = SqliteConnector::new("sqlite::memory:").await.unwrap();
        sqlx::query(
            "CREATE TABLE agents (id TEXT PRIMARY KEY, name TEXT, type TEXT, status TEXT, capabilities TEXT)",
        )
        .execute(store.pool())
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO agents VALUES
                ('agent-0001', 'Zeta', 'scout', 'active', 'mapping, recon'),
                ('agent-0002', 'Alpha', 'worker', 'active', 'lifting'),
                ('agent-0003', 'Mid', 'worker', 'retired', 'recon'),
                ('agent-0004', 'Beta', 'worker', 'active', 'welding')",
        )
        .execute(store.pool())
        .await
        .unwrap();
        QueryExecutor::new(Arc::new(store))
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r["id"].as_str().unwrap()).collect()
    }

    #[test]
    fn test_int_column() {
        let mut row = Row::new();
        row.insert("total".to_string(), json!(12));
        row.insert("text".to_string(), json!("7"));
        assert_eq!(int_column(&row, "total"), 12);
        assert_eq!(int_column(&row, "text"), 7);
        assert_eq!(int_column(&row, "missing"), 0);
    }

    #[tokio::test]
    async fn test_count_all_includes_inactive() {
        assert_eq!(executor().await.count_all().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_list_active_orders_by_name() {
        let rows = executor().await.list_active(50, 0).await.unwrap();
        assert_eq!(ids(&rows), vec!["agent-0002", "agent-0004", "agent-0001"]);
    }

    #[tokio::test]
    async fn test_find_by_id_ignores_status() {
        let row = executor().await.find_by_id("agent-0003").await.unwrap();
        assert_eq!(row.unwrap()["status"], json!("retired"));
    }

    #[tokio::test]
    async fn test_list_by_type_only_active() {
        let rows = executor().await.list_by_type("worker").await.unwrap();
        assert_eq!(ids(&rows), vec!["agent-0002", "agent-0004"]);
    }

    #[tokio::test]
    async fn test_search_matches_any_text_column() {
        let rows = executor().await.search("recon").await.unwrap();
        assert_eq!(ids(&rows), vec!["agent-0001"]);
    }

    #[tokio::test]
    async fn test_count_by_type() {
        let counts = executor().await.count_by_type().await.unwrap();
        assert_eq!(
            counts[0],
            TypeCount {
                agent_type: Some("worker".to_string()),
                count: 3
            }
        );
        assert_eq!(counts.iter().map(|c| c.count).sum::<i64>(), 4);
    }
}
