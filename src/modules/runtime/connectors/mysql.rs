//! MySQL connector implementation

use async_trait::async_trait;
use roster_core::{PoolConfig, RosterError};
use roster_types::{Connector as ConnectorType, Row as JsonRow};
use serde_json::Value;
use sqlx::mysql::{MySql, MySqlArguments, MySqlColumn, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, Row, TypeInfo};

use super::query_failure;
use super::traits::{Connector, ConnectorResult, QueryParam};
use super::value::{float, int, or_null};

/// MySQL database connector
pub struct MySqlConnector {
    pool: MySqlPool,
}

impl MySqlConnector {
    /// Create a new MySQL connector with default pool settings
    pub async fn new(url: &str) -> Result<Self, RosterError> {
        Self::with_config(url, &PoolConfig::default()).await
    }

    /// Create a new MySQL connector with custom pool settings
    pub async fn with_config(url: &str, config: &PoolConfig) -> Result<Self, RosterError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .max_lifetime(config.max_lifetime())
            .connect(url)
            .await
            .map_err(|e| RosterError::Database(format!("MySQL connection failed: {}", e)))?;

        Ok(Self { pool })
    }

    fn bind_params<'q>(
        statement: &'q str,
        params: &[QueryParam],
    ) -> Query<'q, MySql, MySqlArguments> {
        params
            .iter()
            .fold(sqlx::query(statement), |query, param| match param {
                QueryParam::Text(value) => query.bind(value.clone()),
                QueryParam::Int(value) => query.bind(*value),
            })
    }

    fn row_to_map(row: &MySqlRow) -> JsonRow {
        row.columns()
            .iter()
            .map(|column| (column.name().to_string(), Self::column_value(row, column)))
            .collect()
    }

    fn column_value(row: &MySqlRow, column: &MySqlColumn) -> Value {
        let idx = column.ordinal();

        match column.type_info().name() {
            "BOOLEAN" => or_null(row.try_get::<bool, _>(idx), Value::Bool),
            "TINYINT" | "SMALLINT" => or_null(row.try_get::<i16, _>(idx), int),
            "INT" | "MEDIUMINT" => or_null(row.try_get::<i32, _>(idx), int),
            "BIGINT" => or_null(row.try_get::<i64, _>(idx), int),
            "FLOAT" => or_null(row.try_get::<f32, _>(idx), |v| float(v.into())),
            "DOUBLE" => or_null(row.try_get::<f64, _>(idx), float),
            "DATETIME" | "TIMESTAMP" => or_null(row.try_get::<chrono::NaiveDateTime, _>(idx), |v| {
                Value::String(v.format("%Y-%m-%dT%H:%M:%S").to_string())
            }),
            "DATE" => or_null(row.try_get::<chrono::NaiveDate, _>(idx), |v| {
                Value::String(v.to_string())
            }),
            "JSON" => row.try_get::<Value, _>(idx).unwrap_or(Value::Null),
            _ => or_null(row.try_get::<String, _>(idx), Value::String),
        }
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    async fn fetch_all(
        &self,
        statement: &str,
        params: &[QueryParam],
    ) -> Result<ConnectorResult, RosterError> {
        let rows = Self::bind_params(statement, params)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failure)?;

        Ok(rows.iter().map(Self::row_to_map).collect())
    }

    async fn fetch_optional(
        &self,
        statement: &str,
        params: &[QueryParam],
    ) -> Result<Option<JsonRow>, RosterError> {
        let row = Self::bind_params(statement, params)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failure)?;

        Ok(row.as_ref().map(Self::row_to_map))
    }

    async fn close(&self) -> Result<(), RosterError> {
        self.pool.close().await;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), RosterError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RosterError::Database(format!("MySQL health check failed: {}", e)))?;
        Ok(())
    }

    fn connector_type(&self) -> ConnectorType {
        ConnectorType::Mysql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires a running MySQL instance
    async fn test_mysql_connection() {
        let connector = MySqlConnector::new("mysql://localhost/agents").await;
        assert!(connector.is_ok());
    }
}
