//! PostgreSQL connector implementation

use async_trait::async_trait;
use roster_core::{PoolConfig, RosterError};
use roster_types::{Connector as ConnectorType, Row as JsonRow};
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgColumn, PgPool, PgPoolOptions, PgRow, Postgres};
use sqlx::query::Query;
use sqlx::{Column, Row, TypeInfo};

use super::query_failure;
use super::traits::{Connector, ConnectorResult, QueryParam};
use super::value::{float, int, or_null};

/// PostgreSQL database connector
pub struct PostgresConnector {
    pool: PgPool,
}

impl PostgresConnector {
    /// Create a new PostgreSQL connector with default pool settings
    pub async fn new(url: &str) -> Result<Self, RosterError> {
        Self::with_config(url, &PoolConfig::default()).await
    }

    /// Create a new PostgreSQL connector with custom pool settings
    pub async fn with_config(url: &str, config: &PoolConfig) -> Result<Self, RosterError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .max_lifetime(config.max_lifetime())
            .connect(url)
            .await
            .map_err(|e| RosterError::Database(format!("PostgreSQL connection failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Bind positional parameters in order
    fn bind_params<'q>(
        statement: &'q str,
        params: &[QueryParam],
    ) -> Query<'q, Postgres, PgArguments> {
        params
            .iter()
            .fold(sqlx::query(statement), |query, param| match param {
                QueryParam::Text(value) => query.bind(value.clone()),
                QueryParam::Int(value) => query.bind(*value),
            })
    }

    fn row_to_map(row: &PgRow) -> JsonRow {
        row.columns()
            .iter()
            .map(|column| (column.name().to_string(), Self::column_value(row, column)))
            .collect()
    }

    fn column_value(row: &PgRow, column: &PgColumn) -> Value {
        let idx = column.ordinal();

        match column.type_info().name() {
            "BOOL" => or_null(row.try_get::<bool, _>(idx), Value::Bool),
            "INT2" => or_null(row.try_get::<i16, _>(idx), int),
            "INT4" => or_null(row.try_get::<i32, _>(idx), int),
            "INT8" => or_null(row.try_get::<i64, _>(idx), int),
            "FLOAT4" => or_null(row.try_get::<f32, _>(idx), |v| float(v.into())),
            "FLOAT8" => or_null(row.try_get::<f64, _>(idx), float),
            "UUID" => or_null(row.try_get::<uuid::Uuid, _>(idx), |v| {
                Value::String(v.to_string())
            }),
            "TIMESTAMPTZ" => or_null(row.try_get::<chrono::DateTime<chrono::Utc>, _>(idx), |v| {
                Value::String(v.to_rfc3339())
            }),
            "TIMESTAMP" => or_null(row.try_get::<chrono::NaiveDateTime, _>(idx), |v| {
                Value::String(v.format("%Y-%m-%dT%H:%M:%S").to_string())
            }),
            "DATE" => or_null(row.try_get::<chrono::NaiveDate, _>(idx), |v| {
                Value::String(v.to_string())
            }),
            "JSON" | "JSONB" => row.try_get::<Value, _>(idx).unwrap_or(Value::Null),
            _ => or_null(row.try_get::<String, _>(idx), Value::String),
        }
    }
}

#[async_trait]
impl Connector for PostgresConnector {
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
            .map_err(|e| RosterError::Database(format!("PostgreSQL health check failed: {}", e)))?;
        Ok(())
    }

    fn connector_type(&self) -> ConnectorType {
        ConnectorType::Postgres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires a running PostgreSQL instance
    async fn test_postgres_connection() {
        let connector = PostgresConnector::new("postgres://localhost/agents").await;
        assert!(connector.is_ok());
    }
}
