//! SQLite connector implementation

use async_trait::async_trait;
use roster_core::{PoolConfig, RosterError};
use roster_types::{Connector as ConnectorType, Row as JsonRow};
use serde_json::Value;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteColumn, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};
use tracing::debug;

use super::query_failure;
use super::traits::{Connector, ConnectorResult, QueryParam};
use super::value::{float, int, or_null};

/// SQLite database connector
pub struct SqliteConnector {
    pool: SqlitePool,
}

impl SqliteConnector {
    /// Create a new SQLite connector with default pool settings
    pub async fn new(url: &str) -> Result<Self, RosterError> {
        Self::with_config(url, &PoolConfig::default()).await
    }

    /// Create a new SQLite connector with custom pool settings
    ///
    /// In-memory databases live and die with their connection, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn with_config(url: &str, config: &PoolConfig) -> Result<Self, RosterError> {
        let options = if Self::is_memory(url) {
            debug!("In-memory SQLite store, pinning pool to one connection");
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .acquire_timeout(config.acquire_timeout())
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections())
                .min_connections(config.min_connections())
                .acquire_timeout(config.acquire_timeout())
                .idle_timeout(config.idle_timeout())
                .max_lifetime(config.max_lifetime())
        };

        let pool = options
            .connect(url)
            .await
            .map_err(|e| RosterError::Database(format!("SQLite connection failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Underlying pool, for provisioning outside the read path
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn is_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    fn bind_params<'q>(
        statement: &'q str,
        params: &[QueryParam],
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        params
            .iter()
            .fold(sqlx::query(statement), |query, param| match param {
                QueryParam::Text(value) => query.bind(value.clone()),
                QueryParam::Int(value) => query.bind(*value),
            })
    }

    fn row_to_map(row: &SqliteRow) -> JsonRow {
        row.columns()
            .iter()
            .map(|column| (column.name().to_string(), Self::column_value(row, column)))
            .collect()
    }

    /// SQLite is dynamically typed: declared types are only a hint, so anything
    /// that does not decode as declared falls through to the storage classes.
    /// NULL is checked up front since typed decoding turns it into a zero value.
    fn column_value(row: &SqliteRow, column: &SqliteColumn) -> Value {
        let idx = column.ordinal();

        match row.try_get_raw(idx) {
            Ok(raw) if !raw.is_null() => {}
            _ => return Value::Null,
        }

        let declared = match column.type_info().name() {
            "BOOLEAN" => or_null(row.try_get::<bool, _>(idx), Value::Bool),
            "INTEGER" => or_null(row.try_get::<i64, _>(idx), int),
            "REAL" => or_null(row.try_get::<f64, _>(idx), float),
            "TEXT" => or_null(row.try_get::<String, _>(idx), Value::String),
            _ => Value::Null,
        };
        if !declared.is_null() {
            return declared;
        }

        if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
            return v.map(int).unwrap_or(Value::Null);
        }
        if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
            return v.map(float).unwrap_or(Value::Null);
        }
        or_null(row.try_get::<String, _>(idx), Value::String)
    }
}

#[async_trait]
impl Connector for SqliteConnector {
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
            .map_err(|e| RosterError::Database(format!("SQLite health check failed: {}", e)))?;
        Ok(())
    }

    fn connector_type(&self) -> ConnectorType {
        ConnectorType::Sqlite
    }
}
