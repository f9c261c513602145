//! Configuration validation

use once_cell::sync::Lazy;
use regex::Regex;
use roster_core::{PoolConfig, RosterError, Service};
use roster_types::Connector;

use crate::env::EnvSubstitutor;

/// Accepted URL schemes per connector
static SQLITE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^sqlite:").unwrap());
static POSTGRES_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^postgres(ql)?://").unwrap());
static MYSQL_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^mysql://").unwrap());

/// Highest accepted `server.log_level` (ERROR)
const MAX_LOG_LEVEL: u8 = 3;

/// Configuration validator
pub struct ConfigValidator {
    /// Whether the URL scheme must match the connector
    strict_urls: bool,
}

impl ConfigValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self { strict_urls: true }
    }

    /// Create a validator that accepts any URL scheme
    pub fn lenient() -> Self {
        Self { strict_urls: false }
    }

    /// Validate the entire service configuration
    pub fn validate(&self, service: &Service) -> Result<(), RosterError> {
        self.validate_store(service)?;
        self.validate_server(service)?;
        if let Some(pool) = &service.store.pool {
            self.validate_pool(pool)?;
        }
        Ok(())
    }

    /// Validate the store URL
    fn validate_store(&self, service: &Service) -> Result<(), RosterError> {
        let store = &service.store;

        if store.url.is_empty() {
            return Err(RosterError::Validation(
                "Store URL cannot be empty".to_string(),
            ));
        }

        if EnvSubstitutor::has_placeholders(&store.url) {
            return Err(RosterError::Validation(
                "Store URL contains an unresolved environment placeholder".to_string(),
            ));
        }

        if !self.strict_urls {
            return Ok(());
        }

        let pattern = match store.connector {
            Connector::Sqlite => &*SQLITE_URL,
            Connector::Postgres => &*POSTGRES_URL,
            Connector::Mysql => &*MYSQL_URL,
        };
        if !pattern.is_match(&store.url) {
            return Err(RosterError::Validation(format!(
                "Store URL does not match connector '{}'",
                store.connector
            )));
        }

        Ok(())
    }

    /// Validate server settings
    fn validate_server(&self, service: &Service) -> Result<(), RosterError> {
        let Some(server) = &service.server else {
            return Ok(());
        };

        if server.port == Some(0) {
            return Err(RosterError::Validation(
                "Server port must be between 1 and 65535".to_string(),
            ));
        }

        if let Some(level) = server.log_level {
            if level > MAX_LOG_LEVEL {
                return Err(RosterError::Validation(format!(
                    "Invalid log level {}: expected 0 (DEBUG) to 3 (ERROR)",
                    level
                )));
            }
        }

        Ok(())
    }

    /// Validate pool sizing
    fn validate_pool(&self, pool: &PoolConfig) -> Result<(), RosterError> {
        if pool.max_connections() == 0 {
            return Err(RosterError::Validation(
                "Pool max_connections must be at least 1".to_string(),
            ));
        }

        if pool.min_connections() > pool.max_connections() {
            return Err(RosterError::Validation(format!(
                "Pool min_connections ({}) exceeds max_connections ({})",
                pool.min_connections(),
                pool.max_connections()
            )));
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{ServerConfig, StoreConfig};

    fn service(connector: Connector, url: &str) -> Service {
        Service::new(StoreConfig::new(connector, url))
    }

    #[test]
    fn test_valid_service() {
        let validator = ConfigValidator::new();
        assert!(validator
            .validate(&service(Connector::Sqlite, "sqlite://agents.db"))
            .is_ok());
        assert!(validator
            .validate(&service(Connector::Postgres, "postgresql://localhost/agents"))
            .is_ok());
        assert!(validator
            .validate(&service(Connector::Mysql, "mysql://localhost/agents"))
            .is_ok());
    }

    #[test]
    fn test_empty_url() {
        let validator = ConfigValidator::lenient();
        let result = validator.validate(&service(Connector::Sqlite, ""));
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_unresolved_placeholder() {
        let result = ConfigValidator::lenient()
            .validate(&service(Connector::Sqlite, "{{ env.ROSTER_UNSET_URL }}"));
        assert!(result.unwrap_err().to_string().contains("unresolved"));
    }

    #[test]
    fn test_mismatched_scheme() {
        let result =
            ConfigValidator::new().validate(&service(Connector::Postgres, "mysql://localhost/db"));
        assert!(result.unwrap_err().to_string().contains("does not match"));

        assert!(ConfigValidator::lenient()
            .validate(&service(Connector::Postgres, "mysql://localhost/db"))
            .is_ok());
    }

    #[test]
    fn test_invalid_server_settings() {
        let mut svc = service(Connector::Sqlite, "sqlite::memory:");
        svc.server = Some(ServerConfig {
            port: Some(0),
            log_level: None,
        });
        assert!(ConfigValidator::new().validate(&svc).is_err());

        svc.server = Some(ServerConfig {
            port: Some(8080),
            log_level: Some(7),
        });
        let result = ConfigValidator::new().validate(&svc);
        assert!(result.unwrap_err().to_string().contains("log level"));
    }

    #[test]
    fn test_pool_bounds() {
        let mut svc = service(Connector::Sqlite, "sqlite::memory:");
        svc.store.pool = Some(PoolConfig {
            max_connections: Some(2),
            min_connections: Some(5),
            acquire_timeout_secs: None,
            idle_timeout_secs: None,
            max_lifetime_secs: None,
        });
        let result = ConfigValidator::new().validate(&svc);
        assert!(result.unwrap_err().to_string().contains("exceeds"));
    }
}
