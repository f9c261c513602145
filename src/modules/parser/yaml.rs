//! YAML configuration parser

use roster_core::{PoolConfig, RosterError, ServerConfig, Service, StoreConfig};
use roster_types::Connector;
use serde::Deserialize;

use crate::env::EnvSubstitutor;

/// YAML parser for Roster configuration files
pub struct YamlParser;

/// On-disk config schema.
///
/// Kept permissive: `connection_string` is accepted for `url`, and the port may be
/// written as a number or a quoted string.
#[derive(Debug, Deserialize)]
struct RosterConfig {
    store: RawStore,

    #[serde(default)]
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawStore {
    connector: Connector,

    #[serde(default)]
    url: Option<String>,

    /// Alternate field name.
    #[serde(default)]
    connection_string: Option<String>,

    #[serde(default)]
    pool: Option<PoolConfig>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    #[serde(default)]
    port: Option<serde_yaml::Value>,

    #[serde(default)]
    log_level: Option<u8>,
}

impl YamlParser {
    /// Parse a YAML string into a Service
    pub fn parse(content: &str) -> Result<Service, RosterError> {
        // First, substitute environment variables in the YAML content
        let substitutor = EnvSubstitutor::new();
        let substituted = substitutor.substitute(content)?;

        Self::parse_raw(&substituted)
    }

    /// Parse a YAML string without environment variable substitution
    pub fn parse_raw(content: &str) -> Result<Service, RosterError> {
        let config = serde_yaml::from_str::<RosterConfig>(content)
            .map_err(|e| RosterError::Config(format!("YAML parse error: {}", e)))?;
        config_to_service(config)
    }
}

fn config_to_service(cfg: RosterConfig) -> Result<Service, RosterError> {
    let url = cfg.store.url.or(cfg.store.connection_string).ok_or_else(|| {
        RosterError::Config("Store is missing 'url' (or 'connection_string')".to_string())
    })?;

    let store = StoreConfig {
        connector: cfg.store.connector,
        url,
        pool: cfg.store.pool,
    };

    let server = match cfg.server {
        None => None,
        Some(s) => Some(ServerConfig {
            port: s.port.map(yaml_scalar_to_port).transpose()?.flatten(),
            log_level: s.log_level,
        }),
    };

    Ok(Service { store, server })
}

fn yaml_scalar_to_port(value: serde_yaml::Value) -> Result<Option<u16>, RosterError> {
    let invalid = |v: &dyn std::fmt::Display| {
        RosterError::Config(format!("Invalid server port '{}'", v))
    };

    match value {
        serde_yaml::Value::Null => Ok(None),
        serde_yaml::Value::Number(n) => n
            .as_u64()
            .and_then(|p| u16::try_from(p).ok())
            .map(Some)
            .ok_or_else(|| invalid(&n)),
        serde_yaml::Value::String(s) => s.trim().parse().map(Some).map_err(|_| invalid(&s)),
        _ => Err(RosterError::Config(
            "Server port must be a number".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
store:
  connector: sqlite
  url: "sqlite://agents.db"
"#;
        let service = YamlParser::parse(yaml).unwrap();
        assert_eq!(service.store.connector, Connector::Sqlite);
        assert_eq!(service.store.url, "sqlite://agents.db");
        assert!(service.server.is_none());
        assert_eq!(service.port(), 8080);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
store:
  connector: postgres
  connection_string: "postgres://localhost:5432/agents"
  pool:
    max_connections: 4
    idle_timeout_secs: 60
server:
  port: 3000
  log_level: 2
"#;
        let service = YamlParser::parse(yaml).unwrap();
        assert_eq!(service.store.connector, Connector::Postgres);
        assert_eq!(service.store.url, "postgres://localhost:5432/agents");
        let pool = service.store.pool();
        assert_eq!(pool.max_connections(), 4);
        assert_eq!(pool.idle_timeout().as_secs(), 60);
        assert_eq!(service.port(), 3000);
        assert_eq!(service.log_level(), 2);
    }

    #[test]
    fn test_parse_string_port() {
        let yaml = r#"
store:
  connector: mysql
  url: "mysql://localhost/agents"
server:
  port: "9090"
"#;
        let service = YamlParser::parse(yaml).unwrap();
        assert_eq!(service.port(), 9090);
    }

    #[test]
    fn test_parse_out_of_range_port() {
        let yaml = r#"
store:
  connector: sqlite
  url: "sqlite::memory:"
server:
  port: 70000
"#;
        let result = YamlParser::parse(yaml);
        assert!(result.unwrap_err().to_string().contains("Invalid server port"));
    }

    #[test]
    fn test_parse_missing_url() {
        let yaml = r#"
store:
  connector: sqlite
"#;
        let result = YamlParser::parse(yaml);
        assert!(result.unwrap_err().to_string().contains("missing 'url'"));
    }

    #[test]
    fn test_parse_env_url() {
        std::env::set_var("ROSTER_TEST_STORE_URL", "sqlite://from-env.db");
        let yaml = r#"
store:
  connector: sqlite
  url: "{{ env.ROSTER_TEST_STORE_URL }}"
"#;
        let service = YamlParser::parse(yaml).unwrap();
        assert_eq!(service.store.url, "sqlite://from-env.db");
        std::env::remove_var("ROSTER_TEST_STORE_URL");
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let yaml = "invalid: yaml: content: [";
        let result = YamlParser::parse(yaml);
        assert!(result.is_err());
    }
}
