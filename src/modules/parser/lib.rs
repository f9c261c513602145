//! Configuration parsing for Roster
//!
//! This crate handles parsing of the YAML service configuration,
//! validation, and environment variable substitution.

pub mod env;
pub mod validator;
pub mod yaml;

pub use validator::ConfigValidator;
pub use yaml::YamlParser;

use roster_core::{RosterError, Service};

/// Parse a configuration file from a path
pub fn parse_file(path: &str) -> Result<Service, RosterError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| RosterError::Config(format!("Failed to read file '{}': {}", path, e)))?;

    parse_string(&content)
}

/// Parse a configuration from a string
pub fn parse_string(content: &str) -> Result<Service, RosterError> {
    // Parse YAML
    let service = YamlParser::parse(content)?;

    // Validate configuration
    let validator = ConfigValidator::new();
    validator.validate(&service)?;

    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CONFIG: &str = r#"
store:
  connector: sqlite
  url: "sqlite://agents.db"
server:
  port: 8787
"#;

    #[test]
    fn test_parse_simple_config() {
        let service = parse_string(CONFIG).unwrap();
        assert_eq!(service.store.url, "sqlite://agents.db");
        assert_eq!(service.port(), 8787);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let service = parse_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(service.port(), 8787);
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_file("/nonexistent/roster.yaml");
        assert!(result.unwrap_err().to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_parse_string_rejects_invalid_config() {
        let yaml = r#"
store:
  connector: postgres
  url: "sqlite://agents.db"
"#;
        assert!(parse_string(yaml).is_err());
    }
}
