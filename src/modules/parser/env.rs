//! Environment variable substitution for config files

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use roster_core::RosterError;

/// Regex pattern for environment variable placeholders: {{ env.VAR_NAME }}
static ENV_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Environment variable substitutor
pub struct EnvSubstitutor {
    /// Whether to fail on missing environment variables
    strict: bool,
}

impl EnvSubstitutor {
    /// Create a new substitutor with strict mode (fails on missing vars)
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Create a new substitutor with lenient mode (leaves placeholders for missing vars)
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Substitute environment variables in the given content
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    /// In strict mode every missing variable is reported in a single error.
    pub fn substitute(&self, content: &str) -> Result<String, RosterError> {
        let _ = dotenvy::dotenv();

        let mut missing: Vec<String> = Vec::new();
        let substituted = ENV_PATTERN.replace_all(content, |cap: &Captures| {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing.iter().any(|m| m == var_name) {
                        missing.push(var_name.to_string());
                    }
                    cap[0].to_string()
                }
            }
        });

        if self.strict && !missing.is_empty() {
            return Err(RosterError::EnvVarNotFound(missing.join(", ")));
        }

        Ok(substituted.into_owned())
    }

    /// Check if a string contains environment variable placeholders
    pub fn has_placeholders(content: &str) -> bool {
        ENV_PATTERN.is_match(content)
    }
}

impl Default for EnvSubstitutor {
    fn default() -> Self {
        Self::new()
    }
}
