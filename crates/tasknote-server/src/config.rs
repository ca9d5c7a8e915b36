//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files: bind address, database location and the
//! `[llm]` section handed to the LLM extractor. Every field has a default, so
//! an empty file (or no file) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tasknote_extractor::ExtractorConfig;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    pub bind_port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// LLM extraction settings
    pub llm: ExtractorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8000,
            database_path: PathBuf::from("data/app.db"),
            llm: ExtractorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used to start a server
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Invalid("bind_address must not be empty".to_string()));
        }
        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("database_path must not be empty".to_string()));
        }
        self.llm
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("llm: {}", e)))
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8000);
        assert_eq!(config.database_path, PathBuf::from("data/app.db"));
        assert_eq!(config.llm.model, "llama3.1:8b");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            database_path = "/var/lib/tasknote/app.db"

            [llm]
            endpoint = "http://ollama:11434"
            model = "mistral"
            timeout_secs = 15
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.database_path, PathBuf::from("/var/lib/tasknote/app.db"));
        assert_eq!(config.llm.endpoint, "http://ollama:11434");
        assert_eq!(config.llm.model, "mistral");
        assert_eq!(config.llm.timeout_secs, 15);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_invalid_llm_section() {
        let toml = r#"
            [llm]
            timeout_secs = 0
        "#;
        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "bind_port = 8123\n").unwrap();

        let config = ServerConfig::from_file(&path).unwrap();
        assert_eq!(config.bind_port, 8123);
    }

    #[test]
    fn test_from_missing_file() {
        let result = ServerConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }
}
