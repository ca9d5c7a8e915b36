//! Command-line arguments for the server binary.

use crate::config::{ConfigError, ServerConfig};
use clap::Parser;
use std::path::PathBuf;

/// Tasknote server - extract action items from notes over HTTP.
#[derive(Debug, Parser)]
#[command(name = "tasknote-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// LLM model identifier
    #[arg(short, long, env = "OLLAMA_MODEL")]
    pub model: Option<String>,

    /// Ollama API endpoint
    #[arg(long)]
    pub llm_endpoint: Option<String>,

    /// Address to bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(short, long)]
    pub database: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective configuration
    ///
    /// Starts from the config file (or defaults) and applies every flag that
    /// was given. `OLLAMA_MODEL` is read through the `--model` flag.
    pub fn resolve_config(self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.bind_address = bind;
        }
        if let Some(port) = self.port {
            config.bind_port = port;
        }
        if let Some(database) = self.database {
            config.database_path = database;
        }
        if let Some(endpoint) = self.llm_endpoint {
            config.llm.endpoint = endpoint;
        }
        config.llm = config.llm.with_model_override(self.model);

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["tasknote-server"]).unwrap();
        let config = Cli { model: None, ..cli }.resolve_config().unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(
            &path,
            "bind_port = 9000\ndatabase_path = \"file.db\"\n[llm]\nmodel = \"from-file\"\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "tasknote-server",
            "--config",
            path.to_str().unwrap(),
            "--port",
            "9100",
            "--model",
            "from-flag",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.bind_port, 9100);
        assert_eq!(config.database_path, PathBuf::from("file.db"));
        assert_eq!(config.llm.model, "from-flag");
    }

    #[test]
    fn test_invalid_endpoint_flag() {
        let cli = Cli::try_parse_from(["tasknote-server", "--llm-endpoint", "ollama:11434"]).unwrap();
        assert!(matches!(
            cli.resolve_config(),
            Err(ConfigError::Invalid(_))
        ));
    }
}
