//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable
//! overrides. The configuration file path defaults to `config.yaml` but can
//! be specified via `-f` flag or the `EDUTECH_CONFIG` environment variable.
//!
//! ## Loading Priority
//!
//! Configuration sources are merged in the following order (later sources
//! override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `EDUTECH_` override
//!    YAML values; use double underscores for nested values, e.g.
//!    `EDUTECH_INFERENCE__MODEL=mistral`
//! 3. **DATABASE_URL** - Special case: overrides `database.url` if set
//!
//! ## Example
//!
//! ```yaml
//! host: 0.0.0.0
//! port: 8000
//! database:
//!   url: postgres://postgres@localhost/edutech
//! inference:
//!   url: http://localhost:11434
//!   model: llama3
//!   timeout: 60s
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::errors::Error;

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "EDUTECH_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// Merge target for the raw `DATABASE_URL` environment variable; folded
    /// into `database.url` during load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    /// PostgreSQL connection settings
    pub database: DatabaseConfig,
    /// Text-generation endpoint settings for the chat proxy
    pub inference: InferenceConfig,
}

/// PostgreSQL connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection string, e.g. `postgres://postgres@localhost/edutech`
    pub url: String,
}

/// Settings for the local text-generation service the chat feature proxies to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InferenceConfig {
    /// Base URL of the inference service (Ollama-style `/api/generate`)
    pub url: Url,
    /// Model identifier sent with every generation request
    pub model: String,
    /// Per-request timeout; the chat call blocks for at most this long
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// Upper bound on generated output length (`num_predict`)
    pub max_output_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: None,
            database: DatabaseConfig::default(),
            inference: InferenceConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://postgres@localhost/edutech".to_string(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            url: Url::parse("http://localhost:11434").unwrap(),
            model: "llama3".to_string(),
            timeout: Duration::from_secs(60),
            max_output_tokens: 512,
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        let mut config: Self = Self::figment(args).extract()?;

        // if DATABASE_URL was set, it wins over the file value
        if let Some(url) = config.database_url.take() {
            config.database.url = url;
        }

        config.validate().map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values
            .merge(Env::prefixed("EDUTECH_").split("__"))
            // Common DATABASE_URL pattern
            .merge(Env::raw().only(&["DATABASE_URL"]))
    }

    /// Validate the configuration for consistency and required fields
    pub fn validate(&self) -> Result<(), Error> {
        if self.database.url.is_empty() {
            return Err(Error::Internal {
                operation: "Config validation: database.url must not be empty. \
                     Set DATABASE_URL or add database.url to the config file."
                    .to_string(),
            });
        }

        if self.inference.model.is_empty() {
            return Err(Error::Internal {
                operation: "Config validation: inference.model must not be empty".to_string(),
            });
        }

        if self.inference.timeout.is_zero() {
            return Err(Error::Internal {
                operation: "Config validation: inference.timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.inference.model, "llama3");
        assert_eq!(config.inference.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_yaml_and_env_override() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
                port: 9000
                inference:
                  model: mistral
                  timeout: 30s
                "#,
            )?;
            jail.set_env("EDUTECH_INFERENCE__MODEL", "phi3");
            jail.set_env("DATABASE_URL", "postgres://env-host/edutech");

            let args = Args {
                config: "config.yaml".to_string(),
                validate: false,
            };
            let config = Config::load(&args).expect("config should load");

            assert_eq!(config.port, 9000);
            // Env beats the file
            assert_eq!(config.inference.model, "phi3");
            assert_eq!(config.inference.timeout, Duration::from_secs(30));
            assert_eq!(config.database.url, "postgres://env-host/edutech");
            Ok(())
        });
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = Config::default();
        config.inference.model = String::new();
        assert!(config.validate().is_err());
    }
}
