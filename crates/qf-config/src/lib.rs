//! QualiFlow Configuration
//!
//! Configuration is read from an optional TOML file and then overridden by
//! environment variables.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QF_CONFIG_PATH` | - | Path to a TOML config file |
//! | `QF_API_HOST` | `0.0.0.0` | HTTP bind address |
//! | `QF_API_PORT` / `PORT` | `3000` | HTTP port |
//! | `QF_LOG_LEVEL` | `info` | Default filter when `RUST_LOG` is unset |
//! | `QF_LOG_FORMAT` | `text` | `text` or `json` |
//! | `QF_DEV_MODE` | `false` | Seed development data on startup |

use qf_common::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "QF_CONFIG_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl HttpConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DevConfig {
    /// Seed a small data set on startup
    pub seed_data: bool,
}

/// Top-level server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub http: HttpConfig,
    pub logging: LoggingConfig,
    pub dev: DevConfig,
}

impl PlatformConfig {
    /// Parse a TOML document. Missing sections fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PlatformConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config file {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Load from `QF_CONFIG_PATH` (if set) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (normally the process environment).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("QF_API_HOST") {
            self.http.host = host;
        }

        if let Some(port) = lookup("QF_API_PORT").or_else(|| lookup("PORT")) {
            self.http.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid port: {}", port)))?;
        }

        if let Some(level) = lookup("QF_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = lookup("QF_LOG_FORMAT") {
            self.logging.format = format
                .parse()
                .map_err(|e: qf_common::QualiFlowError| ConfigError::Invalid(e.to_string()))?;
        }

        if let Some(dev) = lookup("QF_DEV_MODE") {
            self.dev.seed_data = matches!(dev.trim(), "true" | "1" | "yes");
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Invalid("http.host must not be empty".to_string()));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PlatformConfig::default();
        assert_eq!(config.http.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(!config.dev.seed_data);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PlatformConfig::from_toml_str(
            r#"
            [http]
            port = 8081

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8081);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml() {
        let err = PlatformConfig::from_toml_str("[http]\nport = \"abc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dev]\nseed_data = true\n[http]\nhost = \"127.0.0.1\"").unwrap();

        let config = PlatformConfig::from_file(file.path()).unwrap();
        assert!(config.dev.seed_data);
        assert_eq!(config.http.host, "127.0.0.1");
    }

    #[test]
    fn test_missing_file() {
        let err = PlatformConfig::from_file("/nonexistent/qualiflow.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let config = PlatformConfig::default()
            .with_overrides(lookup_from(&[
                ("QF_API_PORT", "9000"),
                ("QF_LOG_FORMAT", "json"),
                ("QF_DEV_MODE", "1"),
            ]))
            .unwrap();

        assert_eq!(config.http.port, 9000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.dev.seed_data);
    }

    #[test]
    fn test_port_fallback_and_precedence() {
        let config = PlatformConfig::default()
            .with_overrides(lookup_from(&[("PORT", "4000")]))
            .unwrap();
        assert_eq!(config.http.port, 4000);

        let config = PlatformConfig::default()
            .with_overrides(lookup_from(&[("PORT", "4000"), ("QF_API_PORT", "5000")]))
            .unwrap();
        assert_eq!(config.http.port, 5000);
    }

    #[test]
    fn test_invalid_overrides() {
        let err = PlatformConfig::default()
            .with_overrides(lookup_from(&[("QF_API_PORT", "not-a-port")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = PlatformConfig::default()
            .with_overrides(lookup_from(&[("QF_LOG_FORMAT", "xml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
