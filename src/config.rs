//! Configuration System
//!
//! Client configuration with built-in defaults and optional TOML loading.
//! The browser host uses the defaults; native hosts may load a file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub messages: MessageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL prepended to endpoint paths; empty means same origin
    #[serde(default)]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Session persistence settings
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Storage key holding the logged-in username
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Session file for native hosts (defaults under the platform data dir)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_storage_key() -> String {
    "currentUser".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            file: None,
        }
    }
}

/// Transient message timing
#[derive(Debug, Clone, Deserialize)]
pub struct MessageConfig {
    /// How long signup/unregister banners stay visible
    #[serde(default = "default_dismiss_after")]
    pub dismiss_after_ms: u64,

    /// Delay between a successful login and closing the login dialog
    #[serde(default = "default_login_close_delay")]
    pub login_close_delay_ms: u64,
}

fn default_dismiss_after() -> u64 {
    5000
}

fn default_login_close_delay() -> u64 {
    1500
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after(),
            login_close_delay_ms: default_login_close_delay(),
        }
    }
}

impl MessageConfig {
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }

    pub fn login_close_delay(&self) -> Duration {
        Duration::from_millis(self.login_close_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.session.storage_key, "currentUser");
        assert_eq!(config.messages.dismiss_after(), Duration::from_secs(5));
        assert_eq!(config.messages.login_close_delay(), Duration::from_millis(1500));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config = ClientConfig::from_toml_str(
            r#"
            [api]
            base_url = "http://localhost:8000"

            [messages]
            dismiss_after_ms = 100
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.request_timeout_ms, 10_000);
        assert_eq!(config.messages.dismiss_after_ms, 100);
        assert_eq!(config.messages.login_close_delay_ms, 1500);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nstorage_key = \"teacher\"\n").unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.session.storage_key, "teacher");
    }

    #[test]
    fn test_load_errors_carry_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(ClientConfig::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[api\nbase_url = ").unwrap();
        match ClientConfig::load(&broken) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, broken),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
