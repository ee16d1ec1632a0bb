//! Configuration module for the discussion board.

use serde::Deserialize;
use std::path::Path;

use crate::{DiscussionError, Result};

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Host address to bind.
    #[serde(default = "default_web_host")]
    pub host: String,
    /// Port number for the HTTP API.
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Whether to serve a pre-built frontend.
    #[serde(default)]
    pub serve_static: bool,
    /// Path to the static frontend directory.
    #[serde(default = "default_static_path")]
    pub static_path: String,
    /// Name reported by `GET /api/`.
    #[serde(default = "default_site_name")]
    pub site_name: String,
}

fn default_web_host() -> String {
    "0.0.0.0".to_string()
}

fn default_web_port() -> u16 {
    8080
}

fn default_static_path() -> String {
    "web/dist".to_string()
}

fn default_site_name() -> String {
    "Discussion Board".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            cors_origins: vec![],
            serve_static: false,
            static_path: default_static_path(),
            site_name: default_site_name(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/discussion.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty disables file logging.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/discussion.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Discussion configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscussionConfig {
    /// Board addressed by the HTTP API.
    #[serde(default = "default_board_name")]
    pub board_name: String,
    /// Shared admin secret for delete operations. Empty disables deletes.
    #[serde(default)]
    pub admin_password: String,
    /// Return an empty list instead of an error when the board cannot be read.
    #[serde(default = "default_fail_open_reads")]
    pub fail_open_reads: bool,
}

fn default_board_name() -> String {
    "discussion".to_string()
}

fn default_fail_open_reads() -> bool {
    true
}

impl Default for DiscussionConfig {
    fn default() -> Self {
        Self {
            board_name: default_board_name(),
            admin_password: String::new(),
            fail_open_reads: default_fail_open_reads(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Web server configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Discussion configuration.
    #[serde(default)]
    pub discussion: DiscussionConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(DiscussionError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| DiscussionError::Validation(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `DISCUSSION_ADMIN_PASSWORD`: admin secret for delete operations
    /// - `DISCUSSION_DATABASE_PATH`: SQLite database file
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(password) = std::env::var("DISCUSSION_ADMIN_PASSWORD") {
            if !password.is_empty() {
                self.discussion.admin_password = password;
            }
        }
        if let Ok(path) = std::env::var("DISCUSSION_DATABASE_PATH") {
            if !path.is_empty() {
                self.database.path = path;
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.discussion.board_name.trim().is_empty() {
            return Err(DiscussionError::Config(
                "discussion.board_name must not be blank".to_string(),
            ));
        }
        if self.web.site_name.trim().is_empty() {
            return Err(DiscussionError::Config(
                "web.site_name must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
