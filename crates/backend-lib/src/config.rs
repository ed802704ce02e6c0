// ============================
// backend-lib/src/config.rs
// ============================
//! Configuration management.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! the process environment. Environment keys are lower-cased before they are
//! matched, so `Port`, `PORT` and `port` all set [`Settings::port`], and the
//! legacy variable names (`Port`, `Allowed_Port`, `key`) keep working.
use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::path::Path;

use axum::http::HeaderValue;
use config::{Config, Environment, File, FileFormat};
use passgen_common::SIZE_LIMIT;
use serde::Deserialize;
use thiserror::Error;

/// Default config file, looked up relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config/default.toml";

/// Port used when nothing else is configured
pub const DEFAULT_PORT: u16 = 5101;

/// Largest `MaxSize` accepted unless configured otherwise
pub const DEFAULT_MAX_SIZE_CAP: u64 = 100_000;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors raised while loading or checking settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Application settings
#[derive(Clone, Deserialize)]
pub struct Settings {
    /// Interface to bind
    pub bind_host: String,
    /// Listening port
    pub port: u16,
    /// Single origin allowed by CORS, any origin when unset
    #[serde(default, alias = "allowed_port")]
    pub allowed_origin: Option<String>,
    /// Shared API secret; every request is refused when unset
    #[serde(default, alias = "key")]
    pub api_key: Option<String>,
    /// Log level
    pub log_level: String,
    /// Log format
    pub log_format: LogFormat,
    /// Upper bound on `MaxSize`
    pub max_size_cap: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            allowed_origin: None,
            api_key: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            max_size_cap: DEFAULT_MAX_SIZE_CAP,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("bind_host", &self.bind_host)
            .field("port", &self.port)
            .field("allowed_origin", &self.allowed_origin)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("max_size_cap", &self.max_size_cap)
            .finish()
    }
}

impl Settings {
    /// Load settings from `config/default.toml` (if present) and the process
    /// environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load settings from the given file (if present) and the process
    /// environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::load_with_env(path, vars)
    }

    /// Load settings from the given file (if present) and an explicit set of
    /// environment variables instead of the process environment.
    pub fn load_with_env(
        path: impl AsRef<Path>,
        vars: HashMap<String, String>,
    ) -> Result<Self, SettingsError> {
        let source: config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect();
        Self::build(path.as_ref(), Environment::default().source(Some(source)))
    }

    fn build(path: &Path, env: Environment) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let settings: Settings = Config::builder()
            .set_default("bind_host", defaults.bind_host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("max_size_cap", defaults.max_size_cap)?
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check the settings for values the server cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(SettingsError::Invalid(format!(
                "unknown log level `{}`",
                self.log_level
            )));
        }
        if self.port == 0 {
            return Err(SettingsError::Invalid("port must not be 0".to_string()));
        }
        if self.bind_host.trim().is_empty() {
            return Err(SettingsError::Invalid("bind host must not be empty".to_string()));
        }
        if let Some(origin) = self.allowed_origin.as_deref() {
            if HeaderValue::from_str(origin).is_err() {
                return Err(SettingsError::Invalid(format!(
                    "allowed origin `{origin}` is not a valid header value"
                )));
            }
        }
        if self.max_size_cap < SIZE_LIMIT {
            return Err(SettingsError::Invalid(format!(
                "max size cap must be at least {SIZE_LIMIT}"
            )));
        }
        Ok(())
    }

    /// Socket address to listen on
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        format!("{}:{}", self.bind_host, self.port)
            .parse()
            .map_err(|e| SettingsError::Invalid(format!("bad bind address: {e}")))
    }
}
