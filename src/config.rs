//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="change-me"
//! ```
//!
//! ## Required Variables
//!
//! - `HTTP_USER` / `HTTP_PASSWORD` - Credentials for the `/url` endpoints
//!
//! ## Optional Variables
//!
//! - `STORAGE_PATH` - SQLite file path or `sqlite:` URL (default: `./storage/storage.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `REQUEST_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6, range: 4-32)
//! - `DB_MAX_CONNECTIONS` - Storage pool size (default: 5)

use anyhow::{Context, Result};
use std::env;

use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

const DEFAULT_STORAGE_PATH: &str = "./storage/storage.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_path: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub http_user: String,
    /// Never printed; see [`Config::print_summary`].
    pub http_password: String,
    /// Upper bound for handling one request, in seconds.
    pub request_timeout: u64,
    /// Length of aliases generated when the client does not supply one.
    pub alias_length: usize,
    /// Maximum number of pooled storage connections (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        let storage_path = storage_path_from_env();
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let http_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let http_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        let request_timeout = parse_var("REQUEST_TIMEOUT", 4)?;
        let alias_length = parse_var("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH)?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;

        Ok(Self {
            storage_path,
            listen_addr,
            log_level,
            log_format,
            http_user,
            http_password,
            request_timeout,
            alias_length,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - credentials or storage path are empty
    /// - a numeric setting is out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        validate_storage_path(&self.storage_path)?;

        if self.http_user.is_empty() {
            anyhow::bail!("HTTP_USER must not be empty");
        }
        if self.http_password.is_empty() {
            anyhow::bail!("HTTP_PASSWORD must not be empty");
        }

        if self.request_timeout == 0 {
            anyhow::bail!("REQUEST_TIMEOUT must be greater than 0");
        }

        validate_alias_length(self.alias_length)?;

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Auth user: {}", self.http_user);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}s", self.request_timeout);
        tracing::info!("  Alias length: {}", self.alias_length);
    }
}

/// Settings used by the `admin` binary.
///
/// The CLI talks to storage directly, so it needs neither HTTP credentials nor
/// a listen address.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub storage_path: String,
    pub alias_length: usize,
}

impl AdminConfig {
    /// Loads `STORAGE_PATH` and `ALIAS_LENGTH` with the same defaults as [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if `ALIAS_LENGTH` does not parse.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            storage_path: storage_path_from_env(),
            alias_length: parse_var("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH)?,
        })
    }

    /// Applies the same rules as [`Config::validate`] to the shared settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage path is empty or the alias length is out of range.
    pub fn validate(&self) -> Result<()> {
        validate_storage_path(&self.storage_path)?;
        validate_alias_length(self.alias_length)
    }
}

fn storage_path_from_env() -> String {
    env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string())
}

fn validate_storage_path(path: &str) -> Result<()> {
    if path.is_empty() {
        anyhow::bail!("STORAGE_PATH must not be empty");
    }
    Ok(())
}

fn validate_alias_length(length: usize) -> Result<()> {
    if !(4..=32).contains(&length) {
        anyhow::bail!("ALIAS_LENGTH must be between 4 and 32, got {length}");
    }
    Ok(())
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Loads and validates the `admin` binary's settings from environment variables.
///
/// # Errors
///
/// Returns an error if a variable does not parse or validation fails.
pub fn load_admin_from_env() -> Result<AdminConfig> {
    let config = AdminConfig::from_env()?;
    config.validate()?;
    Ok(config)
}
