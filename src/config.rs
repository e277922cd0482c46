//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is picked up by `dotenvy` in `main`.
//!
//! ## Variables (all optional)
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Public base for short links (default: `http://localhost:8080`)
//! - `SHUTDOWN_TIMEOUT_SECONDS` - Graceful shutdown drain deadline (default: 10)
//! - `RATE_LIMIT` - Requests allowed per window on `/api` (default: 100)
//! - `RATE_WINDOW_SECONDS` - Rate limit window (default: 60)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory with the web UI (default: `static`)

use std::env;
use std::time::Duration;

use anyhow::Result;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL prepended to `/s/{id}` in shorten responses.
    pub base_url: String,
    pub shutdown_timeout_seconds: u64,
    /// Requests allowed per [`Config::rate_window`] on the shorten endpoint.
    pub rate_limit: u64,
    pub rate_window_seconds: u64,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        let shutdown_timeout_seconds = env::var("SHUTDOWN_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let rate_limit = env::var("RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let rate_window_seconds = env::var("RATE_WINDOW_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Self {
            listen_addr,
            base_url,
            shutdown_timeout_seconds,
            rate_limit,
            rate_window_seconds,
            log_level,
            log_format,
            static_dir,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` does not start with `http://` or `https://`
    /// - `log_format` is not `text` or `json`
    /// - rate limit or window is zero
    /// - the shutdown timeout is outside 1..=300 seconds
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.rate_limit == 0 {
            anyhow::bail!("RATE_LIMIT must be at least 1");
        }

        if self.rate_window_seconds == 0 {
            anyhow::bail!("RATE_WINDOW_SECONDS must be greater than 0");
        }

        if self.shutdown_timeout_seconds == 0 || self.shutdown_timeout_seconds > 300 {
            anyhow::bail!(
                "SHUTDOWN_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.shutdown_timeout_seconds
            );
        }

        Ok(())
    }

    /// The graceful shutdown drain deadline.
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_seconds)
    }

    /// The rate limit window.
    pub fn rate_window(&self) -> Duration {
        Duration::from_secs(self.rate_window_seconds)
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!(
            "  Rate limit: {} requests / {}s",
            self.rate_limit,
            self.rate_window_seconds
        );
        tracing::info!("  Shutdown timeout: {}s", self.shutdown_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Static dir: {}", self.static_dir);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
