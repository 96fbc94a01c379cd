//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export RUST_LOG="info,filmorate=debug"
//! export LOG_FORMAT="json"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `POPULAR_DEFAULT_COUNT` - Films returned by `/films/popular` without `count`
//!   (default: 10, min: 1)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub popular_default_count: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `POPULAR_DEFAULT_COUNT` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let popular_default_count = match env::var("POPULAR_DEFAULT_COUNT") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("POPULAR_DEFAULT_COUNT must be a number, got '{raw}'"))?,
            Err(_) => 10,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            popular_default_count,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `popular_default_count` is zero
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

        if self.popular_default_count == 0 {
            anyhow::bail!("POPULAR_DEFAULT_COUNT must be at least 1");
        }

        Ok(())
    }

    /// Returns whether logs should be emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Popular default count: {}", self.popular_default_count);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
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

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            popular_default_count: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json_logging());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:8080".to_string();
        config.popular_default_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("POPULAR_DEFAULT_COUNT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.popular_default_count, 10);
    }

    #[test]
    #[serial]
    fn test_popular_default_count_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("POPULAR_DEFAULT_COUNT", "25");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.popular_default_count, 25);

        unsafe {
            env::set_var("POPULAR_DEFAULT_COUNT", "many");
        }
        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("POPULAR_DEFAULT_COUNT");
        }
    }
}
