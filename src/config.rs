//! Configuration of the `wizard-links` binary, loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command runs.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Optional Variables
//!
//! - `CONSOLE_BASE_PATH` - Console API base path (default: `/api/kubernetes/`)
//! - `MAX_HOSTNAME_PARTS` - Hostname labels kept by `elide` (default: 3, range 1-16)
//! - `MAX_PATHNAME_PARTS` - Path segments kept by `elide` (default: 3, range 1-64)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

const DEFAULT_CONSOLE_BASE_PATH: &str = "/api/kubernetes/";

/// Settings of the command-line front end.
#[derive(Debug, Clone)]
pub struct Config {
    pub console_base_path: String,
    /// Hostname labels kept when eliding URLs.
    pub max_hostname_parts: usize,
    /// Path segments kept when eliding URLs.
    pub max_pathname_parts: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            console_base_path: DEFAULT_CONSOLE_BASE_PATH.to_string(),
            max_hostname_parts: 3,
            max_pathname_parts: 3,
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let console_base_path =
            env::var("CONSOLE_BASE_PATH").unwrap_or(defaults.console_base_path);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let max_hostname_parts =
            Self::parse_var("MAX_HOSTNAME_PARTS")?.unwrap_or(defaults.max_hostname_parts);
        let max_pathname_parts =
            Self::parse_var("MAX_PATHNAME_PARTS")?.unwrap_or(defaults.max_pathname_parts);

        Ok(Self {
            console_base_path,
            max_hostname_parts,
            max_pathname_parts,
            log_level,
            log_format,
        })
    }

    /// Reads a numeric variable, `None` when unset.
    fn parse_var(name: &str) -> Result<Option<usize>> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map(Some)
                .with_context(|| format!("{name} must be a positive integer, got '{value}'")),
            Err(_) => Ok(None),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - an elision budget is out of range
    /// - `log_format` is not `text` or `json`
    /// - `console_base_path` does not end with `/`
    pub fn validate(&self) -> Result<()> {
        if self.max_hostname_parts == 0 || self.max_hostname_parts > 16 {
            anyhow::bail!(
                "MAX_HOSTNAME_PARTS must be between 1 and 16, got {}",
                self.max_hostname_parts
            );
        }

        if self.max_pathname_parts == 0 || self.max_pathname_parts > 64 {
            anyhow::bail!(
                "MAX_PATHNAME_PARTS must be between 1 and 64, got {}",
                self.max_pathname_parts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.console_base_path.ends_with('/') {
            anyhow::bail!(
                "CONSOLE_BASE_PATH must end with '/', got '{}'",
                self.console_base_path
            );
        }

        Ok(())
    }

    /// Applies elision budgets given on the command line.
    ///
    /// Overrides are held to the same ranges as the environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is out of range.
    pub fn with_elision_budgets(
        mut self,
        max_hostname_parts: Option<usize>,
        max_pathname_parts: Option<usize>,
    ) -> Result<Self> {
        if let Some(parts) = max_hostname_parts {
            self.max_hostname_parts = parts;
        }
        if let Some(parts) = max_pathname_parts {
            self.max_pathname_parts = parts;
        }

        self.validate()?;
        Ok(self)
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Console base path: {}", self.console_base_path);
        tracing::debug!(
            "  Elision budgets: {} hostname labels, {} path segments",
            self.max_hostname_parts,
            self.max_pathname_parts
        );
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
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
