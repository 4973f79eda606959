//! Configuration management for the grato application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! data directory and the Gemini API credential and endpoint.
//!
//! # Environment Variables
//!
//! - `GRATO_DIR`: Path to the data directory (defaults to ~/.local/share/grato)
//! - `GEMINI_API_KEY`: API credential for the reflection generator
//! - `GRATO_API_KEY`: Fallback credential if GEMINI_API_KEY is not set
//! - `GRATO_API_URL`: Override for the Gemini API base URL
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_DATA_SUBDIR, ENV_VAR_API_KEY, ENV_VAR_API_URL,
    ENV_VAR_GRATO_API_KEY, ENV_VAR_GRATO_DIR, ENV_VAR_HOME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the grato application.
///
/// Holds the data directory used by the persistent store and the settings for
/// the reflection generator. The API credential is optional: when absent, AI
/// features are disabled and every generation attempt reports
/// `AiError::CredentialMissing` (detected at first use, not at load time).
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use grato::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     api_key: Some("secret".to_string()),
///     api_base_url: "https://generativelanguage.googleapis.com".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory where the key-value store database lives.
    ///
    /// Loaded from `GRATO_DIR` with a fallback to ~/.local/share/grato.
    pub data_dir: PathBuf,

    /// Gemini API credential; `None` disables AI features.
    ///
    /// Loaded from `GEMINI_API_KEY`, falling back to `GRATO_API_KEY`.
    pub api_key: Option<String>,

    /// Base URL of the Gemini API.
    pub api_base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &self.data_dir)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// directory path is empty.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_GRATO_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        let api_key = env::var(ENV_VAR_API_KEY)
            .or_else(|_| env::var(ENV_VAR_GRATO_API_KEY))
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_base_url =
            env::var(ENV_VAR_API_URL).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let config = Config {
            data_dir,
            api_key,
            api_base_url,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty or
    /// relative, or if the API base URL is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if self.api_base_url.is_empty() {
            return Err(AppError::Config("API base URL is empty".to_string()));
        }

        Ok(())
    }

    /// Path of the key-value store database inside the data directory.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(crate::constants::STORE_FILENAME)
    }
}
