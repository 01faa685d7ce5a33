//! Configuration management for the wander application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! display-name preference file and the address served by the configured
//! locator.
//!
//! # Environment Variables
//!
//! - `WANDER_PREFS`: Path of the display-name preference file (defaults to
//!   ~/.wander/name)
//! - `WANDER_ADDRESS`: Address the locator serves, as "name, city, region";
//!   when unset, location is reported unavailable
//! - `HOME`: Used for expanding the default preference file path

use crate::collaborators::Address;
use crate::constants::{DEFAULT_PREFS_SUBPATH, ENV_VAR_HOME, ENV_VAR_WANDER_ADDRESS, ENV_VAR_WANDER_PREFS};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the wander application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use wander::collaborators::Address;
/// use wander::config::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     prefs_path: PathBuf::from("/home/user/.wander/name"),
///     address: Some(Address::new("Main St", "Springfield", "State")),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Path of the file holding the display-name preference.
    ///
    /// Loaded from `WANDER_PREFS` with a fallback to `~/.wander/name`.
    pub prefs_path: PathBuf,

    /// Address served by the configured locator, if any.
    ///
    /// Loaded from `WANDER_ADDRESS`. `None` means every locate attempt
    /// reports "unavailable" and entries carry the sentinel address.
    pub address: Option<Address>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The address is the user's location; keep it out of logs.
        f.debug_struct("Config")
            .field("prefs_path", &"[REDACTED_PATH]")
            .field("address", &"[REDACTED_ADDRESS]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The preference file path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    pub fn load() -> AppResult<Self> {
        let prefs_raw = env::var(ENV_VAR_WANDER_PREFS).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{home}/{DEFAULT_PREFS_SUBPATH}")
        });

        let expanded = shellexpand::full(&prefs_raw)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {e}")))?;
        let prefs_path = PathBuf::from(expanded.into_owned());

        let address = env::var(ENV_VAR_WANDER_ADDRESS)
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| Address::parse(&raw));

        let config = Config {
            prefs_path,
            address,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the preference file path is empty or
    /// relative.
    pub fn validate(&self) -> AppResult<()> {
        if self.prefs_path.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Preference file path is empty".to_string(),
            ));
        }

        if !self.prefs_path.is_absolute() {
            return Err(AppError::Config(
                "Preference file path must be absolute".to_string(),
            ));
        }

        Ok(())
    }
}
