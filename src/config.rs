// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    catalog_path: Option<PathBuf>,
    snapshot_path: Option<PathBuf>,
    snapshot_pretty: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Reads `key`, treating an unset variable as `None`.
fn read_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(ConfigError::Invalid(format!("{key} is not valid unicode")))
        }
    }
}

fn non_empty(key: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{key} must not be empty")));
    }
    Ok(value)
}

fn path_value(key: &'static str, value: Option<String>) -> Result<Option<PathBuf>, ConfigError> {
    value
        .map(|value| non_empty(key, value).map(PathBuf::from))
        .transpose()
}

fn flag_value(
    key: &'static str,
    value: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    match value {
        Some(value) => parse_flag(key, &non_empty(key, value)?),
        None => Ok(default),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got `{other}`"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Every key is optional.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` when a key is set but empty, not unicode, or
    /// not a recognised boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let catalog_path = path_value("CATALOG_PATH", read_var("CATALOG_PATH")?)?;
        let snapshot_path = path_value("FEED_SNAPSHOT_PATH", read_var("FEED_SNAPSHOT_PATH")?)?;
        let snapshot_pretty = flag_value(
            "FEED_SNAPSHOT_PRETTY",
            read_var("FEED_SNAPSHOT_PRETTY")?,
            true,
        )?;

        Ok(Self {
            catalog_path,
            snapshot_path,
            snapshot_pretty,
        })
    }

    /// Catalog document to load instead of the embedded one.
    #[must_use]
    pub const fn catalog_path(&self) -> Option<&PathBuf> {
        self.catalog_path.as_ref()
    }

    /// Where the feed snapshot is written; stdout when unset.
    #[must_use]
    pub const fn snapshot_path(&self) -> Option<&PathBuf> {
        self.snapshot_path.as_ref()
    }

    #[must_use]
    pub const fn snapshot_pretty(&self) -> bool {
        self.snapshot_pretty
    }
}
