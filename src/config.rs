use std::{env::VarError, path::PathBuf};

use crate::{error::config::ConfigError, model::miniature::DEFAULT_SERIES};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://mechbay.db?mode=rwc";
pub const DEFAULT_EXPORT_DIR: &str = "exports";

pub struct Config {
    pub database_url: String,
    /// Directory export files are written into
    pub export_dir: PathBuf,
    /// Series applied to new miniatures and imported records without one
    pub default_series: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var))
    }

    /// Builds the configuration from a variable lookup, falling back to defaults for unset
    /// variables
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Ok(Self {
            database_url: var_or(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL)?,
            export_dir: PathBuf::from(var_or(
                &lookup,
                "MECHBAY_EXPORT_DIR",
                DEFAULT_EXPORT_DIR,
            )?),
            default_series: var_or(&lookup, "MECHBAY_DEFAULT_SERIES", DEFAULT_SERIES)?,
        })
    }
}

fn var_or<F>(lookup: &F, var: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is empty".to_string(),
        }),
        Ok(value) => Ok(value.trim().to_string()),
        Err(VarError::NotPresent) => Ok(default.to_string()),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}
