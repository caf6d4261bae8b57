// src/config.rs
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Settings shared by both tools, read from the file given with `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Default log filter when neither `RUST_LOG` nor `-v` is given.
    pub log_level: Option<String>,

    pub calculator: CalculatorConfig,

    /// File the settings came from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalculatorConfig {
    /// Fixed number of decimals for results. `None` keeps the default
    /// floating-point formatting.
    pub precision: Option<usize>,
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, contains unknown keys,
    /// or names a log level that is not one of trace, debug, info, warn, error.
    #[inline]
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        if let Some(level) = config.log_level.as_deref() {
            if level.parse::<Level>().is_err() {
                bail!("Invalid log_level '{level}'");
            }
        }
        Ok(config)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    #[inline]
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }
}

/// Loads the configuration for one invocation.
///
/// Only a file named on the command line is read; without one the defaults
/// apply, whatever the current directory holds.
///
/// # Errors
///
/// Returns an error if the named file cannot be read or parsed.
#[inline]
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    explicit.map_or_else(|| Ok(Config::default()), Config::from_file)
}
