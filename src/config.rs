// src/config.rs

//! Runtime configuration for the accuracy report.
//!
//! The configuration is a JSON document. Every field has a default, so a file
//! only needs the settings it changes:
//!
//! ```json
//! { "series": { "max_terms": 60 }, "report": { "functions": ["atan", "cosh"] } }
//! ```
//!
//! The file path comes from the `CORE_MATH_CONFIG` environment variable. The
//! constant-evaluation path never reads this configuration; its term cap is
//! [`SERIES_TERM_CAP`], fixed at compile time.

use anyhow::Context;
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::kernel::series::SERIES_TERM_CAP;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "CORE_MATH_CONFIG";

/// Process-wide configuration, loaded on first access.
///
/// A missing variable yields the defaults; an unreadable or malformed file is
/// logged and also yields the defaults.
pub static CONFIG: Lazy<Config> = Lazy::new(|| match Config::from_env() {
    Ok(config) => config,
    Err(e) => {
        warn!("Falling back to default configuration: {:#}", e);
        Config::default()
    }
});

// --- Top-Level Configuration Structure ---

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Settings for the series expansions evaluated by the report.
    pub series: SeriesConfig,
    /// Sampling and tolerance settings for the report.
    pub report: ReportConfig,
}

impl Config {
    /// Reads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Reads the file named by `CORE_MATH_CONFIG`, or returns the defaults
    /// when the variable is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => {
                debug!("{} not set, using default configuration", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }
}

// --- Series Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeriesConfig {
    /// Term cap for the series path. Values above [`SERIES_TERM_CAP`] are
    /// clamped to it.
    pub max_terms: usize,
}

impl SeriesConfig {
    /// The configured cap, limited to `1..=SERIES_TERM_CAP`.
    pub fn effective_max_terms(&self) -> usize {
        self.max_terms.clamp(1, SERIES_TERM_CAP)
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            max_terms: SERIES_TERM_CAP,
        }
    }
}

// --- Report Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Evenly spaced samples per function, on top of the fixed edge inputs.
    pub samples: usize,
    /// Largest acceptable |series - host| error.
    pub tolerance: f64,
    /// Functions to report on. Empty means all of them.
    pub functions: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            samples: 257,
            tolerance: 1e-6,
            functions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests;
