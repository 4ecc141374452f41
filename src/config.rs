use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::inventory::{EoqError, InventoryParameters};

/// Default location of the settings file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Initial D/S/H shown by the GUI and offered by the interactive CLI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultInputs {
    /// Annual demand [unit/year]
    pub demand: f64,
    /// Cost per order [currency/order]
    pub order_cost: f64,
    /// Holding cost [currency/unit/year]
    pub holding_cost: f64,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            demand: 1000.0,
            order_cost: 50_000.0,
            holding_cost: 2000.0,
        }
    }
}

impl DefaultInputs {
    pub fn to_params(&self) -> Result<InventoryParameters, EoqError> {
        InventoryParameters::new(self.demand, self.order_cost, self.holding_cost)
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for money amounts, e.g. "Rp"
    pub currency_label: String,
    /// Suffix for quantities, e.g. "unit"
    pub quantity_label: String,
    /// Per-sample chart markers are drawn only up to this many samples
    pub scatter_point_limit: usize,
    /// The chart plots at most about this many samples, thinning evenly above it
    pub chart_sample_limit: usize,
    /// Directory suggested for CSV exports
    pub export_dir: String,
    pub defaults: DefaultInputs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_label: "Rp".into(),
            quantity_label: "unit".into(),
            scatter_point_limit: 2000,
            chart_sample_limit: 100_000,
            export_dir: "exports".into(),
            defaults: DefaultInputs::default(),
        }
    }
}

/// Errors raised while loading or saving the settings file.
#[derive(Debug)]
pub enum ConfigError {
    /// File I/O failure
    Io(std::io::Error),
    /// TOML parse failure
    Deserialize(toml::de::Error),
    /// TOML serialization failure
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "file I/O error: {e}"),
            ConfigError::Deserialize(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialization error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Deserialize(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// Loads config.toml, creating it with defaults when absent.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(CONFIG_PATH)
}

/// Loads the settings at `path`; writes and returns defaults if the file does not exist.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

impl Config {
    /// Saves to config.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(CONFIG_PATH)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
