//! Configuration for Drishti
//!
//! Loaded from a TOML file. Every section and field is optional:
//!
//! ```toml
//! [driver]
//! resolution = 0.5
//!
//! [mock]
//! wall_distance = 2.0
//! seed = 42
//!
//! [logging]
//! level = "debug"
//! ```

use crate::core::angle::{DEFAULT_RESOLUTION, is_valid_resolution};
use crate::devices::mock::MockLidarConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub driver: DriverConfig,
    #[serde(default)]
    pub mock: MockLidarConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan buffer settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DriverConfig {
    /// Angular resolution in degrees, within [0.1, 1.0]
    #[serde(default = "default_resolution")]
    pub resolution: f64,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter (trace, debug, info, warn, error), `RUST_LOG` wins
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_resolution() -> f64 {
    DEFAULT_RESOLUTION
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file
    ///
    /// # Example
    /// ```no_run
    /// use drishti::Config;
    ///
    /// let config = Config::load("drishti.toml")?;
    /// # Ok::<(), drishti::Error>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would fail later at buffer creation
    pub fn validate(&self) -> Result<()> {
        if !is_valid_resolution(self.driver.resolution) {
            return Err(Error::InvalidResolution(self.driver.resolution));
        }
        Ok(())
    }
}
