//! Error types for Drishti

use std::path::PathBuf;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Drishti error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Angular resolution is NaN or outside [0.1, 1.0]
    #[error("Scanner resolution {0} invalid: must be in the range [0.1, 1]")]
    InvalidResolution(f64),

    /// Operation needs at least one stored scan
    #[error("No scan found in the buffer")]
    EmptyBuffer,

    /// Measurement is NaN or negative (sensor fault)
    #[error("Invalid measurement {value} at index {index}: check the lidar")]
    InvalidMeasurement {
        /// Position of the offending value in the pushed sequence
        index: usize,
        /// The rejected value
        value: f64,
    },

    /// Query angle is NaN
    #[error("Invalid angle: {0}")]
    InvalidAngle(f64),

    /// Measurement file could not be opened or read
    #[error("Cannot load measurements from {}: {source}", .path.display())]
    Load {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for [`crate::Config`]
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
