//! Measurement file loader
//!
//! Reads whitespace-separated distances from a text file, e.g. a sweep
//! captured from the serial console:
//!
//! ```text
//! 1.25 1.26 1.31
//! 1.40 # noise is skipped
//! ```
//!
//! Tokens that are not numbers are skipped rather than reported.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse every numeric token in `text`, in order
pub fn parse_measurements(text: &str) -> Vec<f64> {
    text.split_whitespace()
        .filter_map(|token| match token.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::trace!("Skipping non-numeric token {:?}", token);
                None
            }
        })
        .collect()
}

/// Load all measurements from the file at `path`
///
/// Fails with [`Error::Load`] if the file cannot be read.
pub fn load_measurements<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let values = parse_measurements(&contents);
    log::debug!(
        "Loaded {} measurements from {} ({} tokens skipped)",
        values.len(),
        path.display(),
        contents.split_whitespace().count() - values.len()
    );

    Ok(values)
}
