//! Lidar scan types

use crate::error::{Error, Result};

/// One complete 0°..180° sweep of distance readings.
///
/// A `Scan` always has the fixed length of its buffer's resolution and only
/// holds validated values (finite or infinite, never NaN, never negative).
/// A reading of `0.0` means "no return" (padding or a missed measurement).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scan {
    ranges: Vec<f64>,
}

impl Scan {
    /// Build a scan of exactly `len` readings from `values`.
    ///
    /// The first `min(values.len(), len)` values are validated and copied,
    /// surplus input is dropped and missing readings are zero-filled.
    /// Fails with [`Error::InvalidMeasurement`] on the first NaN or negative
    /// value; no scan is produced in that case.
    pub fn from_measurements(values: &[f64], len: usize) -> Result<Self> {
        let mut ranges = Vec::with_capacity(len);

        for (index, &value) in values.iter().take(len).enumerate() {
            if value.is_nan() || value < 0.0 {
                return Err(Error::InvalidMeasurement { index, value });
            }
            ranges.push(value);
        }
        ranges.resize(len, 0.0);

        Ok(Self { ranges })
    }

    /// Number of readings
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if scan has no readings
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// All readings, index 0 first
    #[inline]
    pub fn ranges(&self) -> &[f64] {
        &self.ranges
    }

    /// Reading at measurement `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.ranges.get(index).copied()
    }

    /// Number of readings with a return (non-zero)
    pub fn valid_count(&self) -> usize {
        self.ranges.iter().filter(|&&r| r > 0.0).count()
    }

    /// Release the readings
    pub fn into_vec(self) -> Vec<f64> {
        self.ranges
    }
}
