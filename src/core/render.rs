//! Console table of a sweep

use super::angle::angle_of;
use std::fmt;

/// Angle/value pairs printed per line
const PAIRS_PER_ROW: usize = 4;

/// Read-only table view over one sweep
///
/// Prints a header, then `angle: value,` pairs four to a line:
///
/// ```text
///      Angle    Value     Angle    Value ...
///     0.000:   1.000,    0.500:   2.000, ...
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScanTable<'a> {
    resolution: f64,
    ranges: &'a [f64],
}

impl<'a> ScanTable<'a> {
    /// View `ranges` as a sweep taken at `resolution` degrees
    pub fn new(resolution: f64, ranges: &'a [f64]) -> Self {
        Self { resolution, ranges }
    }

    /// `(angle, value)` for every measurement
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        let resolution = self.resolution;
        let ranges: &'a [f64] = self.ranges;
        ranges
            .iter()
            .enumerate()
            .map(move |(i, &value)| (angle_of(i, resolution), value))
    }
}

impl fmt::Display for ScanTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..PAIRS_PER_ROW {
            write!(f, "{:>10}{:>9}", "Angle", " Value")?;
        }
        writeln!(f)?;

        for (i, (angle, value)) in self.rows().enumerate() {
            write!(f, "{angle:>9.3}:{value:>8.3},")?;
            if (i + 1) % PAIRS_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        writeln!(f)
    }
}
