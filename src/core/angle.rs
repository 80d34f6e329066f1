//! Angle to measurement index mapping.
//!
//! A sweep covers `0°..=MAX_ANGLE` with one measurement every `resolution`
//! degrees, so measurement `i` sits at `i * resolution`. These helpers are
//! pure and can be used without a [`ScanRingBuffer`](super::ScanRingBuffer),
//! e.g. to locate a reading inside a popped scan.

/// Largest angle reached by a sweep (degrees).
pub const MAX_ANGLE: f64 = 180.0;

/// Finest supported angular resolution (degrees).
pub const MIN_RESOLUTION: f64 = 0.1;

/// Coarsest supported angular resolution (degrees).
pub const MAX_RESOLUTION: f64 = 1.0;

/// Resolution used when none is configured.
pub const DEFAULT_RESOLUTION: f64 = 1.0;

/// Returns true if `resolution` can back a scan buffer.
#[inline]
pub fn is_valid_resolution(resolution: f64) -> bool {
    !resolution.is_nan() && (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution)
}

/// Index of the measurement closest to `angle`.
///
/// - Angles at or past [`MAX_ANGLE`] map to the last measurement,
///   `floor(MAX_ANGLE / resolution)`. Rounding down keeps the index inside
///   the sweep when `MAX_ANGLE / resolution` is not an integer.
/// - Angles in `(0, MAX_ANGLE)` round to the nearest index (half away from
///   zero), capped at the last measurement.
/// - Angles at or below zero map to index 0.
///
/// Returns `None` if either argument is NaN or `resolution <= 0`, and for
/// resolutions so fine that `MAX_ANGLE / resolution` does not fit a `usize`.
///
/// # Example
/// ```
/// use drishti::core::angle::measurement_index;
///
/// assert_eq!(measurement_index(180.0, 0.3), Some(600));
/// assert_eq!(measurement_index(0.25, 0.5), Some(1));
/// assert_eq!(measurement_index(-5.0, 0.3), Some(0));
/// assert_eq!(measurement_index(10.0, 0.0), None);
/// ```
pub fn measurement_index(angle: f64, resolution: f64) -> Option<usize> {
    if angle.is_nan() || resolution.is_nan() || resolution <= 0.0 {
        return None;
    }

    let last = (MAX_ANGLE / resolution).floor();
    if last >= usize::MAX as f64 {
        return None;
    }

    let index = if angle >= MAX_ANGLE {
        last
    } else if angle > 0.0 {
        (angle / resolution).round().min(last)
    } else {
        0.0
    };

    Some(index as usize)
}

/// Number of measurements in one sweep, or 0 for an unusable resolution.
#[inline]
pub fn measurement_count(resolution: f64) -> usize {
    measurement_index(MAX_ANGLE, resolution)
        .and_then(|last| last.checked_add(1))
        .unwrap_or(0)
}

/// Angle (degrees) of measurement `index`.
#[inline]
pub fn angle_of(index: usize, resolution: f64) -> f64 {
    index as f64 * resolution
}
