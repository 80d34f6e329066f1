//! Fixed-capacity ring of lidar sweeps
//!
//! Keeps the [`BUFFER_DIM`] most recent sweeps. Pushing into a full buffer
//! evicts the oldest sweep, popping returns the oldest, and distance queries
//! always read the newest.

use super::angle::{DEFAULT_RESOLUTION, is_valid_resolution, measurement_count, measurement_index};
use super::render::ScanTable;
use crate::error::{Error, Result};
use crate::types::Scan;
use std::fmt;

/// Number of sweeps retained
pub const BUFFER_DIM: usize = 2;

/// Resolution left behind in a buffer whose contents were transferred away
pub const MOVED_FROM_RESOLUTION: f64 = 0.0;

/// Ring buffer of sweeps with O(1) push, pop and angle queries
///
/// - `front`: slot of the oldest sweep (occupied iff non-empty)
/// - `back`: slot the next push writes to (occupied iff full)
///
/// `Clone` deep-copies every stored sweep. Use [`take`](Self::take) to hand
/// the sweeps over to a new owner instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRingBuffer {
    slots: [Option<Scan>; BUFFER_DIM],
    front: usize,
    back: usize,
    resolution: f64,
}

impl ScanRingBuffer {
    /// Create an empty buffer
    ///
    /// Fails with [`Error::InvalidResolution`] unless `resolution` is within
    /// `[0.1, 1.0]`. The resolution is fixed for the life of the buffer.
    pub fn new(resolution: f64) -> Result<Self> {
        if !is_valid_resolution(resolution) {
            return Err(Error::InvalidResolution(resolution));
        }

        Ok(Self::with_resolution(resolution))
    }

    fn with_resolution(resolution: f64) -> Self {
        Self {
            slots: Default::default(),
            front: 0,
            back: 0,
            resolution,
        }
    }

    /// Angular resolution in degrees
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Readings stored per sweep, derived from the resolution
    #[inline]
    pub fn measurements_per_scan(&self) -> usize {
        measurement_count(self.resolution)
    }

    /// True when no sweep is stored
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots[self.front].is_none()
    }

    /// True when the next push will evict the oldest sweep
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots[self.back].is_some()
    }

    /// Number of stored sweeps
    pub fn len(&self) -> usize {
        if self.is_full() {
            BUFFER_DIM
        } else {
            (self.back + BUFFER_DIM - self.front) % BUFFER_DIM
        }
    }

    /// Store a new sweep
    ///
    /// `values` is truncated or zero-padded to
    /// [`measurements_per_scan`](Self::measurements_per_scan). Every kept
    /// value is checked before the buffer is touched, so on
    /// [`Error::InvalidMeasurement`] the buffer is left exactly as it was.
    pub fn push_scan(&mut self, values: &[f64]) -> Result<()> {
        let len = self.measurements_per_scan();
        if len == 0 {
            return Err(Error::InvalidResolution(self.resolution));
        }

        let scan = Scan::from_measurements(values, len)?;

        if self.is_full() {
            self.slots[self.front] = None;
            log::debug!("Buffer full, evicted sweep in slot {}", self.front);
            self.front = next_index(self.front);
        }

        self.slots[self.back] = Some(scan);
        self.back = next_index(self.back);
        Ok(())
    }

    /// Remove and return the oldest sweep
    pub fn pop_scan(&mut self) -> Result<Vec<f64>> {
        let scan = self.slots[self.front].take().ok_or(Error::EmptyBuffer)?;
        self.front = next_index(self.front);
        Ok(scan.into_vec())
    }

    /// Distance at `angle` (degrees) in the newest sweep
    ///
    /// The angle snaps to the nearest measurement; angles outside
    /// `[0, 180]` clamp to the first or last one.
    pub fn get_distance(&self, angle: f64) -> Result<f64> {
        if angle.is_nan() {
            return Err(Error::InvalidAngle(angle));
        }

        let scan = self.latest().ok_or(Error::EmptyBuffer)?;
        measurement_index(angle, self.resolution)
            .and_then(|index| scan.get(index))
            .ok_or(Error::InvalidResolution(self.resolution))
    }

    /// Newest sweep, if any
    pub fn latest(&self) -> Option<&Scan> {
        if self.is_empty() {
            return None;
        }
        self.slots[previous_index(self.back)].as_ref()
    }

    /// Oldest sweep, if any (the one [`pop_scan`](Self::pop_scan) returns next)
    pub fn oldest(&self) -> Option<&Scan> {
        self.slots[self.front].as_ref()
    }

    /// Stored sweeps, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Scan> + '_ {
        (0..self.len()).filter_map(move |i| self.slots[(self.front + i) % BUFFER_DIM].as_ref())
    }

    /// Drop every stored sweep
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.front = 0;
        self.back = 0;
    }

    /// Move all sweeps and state into a new buffer
    ///
    /// `self` is left empty with resolution [`MOVED_FROM_RESOLUTION`]; it
    /// reports empty, rejects pushes with [`Error::InvalidResolution`] and
    /// can be dropped or overwritten.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::with_resolution(MOVED_FROM_RESOLUTION))
    }

    /// Table view of the newest sweep
    pub fn render(&self) -> Result<ScanTable<'_>> {
        let scan = self.latest().ok_or(Error::EmptyBuffer)?;
        Ok(ScanTable::new(self.resolution, scan.ranges()))
    }
}

impl Default for ScanRingBuffer {
    fn default() -> Self {
        Self::with_resolution(DEFAULT_RESOLUTION)
    }
}

impl fmt::Display for ScanRingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(table) => write!(f, "{table}"),
            Err(_) => writeln!(f, "No scan found in the buffer. Cannot print most recent scan."),
        }
    }
}

#[inline]
fn next_index(index: usize) -> usize {
    (index + 1) % BUFFER_DIM
}

#[inline]
fn previous_index(index: usize) -> usize {
    (index + BUFFER_DIM - 1) % BUFFER_DIM
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep(first: f64) -> Vec<f64> {
        vec![first, first + 0.5, first + 1.0]
    }

    #[test]
    fn test_new_rejects_bad_resolution() {
        assert!(matches!(
            ScanRingBuffer::new(1.5),
            Err(Error::InvalidResolution(r)) if r == 1.5
        ));
        assert!(ScanRingBuffer::new(0.05).is_err());
        assert!(ScanRingBuffer::new(f64::NAN).is_err());
        assert!(ScanRingBuffer::new(0.1).is_ok());
        assert!(ScanRingBuffer::new(1.0).is_ok());
    }

    #[test]
    fn test_new_is_empty() {
        let buffer = ScanRingBuffer::new(0.5).unwrap();
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.measurements_per_scan(), 361);
    }

    #[test]
    fn test_fill_and_wrap() {
        let mut buffer = ScanRingBuffer::new(1.0).unwrap();

        buffer.push_scan(&sweep(1.0)).unwrap();
        assert_eq!(buffer.len(), 1);
        assert!(!buffer.is_full());

        buffer.push_scan(&sweep(2.0)).unwrap();
        assert_eq!(buffer.len(), 2);
        assert!(buffer.is_full());

        buffer.push_scan(&sweep(3.0)).unwrap();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.oldest().unwrap().get(0), Some(2.0));
        assert_eq!(buffer.latest().unwrap().get(0), Some(3.0));
    }

    #[test]
    fn test_pop_order_after_wrap() {
        let mut buffer = ScanRingBuffer::new(1.0).unwrap();
        for first in [1.0, 2.0, 3.0, 4.0, 5.0] {
            buffer.push_scan(&sweep(first)).unwrap();
        }

        assert_eq!(buffer.pop_scan().unwrap()[0], 4.0);
        assert_eq!(buffer.pop_scan().unwrap()[0], 5.0);
        assert!(matches!(buffer.pop_scan(), Err(Error::EmptyBuffer)));
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut buffer = ScanRingBuffer::new(1.0).unwrap();
        buffer.push_scan(&sweep(1.0)).unwrap();
        buffer.push_scan(&sweep(2.0)).unwrap();
        assert_eq!(buffer.pop_scan().unwrap()[0], 1.0);

        buffer.push_scan(&sweep(3.0)).unwrap();
        assert!(buffer.is_full());
        assert_eq!(buffer.get_distance(0.0).unwrap(), 3.0);
        assert_eq!(buffer.pop_scan().unwrap()[0], 2.0);
        assert_eq!(buffer.pop_scan().unwrap()[0], 3.0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_failed_push_keeps_state() {
        let mut buffer = ScanRingBuffer::new(1.0).unwrap();
        buffer.push_scan(&sweep(1.0)).unwrap();
        buffer.push_scan(&sweep(2.0)).unwrap();
        let before = buffer.clone();

        let err = buffer.push_scan(&[1.0, 2.0, -1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidMeasurement { index: 2, .. }));
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_get_distance_nan_angle() {
        let mut buffer = ScanRingBuffer::new(1.0).unwrap();
        assert!(matches!(buffer.get_distance(f64::NAN), Err(Error::InvalidAngle(_))));

        buffer.push_scan(&sweep(1.0)).unwrap();
        assert!(matches!(buffer.get_distance(f64::NAN), Err(Error::InvalidAngle(_))));
    }

    #[test]
    fn test_get_distance_clamps() {
        let mut buffer = ScanRingBuffer::new(1.0).unwrap();
        let mut values = vec![0.0; 181];
        values[0] = 7.0;
        values[180] = 9.0;
        buffer.push_scan(&values).unwrap();

        assert_eq!(buffer.get_distance(-30.0).unwrap(), 7.0);
        assert_eq!(buffer.get_distance(180.0).unwrap(), 9.0);
        assert_eq!(buffer.get_distance(720.0).unwrap(), 9.0);
    }

    #[test]
    fn test_clear() {
        let mut buffer = ScanRingBuffer::new(1.0).unwrap();
        buffer.push_scan(&sweep(1.0)).unwrap();
        buffer.push_scan(&sweep(2.0)).unwrap();
        buffer.push_scan(&sweep(3.0)).unwrap();

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.iter().count(), 0);

        buffer.push_scan(&sweep(4.0)).unwrap();
        assert_eq!(buffer.pop_scan().unwrap()[0], 4.0);
    }

    #[test]
    fn test_iter_oldest_first() {
        let mut buffer = ScanRingBuffer::new(1.0).unwrap();
        for first in [1.0, 2.0, 3.0] {
            buffer.push_scan(&sweep(first)).unwrap();
        }

        let firsts: Vec<_> = buffer.iter().map(|s| s.get(0).unwrap()).collect();
        assert_eq!(firsts, vec![2.0, 3.0]);
    }

    #[test]
    fn test_take_resets_source() {
        let mut source = ScanRingBuffer::new(0.5).unwrap();
        source.push_scan(&sweep(1.0)).unwrap();

        let target = source.take();
        assert_eq!(target.resolution(), 0.5);
        assert_eq!(target.get_distance(0.0).unwrap(), 1.0);

        assert!(source.is_empty());
        assert_eq!(source.resolution(), MOVED_FROM_RESOLUTION);
        assert_eq!(source.measurements_per_scan(), 0);
        assert!(matches!(
            source.push_scan(&sweep(2.0)),
            Err(Error::InvalidResolution(_))
        ));
        assert!(matches!(source.get_distance(0.0), Err(Error::EmptyBuffer)));
    }

    #[test]
    fn test_default_resolution() {
        let buffer = ScanRingBuffer::default();
        assert_eq!(buffer.resolution(), DEFAULT_RESOLUTION);
        assert_eq!(buffer.measurements_per_scan(), 181);
    }

    #[test]
    fn test_display_empty() {
        let buffer = ScanRingBuffer::default();
        assert_eq!(
            buffer.to_string(),
            "No scan found in the buffer. Cannot print most recent scan.\n"
        );
        assert!(matches!(buffer.render(), Err(Error::EmptyBuffer)));
    }
}
