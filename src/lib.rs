//! Drishti - Scan buffer for a 180° rotating lidar
//!
//! Keeps the two most recent sweeps of distance readings and answers
//! "distance at angle θ" queries against the newest one in constant time.
//!
//! ```
//! use drishti::ScanRingBuffer;
//!
//! let mut buffer = ScanRingBuffer::new(0.5)?;
//! buffer.push_scan(&[1.0, 2.0, 3.0])?;
//!
//! assert_eq!(buffer.get_distance(0.25)?, 2.0);
//! assert_eq!(buffer.pop_scan()?.len(), 361);
//! # Ok::<(), drishti::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod devices;
pub mod error;
pub mod io;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use crate::core::{BUFFER_DIM, ScanRingBuffer, ScanTable, measurement_index};
pub use error::{Error, Result};
pub use types::Scan;
