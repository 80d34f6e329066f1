//! Scan buffer core: angle indexing, the sweep ring and its table view

pub mod angle;
pub mod render;
pub mod ring_buffer;

pub use angle::{
    DEFAULT_RESOLUTION, MAX_ANGLE, MAX_RESOLUTION, MIN_RESOLUTION, measurement_count,
    measurement_index,
};
pub use render::ScanTable;
pub use ring_buffer::{BUFFER_DIM, MOVED_FROM_RESOLUTION, ScanRingBuffer};
