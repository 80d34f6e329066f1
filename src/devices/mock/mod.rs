//! Mock lidar for hardware-free runs
//!
//! Produces seeded, noisy sweeps in the same shape a real driver would push
//! into a [`ScanRingBuffer`](crate::core::ScanRingBuffer).

pub mod config;
pub mod lidar;
pub mod noise;

pub use config::MockLidarConfig;
pub use lidar::MockLidar;
pub use noise::NoiseGenerator;
