//! File input

pub mod loader;

pub use loader::{load_measurements, parse_measurements};
