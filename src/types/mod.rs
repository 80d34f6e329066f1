//! Shared data types

mod scan;

pub use scan::Scan;
