//! Sweep sources

pub mod mock;
