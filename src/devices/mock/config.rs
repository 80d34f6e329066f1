//! Mock lidar configuration
//!
//! | Parameter | Default |
//! |-----------|---------|
//! | wall_distance | 2.0 m |
//! | max_range | 8.0 m |
//! | range_stddev | 0.01 m |
//! | miss_rate | 0.01 |
//! | seed | 0 (entropy) |

use serde::{Deserialize, Serialize};

/// Simulated environment and sensor noise
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MockLidarConfig {
    /// Perpendicular distance to the wall running along the 0°/180° axis (meters)
    #[serde(default = "default_wall_distance")]
    pub wall_distance: f64,

    /// Readings beyond this are clamped (meters)
    #[serde(default = "default_max_range")]
    pub max_range: f64,

    /// Range noise standard deviation (meters)
    #[serde(default = "default_range_stddev")]
    pub range_stddev: f64,

    /// Probability of a reading with no return (0.0-1.0)
    #[serde(default = "default_miss_rate")]
    pub miss_rate: f64,

    /// RNG seed, 0 for a random seed
    #[serde(default)]
    pub seed: u64,
}

fn default_wall_distance() -> f64 {
    2.0
}
fn default_max_range() -> f64 {
    8.0
}
fn default_range_stddev() -> f64 {
    0.01
}
fn default_miss_rate() -> f64 {
    0.01
}

impl Default for MockLidarConfig {
    fn default() -> Self {
        Self {
            wall_distance: default_wall_distance(),
            max_range: default_max_range(),
            range_stddev: default_range_stddev(),
            miss_rate: default_miss_rate(),
            seed: 0,
        }
    }
}
