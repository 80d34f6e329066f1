//! Mock 180° lidar
//!
//! Simulates the sensor facing a straight wall parallel to its 0°-180° axis.
//! The true range at angle θ is `wall_distance / sin(θ)`, so readings are
//! shortest straight ahead (90°) and hit `max_range` toward both ends.

use super::config::MockLidarConfig;
use super::noise::NoiseGenerator;
use crate::core::angle::{MAX_ANGLE, angle_of, measurement_count};

/// Synthetic sweep source
#[derive(Debug, Clone)]
pub struct MockLidar {
    config: MockLidarConfig,
    noise: NoiseGenerator,
}

impl MockLidar {
    /// Create a mock lidar seeded from `config.seed`
    pub fn new(config: &MockLidarConfig) -> Self {
        Self {
            config: config.clone(),
            noise: NoiseGenerator::new(config.seed),
        }
    }

    /// Noise-free range at `angle` degrees
    pub fn true_range(&self, angle: f64) -> f64 {
        let sin = angle.to_radians().sin();
        if sin <= f64::EPSILON {
            return self.config.max_range;
        }
        (self.config.wall_distance / sin).min(self.config.max_range)
    }

    /// Generate one sweep at `resolution`
    ///
    /// Every reading is a valid measurement: noise never drives a range below
    /// zero and a missed return reads `0.0`.
    pub fn generate_sweep(&mut self, resolution: f64) -> Vec<f64> {
        let count = measurement_count(resolution);
        let mut ranges = Vec::with_capacity(count);

        for i in 0..count {
            if self.noise.chance(self.config.miss_rate) {
                ranges.push(0.0);
                continue;
            }

            let angle = angle_of(i, resolution);
            let range = self.true_range(angle) + self.noise.gaussian(self.config.range_stddev);
            ranges.push(range.clamp(0.0, self.config.max_range));
        }

        ranges
    }

    /// Whole-degree angle in `[0, MAX_ANGLE]`, for spot checks
    pub fn random_angle(&mut self) -> f64 {
        f64::from(self.noise.uniform_range(0, MAX_ANGLE as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quiet_config() -> MockLidarConfig {
        MockLidarConfig {
            range_stddev: 0.0,
            miss_rate: 0.0,
            seed: 42,
            ..Default::default()
        }
    }

    #[test]
    fn test_sweep_length() {
        let mut lidar = MockLidar::new(&quiet_config());
        assert_eq!(lidar.generate_sweep(1.0).len(), 181);
        assert_eq!(lidar.generate_sweep(0.5).len(), 361);
    }

    #[test]
    fn test_noise_free_profile() {
        let mut lidar = MockLidar::new(&quiet_config());
        let sweep = lidar.generate_sweep(1.0);

        assert_relative_eq!(sweep[90], 2.0, epsilon = 1e-9);
        assert_relative_eq!(sweep[30], 4.0, epsilon = 1e-9);
        assert_relative_eq!(sweep[0], 8.0);
        assert_relative_eq!(sweep[180], 8.0);
    }

    #[test]
    fn test_sweeps_are_valid() {
        let config = MockLidarConfig {
            range_stddev: 0.5,
            miss_rate: 0.2,
            seed: 3,
            ..Default::default()
        };
        let mut lidar = MockLidar::new(&config);

        for _ in 0..10 {
            let sweep = lidar.generate_sweep(0.3);
            assert!(sweep.iter().all(|r| !r.is_nan() && *r >= 0.0));
            assert!(sweep.contains(&0.0));
        }
    }

    #[test]
    fn test_deterministic() {
        let config = MockLidarConfig {
            seed: 99,
            ..Default::default()
        };
        let mut a = MockLidar::new(&config);
        let mut b = MockLidar::new(&config);

        assert_eq!(a.generate_sweep(0.5), b.generate_sweep(0.5));
        assert_eq!(a.random_angle(), b.random_angle());
    }

    #[test]
    fn test_random_angle_range() {
        let mut lidar = MockLidar::new(&quiet_config());
        for _ in 0..500 {
            let angle = lidar.random_angle();
            assert!((0.0..=MAX_ANGLE).contains(&angle));
            assert_eq!(angle.fract(), 0.0);
        }
    }
}
