//! Generation parameters and boundary validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rings of solid tiles added around the finished map before mesh building.
pub const BORDER_SIZE: usize = 5;

/// Upper bound on smoothing passes; more passes stop changing the grid long
/// before this.
pub const MAX_SMOOTH_ITERATIONS: u32 = 10;

/// Parameters for one map generation request.
///
/// `validate` runs before any grid is allocated, so a bad request can never
/// leave a half-mutated map behind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: usize,
    pub height: usize,
    /// Percentage of interior cells seeded solid, 0..=100.
    pub random_fill_percent: u32,
    /// Seed text hashed into the noise RNG. Ignored when `use_random_seed`.
    pub seed: String,
    /// Derive a time-based seed instead of `seed`; the derived text is
    /// recorded on the generated map so the run can be replayed.
    pub use_random_seed: bool,
    pub smooth_iterations: u32,
    pub remove_small_regions: bool,
    /// Wall regions below this tile count are opened up.
    pub wall_region_min_size: usize,
    /// Floor regions below this tile count are filled in.
    pub room_region_min_size: usize,
    pub connect_regions: bool,
    /// Radius of the disk stamped along carved passages.
    pub passage_radius: i32,
    /// Edge length of one grid cell, forwarded to the mesh collaborator.
    pub square_size: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 72,
            random_fill_percent: 45,
            seed: String::new(),
            use_random_seed: true,
            smooth_iterations: 5,
            remove_small_regions: true,
            wall_region_min_size: 50,
            room_region_min_size: 50,
            connect_regions: true,
            passage_radius: 1,
            square_size: 1.0,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.random_fill_percent > 100 {
            return Err(ConfigError::FillPercentOutOfRange(self.random_fill_percent));
        }
        if self.smooth_iterations > MAX_SMOOTH_ITERATIONS {
            return Err(ConfigError::SmoothIterationsOutOfRange(self.smooth_iterations));
        }
        if self.passage_radius < 0 {
            return Err(ConfigError::NegativePassageRadius(self.passage_radius));
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(ConfigError::InvalidSquareSize(self.square_size));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("random fill percent must be within 0..=100, got {0}")]
    FillPercentOutOfRange(u32),
    #[error("smooth iterations must be within 0..={MAX_SMOOTH_ITERATIONS}, got {0}")]
    SmoothIterationsOutOfRange(u32),
    #[error("passage radius must not be negative, got {0}")]
    NegativePassageRadius(i32),
    #[error("square size must be a positive finite number, got {0}")]
    InvalidSquareSize(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GenerationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_dimensions_are_rejected_before_any_allocation() {
        let config = GenerationConfig { width: 0, ..GenerationConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 0, height: 72 })
        );

        let config = GenerationConfig { height: 0, ..GenerationConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 128, height: 0 })
        );
    }

    #[test]
    fn out_of_range_percent_and_iterations_are_rejected() {
        let config = GenerationConfig { random_fill_percent: 101, ..GenerationConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::FillPercentOutOfRange(101)));

        let config = GenerationConfig { smooth_iterations: 11, ..GenerationConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::SmoothIterationsOutOfRange(11)));
    }

    #[test]
    fn negative_passage_radius_is_rejected() {
        let config = GenerationConfig { passage_radius: -1, ..GenerationConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::NegativePassageRadius(-1)));
    }

    #[test]
    fn non_positive_square_size_is_rejected() {
        let config = GenerationConfig { square_size: 0.0, ..GenerationConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSquareSize(0.0)));
    }

    #[test]
    fn errors_render_readable_messages() {
        let error = ConfigError::InvalidDimensions { width: 0, height: 5 };
        assert_eq!(error.to_string(), "map dimensions must be positive, got 0x5");
    }
}
