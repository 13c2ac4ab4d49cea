// config.rs - Board configuration

use crate::color::Palette;
use crate::error::{LifeError, LifeResult};

// Compile-time board configuration
pub const WINDOW_WIDTH: f32 = 800.0;                 // Board width in pixels
pub const WINDOW_HEIGHT: f32 = 800.0;                // Board height in pixels
pub const GRID_SIZE: usize = 80;                     // Cells per side (80x80)
pub const ALIVE_PROBABILITY: f64 = 2.0 / 21.0;       // Chance a cell starts alive

/// Everything needed to build a `GridEngine`
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub width             : f32,
    pub height            : f32,
    pub grid_size         : usize,
    pub alive_probability : f64,
    pub palette           : Palette,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width             : WINDOW_WIDTH,
            height            : WINDOW_HEIGHT,
            grid_size         : GRID_SIZE,
            alive_probability : ALIVE_PROBABILITY,
            palette           : Palette::default(),
        }
    }
}

impl BoardConfig {
    /// Square board of `grid_size` cells, each `square_side` pixels wide.
    pub fn square(grid_size: usize, square_side: f32) -> Self {
        let side = grid_size as f32 * square_side;
        Self { width: side, height: side, grid_size, ..Self::default() }
    }

    /// Checks the configuration and returns the side of one cell in pixels.
    /// The board must be at least one pixel in each direction.
    /// A width that does not divide evenly leaves fractional pixel slack.
    pub fn validate(&self) -> LifeResult<f32> {
        if self.grid_size == 0 {
            return Err(LifeError::InvalidConfig("grid size must be at least 1".into()));
        }
        if !(self.width.is_finite() && self.width >= 1.0) {
            return Err(LifeError::InvalidConfig(format!("width must be at least 1px, got {}", self.width)));
        }
        if !(self.height.is_finite() && self.height >= 1.0) {
            return Err(LifeError::InvalidConfig(format!("height must be at least 1px, got {}", self.height)));
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(LifeError::InvalidConfig(format!(
                "alive probability must be within 0..=1, got {}",
                self.alive_probability
            )));
        }
        Ok(self.width / self.grid_size as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_80_squares_of_10px() {
        let config = BoardConfig::default();
        assert_eq!(config.grid_size, 80);
        assert_eq!(config.validate().unwrap(), 10.0);
    }

    #[test]
    fn fractional_square_side_is_tolerated() {
        let config = BoardConfig { grid_size: 3, ..BoardConfig::default() };
        let side = config.validate().unwrap();
        assert!((side - 800.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn one_pixel_board_is_accepted() {
        let config = BoardConfig { width: 1.0, height: 1.0, grid_size: 1, ..BoardConfig::default() };
        assert_eq!(config.validate().unwrap(), 1.0);
    }

    #[test]
    fn rejects_bad_values() {
        let zero = BoardConfig { grid_size: 0, ..BoardConfig::default() };
        assert!(matches!(zero.validate(), Err(LifeError::InvalidConfig(_))));

        let narrow = BoardConfig { width: 0.0, ..BoardConfig::default() };
        assert!(matches!(narrow.validate(), Err(LifeError::InvalidConfig(_))));

        let sliver = BoardConfig { width: 0.5, ..BoardConfig::default() };
        assert!(matches!(sliver.validate(), Err(LifeError::InvalidConfig(_))));

        let short = BoardConfig { height: 0.99, ..BoardConfig::default() };
        assert!(matches!(short.validate(), Err(LifeError::InvalidConfig(_))));

        let flat = BoardConfig { height: f32::NAN, ..BoardConfig::default() };
        assert!(matches!(flat.validate(), Err(LifeError::InvalidConfig(_))));

        let odds = BoardConfig { alive_probability: 1.5, ..BoardConfig::default() };
        assert!(matches!(odds.validate(), Err(LifeError::InvalidConfig(_))));
    }
}
