//! Fixed configuration of a simulation.
//!
//! The defaults reproduce the classic 40x38 board shown in a 640x640
//! window at 24 generations per second.

use crate::domain::SeedPlacement;
use crate::error::{LifeError, Result};
use crate::rendering::{EdgeClamp, Pixel};

pub const DEFAULT_GRID_WIDTH: usize = 40;
pub const DEFAULT_GRID_HEIGHT: usize = 38;
pub const DEFAULT_TICKS_PER_SECOND: f32 = 24.0;
pub const DEFAULT_ALIVE_SYMBOL: u8 = b'x';

/// Simulation and presentation settings. None of these change once a
/// simulation has been built from them.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub ticks_per_second: f32,
    /// Byte marking a live cell in a seed mask; any other byte is dead.
    pub alive_symbol: u8,
    pub seed_placement: SeedPlacement,
    pub edge_clamp: EdgeClamp,
    /// Background the rasterizer clears to before drawing live cells.
    pub clear_color: Pixel,
    pub window_title: String,
    pub window_width: usize,
    pub window_height: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            alive_symbol: DEFAULT_ALIVE_SYMBOL,
            seed_placement: SeedPlacement::default(),
            edge_clamp: EdgeClamp::default(),
            clear_color: Pixel::CLEAR,
            window_title: "Game Of Life".to_owned(),
            window_width: 640,
            window_height: 640,
        }
    }
}

impl LifeConfig {
    /// Same defaults on a grid of another size.
    pub fn with_grid(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(LifeError::InvalidGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if !self.ticks_per_second.is_finite() || self.ticks_per_second <= 0.0 {
            return Err(LifeError::InvalidTickRate(self.ticks_per_second));
        }
        Ok(())
    }

    /// Seconds of wall-clock time per generation
    pub fn tick_duration(&self) -> f32 {
        1.0 / self.ticks_per_second
    }
}
