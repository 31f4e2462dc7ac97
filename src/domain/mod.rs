mod cell;
mod grid;
mod seed;

pub use cell::Cell;
pub use grid::Grid;
pub use seed::{SeedMask, SeedPlacement, presets};
