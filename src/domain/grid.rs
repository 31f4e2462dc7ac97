use super::{Cell, SeedMask};
use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use log::{info, trace};

/// Starting capacity of the change list; it grows on demand and is kept
/// between ticks.
const INITIAL_CHANGE_CAPACITY: usize = 10;

/// Grid owns the toroidal board and advances it one generation per tick.
///
/// Instead of building a second board each generation, a tick records the
/// indices of every cell that must flip and applies them once the scan is
/// done, so the scan only ever reads the previous generation.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    changes: Vec<usize>,
    generation: u64,
}

impl Grid {
    /// Build a board of the configured size with `seed` overlaid at the
    /// configured placement. Seeds that would leave the board are rejected.
    pub fn new(config: &LifeConfig, seed: &SeedMask) -> Result<Self> {
        config.validate()?;
        let (width, height) = (config.grid_width, config.grid_height);
        let (seed_width, seed_height) = seed.dimensions();

        if seed_width > width || seed_height > height {
            return Err(LifeError::SeedTooLarge {
                seed_width,
                seed_height,
                grid_width: width,
                grid_height: height,
            });
        }

        let (origin_x, origin_y) = config
            .seed_placement
            .origin(width, height, seed_width, seed_height);
        let leaves_grid = origin_x < 0
            || origin_y < 0
            || origin_x as usize + seed_width > width
            || origin_y as usize + seed_height > height;
        if !seed.is_empty() && leaves_grid {
            return Err(LifeError::SeedOutOfBounds {
                origin_x,
                origin_y,
                seed_width,
                seed_height,
            });
        }

        let mut grid = Self {
            width,
            height,
            cells: (0..height)
                .flat_map(|y| (0..width).map(move |x| Cell::dead(x, y)))
                .collect(),
            changes: Vec::with_capacity(INITIAL_CHANGE_CAPACITY),
            generation: 0,
        };

        // Mask rows run bottom-to-top
        for y in 0..seed_height {
            for x in 0..seed_width {
                let alive = seed.is_alive(x, seed_height - y - 1, config.alive_symbol);
                grid.set_alive(origin_x as usize + x, origin_y as usize + y, alive);
            }
        }

        info!(
            "Grid {}x{} seeded with '{}' at ({}, {}), population {}",
            width,
            height,
            seed.name,
            origin_x,
            origin_y,
            grid.population()
        );
        Ok(grid)
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of ticks applied since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Whether the cell at (x, y) is alive; positions off the board are dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_alive)
    }

    /// Set a cell's state directly. Positions off the board are ignored.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx].alive = alive;
        }
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Indices flipped by the most recent tick, in row-major order
    pub fn pending_changes(&self) -> &[usize] {
        &self.changes
    }

    /// Capacity the change list has grown to
    pub fn change_capacity(&self) -> usize {
        self.changes.capacity()
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as isize;
        let h = self.height as isize;

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| {
                let nx = (x as isize + dx).rem_euclid(w) as usize;
                let ny = (y as isize + dy).rem_euclid(h) as usize;
                self.cells[self.get_index(nx, ny)].alive
            })
            .count() as u8
    }

    /// Advance one generation. Returns the number of cells that flipped.
    pub fn tick(&mut self) -> usize {
        self.changes.clear();

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.get_index(x, y);
                let neighbors = self.count_live_neighbors(x, y);
                if self.cells[idx].flips(neighbors) {
                    self.changes.push(idx);
                }
            }
        }

        for &idx in &self.changes {
            self.cells[idx].alive = !self.cells[idx].alive;
        }

        self.generation += 1;
        trace!(
            "Generation {}: {} cells flipped",
            self.generation,
            self.changes.len()
        );
        self.changes.len()
    }
}
