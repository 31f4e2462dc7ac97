//! Seed masks: the initial board handed to the grid engine.
//!
//! A mask is a row-major block of bytes, one per cell. Its rows run
//! bottom-to-top relative to the grid, so the engine flips it vertically
//! when copying it in.

use crate::error::{LifeError, Result};

/// Where a seed lands on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeedPlacement {
    /// `grid/2 - seed/2 - 1` on both axes, matching the classic board pixel for pixel
    #[default]
    Reference,
    /// `grid/2 - seed/2` on both axes
    Centered,
}

impl SeedPlacement {
    /// Grid position of the seed's first row and column. May be negative
    /// for seeds that do not fit; the caller rejects those.
    pub fn origin(
        self,
        grid_width: usize,
        grid_height: usize,
        seed_width: usize,
        seed_height: usize,
    ) -> (isize, isize) {
        let x = (grid_width / 2) as isize - (seed_width / 2) as isize;
        let y = (grid_height / 2) as isize - (seed_height / 2) as isize;
        match self {
            SeedPlacement::Reference => (x - 1, y - 1),
            SeedPlacement::Centered => (x, y),
        }
    }
}

/// Rectangular character mask describing a starting pattern
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedMask {
    pub name: &'static str,
    pub description: &'static str,
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl SeedMask {
    /// Wrap a flat row-major mask, checking it holds exactly `width * height` bytes
    pub fn new(bytes: impl Into<Vec<u8>>, width: usize, height: usize) -> Result<Self> {
        let bytes = bytes.into();
        let expected = width * height;
        if bytes.len() != expected {
            return Err(LifeError::SeedSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            name: "Custom",
            description: "",
            width,
            height,
            bytes,
        })
    }

    /// Build a mask from equal-length rows, first row first
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.len());
        if let Some((row, actual)) = rows
            .iter()
            .map(|row| row.len())
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(LifeError::RaggedSeed {
                row,
                expected: width,
                actual,
            });
        }
        Self::new(rows.concat().into_bytes(), width, rows.len())
    }

    /// A 0x0 mask; leaves the board empty
    pub fn empty() -> Self {
        Self {
            name: "Empty",
            description: "No live cells",
            width: 0,
            height: 0,
            bytes: Vec::new(),
        }
    }

    /// Attach a display name and description (builder pattern)
    pub fn named(mut self, name: &'static str, description: &'static str) -> Self {
        self.name = name;
        self.description = description;
        self
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the mask byte at (x, y) equals `alive_symbol`
    pub fn is_alive(&self, x: usize, y: usize, alive_symbol: u8) -> bool {
        x < self.width && y < self.height && self.bytes[y * self.width + x] == alive_symbol
    }
}

/// Built-in seeds
pub mod presets {
    use super::SeedMask;

    fn preset(name: &'static str, description: &'static str, rows: &[&str]) -> SeedMask {
        SeedMask::from_rows(rows)
            .unwrap_or_else(|_| SeedMask::empty())
            .named(name, description)
    }

    /// The classic startup board: two gliders flying apart
    pub fn glider() -> SeedMask {
        preset(
            "Gliders",
            "Two gliders, period 4",
            &[
                " x   ",
                "  x  ",
                "xxx  ",
                "   x ",
                "    x",
                "  xxx",
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> SeedMask {
        preset("Blinker", "Oscillator (period 2)", &["xxx"])
    }

    /// Block - simple still life
    pub fn block() -> SeedMask {
        preset("Block", "Still life", &["xx", "xx"])
    }

    pub fn all_seeds() -> Vec<SeedMask> {
        vec![glider(), blinker(), block()]
    }
}
