//! Error type shared by the grid engine and the rasterizer.

/// Everything that can go wrong while configuring a simulation or handing
/// it a pixel buffer. Ticking and drawing themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("Grid dimensions must be non-zero (got {width}x{height})")]
    InvalidGrid { width: usize, height: usize },

    #[error("Tick rate must be positive and finite (got {0})")]
    InvalidTickRate(f32),

    #[error("Seed of {seed_width}x{seed_height} does not fit a {grid_width}x{grid_height} grid")]
    SeedTooLarge {
        seed_width: usize,
        seed_height: usize,
        grid_width: usize,
        grid_height: usize,
    },

    #[error("Seed of {seed_width}x{seed_height} placed at ({origin_x}, {origin_y}) leaves the grid")]
    SeedOutOfBounds {
        origin_x: isize,
        origin_y: isize,
        seed_width: usize,
        seed_height: usize,
    },

    #[error("Seed mask holds {actual} bytes, expected {expected}")]
    SeedSizeMismatch { expected: usize, actual: usize },

    #[error("Seed row {row} has length {actual}, expected {expected}")]
    RaggedSeed {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Pixel buffer holds {actual} pixels, frame needs {required}")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("Only 4 bytes per pixel are supported (got {0})")]
    UnsupportedBytesPerPixel(usize),

    #[error("Byte buffer cannot be viewed as pixels: {0}")]
    PixelCast(bytemuck::PodCastError),
}

impl From<bytemuck::PodCastError> for LifeError {
    fn from(err: bytemuck::PodCastError) -> Self {
        LifeError::PixelCast(err)
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
