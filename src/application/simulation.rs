use crate::application::FramePacer;
use crate::config::LifeConfig;
use crate::domain::{Grid, SeedMask};
use crate::error::Result;
use crate::rendering::{FrameBuffer, Rasterizer};
use rand::Rng;
use rand::rngs::StdRng;

/// Simulation is what a platform layer drives: it owns the board, the
/// rasterizer and the tick pacing. Each frame the platform calls
/// [`Simulation::update`] with the elapsed time, then [`Simulation::draw`]
/// into its own pixel buffer.
pub struct Simulation<R = StdRng> {
    grid: Grid,
    rasterizer: Rasterizer<R>,
    pacer: FramePacer,
}

impl Simulation<StdRng> {
    /// Create a simulation with OS-seeded cell colors
    pub fn new(config: &LifeConfig, seed: &SeedMask) -> Result<Self> {
        Self::with_rasterizer(config, seed, Rasterizer::new(config))
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rasterizer(
        config: &LifeConfig,
        seed: &SeedMask,
        rasterizer: Rasterizer<R>,
    ) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(config, seed)?,
            rasterizer,
            pacer: FramePacer::new(config.tick_duration()),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rasterizer_mut(&mut self) -> &mut Rasterizer<R> {
        &mut self.rasterizer
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    /// Advance one generation regardless of elapsed time
    pub fn step(&mut self) -> usize {
        self.grid.tick()
    }

    /// Run as many ticks as `elapsed` seconds allow. Returns the tick count.
    pub fn update(&mut self, elapsed: f32) -> u32 {
        let ticks = self.pacer.advance(elapsed);
        for _ in 0..ticks {
            self.grid.tick();
        }
        ticks
    }

    /// Render the current board into `frame`
    pub fn draw(&mut self, frame: &mut FrameBuffer<'_>) -> usize {
        self.rasterizer.draw_frame(&self.grid, frame)
    }
}
