// Domain layer - Grid engine
pub mod domain;

// Application layer - Simulation driving and pacing
pub mod application;

// Infrastructure layer - Rasterizing, input
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, SeedMask, SeedPlacement, presets};
pub use application::{Camera, FramePacer, Simulation};
pub use rendering::{EdgeClamp, FrameBuffer, Pixel, Rasterizer};
pub use config::LifeConfig;
pub use error::{LifeError, Result};
