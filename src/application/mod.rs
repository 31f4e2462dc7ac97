mod camera;
mod pacer;
mod simulation;

pub use camera::Camera;
pub use pacer::FramePacer;
pub use simulation::Simulation;
