mod frame_buffer;
mod pixel;
mod rasterizer;

pub use frame_buffer::{FrameBuffer, PixelRect};
pub use pixel::Pixel;
pub use rasterizer::{CellSource, EdgeClamp, Rasterizer, clip_rect};
