//! Typed view over a caller-owned pixel buffer.

use super::Pixel;
use crate::error::{LifeError, Result};

/// Pixel rectangle in buffer space. `right` and `bottom` are exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PixelRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl PixelRect {
    pub const fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    pub const fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top)
    }

    pub const fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Row-major frame of `width * height` pixels with no row padding.
///
/// The buffer is borrowed: the platform layer owns it and presents it after
/// each frame. Its size is checked once here, so drawing never has to.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [Pixel],
    width: usize,
    height: usize,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(pixels: &'a mut [Pixel], width: usize, height: usize) -> Result<Self> {
        let required = width * height;
        if pixels.len() < required {
            return Err(LifeError::BufferTooSmall {
                required,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// View a raw byte buffer as pixels. Only 4 bytes per pixel is
    /// supported, and the bytes must be aligned for `u32`.
    pub fn from_bytes_mut(
        bytes: &'a mut [u8],
        width: usize,
        height: usize,
        bytes_per_pixel: usize,
    ) -> Result<Self> {
        if bytes_per_pixel != size_of::<Pixel>() {
            return Err(LifeError::UnsupportedBytesPerPixel(bytes_per_pixel));
        }
        let pixels: &mut [Pixel] = bytemuck::try_cast_slice_mut(bytes)?;
        Self::new(pixels, width, height)
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Fill every pixel of the frame with one color
    pub fn clear(&mut self, color: Pixel) {
        self.pixels[..self.width * self.height].fill(color);
    }

    /// Fill `rect`, cut down to the frame if it pokes outside
    pub fn fill_rect(&mut self, rect: PixelRect, color: Pixel) {
        let right = rect.right.min(self.width);
        let bottom = rect.bottom.min(self.height);
        if rect.left >= right {
            return;
        }
        for y in rect.top..bottom {
            let row = y * self.width;
            self.pixels[row + rect.left..row + right].fill(color);
        }
    }

    /// Pixels of the frame, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        (0..self.height).map(move |y| &self.pixels[y * self.width..(y + 1) * self.width])
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels[..self.width * self.height]
    }
}
