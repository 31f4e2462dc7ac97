//! Rasterizer: paints live cells as colored rectangles into a frame of any
//! resolution.

use super::{FrameBuffer, Pixel, PixelRect};
use crate::application::Camera;
use crate::config::LifeConfig;
use crate::domain::Grid;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The only thing the rasterizer needs to know about a board
pub trait CellSource {
    /// Board size in cells
    fn dimensions(&self) -> (usize, usize);

    fn is_alive(&self, x: usize, y: usize) -> bool;
}

impl CellSource for Grid {
    fn dimensions(&self) -> (usize, usize) {
        Grid::dimensions(self)
    }

    fn is_alive(&self, x: usize, y: usize) -> bool {
        Grid::is_alive(self, x, y)
    }
}

/// How the far edge of a rectangle is clamped to the frame.
///
/// Both policies clamp the near edge into `[0, dim - 1]`, so a rectangle
/// entirely off the frame collapses onto the border instead of vanishing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgeClamp {
    /// Far edge clamped into `[0, dim]`; a board scaled to the frame covers
    /// every pixel.
    #[default]
    Inclusive,
    /// Far edge clamped into `[0, dim - 1]`, as the classic renderer does.
    /// The last pixel row and column are never painted.
    Reference,
}

/// Clamp the span `[start, start + extent)` onto an axis of `dim` pixels
fn clamp_span(start: i64, extent: i64, dim: usize, clamp: EdgeClamp) -> (usize, usize) {
    let last = dim as i64 - 1;
    let far_limit = match clamp {
        EdgeClamp::Inclusive => dim as i64,
        EdgeClamp::Reference => last,
    };
    let near = start.clamp(0, last);
    let far = (start + extent).clamp(0, far_limit).max(near);
    (near as usize, far as usize)
}

/// Clip a rectangle given by its top-left corner and size to a
/// `width` x `height` frame
pub fn clip_rect(
    width: usize,
    height: usize,
    x: i64,
    y: i64,
    rect_width: i64,
    rect_height: i64,
    clamp: EdgeClamp,
) -> PixelRect {
    if width == 0 || height == 0 {
        return PixelRect::default();
    }
    let (left, right) = clamp_span(x, rect_width, width, clamp);
    let (top, bottom) = clamp_span(y, rect_height, height, clamp);
    PixelRect {
        left,
        top,
        right,
        bottom,
    }
}

/// Draws boards into frame buffers. Each live cell gets a fresh random
/// opaque color every frame.
pub struct Rasterizer<R = StdRng> {
    camera: Camera,
    clear_color: Pixel,
    edge_clamp: EdgeClamp,
    rng: R,
}

impl Rasterizer<StdRng> {
    /// Rasterizer with an OS-seeded color generator
    pub fn new(config: &LifeConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Rasterizer whose colors repeat from run to run
    pub fn seeded(config: &LifeConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Rasterizer<R> {
    pub fn with_rng(config: &LifeConfig, rng: R) -> Self {
        Self {
            camera: Camera::new(),
            clear_color: config.clear_color,
            edge_clamp: config.edge_clamp,
            rng,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub const fn clear_color(&self) -> Pixel {
        self.clear_color
    }

    /// Fill the whole frame with `color`
    pub fn clear(&self, frame: &mut FrameBuffer<'_>, color: Pixel) {
        frame.clear(color);
    }

    /// Draw a filled rectangle with its top-left corner at (x, y), clipped
    /// to the frame
    pub fn draw_cell(
        &self,
        frame: &mut FrameBuffer<'_>,
        x: i64,
        y: i64,
        cell_width: i64,
        cell_height: i64,
        color: Pixel,
    ) {
        let (width, height) = frame.dimensions();
        let rect = clip_rect(width, height, x, y, cell_width, cell_height, self.edge_clamp);
        frame.fill_rect(rect, color);
    }

    /// Random color with the alpha channel forced opaque
    fn random_color(&mut self) -> Pixel {
        Pixel::opaque(self.rng.random::<u32>())
    }

    /// Clear the frame, then paint every live cell of `board`.
    /// Returns the number of cells painted.
    pub fn draw_frame(&mut self, board: &impl CellSource, frame: &mut FrameBuffer<'_>) -> usize {
        self.clear(frame, self.clear_color);

        let grid = board.dimensions();
        let buffer = frame.dimensions();
        if grid.0 == 0 || grid.1 == 0 {
            return 0;
        }
        let cell_width = (buffer.0 as f32 / grid.0 as f32).round() as i64;
        let cell_height = (buffer.1 as f32 / grid.1 as f32).round() as i64;

        let mut painted = 0;
        for y in 0..grid.1 {
            for x in 0..grid.0 {
                if !board.is_alive(x, y) {
                    continue;
                }
                let color = self.random_color();
                let (px, py) = self.camera.grid_to_pixel(x, y, buffer, grid);
                self.draw_cell(frame, px, py, cell_width, cell_height, color);
                painted += 1;
            }
        }

        debug!(
            "Painted {} cells into {}x{} frame",
            painted, buffer.0, buffer.1
        );
        painted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SeedMask, SeedPlacement};
    use proptest::prelude::*;

    /// Board with every cell alive
    struct FullBoard(usize, usize);

    impl CellSource for FullBoard {
        fn dimensions(&self) -> (usize, usize) {
            (self.0, self.1)
        }

        fn is_alive(&self, x: usize, y: usize) -> bool {
            x < self.0 && y < self.1
        }
    }

    fn painted(frame: &FrameBuffer<'_>) -> usize {
        frame.as_slice().iter().filter(|&&p| p != Pixel::CLEAR).count()
    }

    #[test]
    fn test_clip_negative_origin() {
        let rect = clip_rect(20, 20, -5, -5, 10, 10, EdgeClamp::Inclusive);
        assert_eq!(rect, PixelRect { left: 0, top: 0, right: 5, bottom: 5 });
        assert_eq!(clip_rect(20, 20, -5, -5, 10, 10, EdgeClamp::Reference), rect);
    }

    #[test]
    fn test_clip_negative_origin_draws_in_bounds_only() {
        let config = LifeConfig::default();
        let rasterizer = Rasterizer::seeded(&config, 1);
        // Slack after the frame catches any write past the declared size
        let mut pixels = vec![Pixel::CLEAR; 20 * 20 + 16];
        let mut frame = FrameBuffer::new(&mut pixels, 20, 20).unwrap();

        rasterizer.draw_cell(&mut frame, -5, -5, 10, 10, Pixel(0xFFFF_FFFF));

        assert_eq!(painted(&frame), 25);
        assert_eq!(frame.get(4, 4), Some(Pixel(0xFFFF_FFFF)));
        assert_eq!(frame.get(5, 4), Some(Pixel::CLEAR));
        assert!(pixels[20 * 20..].iter().all(|&p| p == Pixel::CLEAR));
    }

    #[test]
    fn test_rect_off_frame_collapses_to_border() {
        // Inclusive: a one pixel wide column along the right border
        let rect = clip_rect(20, 20, 25, 2, 10, 3, EdgeClamp::Inclusive);
        assert_eq!(rect, PixelRect { left: 19, top: 2, right: 20, bottom: 5 });
        // Reference: nothing left to paint
        let rect = clip_rect(20, 20, 25, 2, 10, 3, EdgeClamp::Reference);
        assert_eq!(rect.area(), 0);
    }

    #[test]
    fn test_clip_on_empty_frame() {
        assert_eq!(clip_rect(0, 10, 0, 0, 4, 4, EdgeClamp::Inclusive).area(), 0);
    }

    #[test]
    fn test_full_board_covers_scaled_frame() {
        let config = LifeConfig::default();
        let mut rasterizer = Rasterizer::seeded(&config, 7);
        let (w, h) = (40 * 3, 38 * 3);
        let mut pixels = vec![Pixel(0x1234_5678); w * h];
        let mut frame = FrameBuffer::new(&mut pixels, w, h).unwrap();

        let count = rasterizer.draw_frame(&FullBoard(40, 38), &mut frame);

        assert_eq!(count, 40 * 38);
        assert_eq!(painted(&frame), w * h);
        assert!(frame.as_slice().iter().all(|p| p.is_opaque()));
    }

    #[test]
    fn test_reference_clamp_skips_last_row_and_column() {
        let config = LifeConfig {
            edge_clamp: EdgeClamp::Reference,
            ..LifeConfig::default()
        };
        let mut rasterizer = Rasterizer::seeded(&config, 7);
        let (w, h) = (80, 76);
        let mut pixels = vec![Pixel::CLEAR; w * h];
        let mut frame = FrameBuffer::new(&mut pixels, w, h).unwrap();

        rasterizer.draw_frame(&FullBoard(40, 38), &mut frame);

        assert_eq!(painted(&frame), (w - 1) * (h - 1));
        assert_eq!(frame.get(w - 1, 0), Some(Pixel::CLEAR));
        assert_eq!(frame.get(0, h - 1), Some(Pixel::CLEAR));
    }

    #[test]
    fn test_draw_frame_from_grid() {
        let config = LifeConfig {
            seed_placement: SeedPlacement::Centered,
            ..LifeConfig::with_grid(4, 4)
        };
        let seed = SeedMask::from_rows(&["x..."]).unwrap();
        let grid = Grid::new(&config, &seed).unwrap();
        // Centered origin (0, 2): the single cell sits at grid (0, 2)
        assert!(grid.is_alive(0, 2));

        let mut rasterizer = Rasterizer::seeded(&config, 3);
        let mut pixels = vec![Pixel::CLEAR; 8 * 8];
        let mut frame = FrameBuffer::new(&mut pixels, 8, 8).unwrap();
        assert_eq!(rasterizer.draw_frame(&grid, &mut frame), 1);

        let expected = PixelRect { left: 0, top: 4, right: 2, bottom: 6 };
        for (y, row) in frame.rows().enumerate() {
            for (x, &p) in row.iter().enumerate() {
                assert_eq!(p != Pixel::CLEAR, expected.contains(x, y), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_draw_frame_clears_previous_frame() {
        let config = LifeConfig::with_grid(4, 4);
        let grid = Grid::new(&config, &SeedMask::empty()).unwrap();
        let mut rasterizer = Rasterizer::seeded(&config, 3);
        let mut pixels = vec![Pixel(0xFFFF_FFFF); 16];
        let mut frame = FrameBuffer::new(&mut pixels, 4, 4).unwrap();

        assert_eq!(rasterizer.draw_frame(&grid, &mut frame), 0);
        assert_eq!(painted(&frame), 0);
        assert_eq!(rasterizer.clear_color(), config.clear_color);
    }

    #[test]
    fn test_seeded_colors_repeat() {
        let config = LifeConfig::default();
        let draw = |seed| {
            let mut rasterizer = Rasterizer::seeded(&config, seed);
            let mut pixels = vec![Pixel::CLEAR; 40 * 38];
            let mut frame = FrameBuffer::new(&mut pixels, 40, 38).unwrap();
            rasterizer.draw_frame(&FullBoard(40, 38), &mut frame);
            pixels
        };
        assert_eq!(draw(11), draw(11));
        assert_ne!(draw(11), draw(12));
    }

    #[test]
    fn test_colors_change_between_frames() {
        let config = LifeConfig::default();
        let mut rasterizer = Rasterizer::seeded(&config, 5);
        let mut first = vec![Pixel::CLEAR; 40 * 38];
        let mut second = first.clone();
        rasterizer.draw_frame(&FullBoard(40, 38), &mut FrameBuffer::new(&mut first, 40, 38).unwrap());
        rasterizer.draw_frame(&FullBoard(40, 38), &mut FrameBuffer::new(&mut second, 40, 38).unwrap());
        assert_ne!(first, second);
    }

    proptest! {
        #[test]
        fn prop_clip_stays_in_frame(
            width in 1usize..64,
            height in 1usize..64,
            x in -100i64..100,
            y in -100i64..100,
            w in 0i64..80,
            h in 0i64..80,
        ) {
            for clamp in [EdgeClamp::Inclusive, EdgeClamp::Reference] {
                let rect = clip_rect(width, height, x, y, w, h, clamp);
                prop_assert!(rect.left <= rect.right && rect.right <= width);
                prop_assert!(rect.top <= rect.bottom && rect.bottom <= height);
                prop_assert!(rect.left < width && rect.top < height);
            }
        }
    }
}
