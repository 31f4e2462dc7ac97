/// Camera holds a grid-space offset applied before cells are mapped to
/// pixels. It starts at the origin and nothing in the demo moves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Camera {
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pan camera by whole cells
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Convert grid coordinates to pixel coordinates in a `buffer`-sized
    /// frame showing a `grid`-sized board. Rounds half away from zero.
    pub fn grid_to_pixel(
        &self,
        grid_x: usize,
        grid_y: usize,
        buffer: (usize, usize),
        grid: (usize, usize),
    ) -> (i64, i64) {
        let scale = |coord: usize, offset: i32, buffer_dim: usize, grid_dim: usize| {
            ((coord as i64 - offset as i64) as f32 * buffer_dim as f32 / grid_dim as f32).round()
                as i64
        };
        (
            scale(grid_x, self.offset_x, buffer.0, grid.0),
            scale(grid_y, self.offset_y, buffer.1, grid.1),
        )
    }
}
