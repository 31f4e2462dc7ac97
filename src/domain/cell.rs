/// Cell is the fundamental unit of the board.
/// It carries its own grid position so the rasterizer can use it directly.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub alive: bool,
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Dead cell at the given grid position
    pub const fn dead(x: usize, y: usize) -> Self {
        Self { alive: false, x, y }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Pure function computing the next alive state under Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn next_state(self, neighbors: u8) -> bool {
        matches!((self.alive, neighbors), (true, 2 | 3) | (false, 3))
    }

    /// Whether the cell must flip on this tick
    pub const fn flips(self, neighbors: u8) -> bool {
        self.next_state(neighbors) != self.alive
    }
}
