/// Width of the outer drawing surface, in pixels.
pub const OUTER_WIDTH: u32 = 1920;
/// Height of the outer drawing surface, in pixels.
pub const OUTER_HEIGHT: u32 = 1280;
/// Smallest accepted cell size (inclusive).
pub const MIN_CELL_SIZE: u32 = 32;
/// Largest accepted cell size (inclusive).
pub const MAX_CELL_SIZE: u32 = 128;

/// Layout of the maze on its outer surface.
///
/// The grid dimensions are never stored: they are derived from the outer
/// dimensions and the cell size, which must divide both of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub outer_width: u32,
    pub outer_height: u32,
    pub min_cell_size: u32,
    pub max_cell_size: u32,
    /// Cell size the maze starts with.
    pub cell_size: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            outer_width: OUTER_WIDTH,
            outer_height: OUTER_HEIGHT,
            min_cell_size: MIN_CELL_SIZE,
            max_cell_size: MAX_CELL_SIZE,
            cell_size: MAX_CELL_SIZE,
        }
    }
}

impl MazeConfig {
    /// Checks whether `size` divides both outer dimensions and lies within the inclusive bounds.
    pub fn accepts(&self, size: u32) -> bool {
        size >= self.min_cell_size
            && size <= self.max_cell_size
            && size != 0
            && self.outer_width % size == 0
            && self.outer_height % size == 0
    }

    /// Grid dimensions (width, height) in cells for an accepted cell size.
    /// Returns `None` if the size is rejected.
    pub fn dimensions(&self, size: u32) -> Option<(usize, usize)> {
        self.accepts(size).then(|| {
            (
                (self.outer_width / size) as usize,
                (self.outer_height / size) as usize,
            )
        })
    }
}
