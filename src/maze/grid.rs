use super::cell::{Cell, Direction};

/// Arena of cells in row-major order.
///
/// Neighbor geometry is computed from coordinates only; edge state lives in the
/// cells and is always written on both sides at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a grid of `width * height` walled, unvisited cells.
    ///
    /// # Panics
    /// If either dimension is 0.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "Grid dimensions must be non-zero, got {}x{}",
            width,
            height
        );
        Grid {
            cells: vec![Cell::default(); width * height].into_boxed_slice(),
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major index of the cell at `(x, y)`.
    ///
    /// # Panics
    /// If the position is out of bounds.
    pub fn cell_index(&self, (x, y): (usize, usize)) -> usize {
        if x >= self.width || y >= self.height {
            panic!(
                "Position ({}, {}) is out of bounds for a {}x{} grid",
                x, y, self.width, self.height
            );
        }
        y * self.width + x
    }

    /// Column and row of the cell at `index`.
    pub fn position(&self, index: usize) -> (usize, usize) {
        self.check_index(index);
        (index % self.width, index / self.width)
    }

    /// Geometric neighbor of `index` in `direction`, ignoring edge state.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let (x, y) = self.position(index);
        match direction {
            Direction::Left => (x > 0).then(|| index - 1),
            Direction::Right => (x + 1 < self.width).then(|| index + 1),
            Direction::Top => (y > 0).then(|| index - self.width),
            Direction::Bottom => (y + 1 < self.height).then(|| index + self.width),
        }
    }

    /// All four geometric neighbors of `index`, indexed by [`Direction::index`].
    pub fn neighbor_candidates(&self, index: usize) -> [Option<usize>; 4] {
        Direction::ALL.map(|direction| self.neighbor(index, direction))
    }

    /// Direction leading from `from` to `to` if they are geometrically adjacent.
    pub fn direction_between(&self, from: usize, to: usize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.neighbor(from, direction) == Some(to))
    }

    /// Checks if the edge from `index` in `direction` is active.
    pub fn is_connected(&self, index: usize, direction: Direction) -> bool {
        !self[index].is_wall(direction)
    }

    /// Indices of the cells `index` has an active edge to.
    pub fn connected_neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self[index].connected_neighbors()
    }

    /// Activates the edge from `index` in `direction` and its inverse.
    ///
    /// Returns `false` (and changes nothing) if there is no neighbor in that direction.
    pub fn connect(&mut self, index: usize, direction: Direction) -> bool {
        let Some(neighbor) = self.neighbor(index, direction) else {
            return false;
        };
        self.cells[index].set_destination(direction, Some(neighbor));
        self.cells[neighbor].set_destination(direction.opposite(), Some(index));
        true
    }

    /// Clears the edge from `index` in `direction` and its inverse.
    ///
    /// Returns `true` if an active edge was removed.
    pub fn disconnect(&mut self, index: usize, direction: Direction) -> bool {
        let Some(neighbor) = self.neighbor(index, direction) else {
            return false;
        };
        let was_connected = self.is_connected(index, direction);
        self.cells[index].set_destination(direction, None);
        self.cells[neighbor].set_destination(direction.opposite(), None);
        was_connected
    }

    /// Number of active undirected edges.
    pub fn active_edge_count(&self) -> usize {
        // Count each undirected edge once, from its left/top end
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&d| !cell.is_wall(d))
                    .count()
            })
            .sum()
    }

    /// Checks that every active edge has an active inverse pointing back.
    pub fn edges_are_symmetric(&self) -> bool {
        (0..self.len()).all(|index| {
            Direction::ALL.into_iter().all(|direction| {
                match self[index].edge(direction).destination {
                    None => true,
                    Some(neighbor) => {
                        self.neighbor(index, direction) == Some(neighbor)
                            && self[neighbor].edge(direction.opposite()).destination
                                == Some(index)
                    }
                }
            })
        })
    }

    /// Clears every edge and flag.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Clears the `visited` flag of every cell.
    pub fn clear_visited(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.visited = false);
    }

    /// Reallocates the cell array for new dimensions. All edges and flags are cleared.
    pub fn rebuild(&mut self, width: usize, height: usize) {
        *self = Grid::new(width, height);
    }

    fn check_index(&self, index: usize) {
        if index >= self.cells.len() {
            panic!(
                "Cell index {} is out of bounds for a grid of {} cells",
                index,
                self.cells.len()
            );
        }
    }
}

impl std::ops::Index<usize> for Grid {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        self.check_index(index);
        &self.cells[index]
    }
}

impl std::ops::IndexMut<usize> for Grid {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.check_index(index);
        &mut self.cells[index]
    }
}
