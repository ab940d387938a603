pub mod cell;
mod display;
mod grid;

pub use cell::{Cell, Direction, Edge};
pub use grid::Grid;

use crate::{
    analysis::{self, Traversal},
    config::MazeConfig,
    editor,
    generators::{Generator, generate_maze},
    rng::RandomSource,
};

/// Which endpoint a selection sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    End,
}

/// A maze instance: the grid plus everything a front end needs around it.
///
/// Each instance owns its grid, traversal buffers and random source, so separate
/// instances can run on separate threads without sharing anything.
pub struct Maze {
    grid: Grid,
    config: MazeConfig,
    cell_size: u32,
    rng: RandomSource,
    traversal: Traversal,
    start: Option<usize>,
    end: Option<usize>,
    path_found: bool,
    generator: Option<Generator>,
}

impl Maze {
    /// Creates a maze laid out by `config`, with all walls up.
    ///
    /// # Panics
    /// If `config.cell_size` is not accepted by `config` itself.
    pub fn new(config: MazeConfig, seed: Option<u64>) -> Self {
        let Some((width, height)) = config.dimensions(config.cell_size) else {
            panic!(
                "Initial cell size {} does not fit a {}x{} surface within [{}, {}]",
                config.cell_size,
                config.outer_width,
                config.outer_height,
                config.min_cell_size,
                config.max_cell_size
            );
        };
        Maze {
            grid: Grid::new(width, height),
            config,
            cell_size: config.cell_size,
            rng: RandomSource::new(seed),
            traversal: Traversal::new(),
            start: None,
            end: None,
            path_found: false,
            generator: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Width of the maze in cells.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height of the maze in cells.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn start(&self) -> Option<usize> {
        self.start
    }

    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Generator that produced the current maze, if any.
    pub fn generator(&self) -> Option<Generator> {
        self.generator
    }

    /// Traversal buffers of the last path query.
    pub fn traversal(&self) -> &Traversal {
        &self.traversal
    }

    /// Carve a new maze. Selection and path state are cleared first.
    pub fn generate(&mut self, generator: Generator) {
        self.reset();
        generate_maze(&mut self.grid, generator, &mut self.rng);
        self.generator = Some(generator);
        tracing::info!(
            "[maze] generated {}x{} maze with {}",
            self.width(),
            self.height(),
            generator
        );
    }

    /// Clears all edges, flags, selection and traversal state.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.traversal.clear();
        self.start = None;
        self.end = None;
        self.path_found = false;
        self.generator = None;
    }

    /// Change the cell size, rebuilding the grid.
    ///
    /// Returns `false` and changes nothing if the size does not divide both outer
    /// dimensions or lies outside the configured bounds.
    pub fn set_cell_size(&mut self, size: u32) -> bool {
        let Some((width, height)) = self.config.dimensions(size) else {
            tracing::debug!("[maze] rejected cell size {}", size);
            return false;
        };
        self.cell_size = size;
        self.grid.rebuild(width, height);
        self.reset();
        tracing::info!(
            "[maze] cell size {} gives a {}x{} grid",
            size,
            width,
            height
        );
        true
    }

    /// Toggle `index` as the start or end cell, then recompute the shortest path.
    ///
    /// Selecting the cell already held by the same role clears that role. Selecting
    /// the cell held by the other role is ignored. Returns whether a path between
    /// start and end currently exists.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn select(&mut self, index: usize, role: Role) -> bool {
        assert!(
            index < self.grid.len(),
            "Cell index {} is out of bounds for a grid of {} cells",
            index,
            self.grid.len()
        );
        let (slot, other) = match role {
            Role::Start => (&mut self.start, self.end),
            Role::End => (&mut self.end, self.start),
        };
        if other == Some(index) {
            return self.path_found;
        }
        if *slot == Some(index) {
            *slot = None;
            self.path_found = false;
            tracing::debug!("[maze] cleared {:?} selection", role);
            return false;
        }
        *slot = Some(index);
        tracing::debug!("[maze] selected cell {} as {:?}", index, role);
        self.find_shortest_path()
    }

    /// Shortest path between the selected cells. Returns `false` if either is unset
    /// or they are not connected.
    pub fn find_shortest_path(&mut self) -> bool {
        self.path_found = self
            .traversal
            .shortest_path(&mut self.grid, self.start, self.end);
        self.path_found
    }

    /// Select the endpoints of a longest path of the maze as start and end.
    ///
    /// Returns `false` (with the selection cleared) when the maze has no two distinct
    /// endpoints, e.g. a single cell or an ungenerated grid.
    pub fn find_longest_path(&mut self) -> bool {
        self.start = None;
        self.end = None;
        self.path_found = false;

        let Some((start, end)) =
            analysis::longest_path(&mut self.grid, &mut self.traversal, &mut self.rng)
        else {
            tracing::debug!("[maze] no longest path");
            return false;
        };
        tracing::info!(
            "[maze] longest path {} -> {}, length {}",
            start,
            end,
            self.traversal.distance(end)
        );
        self.start = Some(start);
        self.end = Some(end);
        self.find_shortest_path();
        true
    }

    /// Cycle search over the component of `start`, or of a random cell.
    pub fn detect_cycle(&mut self, start: Option<usize>) -> bool {
        analysis::detect_cycle(&mut self.grid, start, &mut self.rng)
    }

    /// Checks that the current edges form a spanning tree.
    pub fn is_perfect(&mut self) -> bool {
        analysis::is_perfect_maze(&mut self.grid, &mut self.rng)
    }

    /// Open the wall from `index` towards `direction` unless that closes a cycle.
    /// See [`editor::try_connect`].
    pub fn edit_connect(&mut self, index: usize, direction: Direction) -> bool {
        let connected = editor::try_connect(&mut self.grid, index, direction, &mut self.rng);
        if connected {
            self.refresh_path();
        }
        connected
    }

    /// Open the wall between two adjacent cells unless that closes a cycle.
    /// Returns `false` if the cells are not adjacent.
    pub fn edit_connect_between(&mut self, from: usize, to: usize) -> bool {
        match self.grid.direction_between(from, to) {
            Some(direction) => self.edit_connect(from, direction),
            None => false,
        }
    }

    /// Put the wall back from `index` towards `direction`.
    pub fn edit_disconnect(&mut self, index: usize, direction: Direction) -> bool {
        let removed = editor::disconnect(&mut self.grid, index, direction);
        if removed {
            self.refresh_path();
        }
        removed
    }

    /// Checks if there is a wall on the given side of a cell.
    pub fn has_wall(&self, index: usize, direction: Direction) -> bool {
        self.grid[index].is_wall(direction)
    }

    /// Whether the last path query found a path between start and end.
    pub fn path_found(&self) -> bool {
        self.path_found
    }

    /// Cells of the current path, from end back to start.
    pub fn path(&self) -> Option<Vec<usize>> {
        if !self.path_found {
            return None;
        }
        let end = self.end?;
        Some(self.traversal.chain_from(end))
    }

    /// Cell under a point of the outer surface. The point is clamped onto the surface first.
    pub fn cell_at(&self, x: i64, y: i64) -> usize {
        let size = self.cell_size as i64;
        let x = x.clamp(0, self.config.outer_width as i64 - size);
        let y = y.clamp(0, self.config.outer_height as i64 - size);
        self.grid
            .cell_index(((x / size) as usize, (y / size) as usize))
    }

    /// Pixel rectangle `(x, y, width, height)` of a cell on the outer surface.
    pub fn cell_rect(&self, index: usize) -> (u32, u32, u32, u32) {
        let (x, y) = self.grid.position(index);
        (
            x as u32 * self.cell_size,
            y as u32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Edits change the graph, so a displayed path may no longer be valid.
    fn refresh_path(&mut self) {
        if self.start.is_some() && self.end.is_some() {
            self.find_shortest_path();
        }
    }
}
