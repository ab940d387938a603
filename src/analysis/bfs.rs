use std::collections::VecDeque;

use crate::{maze::Grid, rng::RandomSource};

/// Distance and predecessor maps of the last breadth-first traversal.
///
/// Buffers are reused between calls and resized to the grid on each call.
/// Cells the traversal did not reach keep distance 0 and no predecessor, so a
/// distance of 0 only means "root" for the root itself.
#[derive(Debug, Default, Clone)]
pub struct Traversal {
    predecessors: Vec<Option<usize>>,
    distances: Vec<usize>,
    root: Option<usize>,
}

impl Traversal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last traversal.
    pub fn clear(&mut self) {
        self.predecessors.clear();
        self.distances.clear();
        self.root = None;
    }

    /// Root of the last traversal.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn distances(&self) -> &[usize] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    pub fn distance(&self, index: usize) -> usize {
        self.distances.get(index).copied().unwrap_or(0)
    }

    pub fn predecessor(&self, index: usize) -> Option<usize> {
        self.predecessors.get(index).copied().flatten()
    }

    /// Number of cells reached by the last traversal, root included.
    pub fn reached(&self) -> usize {
        match self.root {
            None => 0,
            Some(_) => 1 + self.predecessors.iter().flatten().count(),
        }
    }

    /// Cell with the greatest distance. Ties go to the lowest index.
    pub fn farthest(&self) -> Option<usize> {
        self.distances
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, usize)>, (index, &distance)| match best {
                Some((_, best_distance)) if best_distance >= distance => best,
                _ => Some((index, distance)),
            })
            .map(|(index, _)| index)
    }

    /// Chain of cells from `end` back to the traversal root, both included.
    /// Stops early if the chain breaks, which happens when `end` was not reached.
    pub fn chain_from(&self, end: usize) -> Vec<usize> {
        let mut chain = vec![end];
        let mut current = end;
        while Some(current) != self.root {
            match self.predecessor(current) {
                Some(previous) => {
                    chain.push(previous);
                    current = previous;
                }
                None => break,
            }
        }
        chain
    }

    fn prepare(&mut self, grid: &mut Grid, root: usize) {
        grid.clear_visited();
        self.predecessors.clear();
        self.predecessors.resize(grid.len(), None);
        self.distances.clear();
        self.distances.resize(grid.len(), 0);
        self.root = Some(root);
    }

    /// Breadth-first traversal over active edges from `start`, or from a random cell if `None`.
    /// Returns the root used.
    pub fn breadth_first_search(
        &mut self,
        grid: &mut Grid,
        start: Option<usize>,
        rng: &mut RandomSource,
    ) -> usize {
        let root = start.unwrap_or_else(|| rng.below(grid.len()));
        self.search(grid, root, None);
        root
    }

    /// Breadth-first search from `start` that stops as soon as `end` is dequeued.
    ///
    /// Returns `true` if `end` is reachable; the predecessor map then leads from `end`
    /// back to `start`. Returns `false` immediately if either endpoint is unset.
    pub fn shortest_path(
        &mut self,
        grid: &mut Grid,
        start: Option<usize>,
        end: Option<usize>,
    ) -> bool {
        match (start, end) {
            (Some(start), Some(end)) => self.search(grid, start, Some(end)),
            _ => false,
        }
    }

    fn search(&mut self, grid: &mut Grid, root: usize, target: Option<usize>) -> bool {
        self.prepare(grid, root);
        grid[root].visited = true;
        let mut queue = VecDeque::from([root]);

        while let Some(current) = queue.pop_front() {
            if Some(current) == target {
                return true;
            }
            let next_distance = self.distances[current] + 1;
            let neighbors = grid.connected_neighbors(current).collect::<Vec<_>>();
            for neighbor in neighbors {
                if grid[neighbor].visited {
                    continue;
                }
                grid[neighbor].visited = true;
                self.predecessors[neighbor] = Some(current);
                self.distances[neighbor] = next_distance;
                queue.push_back(neighbor);
            }
        }
        false
    }
}
