use crate::{maze::Grid, rng::RandomSource};

pub fn recursive_backtrack(grid: &mut Grid, rng: &mut RandomSource) {
    // Initialize the starting point
    let start = rng.below(grid.len());
    grid[start].visited = true;

    // The stack keeps only visited cells
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let candidates = grid.neighbor_candidates(cell);
        match rng.choose_direction(candidates, |n| !grid[n].visited) {
            Some((direction, neighbor)) => {
                grid.connect(cell, direction);
                grid[neighbor].visited = true;
                // Carve the maze in that neighbor's direction
                stack.push(neighbor);
            }
            None => {
                // Dead end, backtrack
                stack.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursive_backtrack_visits_all_cells() {
        let mut grid = Grid::new(7, 7);
        let mut rng = RandomSource::seeded(0);
        recursive_backtrack(&mut grid, &mut rng);
        assert!(grid.cells().iter().all(|cell| cell.visited));
        assert_eq!(grid.active_edge_count(), 48);
    }
}
