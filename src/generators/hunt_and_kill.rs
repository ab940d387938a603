use crate::{maze::Grid, rng::RandomSource};

pub fn hunt_and_kill(grid: &mut Grid, rng: &mut RandomSource) {
    let mut current = rng.below(grid.len());
    grid[current].visited = true;

    loop {
        // Kill: random walk through unvisited cells
        let candidates = grid.neighbor_candidates(current);
        if let Some((direction, neighbor)) = rng.choose_direction(candidates, |n| !grid[n].visited)
        {
            grid.connect(current, direction);
            grid[neighbor].visited = true;
            current = neighbor;
            continue;
        }

        // Hunt: first unvisited cell in row-major order that touches the carved part
        match hunt(grid, rng) {
            Some(cell) => current = cell,
            None => return,
        }
    }
}

/// Join the first unvisited cell with a visited neighbor to one of those neighbors.
/// Returns the joined cell, or `None` if every reachable cell is already visited.
fn hunt(grid: &mut Grid, rng: &mut RandomSource) -> Option<usize> {
    for cell in 0..grid.len() {
        if grid[cell].visited {
            continue;
        }
        let candidates = grid.neighbor_candidates(cell);
        if let Some((direction, _)) = rng.choose_direction(candidates, |n| grid[n].visited) {
            grid.connect(cell, direction);
            grid[cell].visited = true;
            return Some(cell);
        }
    }
    None
}
