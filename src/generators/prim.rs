use crate::{maze::Grid, rng::RandomSource};

/// Simplified Prim: grow from a random visited cell, chosen by rejection sampling
/// instead of a frontier set.
pub fn simplified_prim(grid: &mut Grid, rng: &mut RandomSource) {
    let start = rng.below(grid.len());
    grid[start].visited = true;
    let mut visited = vec![start];

    while visited.len() != grid.len() {
        // Randomly select a cell from the carved part
        let cell = visited[rng.below(visited.len())];
        let candidates = grid.neighbor_candidates(cell);
        let Some((direction, neighbor)) = rng.choose_direction(candidates, |n| !grid[n].visited)
        else {
            // No unvisited neighbors, retry with another cell
            continue;
        };

        grid.connect(cell, direction);
        grid[neighbor].visited = true;
        visited.push(neighbor);
    }
}
