use crate::{maze::Grid, rng::RandomSource};

/// Wilson's algorithm: loop-erased random walks grafted onto a growing tree.
///
/// The walk marks its cells `seen`. Stepping onto a `seen` cell erases the loop
/// back to it, stepping onto a `visited` (tree) cell commits the walk. Erasing
/// loops before committing is what keeps the result acyclic.
pub fn wilson(grid: &mut Grid, rng: &mut RandomSource) {
    let target = rng.below(grid.len());
    grid[target].visited = true;
    let mut unvisited = grid.len() - 1;
    let mut walk: Vec<usize> = Vec::new();

    while unvisited != 0 {
        let Some(&current) = walk.last() else {
            // Start a new walk from a random cell outside the tree
            let mut start = rng.below(grid.len());
            while grid[start].visited {
                start = rng.below(grid.len());
            }
            grid[start].seen = true;
            walk.push(start);
            continue;
        };

        let candidates = grid.neighbor_candidates(current);
        let Some((_, next)) = rng.choose_direction(candidates, |_| true) else {
            unreachable!("a grid with more than one cell gives every cell a neighbor");
        };

        if grid[next].visited {
            walk.push(next);
            unvisited -= commit_walk(grid, &walk);
            walk.clear();
        } else if grid[next].seen {
            // Erase the loop
            while let Some(&last) = walk.last() {
                if last == next {
                    break;
                }
                grid[last].seen = false;
                walk.pop();
            }
        } else {
            grid[next].seen = true;
            walk.push(next);
        }
    }
}

/// Connect consecutive cells of a walk ending on the tree.
/// Returns the number of cells added to the tree.
fn commit_walk(grid: &mut Grid, walk: &[usize]) -> usize {
    for pair in walk.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if let Some(direction) = grid.direction_between(from, to) {
            grid.connect(from, direction);
        }
        grid[from].visited = true;
        grid[from].seen = false;
    }
    if let Some(&last) = walk.last() {
        grid[last].seen = false;
    }
    walk.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    #[test]
    fn test_commit_walk() {
        let mut grid = Grid::new(3, 1);
        grid[2].visited = true;
        grid[0].seen = true;
        grid[1].seen = true;
        grid[2].seen = true;
        assert_eq!(commit_walk(&mut grid, &[0, 1, 2]), 2);
        assert!(grid.is_connected(0, Direction::Right));
        assert!(grid.is_connected(1, Direction::Right));
        assert!(grid.cells().iter().all(|cell| cell.visited && !cell.seen));
    }

    #[test]
    fn test_wilson_visits_all_cells() {
        let mut grid = Grid::new(10, 6);
        let mut rng = RandomSource::seeded(3);
        wilson(&mut grid, &mut rng);
        assert!(grid.cells().iter().all(|cell| cell.visited && !cell.seen));
        assert_eq!(grid.active_edge_count(), 59);
    }

    #[test]
    fn test_wilson_covers_every_spanning_tree_of_2x2() {
        // A 2x2 grid has exactly 4 spanning trees, each drops one of the 4 edges
        let mut missing = std::collections::HashSet::new();
        let mut rng = RandomSource::seeded(17);
        for _ in 0..200 {
            let mut grid = Grid::new(2, 2);
            wilson(&mut grid, &mut rng);
            let absent = [
                (0, Direction::Right),
                (0, Direction::Bottom),
                (1, Direction::Bottom),
                (2, Direction::Right),
            ]
            .into_iter()
            .filter(|&(cell, direction)| !grid.is_connected(cell, direction))
            .collect::<Vec<_>>();
            assert_eq!(absent.len(), 1);
            missing.insert(absent[0]);
        }
        assert_eq!(missing.len(), 4);
    }
}
