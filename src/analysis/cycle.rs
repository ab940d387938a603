use crate::{maze::Grid, rng::RandomSource};

/// Iterative depth-first search for a cycle reachable from `start` (a random cell if `None`).
///
/// Every cell records the cell that discovered it. Meeting an already visited cell
/// that is not the current cell's discoverer means a second route exists, so a cycle
/// is reported. Only the component containing the start cell is inspected.
///
/// This check relies on each cell having a single discovering path, which holds for
/// the tree and near-tree structures the generators and the editor produce.
pub fn detect_cycle(grid: &mut Grid, start: Option<usize>, rng: &mut RandomSource) -> bool {
    grid.clear_visited();

    let root = start.unwrap_or_else(|| rng.below(grid.len()));
    let mut parents: Vec<Option<usize>> = vec![None; grid.len()];
    let mut discovering = vec![false; grid.len()];
    discovering[root] = true;
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        grid[current].visited = true;

        let neighbors = grid.connected_neighbors(current).collect::<Vec<_>>();
        for neighbor in neighbors {
            if parents[neighbor].is_none() && !grid[neighbor].visited {
                parents[neighbor] = Some(current);
            }

            if grid[neighbor].visited {
                if parents[current] != Some(neighbor) {
                    tracing::trace!(
                        "[analysis] cycle closed between cells {} and {}",
                        current,
                        neighbor
                    );
                    return true;
                }
            } else if !discovering[neighbor] {
                discovering[neighbor] = true;
                stack.push(neighbor);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze};
    use crate::maze::Direction;

    #[test]
    fn test_empty_grid_has_no_cycle() {
        let mut grid = Grid::new(3, 3);
        let mut rng = RandomSource::seeded(0);
        assert!(!detect_cycle(&mut grid, None, &mut rng));
    }

    #[test]
    fn test_square_is_a_cycle() {
        // 0 - 1
        // |   |
        // 2 - 3
        let mut grid = Grid::new(2, 2);
        grid.connect(0, Direction::Right);
        grid.connect(0, Direction::Bottom);
        grid.connect(1, Direction::Bottom);
        let mut rng = RandomSource::seeded(0);
        for start in 0..4 {
            assert!(!detect_cycle(&mut grid, Some(start), &mut rng));
        }
        grid.connect(2, Direction::Right);
        for start in 0..4 {
            assert!(detect_cycle(&mut grid, Some(start), &mut rng));
        }
    }

    #[test]
    fn test_generated_trees_have_no_cycle_from_any_start() {
        let mut grid = Grid::new(6, 5);
        let mut rng = RandomSource::seeded(12);
        for generator in Generator::ALL {
            generate_maze(&mut grid, generator, &mut rng);
            for start in 0..grid.len() {
                assert!(!detect_cycle(&mut grid, Some(start), &mut rng), "{}", generator);
            }
        }
    }

    #[test]
    fn test_extra_edge_in_tree_is_detected() {
        let mut grid = Grid::new(5, 5);
        let mut rng = RandomSource::seeded(4);
        generate_maze(&mut grid, Generator::Wilson, &mut rng);
        // Any wall between two cells of a spanning tree closes a cycle when removed
        let (cell, direction) = (0..grid.len())
            .flat_map(|cell| Direction::ALL.map(|direction| (cell, direction)))
            .find(|&(cell, direction)| {
                grid.neighbor(cell, direction).is_some() && !grid.is_connected(cell, direction)
            })
            .unwrap();
        grid.connect(cell, direction);
        assert!(detect_cycle(&mut grid, Some(cell), &mut rng));
        assert!(detect_cycle(&mut grid, None, &mut rng));
    }

    #[test]
    fn test_cycle_in_other_component_is_not_seen() {
        // Cycle on the left 2x2 block, isolated cell on the right
        let mut grid = Grid::new(3, 2);
        grid.connect(0, Direction::Right);
        grid.connect(0, Direction::Bottom);
        grid.connect(1, Direction::Bottom);
        grid.connect(3, Direction::Right);
        let mut rng = RandomSource::seeded(0);
        assert!(detect_cycle(&mut grid, Some(0), &mut rng));
        assert!(!detect_cycle(&mut grid, Some(5), &mut rng));
    }
}
