//! Graph queries over the active edges of a [`Grid`].

mod bfs;
mod cycle;

pub use bfs::Traversal;
pub use cycle::detect_cycle;

use crate::{maze::Grid, rng::RandomSource};

/// Endpoints of a longest path, found with two breadth-first sweeps.
///
/// The first sweep starts from a random cell, the second from the farthest cell of
/// the first. This gives the exact diameter only because the grid holds a tree.
/// Returns `None` if both sweeps end on the same cell.
pub fn longest_path(
    grid: &mut Grid,
    traversal: &mut Traversal,
    rng: &mut RandomSource,
) -> Option<(usize, usize)> {
    traversal.breadth_first_search(grid, None, rng);
    let start = traversal.farthest()?;
    traversal.breadth_first_search(grid, Some(start), rng);
    let end = traversal.farthest()?;
    (start != end).then_some((start, end))
}

/// Checks that the active edges form a spanning tree: `len - 1` edges, every cell
/// reachable, no cycle.
pub fn is_perfect_maze(grid: &mut Grid, rng: &mut RandomSource) -> bool {
    if grid.active_edge_count() + 1 != grid.len() || !grid.edges_are_symmetric() {
        return false;
    }
    let mut traversal = Traversal::new();
    traversal.breadth_first_search(grid, Some(0), rng);
    traversal.reached() == grid.len() && !detect_cycle(grid, Some(0), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze};
    use crate::maze::Direction;

    #[test]
    fn test_longest_path_on_corridor() {
        // A single row is one corridor: the diameter joins both ends
        let mut grid = Grid::new(6, 1);
        (0..5).for_each(|i| {
            grid.connect(i, Direction::Right);
        });
        let mut traversal = Traversal::new();
        let mut rng = RandomSource::seeded(1);
        let (start, end) = longest_path(&mut grid, &mut traversal, &mut rng).unwrap();
        assert_eq!((start.min(end), start.max(end)), (0, 5));
        assert_eq!(traversal.distance(end), 5);
    }

    #[test]
    fn test_longest_path_single_cell() {
        let mut grid = Grid::new(1, 1);
        let mut traversal = Traversal::new();
        let mut rng = RandomSource::seeded(1);
        assert_eq!(longest_path(&mut grid, &mut traversal, &mut rng), None);
    }

    #[test]
    fn test_longest_path_is_the_diameter() {
        let mut rng = RandomSource::seeded(77);
        let mut traversal = Traversal::new();
        for generator in Generator::ALL {
            let mut grid = Grid::new(7, 5);
            generate_maze(&mut grid, generator, &mut rng);
            let (start, end) = longest_path(&mut grid, &mut traversal, &mut rng).unwrap();
            let found = traversal.distance(end);

            // Eccentricity of every cell, by brute force
            let diameter = (0..grid.len())
                .map(|cell| {
                    traversal.breadth_first_search(&mut grid, Some(cell), &mut rng);
                    traversal.distances().iter().copied().max().unwrap_or(0)
                })
                .max()
                .unwrap();
            assert_eq!(found, diameter, "{}", generator);

            assert!(traversal.shortest_path(&mut grid, Some(start), Some(end)));
            assert_eq!(traversal.chain_from(end).len(), diameter + 1);
        }
    }

    #[test]
    fn test_is_perfect_maze() {
        let mut rng = RandomSource::seeded(3);
        let mut grid = Grid::new(4, 3);
        assert!(!is_perfect_maze(&mut grid, &mut rng));
        generate_maze(&mut grid, Generator::Prim, &mut rng);
        assert!(is_perfect_maze(&mut grid, &mut rng));

        // Removing any tree edge disconnects the maze
        let (cell, direction) = (0..grid.len())
            .flat_map(|cell| Direction::ALL.map(|direction| (cell, direction)))
            .find(|&(cell, direction)| grid.is_connected(cell, direction))
            .unwrap();
        grid.disconnect(cell, direction);
        assert!(!is_perfect_maze(&mut grid, &mut rng));

        let mut single = Grid::new(1, 1);
        assert!(is_perfect_maze(&mut single, &mut rng));
    }
}
