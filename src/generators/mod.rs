mod hunt_and_kill;
mod kruskal;
mod prim;
mod recur_backtrack;
mod wilson;

use hunt_and_kill::hunt_and_kill;
use kruskal::randomized_kruskal;
use prim::simplified_prim;
use recur_backtrack::recursive_backtrack;
use wilson::wilson;

use crate::{maze::Grid, rng::RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    RecurBacktrack,
    HuntAndKill,
    Wilson,
    Kruskal,
    Prim,
}

impl Generator {
    pub const ALL: [Generator; 5] = [
        Generator::RecurBacktrack,
        Generator::HuntAndKill,
        Generator::Wilson,
        Generator::Kruskal,
        Generator::Prim,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker"),
            Generator::HuntAndKill => write!(f, "Hunt and Kill"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::Kruskal => write!(f, "Randomized Kruskal's Algorithm"),
            Generator::Prim => write!(f, "Prim's Simplified Algorithm"),
        }
    }
}

/// Reset the grid and carve a spanning tree over all of its cells with the given algorithm.
pub fn generate_maze(grid: &mut Grid, generator: Generator, rng: &mut RandomSource) {
    tracing::debug!(
        "[generate] {} on a {}x{} grid",
        generator,
        grid.width(),
        grid.height()
    );
    grid.reset();
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(grid, rng),
        Generator::HuntAndKill => hunt_and_kill(grid, rng),
        Generator::Wilson => wilson(grid, rng),
        Generator::Kruskal => randomized_kruskal(grid, rng),
        Generator::Prim => simplified_prim(grid, rng),
    }
    tracing::debug!(
        "[generate] {} done, {} active edges over {} cells",
        generator,
        grid.active_edge_count(),
        grid.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Traversal, detect_cycle};

    fn assert_spanning_tree(grid: &mut Grid, generator: Generator, seed: u64) {
        let mut rng = RandomSource::seeded(seed);
        assert_eq!(
            grid.active_edge_count(),
            grid.len() - 1,
            "{} on {}x{} (seed {})",
            generator,
            grid.width(),
            grid.height(),
            seed
        );
        assert!(grid.edges_are_symmetric());
        assert!(!detect_cycle(grid, Some(0), &mut rng));
        let mut traversal = Traversal::default();
        traversal.breadth_first_search(grid, Some(0), &mut rng);
        assert_eq!(traversal.reached(), grid.len());
        assert!(grid.cells().iter().all(|cell| !cell.seen));
    }

    #[test]
    fn test_all_generators_produce_spanning_trees() {
        let sizes = [(1, 1), (1, 7), (6, 1), (2, 2), (4, 4), (9, 5), (15, 10)];
        for generator in Generator::ALL {
            for &(width, height) in &sizes {
                for seed in 0..4 {
                    let mut grid = Grid::new(width, height);
                    let mut rng = RandomSource::seeded(seed);
                    generate_maze(&mut grid, generator, &mut rng);
                    assert_spanning_tree(&mut grid, generator, seed);
                }
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        for generator in Generator::ALL {
            let mut first = Grid::new(12, 8);
            let mut second = Grid::new(12, 8);
            generate_maze(&mut first, generator, &mut RandomSource::seeded(2024));
            generate_maze(&mut second, generator, &mut RandomSource::seeded(2024));
            assert_eq!(first, second, "{} is not reproducible", generator);
        }
    }

    #[test]
    fn test_generation_resets_previous_state() {
        let mut grid = Grid::new(6, 6);
        let mut rng = RandomSource::seeded(5);
        for generator in Generator::ALL {
            generate_maze(&mut grid, generator, &mut rng);
            assert_spanning_tree(&mut grid, generator, 5);
        }
    }

    #[test]
    fn test_recursive_backtracker_4x4_seed_42() {
        let mut grid = Grid::new(4, 4);
        let mut rng = RandomSource::seeded(42);
        generate_maze(&mut grid, Generator::RecurBacktrack, &mut rng);
        assert_eq!(grid.active_edge_count(), 15);
        assert!(!detect_cycle(&mut grid, None, &mut rng));
        let mut traversal = Traversal::default();
        traversal.breadth_first_search(&mut grid, Some(0), &mut rng);
        assert_eq!(traversal.reached(), 16);
    }
}
