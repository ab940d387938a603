use crate::{maze::Grid, rng::RandomSource};

/// Disjoint sets with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            sets: size,
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Number of disjoint sets remaining.
    fn sets(&self) -> usize {
        self.sets
    }
}

/// Draw random (cell, direction) pairs and join them whenever they sit in different sets.
/// Pairs are drawn with replacement, so an already-joined pair may come up again and be rejected.
pub fn randomized_kruskal(grid: &mut Grid, rng: &mut RandomSource) {
    let mut sets = UnionFind::new(grid.len());

    while sets.sets() > 1 {
        let cell = rng.below(grid.len());
        let candidates = grid.neighbor_candidates(cell);
        let Some((direction, neighbor)) = rng.choose_direction(candidates, |_| true) else {
            unreachable!("a grid with more than one cell gives every cell a neighbor");
        };

        // If cells are not yet connected, remove the wall between them
        if sets.unite(cell, neighbor) {
            grid.connect(cell, direction);
            grid[cell].visited = true;
            grid[neighbor].visited = true;
        }
    }
}
