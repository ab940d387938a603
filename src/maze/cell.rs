use std::fmt;

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    /// All directions, in the order used for neighbor arrays.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];

    /// Position of this direction in neighbor and edge arrays.
    pub const fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Top => 2,
            Direction::Bottom => 3,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Top => write!(f, "top"),
            Direction::Bottom => write!(f, "bottom"),
        }
    }
}

/// A directed connection slot of a cell.
/// No destination means there is a wall on that side.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index of the connected neighbor cell.
    pub destination: Option<usize>,
    /// Reserved, no algorithm reads it.
    pub weight: i32,
}

/// A single maze cell: four edge slots plus per-run scratch flags.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    edges: [Edge; 4],
    /// Part of the structure being built or traversed.
    pub visited: bool,
    /// On the current loop-erased walk (Wilson's algorithm only).
    pub seen: bool,
    /// Reserved, no algorithm reads it.
    pub weight: i32,
}

impl Cell {
    pub fn edge(&self, direction: Direction) -> &Edge {
        &self.edges[direction.index()]
    }

    /// Checks if there is a wall on the given side of the cell.
    pub fn is_wall(&self, direction: Direction) -> bool {
        self.edges[direction.index()].destination.is_none()
    }

    /// Indices of the neighbors this cell has an active edge to.
    pub fn connected_neighbors(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().filter_map(|edge| edge.destination)
    }

    /// Only [`super::Grid`] writes edges, so both sides are always updated together.
    pub(super) fn set_destination(&mut self, direction: Direction, destination: Option<usize>) {
        self.edges[direction.index()].destination = destination;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(direction.index(), i);
        }
    }

    #[test]
    fn test_default_cell_is_walled() {
        let cell = Cell::default();
        assert!(Direction::ALL.into_iter().all(|d| cell.is_wall(d)));
        assert_eq!(cell.connected_neighbors().count(), 0);
        assert!(!cell.visited && !cell.seen);
    }
}
