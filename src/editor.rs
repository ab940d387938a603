//! Manual connectivity edits that never introduce a cycle.

use crate::{
    analysis::detect_cycle,
    maze::{Direction, Grid},
    rng::RandomSource,
};

/// Open the wall from `index` towards `direction`, unless that closes a cycle.
///
/// The edge is activated speculatively and a cycle search runs from the neighbor;
/// if one is found the edge is removed again, leaving the grid as it was.
///
/// Returns `true` if the edge was added. Returns `false` if there is no neighbor in
/// that direction, the edge is already active, or the edit was rolled back.
pub fn try_connect(
    grid: &mut Grid,
    index: usize,
    direction: Direction,
    rng: &mut RandomSource,
) -> bool {
    let Some(neighbor) = grid.neighbor(index, direction) else {
        return false;
    };
    if grid.is_connected(index, direction) {
        return false;
    }

    grid.connect(index, direction);
    if detect_cycle(grid, Some(neighbor), rng) {
        grid.disconnect(index, direction);
        tracing::debug!(
            "[editor] rejected {} -> {} ({}), it would close a cycle",
            index,
            neighbor,
            direction
        );
        return false;
    }
    tracing::debug!("[editor] connected {} -> {} ({})", index, neighbor, direction);
    true
}

/// Put a wall back between `index` and its neighbor in `direction`.
/// Returns `true` if an active edge was removed.
pub fn disconnect(grid: &mut Grid, index: usize, direction: Direction) -> bool {
    let removed = grid.disconnect(index, direction);
    if removed {
        tracing::debug!("[editor] disconnected {} ({})", index, direction);
    }
    removed
}
