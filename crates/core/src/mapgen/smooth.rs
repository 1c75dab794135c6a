//! Majority-neighbor cellular smoothing passes.

use crate::types::{Pos, TileKind};

use super::grid::CaveGrid;

/// Applies `iterations` smoothing passes; zero passes leave the grid alone.
pub(super) fn smooth(grid: &mut CaveGrid, iterations: u32) {
    for _ in 0..iterations {
        smooth_once(grid);
    }
}

/// One pass of the majority rule. Every cell is decided from the pass input,
/// so a snapshot serves as the read buffer while the grid takes the writes.
fn smooth_once(grid: &mut CaveGrid) {
    let input = grid.clone();
    for pos in input.positions() {
        let solid_neighbors = solid_neighbor_count(&input, pos);
        if solid_neighbors > 4 {
            grid.set(pos, TileKind::Wall);
        } else if solid_neighbors < 4 {
            grid.set(pos, TileKind::Floor);
        }
        // exactly 4 keeps the input value
    }
}

/// Solid cells among the 8 neighbors; positions outside the grid count as
/// solid, the cell itself does not count.
fn solid_neighbor_count(grid: &CaveGrid, pos: Pos) -> u32 {
    let mut count = 0;
    for ny in (pos.y - 1)..=(pos.y + 1) {
        for nx in (pos.x - 1)..=(pos.x + 1) {
            if ny == pos.y && nx == pos.x {
                continue;
            }
            if grid.tile(Pos { y: ny, x: nx }) == TileKind::Wall {
                count += 1;
            }
        }
    }
    count
}
