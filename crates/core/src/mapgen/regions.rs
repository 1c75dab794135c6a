//! Connected-component labeling over same-valued tiles.

use std::collections::VecDeque;

use crate::types::{Pos, TileKind};

use super::grid::CaveGrid;

/// All maximal 4-connected groups of `kind` tiles, in row-major discovery
/// order. Every matching tile lands in exactly one region.
pub(super) fn regions_of(grid: &CaveGrid, kind: TileKind) -> Vec<Vec<Pos>> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();
    for pos in grid.positions() {
        if !visited[grid.index(pos)] && grid.tile(pos) == kind {
            regions.push(flood_fill(grid, pos, kind, &mut visited));
        }
    }
    regions
}

/// Breadth-first fill from `start`; tiles are marked visited when queued so
/// no tile is expanded twice.
fn flood_fill(grid: &CaveGrid, start: Pos, kind: TileKind, visited: &mut [bool]) -> Vec<Pos> {
    let mut tiles = Vec::new();
    let mut queue = VecDeque::from([start]);
    visited[grid.index(start)] = true;

    while let Some(pos) = queue.pop_front() {
        tiles.push(pos);
        for neighbor in pos.axis_neighbors() {
            if !grid.in_bounds(neighbor) || visited[grid.index(neighbor)] {
                continue;
            }
            if grid.tile(neighbor) != kind {
                continue;
            }
            visited[grid.index(neighbor)] = true;
            queue.push_back(neighbor);
        }
    }
    tiles
}

/// Converts regions of `kind` smaller than `min_size` to the opposite tile
/// kind and returns the regions that survive.
pub(super) fn prune_regions(
    grid: &mut CaveGrid,
    kind: TileKind,
    min_size: usize,
) -> Vec<Vec<Pos>> {
    let mut survivors = Vec::new();
    for region in regions_of(grid, kind) {
        if region.len() < min_size {
            for pos in region {
                grid.set(pos, kind.opposite());
            }
        } else {
            survivors.push(region);
        }
    }
    survivors
}
