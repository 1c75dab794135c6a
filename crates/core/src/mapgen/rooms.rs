//! Room records and the connectivity graph built from surviving floor regions.

use std::collections::VecDeque;

use crate::types::{Pos, TileKind};

use super::grid::CaveGrid;

/// One surviving open region, wrapped with the data the connector needs.
pub(super) struct Room {
    pub(super) tiles: Vec<Pos>,
    pub(super) edge_tiles: Vec<Pos>,
    pub(super) connected: Vec<usize>,
    pub(super) is_main: bool,
    pub(super) reachable_from_main: bool,
}

impl Room {
    fn new(tiles: Vec<Pos>, grid: &CaveGrid) -> Self {
        // A tile is recorded once per solid axis-neighbor, so a tile wedged
        // into a corner appears more than once. The connector's tie-break
        // depends on that order, so no deduplication.
        let mut edge_tiles = Vec::new();
        for &tile in &tiles {
            for neighbor in tile.axis_neighbors() {
                if grid.tile(neighbor) == TileKind::Wall {
                    edge_tiles.push(tile);
                }
            }
        }
        Self {
            tiles,
            edge_tiles,
            connected: Vec::new(),
            is_main: false,
            reachable_from_main: false,
        }
    }

    pub(super) fn size(&self) -> usize {
        self.tiles.len()
    }
}

/// Rooms addressed by index with a symmetric connection relation and
/// transitive reachable-from-main propagation.
pub(super) struct RoomGraph {
    rooms: Vec<Room>,
}

impl RoomGraph {
    /// Wraps the regions as rooms, largest first. The sort is stable, so
    /// equally sized rooms keep their flood-fill discovery order and the
    /// first room is always the main one.
    pub(super) fn from_regions(grid: &CaveGrid, regions: &[Vec<Pos>]) -> Self {
        let mut rooms: Vec<Room> =
            regions.iter().map(|tiles| Room::new(tiles.clone(), grid)).collect();
        rooms.sort_by(|a, b| b.size().cmp(&a.size()));
        if let Some(main_room) = rooms.first_mut() {
            main_room.is_main = true;
            main_room.reachable_from_main = true;
        }
        Self { rooms }
    }

    pub(super) fn len(&self) -> usize {
        self.rooms.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub(super) fn room(&self, index: usize) -> &Room {
        &self.rooms[index]
    }

    pub(super) fn main_room(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.is_main)
    }

    pub(super) fn is_connected(&self, a: usize, b: usize) -> bool {
        self.rooms[a].connected.contains(&b)
    }

    /// Records the symmetric connection between `a` and `b`. If either side
    /// already reaches the main room, the other side's whole connected
    /// closure becomes reachable first.
    pub(super) fn connect(&mut self, a: usize, b: usize) {
        if self.rooms[a].reachable_from_main {
            self.mark_reachable(b);
        } else if self.rooms[b].reachable_from_main {
            self.mark_reachable(a);
        }
        self.rooms[a].connected.push(b);
        self.rooms[b].connected.push(a);
    }

    /// Iterative closure walk; the visited buffer keeps connection cycles
    /// from being reprocessed.
    fn mark_reachable(&mut self, start: usize) {
        let mut visited = vec![false; self.rooms.len()];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;

        while let Some(index) = queue.pop_front() {
            self.rooms[index].reachable_from_main = true;
            let neighbors = self.rooms[index].connected.clone();
            for neighbor in neighbors {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }
}
