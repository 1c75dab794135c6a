//! Greedy nearest-pair room connection in two passes.

use log::{debug, warn};

use crate::types::{Pos, squared_distance};

use super::carve::carve_passage;
use super::grid::CaveGrid;
use super::rooms::RoomGraph;

struct PassagePlan {
    distance: i64,
    room_a: usize,
    room_b: usize,
    tile_a: Pos,
    tile_b: Pos,
}

/// Connects every room until all of them reach the main room.
///
/// The first pass gives each still-isolated room its closest partner; the
/// second pass repeatedly bridges the closest (unreachable, reachable) pair
/// until the reachable set covers the whole graph. The second pass may add a
/// passage that is redundant with transitive connectivity; that extra density
/// is part of the layout's look and is kept on purpose.
pub(super) fn connect_rooms(grid: &mut CaveGrid, graph: &mut RoomGraph, radius: i32) {
    if graph.is_empty() {
        return;
    }
    link_isolated_rooms(grid, graph, radius);
    while bridge_to_main(grid, graph, radius) {}
}

/// For every room with no connection yet, carves the globally closest
/// edge-tile pair to any other room it is not already connected to.
fn link_isolated_rooms(grid: &mut CaveGrid, graph: &mut RoomGraph, radius: i32) {
    for room_a in 0..graph.len() {
        if !graph.room(room_a).connected.is_empty() {
            continue;
        }
        let candidates: Vec<usize> = (0..graph.len()).collect();
        if let Some(plan) = closest_pair(graph, room_a, &candidates) {
            carve(grid, graph, &plan, radius);
        }
    }
}

/// One force-reachability round: carves the single closest pair between the
/// not-yet-reachable and reachable partitions. Returns whether a passage was
/// carved; every carve moves at least one room into the reachable set, so the
/// rounds are bounded by the room count.
fn bridge_to_main(grid: &mut CaveGrid, graph: &mut RoomGraph, radius: i32) -> bool {
    let mut unreachable = Vec::new();
    let mut reachable = Vec::new();
    for index in 0..graph.len() {
        if graph.room(index).reachable_from_main {
            reachable.push(index);
        } else {
            unreachable.push(index);
        }
    }

    let mut best: Option<PassagePlan> = None;
    for &room_a in &unreachable {
        if let Some(plan) = closest_pair_against(graph, room_a, &reachable, best.take()) {
            best = Some(plan);
        }
    }

    match best {
        Some(plan) => {
            carve(grid, graph, &plan, radius);
            true
        }
        None => false,
    }
}

/// Closest edge-tile pair from `room_a` to any room in `candidates`,
/// starting from a fresh best.
fn closest_pair(graph: &RoomGraph, room_a: usize, candidates: &[usize]) -> Option<PassagePlan> {
    closest_pair_against(graph, room_a, candidates, None)
}

/// Scans all edge-tile pairs between `room_a` and `candidates`, improving on
/// `best` only with a strictly smaller squared distance, so the first pair
/// found at a given distance wins and the scan order decides ties.
fn closest_pair_against(
    graph: &RoomGraph,
    room_a: usize,
    candidates: &[usize],
    mut best: Option<PassagePlan>,
) -> Option<PassagePlan> {
    if graph.room(room_a).edge_tiles.is_empty() {
        warn!("room {room_a} has no edge tiles and cannot be connected");
        return best;
    }

    for &room_b in candidates {
        if room_a == room_b || graph.is_connected(room_a, room_b) {
            continue;
        }
        for &tile_a in &graph.room(room_a).edge_tiles {
            for &tile_b in &graph.room(room_b).edge_tiles {
                let distance = squared_distance(tile_a, tile_b);
                let replace = match &best {
                    None => true,
                    Some(plan) => distance < plan.distance,
                };
                if replace {
                    best = Some(PassagePlan { distance, room_a, room_b, tile_a, tile_b });
                }
            }
        }
    }
    best
}

fn carve(grid: &mut CaveGrid, graph: &mut RoomGraph, plan: &PassagePlan, radius: i32) {
    graph.connect(plan.room_a, plan.room_b);
    carve_passage(grid, plan.tile_a, plan.tile_b, radius);
    debug!(
        "carved passage between rooms {} and {} ({:?} -> {:?})",
        plan.room_a, plan.room_b, plan.tile_a, plan.tile_b
    );
}
