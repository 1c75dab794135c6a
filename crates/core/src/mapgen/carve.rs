//! Straight-line passage rasterization and disk stamping.

use std::mem;

use crate::types::{Pos, TileKind};

use super::grid::CaveGrid;

/// Opens a passage between `from` and `to`: every point on the rasterized
/// segment gets a disk of `radius` stamped open, clipped to the grid.
pub(super) fn carve_passage(grid: &mut CaveGrid, from: Pos, to: Pos, radius: i32) {
    for point in line_between(from, to) {
        stamp_disk(grid, point, radius);
    }
}

/// Integer incremental rasterization of the segment from `from` to `to`.
///
/// The longer axis delta is the major axis and advances one cell per step;
/// the minor axis advances when the accumulated error reaches the major
/// length. Emits one point per major-axis step starting at `from`; the end
/// point itself is not emitted.
pub(super) fn line_between(from: Pos, to: Pos) -> Vec<Pos> {
    let mut points = Vec::new();

    let mut x = from.x;
    let mut y = from.y;
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let mut inverted = false;
    let mut step = dx.signum();
    let mut gradient_step = dy.signum();
    let mut longest = dx.abs();
    let mut shortest = dy.abs();

    if longest < shortest {
        inverted = true;
        mem::swap(&mut longest, &mut shortest);
        step = dy.signum();
        gradient_step = dx.signum();
    }

    let mut gradient_accumulation = longest / 2;
    for _ in 0..longest {
        points.push(Pos { y, x });

        if inverted {
            y += step;
        } else {
            x += step;
        }

        gradient_accumulation += shortest;
        if gradient_accumulation >= longest {
            if inverted {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            gradient_accumulation -= longest;
        }
    }
    points
}

/// Opens all cells whose squared distance to `center` is within `radius`²,
/// skipping anything outside the grid.
fn stamp_disk(grid: &mut CaveGrid, center: Pos, radius: i32) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                let pos = Pos { y: center.y + dy, x: center.x + dx };
                if grid.in_bounds(pos) {
                    grid.set(pos, TileKind::Floor);
                }
            }
        }
    }
}
