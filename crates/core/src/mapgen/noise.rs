//! Seeded binary noise fill that produces the initial wall/floor texture.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

use crate::types::{Pos, TileKind};

use super::grid::CaveGrid;

/// Fills the grid with solid border cells and randomly seeded interior cells.
///
/// Pure in (dimensions, `fill_percent`, `seed`): the RNG stream is consumed in
/// row-major order and only for interior cells, so equal inputs always yield a
/// bit-identical grid.
pub(super) fn fill_random(grid: &mut CaveGrid, fill_percent: u32, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Pos { y, x };
            let kind = if grid.is_border(pos) {
                TileKind::Wall
            } else if rng.next_u64() % 100 < u64::from(fill_percent) {
                TileKind::Wall
            } else {
                TileKind::Floor
            };
            grid.set(pos, kind);
        }
    }
}
