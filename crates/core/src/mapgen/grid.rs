//! Dense tile grid storage shared by every generation stage.

use serde::{Deserialize, Serialize};

use crate::types::{Pos, TileKind};

/// Row-major tile buffer with a fixed width and height.
///
/// The grid is owned by exactly one stage at a time and mutated in place;
/// out-of-bounds reads answer `Wall` so neighbor scans never branch on edges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaveGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl CaveGrid {
    pub fn filled(width: usize, height: usize, kind: TileKind) -> Self {
        Self { width, height, tiles: vec![kind; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        pos.x == 0
            || pos.y == 0
            || pos.x as usize == self.width - 1
            || pos.y as usize == self.height - 1
    }

    /// Tile at `pos`; positions outside the grid read as solid.
    pub fn tile(&self, pos: Pos) -> TileKind {
        if self.in_bounds(pos) { self.tiles[self.index(pos)] } else { TileKind::Wall }
    }

    /// Overwrites the tile at `pos`. `pos` must be in bounds.
    pub fn set(&mut self, pos: Pos, kind: TileKind) {
        let index = self.index(pos);
        self.tiles[index] = kind;
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    /// All positions in the deterministic row-major scan order (y outer, x
    /// inner) that every labeling and fill pass shares.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| {
            (0..width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    pub(super) fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    /// A copy of this grid framed by `border` rings of solid tiles on every
    /// side; the original content sits at offset (`border`, `border`).
    pub fn with_border(&self, border: usize) -> CaveGrid {
        let mut bordered =
            CaveGrid::filled(self.width + border * 2, self.height + border * 2, TileKind::Wall);
        for pos in self.positions() {
            let shifted = Pos { y: pos.y + border as i32, x: pos.x + border as i32 };
            bordered.set(shifted, self.tile(pos));
        }
        bordered
    }

    /// Stable byte encoding for fingerprinting and determinism checks.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                TileKind::Wall => 1,
                TileKind::Floor => 0,
            });
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_are_solid() {
        let grid = CaveGrid::filled(4, 3, TileKind::Floor);
        assert_eq!(grid.tile(Pos { y: -1, x: 0 }), TileKind::Wall);
        assert_eq!(grid.tile(Pos { y: 0, x: 4 }), TileKind::Wall);
        assert_eq!(grid.tile(Pos { y: 3, x: 0 }), TileKind::Wall);
        assert_eq!(grid.tile(Pos { y: 1, x: 2 }), TileKind::Floor);
    }

    #[test]
    fn positions_scan_row_major() {
        let grid = CaveGrid::filled(3, 2, TileKind::Wall);
        let scanned: Vec<Pos> = grid.positions().collect();
        assert_eq!(
            scanned,
            vec![
                Pos { y: 0, x: 0 },
                Pos { y: 0, x: 1 },
                Pos { y: 0, x: 2 },
                Pos { y: 1, x: 0 },
                Pos { y: 1, x: 1 },
                Pos { y: 1, x: 2 },
            ]
        );
    }

    #[test]
    fn with_border_frames_and_offsets_the_content() {
        let mut grid = CaveGrid::filled(3, 3, TileKind::Wall);
        grid.set(Pos { y: 1, x: 1 }, TileKind::Floor);

        let bordered = grid.with_border(2);
        assert_eq!(bordered.width(), 7);
        assert_eq!(bordered.height(), 7);
        assert_eq!(bordered.tile(Pos { y: 3, x: 3 }), TileKind::Floor);
        assert_eq!(bordered.count(TileKind::Floor), 1);
        for pos in bordered.positions() {
            let inside_frame =
                pos.y >= 2 && pos.y <= 4 && pos.x >= 2 && pos.x <= 4;
            if !inside_frame {
                assert_eq!(bordered.tile(pos), TileKind::Wall);
            }
        }
    }

    #[test]
    fn canonical_bytes_encode_dimensions_and_tiles() {
        let mut grid = CaveGrid::filled(2, 1, TileKind::Wall);
        grid.set(Pos { y: 0, x: 1 }, TileKind::Floor);
        let bytes = grid.canonical_bytes();
        assert_eq!(&bytes[0..4], &2_u32.to_le_bytes());
        assert_eq!(&bytes[4..8], &1_u32.to_le_bytes());
        assert_eq!(&bytes[8..], &[1, 0]);
    }
}
