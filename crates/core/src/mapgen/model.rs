//! Public output model for one finished generation.

use serde::{Deserialize, Serialize};

use super::grid::CaveGrid;

/// Everything one generation run produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMap {
    /// The logical grid after fill, smoothing, pruning, and connection.
    pub grid: CaveGrid,
    /// `grid` framed by the solid border padding; this is what mesh building
    /// consumes.
    pub bordered: CaveGrid,
    /// Seed text the run actually used. Matches the requested seed unless a
    /// random seed was asked for, in which case this records the derived one.
    pub resolved_seed: String,
}

impl GeneratedMap {
    /// Stable byte encoding of the geometry for fingerprinting and
    /// determinism checks.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.grid.canonical_bytes();
        bytes.extend(self.bordered.canonical_bytes());
        bytes
    }
}

/// Outbound collaborator that turns a finished grid into renderable geometry.
///
/// Receives the bordered grid; `Wall` tiles are solid, `Floor` tiles open.
/// The core calls this exactly once per finished generation and assumes
/// nothing about what the implementor builds.
pub trait MeshBuilder {
    fn build_mesh(&mut self, grid: &CaveGrid, square_size: f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKind;

    #[test]
    fn canonical_bytes_cover_both_grids() {
        let grid = CaveGrid::filled(4, 3, TileKind::Floor);
        let map = GeneratedMap {
            bordered: grid.with_border(2),
            grid,
            resolved_seed: "abc".to_string(),
        };
        let expected_len = (8 + 4 * 3) + (8 + 8 * 7);
        assert_eq!(map.canonical_bytes().len(), expected_len);
    }
}
