//! Quad mesh assembly and drawing for the finished cave.

use cave_core::{CaveGrid, MeshBuilder, TileKind};
use macroquad::prelude::*;

const WALL_COLOR: Color = Color { r: 0.25, g: 0.22, b: 0.2, a: 1.0 };
const FLOOR_COLOR: Color = Color { r: 0.06, g: 0.06, b: 0.08, a: 1.0 };

/// One solid cell as a renderable quad, in map units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Mesh collaborator that turns the bordered grid into one quad per solid
/// tile. Rebuilt from scratch on every generation.
#[derive(Default)]
pub struct QuadMesh {
    pub quads: Vec<Quad>,
    pub map_width: f32,
    pub map_height: f32,
}

impl MeshBuilder for QuadMesh {
    fn build_mesh(&mut self, grid: &CaveGrid, square_size: f32) {
        self.quads.clear();
        self.map_width = grid.width() as f32 * square_size;
        self.map_height = grid.height() as f32 * square_size;
        for pos in grid.positions() {
            if grid.tile(pos) == TileKind::Wall {
                self.quads.push(Quad {
                    x: pos.x as f32 * square_size,
                    y: pos.y as f32 * square_size,
                    size: square_size,
                });
            }
        }
    }
}

/// Draws the mesh letterboxed into the current window.
pub fn draw_mesh(mesh: &QuadMesh) {
    if mesh.map_width <= 0.0 || mesh.map_height <= 0.0 {
        return;
    }
    let scale = (screen_width() / mesh.map_width).min(screen_height() / mesh.map_height);
    let offset_x = (screen_width() - mesh.map_width * scale) / 2.0;
    let offset_y = (screen_height() - mesh.map_height * scale) / 2.0;

    draw_rectangle(
        offset_x,
        offset_y,
        mesh.map_width * scale,
        mesh.map_height * scale,
        FLOOR_COLOR,
    );
    for quad in &mesh.quads {
        draw_rectangle(
            offset_x + quad.x * scale,
            offset_y + quad.y * scale,
            quad.size * scale,
            quad.size * scale,
            WALL_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cave_core::Pos;

    #[test]
    fn mesh_holds_one_quad_per_solid_tile() {
        let mut grid = CaveGrid::filled(4, 3, TileKind::Wall);
        grid.set(Pos { y: 1, x: 1 }, TileKind::Floor);
        grid.set(Pos { y: 1, x: 2 }, TileKind::Floor);

        let mut mesh = QuadMesh::default();
        mesh.build_mesh(&grid, 2.0);

        assert_eq!(mesh.quads.len(), 10);
        assert_eq!(mesh.map_width, 8.0);
        assert_eq!(mesh.map_height, 6.0);
        assert_eq!(mesh.quads[0], Quad { x: 0.0, y: 0.0, size: 2.0 });
    }

    #[test]
    fn rebuilding_replaces_the_previous_quads() {
        let solid = CaveGrid::filled(2, 2, TileKind::Wall);
        let open = CaveGrid::filled(2, 2, TileKind::Floor);

        let mut mesh = QuadMesh::default();
        mesh.build_mesh(&solid, 1.0);
        assert_eq!(mesh.quads.len(), 4);

        mesh.build_mesh(&open, 1.0);
        assert!(mesh.quads.is_empty());
    }
}
