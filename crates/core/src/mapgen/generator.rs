//! High-level generation orchestration over an exclusively owned grid.

use log::{debug, info};

use crate::types::TileKind;

use super::config::{BORDER_SIZE, ConfigError, GenerationConfig};
use super::connector;
use super::grid::CaveGrid;
use super::model::{GeneratedMap, MeshBuilder};
use super::noise;
use super::regions;
use super::rooms::RoomGraph;
use super::seed;
use super::smooth;

/// Owns the generation parameters and the most recent finished map.
///
/// A generation runs to completion on a private grid and only then replaces
/// the stored map, so consumers never observe a half-mutated state.
pub struct MapGenerator {
    config: GenerationConfig,
    map: Option<GeneratedMap>,
}

impl MapGenerator {
    /// Validates the configuration before anything is allocated.
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, map: None })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The most recent finished map, if any generation has completed.
    pub fn map(&self) -> Option<&GeneratedMap> {
        self.map.as_ref()
    }

    /// Runs one full generation and stores and returns the finished map.
    pub fn generate(&mut self) -> &GeneratedMap {
        let resolved_seed = if self.config.use_random_seed {
            seed::runtime_seed_text()
        } else {
            self.config.seed.clone()
        };

        let mut grid = CaveGrid::filled(self.config.width, self.config.height, TileKind::Wall);
        noise::fill_random(
            &mut grid,
            self.config.random_fill_percent,
            seed::hash_seed_text(&resolved_seed),
        );
        smooth::smooth(&mut grid, self.config.smooth_iterations);

        let floor_regions = if self.config.remove_small_regions {
            regions::prune_regions(&mut grid, TileKind::Wall, self.config.wall_region_min_size);
            regions::prune_regions(&mut grid, TileKind::Floor, self.config.room_region_min_size)
        } else {
            regions::regions_of(&grid, TileKind::Floor)
        };

        if self.config.connect_regions && !floor_regions.is_empty() {
            let mut graph = RoomGraph::from_regions(&grid, &floor_regions);
            connector::connect_rooms(&mut grid, &mut graph, self.config.passage_radius);
            if let Some(main_room) = graph.main_room() {
                debug!(
                    "connected {} rooms, main room spans {} tiles",
                    graph.len(),
                    main_room.size()
                );
            }
        }

        let bordered = grid.with_border(BORDER_SIZE);
        info!(
            "generated {}x{} cave, {} open tiles, seed {:?}",
            self.config.width,
            self.config.height,
            grid.count(TileKind::Floor),
            resolved_seed
        );

        self.map.insert(GeneratedMap { grid, bordered, resolved_seed })
    }

    /// Hands the bordered grid of the stored map to the mesh collaborator.
    /// Does nothing until a generation has completed.
    pub fn build_mesh(&self, builder: &mut dyn MeshBuilder) {
        if let Some(map) = &self.map {
            builder.build_mesh(&map.bordered, self.config.square_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pos;

    fn fixed_seed_config(seed: &str) -> GenerationConfig {
        GenerationConfig {
            width: 48,
            height: 36,
            seed: seed.to_string(),
            use_random_seed: false,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn invalid_config_never_constructs_a_generator() {
        let config = GenerationConfig { width: 0, ..GenerationConfig::default() };
        assert!(MapGenerator::new(config).is_err());
    }

    #[test]
    fn stored_map_is_none_until_a_generation_completes() {
        let generator = MapGenerator::new(fixed_seed_config("idle")).expect("config is valid");
        assert!(generator.map().is_none());
    }

    #[test]
    fn generate_stores_the_returned_map() {
        let mut generator = MapGenerator::new(fixed_seed_config("stored")).expect("config is valid");
        let bytes = generator.generate().canonical_bytes();
        assert_eq!(generator.map().expect("map is stored").canonical_bytes(), bytes);
    }

    #[test]
    fn fixed_seed_runs_are_bit_identical() {
        let config = fixed_seed_config("twice");
        let a = MapGenerator::new(config.clone()).expect("valid").generate().canonical_bytes();
        let b = MapGenerator::new(config).expect("valid").generate().canonical_bytes();
        assert_eq!(a, b);
    }

    #[test]
    fn resolved_seed_echoes_the_fixed_seed() {
        let mut generator = MapGenerator::new(fixed_seed_config("echo")).expect("config is valid");
        assert_eq!(generator.generate().resolved_seed, "echo");
    }

    #[test]
    fn random_seed_mode_records_a_replayable_seed() {
        let config = GenerationConfig { width: 40, height: 30, ..GenerationConfig::default() };
        let mut generator = MapGenerator::new(config.clone()).expect("config is valid");
        let first = generator.generate().clone();

        let replay_config = GenerationConfig {
            seed: first.resolved_seed.clone(),
            use_random_seed: false,
            ..config
        };
        let mut replayer = MapGenerator::new(replay_config).expect("config is valid");
        let replayed = replayer.generate();
        assert_eq!(replayed.grid, first.grid);
        assert_eq!(replayed.bordered, first.bordered);
    }

    #[test]
    fn bordered_grid_carries_the_solid_frame() {
        let mut generator = MapGenerator::new(fixed_seed_config("frame")).expect("config is valid");
        let map = generator.generate();

        let border = BORDER_SIZE as i32;
        let width = map.bordered.width() as i32;
        let height = map.bordered.height() as i32;
        for pos in map.bordered.positions() {
            let in_frame = pos.x < border
                || pos.y < border
                || pos.x >= width - border
                || pos.y >= height - border;
            if in_frame {
                assert_eq!(map.bordered.tile(pos), TileKind::Wall);
            }
        }
        for pos in map.grid.positions() {
            let shifted = Pos { y: pos.y + border, x: pos.x + border };
            assert_eq!(map.grid.tile(pos), map.bordered.tile(shifted));
        }
    }

    #[test]
    fn mesh_builder_receives_the_bordered_grid_and_square_size() {
        struct Recorder {
            dims: Option<(usize, usize)>,
            square_size: f32,
        }
        impl MeshBuilder for Recorder {
            fn build_mesh(&mut self, grid: &CaveGrid, square_size: f32) {
                self.dims = Some((grid.width(), grid.height()));
                self.square_size = square_size;
            }
        }

        let mut generator = MapGenerator::new(fixed_seed_config("mesh")).expect("config is valid");
        let mut recorder = Recorder { dims: None, square_size: 0.0 };

        generator.build_mesh(&mut recorder);
        assert!(recorder.dims.is_none(), "no mesh before the first generation");

        generator.generate();
        generator.build_mesh(&mut recorder);
        assert_eq!(recorder.dims, Some((48 + 2 * BORDER_SIZE, 36 + 2 * BORDER_SIZE)));
        assert_eq!(recorder.square_size, 1.0);
    }

    #[test]
    fn disabled_connection_leaves_regions_apart() {
        let config = GenerationConfig {
            connect_regions: false,
            ..fixed_seed_config("disconnected")
        };
        let mut generator = MapGenerator::new(config).expect("config is valid");
        let map = generator.generate();
        // Nothing to assert structurally beyond a finished map existing: the
        // pass is skipped entirely, so this mostly guards against panics.
        assert_eq!(map.grid.width(), 48);
    }

    #[test]
    fn all_floor_pruned_short_circuits_connection() {
        let config = GenerationConfig {
            random_fill_percent: 100,
            ..fixed_seed_config("solid")
        };
        let mut generator = MapGenerator::new(config).expect("config is valid");
        let map = generator.generate();
        assert_eq!(map.grid.count(TileKind::Floor), 0);
    }
}
