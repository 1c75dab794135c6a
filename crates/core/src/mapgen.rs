//! Procedural cave generation domain split into coherent submodules.

pub mod config;
pub mod model;

mod carve;
mod connector;
mod generator;
mod grid;
mod noise;
mod regions;
mod rooms;
mod seed;
mod smooth;

pub use config::{BORDER_SIZE, ConfigError, GenerationConfig};
pub use generator::MapGenerator;
pub use grid::CaveGrid;
pub use model::{GeneratedMap, MeshBuilder};

/// Runs one full generation with the given parameters.
pub fn generate_map(config: GenerationConfig) -> Result<GeneratedMap, ConfigError> {
    let mut generator = MapGenerator::new(config)?;
    Ok(generator.generate().clone())
}
