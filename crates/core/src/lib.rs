pub mod mapgen;
pub mod types;

pub use mapgen::{CaveGrid, ConfigError, GeneratedMap, GenerationConfig, MapGenerator, MeshBuilder};
pub use types::*;
