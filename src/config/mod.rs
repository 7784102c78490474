pub mod core;
pub mod gameplay;
pub mod worldgen;

pub use self::core::EngineConfig;
pub use gameplay::{PhysicsConfig, PlayerConfig};
pub use worldgen::{ChunkSize, GenerationParams, NoiseScale, ResourceParams, TerrainParams, WorldGenConfig};
