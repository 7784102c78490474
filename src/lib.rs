pub mod config;
pub mod physics;
pub mod player;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::core::EngineConfig;
pub use config::gameplay::{PhysicsConfig, PlayerConfig};
pub use config::worldgen::{GenerationParams, WorldGenConfig};
pub use physics::{Collision, PlayerPhysicsHandler};
pub use player::{MoveAction, Player, PlayerInput};
pub use utils::error::{ConfigError, EngineError};
pub use utils::rng::WorldRng;
pub use world::{BlockId, BlockSource, Chunk, ChunkCoord, World};
