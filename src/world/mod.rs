pub mod block;
pub mod block_id;
pub mod blocks_data;
pub mod chunk;
pub mod chunk_coord;
pub mod core;
pub mod generator;
pub mod mesh;

// Re-export commonly used types
pub use block::Block;
pub use block_id::BlockId;
pub use blocks_data::{BlockDefinition, BLOCKS};
pub use chunk::{Chunk, ChunkState};
pub use chunk_coord::ChunkCoord;
pub use generator::NoiseField;
pub use mesh::{ChunkMeshes, InstanceBatch};
pub use self::core::World;

/// Read access to voxels for the collision solver.
///
/// `None` means "no block here" and is treated exactly like an empty cell.
pub trait BlockSource {
    fn get_block(&self, x: i32, y: i32, z: i32) -> Option<Block>;
}
