use crate::config::worldgen::{GenerationParams, WorldGenConfig};
use crate::utils::error::ConfigError;
use crate::world::block::Block;
use crate::world::chunk::Chunk;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::BlockSource;
use glam::IVec3;
use log::info;
use std::collections::BTreeMap;
use std::time::Instant;

/// Square grid of chunks centred on chunk `(0, 0)`.
pub struct World {
    config: WorldGenConfig,
    chunks: BTreeMap<ChunkCoord, Chunk>,
}

impl World {
    pub fn new(config: WorldGenConfig) -> Self {
        Self {
            config,
            chunks: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Replaces the generation parameters. Takes effect on the next [`World::generate`].
    pub fn set_params(&mut self, params: GenerationParams) {
        self.config.params = params;
    }

    pub fn set_draw_distance(&mut self, draw_distance: u32) {
        self.config.draw_distance = draw_distance;
    }

    /// Drops every chunk and generates the grid from scratch.
    pub fn generate(&mut self) -> Result<(), ConfigError> {
        self.config.validate()?;

        let start = Instant::now();
        let width = self.config.chunk_size.width as i32;
        let d = self.config.draw_distance as i32;

        self.chunks.clear();
        for cx in -d..=d {
            for cz in -d..=d {
                let coord = ChunkCoord::new(cx, cz);
                let mut chunk = Chunk::new(
                    self.config.chunk_size,
                    coord.origin(width),
                    self.config.params.clone(),
                );
                chunk.generate()?;
                self.chunks.insert(coord, chunk);
            }
        }

        info!(
            "Generated {} chunks (seed {}) in {:?}",
            self.chunks.len(),
            self.config.params.seed,
            start.elapsed()
        );
        Ok(())
    }

    pub fn get_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn chunks(&self) -> impl Iterator<Item = (&ChunkCoord, &Chunk)> {
        self.chunks.iter()
    }

    pub fn get_loaded_chunks(&self) -> Vec<ChunkCoord> {
        self.chunks.keys().copied().collect()
    }

    pub fn world_to_chunk_pos(&self, x: i32, y: i32, z: i32) -> (ChunkCoord, IVec3) {
        let width = self.config.chunk_size.width as i32;
        let chunk = ChunkCoord::from_world_block(x, z, width);
        (chunk, IVec3::new(x.rem_euclid(width), y, z.rem_euclid(width)))
    }

    pub fn chunk_to_world_pos(&self, chunk: ChunkCoord, local: IVec3) -> IVec3 {
        chunk.origin(self.config.chunk_size.width as i32) + local
    }

    /// Block at world coordinates, `None` outside loaded chunks.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Option<Block> {
        let (coord, local) = self.world_to_chunk_pos(x, y, z);
        self.chunks
            .get(&coord)
            .filter(|chunk| chunk.is_loaded())
            .and_then(|chunk| chunk.get_block(local.x, local.y, local.z))
    }

    /// Surface height of the world column `(x, z)`.
    pub fn surface_height(&self, x: i32, z: i32) -> Option<u32> {
        let (coord, local) = self.world_to_chunk_pos(x, 0, z);
        self.chunks.get(&coord)?.surface_height(local.x, local.z)
    }
}

impl BlockSource for World {
    fn get_block(&self, x: i32, y: i32, z: i32) -> Option<Block> {
        World::get_block(self, x, y, z)
    }
}
