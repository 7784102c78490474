use crate::config::worldgen::{ChunkSize, GenerationParams};
use crate::utils::error::ConfigError;
use crate::utils::rng::WorldRng;
use crate::world::block::Block;
use crate::world::block_id::BlockId;
use crate::world::mesh::ChunkMeshes;
use crate::world::BlockSource;
use glam::{IVec3, Mat4};
use log::debug;
use std::time::Instant;

/// Generation lifecycle. Only `Loaded` chunks are meant to be queried by physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkState {
    Unloaded,
    Generating,
    Loaded,
}

/// A fixed-size voxel volume together with the mesh instances derived from it.
#[derive(Debug, Clone)]
pub struct Chunk {
    size: ChunkSize,
    origin: IVec3,
    params: GenerationParams,
    blocks: Vec<Block>,
    /// Surface height per `(x, z)` column, filled by the terrain pass
    pub(crate) heights: Vec<u32>,
    pub(crate) meshes: ChunkMeshes,
    state: ChunkState,
}

impl Chunk {
    pub fn new(size: ChunkSize, origin: IVec3, params: GenerationParams) -> Self {
        Self {
            size,
            origin,
            params,
            blocks: Vec::new(),
            heights: Vec::new(),
            meshes: ChunkMeshes::default(),
            state: ChunkState::Unloaded,
        }
    }

    /// Rebuilds every block and mesh instance from the current parameters.
    ///
    /// Parameters are checked before anything is touched, so a rejected call
    /// leaves the previous generation intact.
    pub fn generate(&mut self) -> Result<(), ConfigError> {
        self.size.validate()?;
        self.params.validate()?;

        let start = Instant::now();
        self.state = ChunkState::Generating;

        let mut rng = WorldRng::new(self.params.seed);
        self.initialize_terrain();
        self.generate_resources(&mut rng);
        self.generate_terrain(&mut rng);
        self.generate_meshes();

        self.state = ChunkState::Loaded;
        debug!(
            "Chunk at {} generated in {:?} ({} instances)",
            self.origin,
            start.elapsed(),
            self.meshes.total_instances()
        );
        Ok(())
    }

    /// Resets the grid to empty records.
    pub fn initialize_terrain(&mut self) {
        self.blocks.clear();
        self.blocks.resize(self.size.volume(), Block::EMPTY);
        self.heights.clear();
        self.meshes.clear();
    }

    pub fn size(&self) -> ChunkSize {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width as i32
    }

    pub fn height(&self) -> i32 {
        self.size.height as i32
    }

    /// World-space position of local block `(0, 0, 0)`.
    pub fn origin(&self) -> IVec3 {
        self.origin
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Replaces the generation parameters. Takes effect on the next [`Chunk::generate`].
    pub fn set_params(&mut self, params: GenerationParams) {
        self.params = params;
    }

    pub fn state(&self) -> ChunkState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == ChunkState::Loaded
    }

    pub fn meshes(&self) -> &ChunkMeshes {
        &self.meshes
    }

    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && x < self.width()
            && y >= 0
            && y < self.height()
            && z >= 0
            && z < self.width()
            && !self.blocks.is_empty()
    }

    fn get_index(&self, x: i32, y: i32, z: i32) -> usize {
        let (w, h) = (self.size.width as usize, self.size.height as usize);
        (x as usize * h + y as usize) * w + z as usize
    }

    /// Block record at local coordinates, `None` outside the chunk.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Option<Block> {
        if self.in_bounds(x, y, z) {
            Some(self.blocks[self.get_index(x, y, z)])
        } else {
            None
        }
    }

    fn block_id_or_empty(&self, x: i32, y: i32, z: i32) -> BlockId {
        self.get_block(x, y, z).map_or(BlockId::EMPTY, |b| b.id)
    }

    pub fn set_block_id(&mut self, x: i32, y: i32, z: i32, id: BlockId) {
        if self.in_bounds(x, y, z) {
            let index = self.get_index(x, y, z);
            self.blocks[index].id = id;
        }
    }

    pub fn set_block_instance_id(&mut self, x: i32, y: i32, z: i32, instance_id: Option<usize>) {
        if self.in_bounds(x, y, z) {
            let index = self.get_index(x, y, z);
            self.blocks[index].instance_id = instance_id;
        }
    }

    /// True when all six face neighbours are non-empty. Cells outside the
    /// chunk count as empty, so boundary blocks are never obscured and
    /// coordinates outside the chunk are never obscured either.
    pub fn is_block_obscured(&self, x: i32, y: i32, z: i32) -> bool {
        if !self.in_bounds(x, y, z) {
            return false;
        }

        const NEIGHBOURS: [(i32, i32, i32); 6] = [
            (0, 1, 0),
            (0, -1, 0),
            (1, 0, 0),
            (-1, 0, 0),
            (0, 0, 1),
            (0, 0, -1),
        ];

        NEIGHBOURS
            .iter()
            .all(|(dx, dy, dz)| !self.block_id_or_empty(x + dx, y + dy, z + dz).is_empty())
    }

    /// Surface height of column `(x, z)` from the last terrain pass.
    pub fn surface_height(&self, x: i32, z: i32) -> Option<u32> {
        if x < 0 || z < 0 || x >= self.width() || z >= self.width() {
            return None;
        }
        self.heights.get((x * self.width() + z) as usize).copied()
    }

    /// Transform of the mesh instance currently drawn for this block.
    pub fn instance_transform(&self, x: i32, y: i32, z: i32) -> Option<Mat4> {
        let block = self.get_block(x, y, z)?;
        let instance = block.instance_id?;
        self.meshes.batch(block.id)?.transform(instance)
    }

    /// Block ids in storage order.
    pub fn block_ids(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.blocks.iter().map(|b| b.id)
    }

    /// Number of cells holding `id`.
    pub fn count_blocks(&self, id: BlockId) -> usize {
        self.blocks.iter().filter(|b| b.id == id).count()
    }
}

impl BlockSource for Chunk {
    fn get_block(&self, x: i32, y: i32, z: i32) -> Option<Block> {
        Chunk::get_block(self, x, y, z)
    }
}
