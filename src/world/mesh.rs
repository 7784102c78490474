use crate::world::block_id::BlockId;
use crate::world::blocks_data::{self, BlockDefinition};
use crate::world::chunk::Chunk;
use glam::{Mat4, Vec3};
use log::{debug, log_enabled, warn, Level};

/// Instanced draw batch for one block type: one unit-cube transform per visible block.
#[derive(Debug, Clone)]
pub struct InstanceBatch {
    pub block_id: BlockId,
    pub name: &'static str,
    /// Upper bound on instances, the chunk volume
    pub capacity: usize,
    transforms: Vec<Mat4>,
}

impl InstanceBatch {
    pub fn new(def: &BlockDefinition, capacity: usize) -> Self {
        Self {
            block_id: def.id,
            name: def.name,
            capacity,
            transforms: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    fn push(&mut self, transform: Mat4) -> usize {
        debug_assert!(self.transforms.len() < self.capacity);
        self.transforms.push(transform);
        self.transforms.len() - 1
    }

    pub fn transform(&self, instance_id: usize) -> Option<Mat4> {
        self.transforms.get(instance_id).copied()
    }

    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    /// Column-major transforms as raw bytes, ready for an instance buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.transforms)
    }
}

/// Per-type instance batches owned by a chunk. Rebuilt from scratch on every mesh pass.
#[derive(Debug, Clone, Default)]
pub struct ChunkMeshes {
    batches: Vec<InstanceBatch>,
}

impl ChunkMeshes {
    pub fn clear(&mut self) {
        self.batches.clear();
    }

    pub fn batch(&self, id: BlockId) -> Option<&InstanceBatch> {
        self.batches.iter().find(|b| b.block_id == id)
    }

    fn batch_mut(&mut self, id: BlockId) -> Option<&mut InstanceBatch> {
        self.batches.iter_mut().find(|b| b.block_id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstanceBatch> {
        self.batches.iter()
    }

    pub fn total_instances(&self) -> usize {
        self.batches.iter().map(InstanceBatch::count).sum()
    }
}

impl Chunk {
    /// Rebuilds all instance batches, skipping empty and fully enclosed cells.
    ///
    /// Cells are scanned x-major, then y, then z, so instance slots are assigned in
    /// that order. Every block's `instance_id` is rewritten: visible blocks get
    /// their slot, all others `None`.
    pub fn generate_meshes(&mut self) {
        let capacity = self.size().volume();
        let mut meshes = ChunkMeshes {
            batches: blocks_data::solid_blocks()
                .map(|def| InstanceBatch::new(def, capacity))
                .collect(),
        };

        for x in 0..self.width() {
            for y in 0..self.height() {
                for z in 0..self.width() {
                    let Some(block) = self.get_block(x, y, z) else {
                        continue;
                    };

                    let mut instance_id = None;
                    if !block.is_empty() && !self.is_block_obscured(x, y, z) {
                        match meshes.batch_mut(block.id) {
                            Some(batch) => {
                                let transform =
                                    Mat4::from_translation(Vec3::new(x as f32, y as f32, z as f32));
                                instance_id = Some(batch.push(transform));
                            }
                            None => warn!("No mesh batch for block id {} at ({x}, {y}, {z})", block.id),
                        }
                    }
                    self.set_block_instance_id(x, y, z, instance_id);
                }
            }
        }

        if log_enabled!(Level::Debug) {
            let counts: Vec<String> = meshes
                .iter()
                .map(|b| format!("{}={}", b.name, b.count()))
                .collect();
            debug!("Meshed chunk at {}: {}", self.origin(), counts.join(" "));
        }
        self.meshes = meshes;
    }
}
