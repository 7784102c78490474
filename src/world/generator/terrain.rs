use crate::utils::rng::WorldRng;
use crate::world::block_id::BlockId;
use crate::world::blocks_data;
use crate::world::chunk::Chunk;
use crate::world::generator::noise::NoiseField;
use log::{trace, warn};

impl Chunk {
    /// Scatters resource blocks wherever 3D noise exceeds each resource's scarcity.
    ///
    /// Resources are placed in list order over the whole grid, so a later
    /// resource overwrites an earlier one at the same cell.
    pub fn generate_resources(&mut self, rng: &mut WorldRng) {
        // Built even with no resources so the terrain noise always sees the same rng state.
        let noise = NoiseField::new(rng);
        let origin = self.origin();
        let resources = self.params().resources.clone();

        for resource in &resources {
            let Some(def) = blocks_data::get_by_name(&resource.name) else {
                warn!("Skipping unknown resource {}", resource.name);
                continue;
            };

            let mut placed = 0usize;
            for x in 0..self.width() {
                for y in 0..self.height() {
                    for z in 0..self.width() {
                        let value = noise.sample3(
                            (x + origin.x) as f64 / resource.scale.x,
                            (y + origin.y) as f64 / resource.scale.y,
                            (z + origin.z) as f64 / resource.scale.z,
                        );
                        if value > resource.scarcity {
                            self.set_block_id(x, y, z, def.id);
                            placed += 1;
                        }
                    }
                }
            }
            trace!("Placed {} {} blocks", placed, def.name);
        }
    }

    /// Shapes the surface from 2D noise.
    ///
    /// Below the column height empty cells become dirt and resources survive, the
    /// surface cell is always grass, and everything above is carved to empty.
    pub fn generate_terrain(&mut self, rng: &mut WorldRng) {
        let noise = NoiseField::new(rng);
        let origin = self.origin();
        let terrain = self.params().terrain;
        let (width, height) = (self.width(), self.height());

        self.heights.clear();
        self.heights.reserve((width * width) as usize);

        for x in 0..width {
            for z in 0..width {
                let value = noise.sample2(
                    (x + origin.x) as f64 / terrain.scale,
                    (z + origin.z) as f64 / terrain.scale,
                );
                let normalized_height = terrain.offset + terrain.magnitude * value;
                let column_height =
                    ((height as f64 * normalized_height).floor() as i32).clamp(0, height - 1);
                self.heights.push(column_height as u32);

                // One past the top is visited on purpose; the bounds-checked setters ignore it.
                for y in 0..=height {
                    if y < column_height {
                        if self.get_block(x, y, z).is_some_and(|b| b.is_empty()) {
                            self.set_block_id(x, y, z, BlockId::DIRT);
                        }
                    } else if y == column_height {
                        self.set_block_id(x, y, z, BlockId::GRASS);
                    } else {
                        self.set_block_id(x, y, z, BlockId::EMPTY);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::worldgen::{ChunkSize, GenerationParams, NoiseScale, ResourceParams, TerrainParams};
    use crate::world::block_id::BlockId;
    use crate::world::chunk::Chunk;
    use glam::IVec3;

    fn params(resources: Vec<ResourceParams>) -> GenerationParams {
        GenerationParams {
            seed: 42,
            terrain: TerrainParams {
                scale: 30.0,
                magnitude: 0.5,
                offset: 0.5,
            },
            resources,
        }
    }

    fn resource(name: &str, scale: f64, scarcity: f64) -> ResourceParams {
        ResourceParams {
            name: name.into(),
            scale: NoiseScale {
                x: scale,
                y: scale,
                z: scale,
            },
            scarcity,
        }
    }

    fn generated(resources: Vec<ResourceParams>) -> Chunk {
        let mut chunk = Chunk::new(ChunkSize::new(16, 32), IVec3::ZERO, params(resources));
        chunk.generate().unwrap();
        chunk
    }

    #[test]
    fn test_one_grass_per_column_at_surface() {
        let chunk = generated(Vec::new());

        for x in 0..16 {
            for z in 0..16 {
                let h = chunk.surface_height(x, z).unwrap() as i32;
                assert!((0..=31).contains(&h));

                let grass: Vec<i32> = (0..32)
                    .filter(|&y| chunk.get_block(x, y, z).unwrap().id == BlockId::GRASS)
                    .collect();
                assert_eq!(grass, vec![h], "column ({x}, {z})");

                for y in 0..h {
                    assert_eq!(chunk.get_block(x, y, z).unwrap().id, BlockId::DIRT);
                }
                for y in (h + 1)..32 {
                    assert!(chunk.get_block(x, y, z).unwrap().is_empty());
                }
            }
        }
    }

    #[test]
    fn test_carve_above_surface_beats_resources() {
        // scarcity 0 fills roughly half the grid with stone before the terrain pass
        let chunk = generated(vec![resource("stone", 10.0, 0.0)]);
        let mut below_surface_stone = 0;

        for x in 0..16 {
            for z in 0..16 {
                let h = chunk.surface_height(x, z).unwrap() as i32;
                assert_eq!(chunk.get_block(x, h, z).unwrap().id, BlockId::GRASS);
                for y in (h + 1)..32 {
                    assert!(chunk.get_block(x, y, z).unwrap().is_empty());
                }
                below_surface_stone += (0..h)
                    .filter(|&y| chunk.get_block(x, y, z).unwrap().id == BlockId::STONE)
                    .count();
            }
        }
        assert!(below_surface_stone > 0);
    }

    #[test]
    fn test_resources_do_not_shift_heights() {
        let plain = generated(Vec::new());
        let rich = generated(vec![resource("stone", 12.0, 0.2), resource("iron_ore", 8.0, 0.5)]);
        for x in 0..16 {
            for z in 0..16 {
                assert_eq!(plain.surface_height(x, z), rich.surface_height(x, z));
            }
        }
    }

    #[test]
    fn test_later_resource_wins() {
        // identical scale and scarcity select identical cells, so coal replaces all stone
        let chunk = generated(vec![resource("stone", 15.0, 0.0), resource("coal_ore", 15.0, 0.0)]);
        assert_eq!(chunk.count_blocks(BlockId::STONE), 0);
        assert!(chunk.count_blocks(BlockId::COAL_ORE) > 0);

        let swapped = generated(vec![resource("coal_ore", 15.0, 0.0), resource("stone", 15.0, 0.0)]);
        assert_eq!(swapped.count_blocks(BlockId::COAL_ORE), 0);
        assert_eq!(
            swapped.count_blocks(BlockId::STONE),
            chunk.count_blocks(BlockId::COAL_ORE)
        );
    }

    #[test]
    fn test_scarcity_one_places_nothing() {
        let chunk = generated(vec![resource("stone", 10.0, 1.0)]);
        assert_eq!(chunk.count_blocks(BlockId::STONE), 0);
    }

    #[test]
    fn test_adjacent_chunks_share_seam_heights() {
        let size = ChunkSize::new(16, 32);
        let mut left = Chunk::new(size, IVec3::ZERO, params(Vec::new()));
        let mut right = Chunk::new(size, IVec3::new(16, 0, 0), params(Vec::new()));
        let mut wide = Chunk::new(ChunkSize::new(32, 32), IVec3::ZERO, params(Vec::new()));
        left.generate().unwrap();
        right.generate().unwrap();
        wide.generate().unwrap();

        for z in 0..16 {
            assert_eq!(left.surface_height(15, z), wide.surface_height(15, z));
            assert_eq!(right.surface_height(0, z), wide.surface_height(16, z));
        }
    }
}
