use crate::utils::error::ConfigError;
use crate::world::blocks_data;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Horizontal divisor applied to world coordinates before sampling
    pub scale: f64,
    pub magnitude: f64,
    pub offset: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            scale: 30.0,
            magnitude: 0.5,
            offset: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseScale {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceParams {
    /// Catalog name of the block placed by this resource
    pub name: String,
    pub scale: NoiseScale,
    pub scarcity: f64,
}

/// Everything a chunk needs to regenerate itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub seed: u64,
    pub terrain: TerrainParams,
    /// Placed in order; later entries overwrite earlier ones
    pub resources: Vec<ResourceParams>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: 0,
            terrain: TerrainParams::default(),
            resources: blocks_data::default_resource_params(),
        }
    }
}

impl GenerationParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("terrain.scale", self.terrain.scale)?;
        unit("terrain.magnitude", self.terrain.magnitude)?;
        unit("terrain.offset", self.terrain.offset)?;

        for resource in &self.resources {
            let def = blocks_data::get_by_name(&resource.name)
                .ok_or_else(|| ConfigError::UnknownBlock(resource.name.clone()))?;
            if !def.is_resource() {
                return Err(ConfigError::NotAResource(resource.name.clone()));
            }
            positive("resource.scale.x", resource.scale.x)?;
            positive("resource.scale.y", resource.scale.y)?;
            positive("resource.scale.z", resource.scale.z)?;
            unit("resource.scarcity", resource.scarcity)?;
        }
        Ok(())
    }
}

/// Chunk extent: a `width × height × width` box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
        }
    }
}

impl ChunkSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn volume(&self) -> usize {
        self.width as usize * self.width as usize * self.height as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyChunk {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGenConfig {
    pub chunk_size: ChunkSize,
    /// Chunks generated on each side of the origin chunk
    pub draw_distance: u32,
    pub params: GenerationParams,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            chunk_size: ChunkSize::default(),
            draw_distance: 1,
            params: GenerationParams::default(),
        }
    }
}

impl WorldGenConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chunk_size.validate()?;
        self.params.validate()
    }
}

pub(crate) fn positive(what: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { what, value })
    }
}

pub(crate) fn unit(what: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(WorldGenConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_terrain_scale() {
        let mut params = GenerationParams::default();
        params.terrain.scale = 0.0;
        assert_eq!(
            params.validate(),
            Err(ConfigError::NonPositive {
                what: "terrain.scale",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_out_of_range_offset() {
        let mut params = GenerationParams::default();
        params.terrain.offset = 1.5;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::OutOfUnitRange { what: "terrain.offset", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_resources() {
        let mut params = GenerationParams::default();
        params.resources[0].scale.y = -3.0;
        assert!(matches!(params.validate(), Err(ConfigError::NonPositive { .. })));

        let mut params = GenerationParams::default();
        params.resources[0].name = "grass".into();
        assert_eq!(params.validate(), Err(ConfigError::NotAResource("grass".into())));

        let mut params = GenerationParams::default();
        params.resources[0].name = "obsidian".into();
        assert_eq!(params.validate(), Err(ConfigError::UnknownBlock("obsidian".into())));
    }

    #[test]
    fn test_rejects_empty_chunk() {
        let config = WorldGenConfig {
            chunk_size: ChunkSize::new(16, 0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyChunk { .. })));
    }
}
