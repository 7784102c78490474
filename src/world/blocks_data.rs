//! Immutable block catalog. Ids are stable for the lifetime of the process
//! and `empty` always comes first.

use crate::config::worldgen::{NoiseScale, ResourceParams};
use crate::world::block_id::BlockId;

/// Default placement parameters for a block type that occurs as a resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceDefaults {
    pub scale: [f64; 3],
    pub scarcity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockDefinition {
    pub id: BlockId,
    pub name: &'static str,
    /// sRGB color for render collaborators
    pub color: u32,
    pub resource: Option<ResourceDefaults>,
}

impl BlockDefinition {
    pub fn is_resource(&self) -> bool {
        self.resource.is_some()
    }
}

pub const BLOCKS: &[BlockDefinition] = &[
    BlockDefinition {
        id: BlockId::EMPTY,
        name: "empty",
        color: 0x000000,
        resource: None,
    },
    BlockDefinition {
        id: BlockId::GRASS,
        name: "grass",
        color: 0x559020,
        resource: None,
    },
    BlockDefinition {
        id: BlockId::DIRT,
        name: "dirt",
        color: 0x807020,
        resource: None,
    },
    BlockDefinition {
        id: BlockId::STONE,
        name: "stone",
        color: 0x808080,
        resource: Some(ResourceDefaults {
            scale: [30.0, 30.0, 30.0],
            scarcity: 0.8,
        }),
    },
    BlockDefinition {
        id: BlockId::COAL_ORE,
        name: "coal_ore",
        color: 0x202020,
        resource: Some(ResourceDefaults {
            scale: [20.0, 20.0, 20.0],
            scarcity: 0.8,
        }),
    },
    BlockDefinition {
        id: BlockId::IRON_ORE,
        name: "iron_ore",
        color: 0x806060,
        resource: Some(ResourceDefaults {
            scale: [40.0, 40.0, 40.0],
            scarcity: 0.9,
        }),
    },
];

pub fn get_by_id(id: BlockId) -> Option<&'static BlockDefinition> {
    BLOCKS.iter().find(|def| def.id == id)
}

pub fn get_by_name(name: &str) -> Option<&'static BlockDefinition> {
    BLOCKS.iter().find(|def| def.name == name)
}

/// Every block type that can own mesh instances, in catalog order.
pub fn solid_blocks() -> impl Iterator<Item = &'static BlockDefinition> {
    BLOCKS.iter().filter(|def| !def.id.is_empty())
}

/// Resource block types in placement priority order.
pub fn resources() -> impl Iterator<Item = &'static BlockDefinition> {
    BLOCKS.iter().filter(|def| def.is_resource())
}

/// Editable resource parameters seeded from the catalog defaults.
pub fn default_resource_params() -> Vec<ResourceParams> {
    resources()
        .filter_map(|def| {
            def.resource.map(|r| ResourceParams {
                name: def.name.to_string(),
                scale: NoiseScale {
                    x: r.scale[0],
                    y: r.scale[1],
                    z: r.scale[2],
                },
                scarcity: r.scarcity,
            })
        })
        .collect()
}
