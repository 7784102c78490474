use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Integer block-type tag. `0` is reserved for empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const EMPTY: BlockId = BlockId(0);
    pub const GRASS: BlockId = BlockId(1);
    pub const DIRT: BlockId = BlockId(2);
    pub const STONE: BlockId = BlockId(3);
    pub const COAL_ORE: BlockId = BlockId(4);
    pub const IRON_ORE: BlockId = BlockId(5);

    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn get_id(&self) -> u16 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for BlockId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl From<BlockId> for u16 {
    fn from(id: BlockId) -> Self {
        id.0
    }
}

impl From<BlockId> for u32 {
    fn from(id: BlockId) -> Self {
        id.0 as u32
    }
}
