use crate::world::block_id::BlockId;

/// One grid cell of a chunk.
///
/// `instance_id` is a lookup-only back reference into the mesh batch of this
/// block's type. It is only meaningful until the next mesh rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block {
    pub id: BlockId,
    pub instance_id: Option<usize>,
}

impl Block {
    pub const EMPTY: Block = Block {
        id: BlockId::EMPTY,
        instance_id: None,
    };

    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            instance_id: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}
