use crate::mesh::{self, ChunkMesh, TrimeshCollider};
use crate::world::{BlockType, ChunkPos};

/// A column of voxels spanning the full world height, with the render
/// mesh and collision shape built from it. The chunk owns both, so
/// geometry and collision always describe the same contents.
#[derive(Clone)]
pub struct Chunk {
    position: ChunkPos,
    size: u32,
    height: u32,
    blocks: Vec<BlockType>,
    mesh: ChunkMesh,
    collider: Option<TrimeshCollider>,
}

impl Chunk {
    pub fn new(position: ChunkPos, size: u32, height: u32) -> Self {
        let total_blocks = (size * size * height) as usize;
        Self {
            position,
            size,
            height,
            blocks: vec![BlockType::Air; total_blocks],
            mesh: ChunkMesh::new(),
            collider: None,
        }
    }

    /// Get the chunk position
    pub fn position(&self) -> ChunkPos {
        self.position
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get block at local position. Anything outside the chunk reads
    /// as Air.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        if !self.in_bounds(x, y, z) {
            return BlockType::Air;
        }
        let index = self.index(x as u32, y as u32, z as u32);
        self.blocks.get(index).copied().unwrap_or(BlockType::Air)
    }

    /// Set block at local position. Out of bounds is a silent no-op.
    /// Does not remesh; callers batch edits and call `rebuild_mesh`
    /// when done.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) {
        if !self.in_bounds(x, y, z) {
            return;
        }
        let index = self.index(x as u32, y as u32, z as u32);
        if let Some(slot) = self.blocks.get_mut(index) {
            *slot = block;
        }
    }

    /// Rebuild the render mesh and the collider from current contents.
    /// The collider is derived from the finished mesh, covering exactly
    /// the visible faces.
    pub fn rebuild_mesh(&mut self) {
        self.mesh = mesh::build_mesh(self);
        self.collider = TrimeshCollider::from_mesh(&self.mesh);
    }

    pub fn mesh(&self) -> &ChunkMesh {
        &self.mesh
    }

    pub fn collider(&self) -> Option<&TrimeshCollider> {
        self.collider.as_ref()
    }

    /// Get all blocks for iteration
    pub fn blocks(&self) -> &[BlockType] {
        &self.blocks
    }

    fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as u32) < self.size
            && (y as u32) < self.height
            && (z as u32) < self.size
    }

    /// Flat storage index: y-major, then z, then x
    fn index(&self, x: u32, y: u32, z: u32) -> usize {
        debug_assert!(
            x < self.size && y < self.height && z < self.size,
            "index called with out-of-bounds coordinates: ({}, {}, {}) for size {} height {}",
            x, y, z, self.size, self.height
        );
        (((y * self.size) + z) * self.size + x) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chunk_is_all_air() {
        let chunk = Chunk::new(ChunkPos::new(2, -3), 4, 8);
        for y in 0..8 {
            for z in 0..4 {
                for x in 0..4 {
                    assert_eq!(chunk.get_block(x, y, z), BlockType::Air);
                }
            }
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), 16, 128);
        chunk.set_block(5, 100, 7, BlockType::Iron);
        assert_eq!(chunk.get_block(5, 100, 7), BlockType::Iron);
        chunk.set_block(5, 100, 7, BlockType::Air);
        assert_eq!(chunk.get_block(5, 100, 7), BlockType::Air);
    }

    #[test]
    fn out_of_bounds_get_returns_air() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), 16, 128);
        chunk.set_block(0, 0, 0, BlockType::Stone);
        assert_eq!(chunk.get_block(-1, 0, 0), BlockType::Air);
        assert_eq!(chunk.get_block(16, 0, 0), BlockType::Air);
        assert_eq!(chunk.get_block(0, -1, 0), BlockType::Air);
        assert_eq!(chunk.get_block(0, 128, 0), BlockType::Air);
        assert_eq!(chunk.get_block(0, 0, 16), BlockType::Air);
    }

    #[test]
    fn out_of_bounds_set_is_ignored() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), 4, 8);
        let before = chunk.blocks().to_vec();
        chunk.set_block(-1, 0, 0, BlockType::Stone);
        chunk.set_block(4, 0, 0, BlockType::Stone);
        chunk.set_block(0, 8, 0, BlockType::Stone);
        chunk.set_block(0, 0, 99, BlockType::Stone);
        assert_eq!(chunk.blocks(), &before[..], "no cell may change");
    }

    #[test]
    fn storage_is_y_major_flat_order() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), 4, 8);
        chunk.set_block(1, 2, 3, BlockType::Lava);
        let index = ((2 * 4) + 3) * 4 + 1;
        assert_eq!(chunk.blocks()[index], BlockType::Lava);
    }

    #[test]
    fn rebuild_mesh_keeps_mesh_and_collider_in_step() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), 4, 8);
        chunk.rebuild_mesh();
        assert!(chunk.mesh().is_empty());
        assert!(chunk.collider().is_none(), "no geometry, no collision");

        chunk.set_block(1, 1, 1, BlockType::Grass);
        chunk.rebuild_mesh();
        assert_eq!(chunk.mesh().face_count(), 6);
        let collider = chunk.collider().expect("solid chunk has collision");
        assert_eq!(collider.triangle_count(), 12);
    }
}
