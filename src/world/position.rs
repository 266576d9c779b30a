use cgmath::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute block coordinate in world space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Block containing the given world-space point
    pub fn from_world(pos: Point3<f32>) -> Self {
        Self {
            x: pos.x.floor() as i32,
            y: pos.y.floor() as i32,
            z: pos.z.floor() as i32,
        }
    }

    /// Chunk column this block falls in.
    ///
    /// Uses Euclidean division so negative coordinates map to the
    /// correct chunk: block x = -1 belongs to chunk -1, not chunk 0.
    pub fn to_chunk_pos(&self, chunk_size: u32) -> ChunkPos {
        let size = chunk_size as i32;
        ChunkPos::new(self.x.div_euclid(size), self.z.div_euclid(size))
    }

    /// Position within the owning chunk. The y axis is not chunked,
    /// so it passes through unchanged; the chunk bounds-checks it.
    pub fn to_local_pos(&self, chunk_size: u32) -> (i32, i32, i32) {
        let size = chunk_size as i32;
        (self.x.rem_euclid(size), self.y, self.z.rem_euclid(size))
    }

    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Center of this block as a world-space point
    pub fn center(&self) -> Point3<f32> {
        Point3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Key of a chunk column in the world map. Chunks span the full world
/// height, so only the horizontal axes are chunked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing the given world-space point
    pub fn from_world(pos: Point3<f32>, chunk_size: u32) -> Self {
        BlockPos::from_world(pos).to_chunk_pos(chunk_size)
    }

    /// World block coordinate of this chunk's minimum corner
    pub fn block_min(&self, chunk_size: u32) -> BlockPos {
        let size = chunk_size as i32;
        BlockPos::new(self.x * size, 0, self.z * size)
    }

    pub fn offset(&self, dx: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.z + dz)
    }

    /// Chebyshev distance, the metric the streaming radius uses
    pub fn chebyshev_distance(&self, other: ChunkPos) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
