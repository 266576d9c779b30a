//! A chunked voxel world core: dense per-chunk block storage, per-face
//! visibility-culled meshing with trimesh collision derived from it,
//! deterministic Perlin heightmap terrain, and synchronous chunk
//! streaming around a single observer.
//!
//! Everything runs on the calling thread. World operations are total:
//! out-of-bounds reads come back as Air, out-of-bounds writes are
//! dropped, and nothing in the world surface returns an error.

pub mod config;
pub mod mesh;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use mesh::{Aabb, ChunkMesh, TrimeshCollider, Vertex};
pub use world::{
    find_spawn_position, BlockPos, BlockType, Chunk, ChunkPos, TerrainGenerator, TerrainParams,
    VoxelWorld, WorldState,
};
