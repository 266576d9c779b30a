//! World model: blocks, coordinates, chunked storage, terrain
//! generation, observer-driven streaming and spawn placement.

pub mod block;
pub mod chunk;
pub mod generation;
pub mod position;
pub mod spawn;
pub mod world;

// Re-export the types consumers touch every day
pub use block::BlockType;
pub use chunk::Chunk;
pub use generation::{TerrainGenerator, TerrainParams};
pub use position::{BlockPos, ChunkPos};
pub use spawn::find_spawn_position;
pub use world::{VoxelWorld, WorldState};
