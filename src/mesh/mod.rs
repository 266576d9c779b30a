mod mesh;
mod mesher;
mod vertex;

pub use mesh::{Aabb, ChunkMesh, TrimeshCollider};
pub use mesher::build_mesh;
pub use vertex::Vertex;
