use crate::{
    mesh::{mesh::ChunkMesh, vertex::Vertex},
    world::Chunk,
};

/// Texture-space corners shared by every face, expanded in the same
/// `0 1 2 0 2 3` order as the positions.
const FACE_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// Build the render mesh for a chunk's current contents.
///
/// Classic per-face culling: every non-Air cell emits a quad toward
/// each neighbor that is transparent (Air or Water) or lies outside
/// this chunk. Neighbor tests never look across chunk boundaries, so
/// faces on a chunk's outer walls are always emitted even when the
/// adjacent chunk would cover them.
pub fn build_mesh(chunk: &Chunk) -> ChunkMesh {
    let mut mesh = ChunkMesh::new();
    let size = chunk.size() as i32;
    let height = chunk.height() as i32;

    for y in 0..height {
        for z in 0..size {
            for x in 0..size {
                let block = chunk.get_block(x, y, z);
                if block.is_air() {
                    continue;
                }
                let color = block.color();

                // Right face (+X)
                if face_visible(chunk, x + 1, y, z) {
                    add_face(&mut mesh, x, y, z, Face::Right, color);
                }
                // Left face (-X)
                if face_visible(chunk, x - 1, y, z) {
                    add_face(&mut mesh, x, y, z, Face::Left, color);
                }
                // Top face (+Y)
                if face_visible(chunk, x, y + 1, z) {
                    add_face(&mut mesh, x, y, z, Face::Top, color);
                }
                // Bottom face (-Y)
                if face_visible(chunk, x, y - 1, z) {
                    add_face(&mut mesh, x, y, z, Face::Bottom, color);
                }
                // Front face (+Z)
                if face_visible(chunk, x, y, z + 1) {
                    add_face(&mut mesh, x, y, z, Face::Front, color);
                }
                // Back face (-Z)
                if face_visible(chunk, x, y, z - 1) {
                    add_face(&mut mesh, x, y, z, Face::Back, color);
                }
            }
        }
    }

    mesh
}

/// Out-of-bounds reads come back as Air, so a single transparency
/// check covers both the neighbor-block and chunk-boundary cases.
fn face_visible(chunk: &Chunk, x: i32, y: i32, z: i32) -> bool {
    chunk.get_block(x, y, z).is_transparent()
}

fn add_face(mesh: &mut ChunkMesh, x: i32, y: i32, z: i32, face: Face, color: [f32; 4]) {
    let (x, y, z) = (x as f32, y as f32, z as f32);

    let corners = match face {
        Face::Right => [
            [x + 1.0, y, z],
            [x + 1.0, y + 1.0, z],
            [x + 1.0, y + 1.0, z + 1.0],
            [x + 1.0, y, z + 1.0],
        ],
        Face::Left => [
            [x, y, z + 1.0],
            [x, y + 1.0, z + 1.0],
            [x, y + 1.0, z],
            [x, y, z],
        ],
        Face::Top => [
            [x, y + 1.0, z],
            [x, y + 1.0, z + 1.0],
            [x + 1.0, y + 1.0, z + 1.0],
            [x + 1.0, y + 1.0, z],
        ],
        Face::Bottom => [
            [x, y, z + 1.0],
            [x, y, z],
            [x + 1.0, y, z],
            [x + 1.0, y, z + 1.0],
        ],
        Face::Front => [
            [x, y, z + 1.0],
            [x + 1.0, y, z + 1.0],
            [x + 1.0, y + 1.0, z + 1.0],
            [x, y + 1.0, z + 1.0],
        ],
        Face::Back => [
            [x + 1.0, y, z],
            [x, y, z],
            [x, y + 1.0, z],
            [x + 1.0, y + 1.0, z],
        ],
    };

    let normal = face.normal();
    mesh.add_face([
        Vertex::new(corners[0], normal, color, FACE_UVS[0]),
        Vertex::new(corners[1], normal, color, FACE_UVS[1]),
        Vertex::new(corners[2], normal, color, FACE_UVS[2]),
        Vertex::new(corners[3], normal, color, FACE_UVS[3]),
    ]);
}

#[derive(Debug, Clone, Copy)]
enum Face {
    Right,
    Left,
    Top,
    Bottom,
    Front,
    Back,
}

impl Face {
    fn normal(self) -> [f32; 3] {
        match self {
            Face::Right => [1.0, 0.0, 0.0],
            Face::Left => [-1.0, 0.0, 0.0],
            Face::Top => [0.0, 1.0, 0.0],
            Face::Bottom => [0.0, -1.0, 0.0],
            Face::Front => [0.0, 0.0, 1.0],
            Face::Back => [0.0, 0.0, -1.0],
        }
    }
}
