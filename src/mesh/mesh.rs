use cgmath::Point3;

use crate::mesh::vertex::Vertex;

/// Axis-aligned bounding box for broad-phase collision queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    pub fn center(&self) -> Point3<f32> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
            && self.min.y <= other.max.y && self.max.y >= other.min.y
            && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    pub fn contains_point(&self, point: Point3<f32>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x
            && point.y >= self.min.y && point.y <= self.max.y
            && point.z >= self.min.z && point.z <= self.max.z
    }
}

/// Render geometry of one chunk: an unindexed triangle list in
/// chunk-local coordinates, six vertices per visible block face.
#[derive(Debug, Clone, Default)]
pub struct ChunkMesh {
    pub vertices: Vec<Vertex>,
}

impl ChunkMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one face as two triangles over the four corners,
    /// in `v0 v1 v2 v0 v2 v3` order.
    pub fn add_face(&mut self, corners: [Vertex; 4]) {
        self.vertices.extend_from_slice(&[
            corners[0], corners[1], corners[2],
            corners[0], corners[2], corners[3],
        ]);
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.vertices.len() / 6
    }
}

/// Collision triangles matching the render mesh face for face.
/// Indexed: four corner positions and two index triples per face.
#[derive(Debug, Clone, Default)]
pub struct TrimeshCollider {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<[u32; 3]>,
}

impl TrimeshCollider {
    /// Derive collision triangles from a render mesh, or `None` when
    /// the mesh is empty (no geometry means no collision). Faces are
    /// six vertices in `v0 v1 v2 v0 v2 v3` order, so the four unique
    /// corners sit at offsets 0, 1, 2 and 5.
    pub fn from_mesh(mesh: &ChunkMesh) -> Option<Self> {
        if mesh.is_empty() {
            return None;
        }
        let mut collider = Self::default();
        for face in mesh.vertices.chunks_exact(6) {
            collider.add_face([
                face[0].position,
                face[1].position,
                face[2].position,
                face[5].position,
            ]);
        }
        Some(collider)
    }

    pub fn add_face(&mut self, corners: [[f32; 3]; 4]) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.indices.push([base, base + 1, base + 2]);
        self.indices.push([base, base + 2, base + 3]);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Bounding box over all collider corners, `None` for an empty
    /// collider
    pub fn aabb(&self) -> Option<Aabb> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.positions[1..] {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some(Aabb {
            min: Point3::from(min),
            max: Point3::from(max),
        })
    }
}
