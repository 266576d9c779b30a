use noise::{NoiseFn, Perlin};

use crate::world::{BlockType, Chunk};

/// Shape constants for the heightmap terrain
#[derive(Debug, Clone, Copy)]
pub struct TerrainParams {
    /// Lowest possible ground height
    pub height_base: i32,
    /// Span of ground heights above the base
    pub height_range: i32,
    /// Grass reaches this many cells down before stone takes over
    pub surface_depth: i32,
    /// Columns whose ground sits below this height flood up to it
    pub water_level: i32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            height_base: 32,
            height_range: 64,
            surface_depth: 3,
            water_level: 20,
        }
    }
}

/// Deterministic heightmap terrain: Perlin noise picks a ground height
/// per column, stone fills the depths, grass caps the surface, and low
/// columns flood to the water level.
pub struct TerrainGenerator {
    noise: Perlin,
    frequency: f64,
    params: TerrainParams,
}

impl TerrainGenerator {
    pub fn new(seed: u32, frequency: f64) -> Self {
        Self::with_params(seed, frequency, TerrainParams::default())
    }

    pub fn with_params(seed: u32, frequency: f64, params: TerrainParams) -> Self {
        Self {
            noise: Perlin::new(seed),
            frequency,
            params,
        }
    }

    pub fn params(&self) -> TerrainParams {
        self.params
    }

    /// Ground height for a world column. Pure in the column coordinate
    /// and the generator's seed and frequency, so repeated calls and
    /// separate worlds agree bit for bit.
    pub fn ground_height(&self, world_x: i32, world_z: i32) -> i32 {
        let sample = self.noise.get([
            world_x as f64 * self.frequency,
            world_z as f64 * self.frequency,
        ]);
        // Perlin output sits in [-1, 1]; remap onto [0, 1] before scaling.
        let normalized = (sample + 1.0) * 0.5;
        self.params.height_base + (normalized * self.params.height_range as f64) as i32
    }

    /// Block for one cell of a column with the given ground height
    pub fn block_at(&self, y: i32, ground: i32) -> BlockType {
        if y < ground - self.params.surface_depth {
            BlockType::Stone
        } else if y < ground {
            BlockType::Grass
        } else if y < self.params.water_level {
            BlockType::Water
        } else {
            BlockType::Air
        }
    }

    /// Fill a chunk's cells from the heightmap. Columns are sampled at
    /// world coordinates, so terrain lines up across chunk boundaries.
    pub fn generate_chunk(&self, chunk: &mut Chunk) {
        let size = chunk.size() as i32;
        let height = chunk.height() as i32;
        let min = chunk.position().block_min(chunk.size());

        for x in 0..size {
            for z in 0..size {
                let ground = self.ground_height(min.x + x, min.z + z);
                for y in 0..height {
                    chunk.set_block(x, y, z, self.block_at(y, ground));
                }
            }
        }
    }
}
