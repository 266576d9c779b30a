use std::time::Instant;

use cgmath::Point3;
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::config::WorldConfig;
use crate::world::{generation::TerrainGenerator, BlockPos, BlockType, Chunk, ChunkPos};

/// Lifecycle of a world. States only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldState {
    Uninitialized,
    InitialGenerationInProgress,
    Ready,
}

/// Sparse chunked voxel world. Chunks become resident on demand around
/// a single observer and are never evicted; every operation is total
/// and synchronous.
pub struct VoxelWorld {
    config: WorldConfig,
    generator: TerrainGenerator,
    chunks: FxHashMap<ChunkPos, Chunk>,
    state: WorldState,
    observer: Option<Point3<f32>>,
    ready_hook: Option<Box<dyn FnOnce(&VoxelWorld)>>,
}

impl VoxelWorld {
    pub fn new(config: WorldConfig) -> Self {
        let generator = TerrainGenerator::new(config.seed, config.noise_frequency);
        Self::with_generator(config, generator)
    }

    /// Build a world with a custom terrain generator. `new` wires the
    /// default heightmap generator from the config.
    pub fn with_generator(config: WorldConfig, generator: TerrainGenerator) -> Self {
        Self {
            config,
            generator,
            chunks: FxHashMap::default(),
            state: WorldState::Uninitialized,
            observer: None,
            ready_hook: None,
        }
    }

    /// Generate and mesh the initial square of chunks around the
    /// origin, move the world to Ready and fire the readiness hook.
    /// Calling this again once initialization has run is a no-op.
    pub fn initialize(&mut self) {
        if self.state != WorldState::Uninitialized {
            return;
        }
        self.state = WorldState::InitialGenerationInProgress;

        let radius = self.config.render_distance;
        let side = radius * 2 + 1;
        log::info!("generating initial {}x{} chunk area", side, side);

        let start = Instant::now();
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                self.generate_chunk(ChunkPos::new(dx, dz));
            }
        }

        self.state = WorldState::Ready;
        log::info!(
            "world ready: {} chunks generated in {:?}",
            self.chunks.len(),
            start.elapsed()
        );

        if let Some(hook) = self.ready_hook.take() {
            hook(self);
        }
    }

    /// Register the readiness observer. The hook fires exactly once,
    /// right after initial generation finishes; if the world is
    /// already Ready it fires immediately. The world keeps a single
    /// hook, so registering again replaces an unfired one.
    pub fn on_ready(&mut self, hook: impl FnOnce(&VoxelWorld) + 'static) {
        if self.state == WorldState::Ready {
            hook(self);
        } else {
            self.ready_hook = Some(Box::new(hook));
        }
    }

    pub fn state(&self) -> WorldState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == WorldState::Ready
    }

    /// Block at a world position. Ungenerated space reads as Air.
    pub fn get_block(&self, pos: BlockPos) -> BlockType {
        let chunk_pos = pos.to_chunk_pos(self.config.chunk_size);
        match self.chunks.get(&chunk_pos) {
            Some(chunk) => {
                let (x, y, z) = pos.to_local_pos(self.config.chunk_size);
                chunk.get_block(x, y, z)
            }
            None => BlockType::Air,
        }
    }

    /// Write a block and synchronously remesh the owning chunk, so
    /// render and collision geometry are current the moment this
    /// returns. Writes into ungenerated space are dropped.
    pub fn set_block(&mut self, pos: BlockPos, block: BlockType) {
        let chunk_pos = pos.to_chunk_pos(self.config.chunk_size);
        if let Some(chunk) = self.chunks.get_mut(&chunk_pos) {
            let (x, y, z) = pos.to_local_pos(self.config.chunk_size);
            chunk.set_block(x, y, z, block);
            chunk.rebuild_mesh();
            log::trace!("set {} at {} (chunk {})", block, pos, chunk_pos);
        }
    }

    /// Float-position block query for physics-side callers
    pub fn get_block_at(&self, pos: Point3<f32>) -> BlockType {
        self.get_block(BlockPos::from_world(pos))
    }

    /// Float-position block edit for physics-side callers
    pub fn set_block_at(&mut self, pos: Point3<f32>, block: BlockType) {
        self.set_block(BlockPos::from_world(pos), block);
    }

    /// Make the chunk at the given position resident: create it, fill
    /// it from the terrain generator and mesh it once. Chunks that are
    /// already resident are left untouched.
    pub fn generate_chunk(&mut self, pos: ChunkPos) {
        if self.chunks.contains_key(&pos) {
            return;
        }
        let mut chunk = Chunk::new(pos, self.config.chunk_size, self.config.world_height);
        self.generator.generate_chunk(&mut chunk);
        chunk.rebuild_mesh();
        log::debug!("generated chunk {}", pos);
        self.chunks.insert(pos, chunk);
    }

    /// Register or move the observer whose position drives streaming
    pub fn set_observer(&mut self, position: Point3<f32>) {
        self.observer = Some(position);
    }

    /// Stream chunks around the observer: every chunk within the
    /// render-distance square (Chebyshev radius) becomes resident.
    /// Runs only once the world is Ready and an observer has been
    /// registered; already-resident chunks cost nothing.
    pub fn update(&mut self) {
        if self.state != WorldState::Ready {
            return;
        }
        let observer = match self.observer {
            Some(position) => position,
            None => return,
        };

        let center = ChunkPos::from_world(observer, self.config.chunk_size);
        let radius = self.config.render_distance;
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                self.generate_chunk(center.offset(dx, dz));
            }
        }
    }

    /// Blow out a rough sphere of blocks around a world-space point.
    /// Blocks closer to the center are more likely to be destroyed;
    /// each destroyed block remeshes its chunk immediately.
    pub fn explode(&mut self, center: Point3<f32>, radius: f32, rng: &mut impl Rng) {
        let center_block = BlockPos::from_world(center);
        let reach = radius.ceil() as i32;
        let mut destroyed = 0u32;

        for dx in -reach..=reach {
            for dy in -reach..=reach {
                for dz in -reach..=reach {
                    let distance = ((dx * dx + dy * dy + dz * dz) as f32).sqrt();
                    if distance > radius {
                        continue;
                    }
                    let pos = center_block.offset(dx, dy, dz);
                    if self.get_block(pos).is_air() {
                        continue;
                    }
                    let destroy_chance = 1.0 - distance / radius;
                    if rng.gen::<f32>() < destroy_chance {
                        self.set_block(pos, BlockType::Air);
                        destroyed += 1;
                    }
                }
            }
        }

        log::info!(
            "explosion at {} radius {} destroyed {} blocks",
            center_block,
            radius,
            destroyed
        );
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn has_chunk(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }

    pub fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    /// Iterate all resident chunks, for renderers and physics
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }
}
