use anyhow::{Context, Result};
use blockworld::{find_spawn_position, BlockPos, VoxelWorld, WorldConfig};

/// Headless demo: build a world from the default (or given) config,
/// place an observer at a standable spawn, stream one tick and carve
/// a crater, then report what is resident.
fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => WorldConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => WorldConfig::default(),
    };
    log::info!(
        "config: chunk_size={} world_height={} render_distance={} seed={}",
        config.chunk_size,
        config.world_height,
        config.render_distance,
        config.seed
    );

    let mut world = VoxelWorld::new(config);
    world.on_ready(|w| {
        println!("world ready with {} chunks", w.chunk_count());
    });
    world.initialize();

    let spawn = find_spawn_position(&world, 0, 0).unwrap_or(BlockPos::new(0, 80, 0));
    println!("spawn position: {}", spawn);

    world.set_observer(spawn.center());
    world.update();

    // Carve a crater below the spawn to exercise the edit path.
    let crater = spawn.offset(0, -2, 0).center();
    world.explode(crater, 4.0, &mut rand::thread_rng());

    let faces: usize = world.chunks().map(|c| c.mesh().face_count()).sum();
    let vertices: usize = world.chunks().map(|c| c.mesh().vertex_count()).sum();
    println!(
        "{} chunks resident, {} faces, {} vertices",
        world.chunk_count(),
        faces,
        vertices
    );

    Ok(())
}
