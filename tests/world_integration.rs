// End-to-end world scenarios over the public API: initial generation
// and readiness, spawn placement, block edits, explosion carving and
// observer-driven streaming.

use std::cell::Cell;
use std::rc::Rc;

use blockworld::{
    find_spawn_position, BlockPos, BlockType, ChunkPos, TerrainGenerator, VoxelWorld, WorldConfig,
    WorldState,
};
use cgmath::Point3;

fn small_config() -> WorldConfig {
    WorldConfig {
        chunk_size: 16,
        world_height: 128,
        render_distance: 2,
        noise_frequency: 0.05,
        seed: 12345,
    }
}

#[test]
fn full_lifecycle_from_empty_to_edited_world() {
    let fired = Rc::new(Cell::new(0u32));
    let observed = Rc::clone(&fired);

    let mut world = VoxelWorld::new(small_config());
    assert_eq!(world.state(), WorldState::Uninitialized);

    world.on_ready(move |w| {
        observed.set(observed.get() + 1);
        assert_eq!(w.chunk_count(), 25, "the hook sees the finished batch");
    });
    world.initialize();

    assert_eq!(world.state(), WorldState::Ready);
    assert_eq!(fired.get(), 1, "readiness fires exactly once");
    assert_eq!(world.chunk_count(), 25, "render distance 2 is a 5x5 square");

    // The origin column is standable terrain within the height band.
    let spawn = find_spawn_position(&world, 0, 0).expect("origin column is standable");
    assert!(spawn.y > 32, "ground never dips below the band floor");
    assert!(world.get_block(spawn.offset(0, -2, 0)).is_solid());

    // Edits read back through world coordinates.
    world.set_block(spawn, BlockType::Wood);
    assert_eq!(world.get_block(spawn), BlockType::Wood);
    world.set_block(spawn, BlockType::Air);
    assert_eq!(world.get_block(spawn), BlockType::Air);
}

#[test]
fn generated_chunks_carry_mesh_and_collision() {
    let mut world = VoxelWorld::new(small_config());
    world.initialize();

    for chunk in world.chunks() {
        assert!(
            !chunk.mesh().is_empty(),
            "terrain chunks always have visible faces"
        );
        let collider = chunk.collider().expect("collision follows geometry");
        assert_eq!(collider.triangle_count(), chunk.mesh().face_count() * 2);
    }
}

#[test]
fn worlds_with_equal_seed_and_frequency_are_identical() {
    let mut world_a = VoxelWorld::new(small_config());
    let mut world_b = VoxelWorld::new(small_config());
    world_a.initialize();
    world_b.initialize();

    for pos in [ChunkPos::new(0, 0), ChunkPos::new(-2, 1), ChunkPos::new(2, -2)] {
        let a = world_a.chunk(pos).expect("chunk resident in world a");
        let b = world_b.chunk(pos).expect("chunk resident in world b");
        assert_eq!(a.blocks(), b.blocks(), "chunk {} must match", pos);
        assert_eq!(a.mesh().vertex_count(), b.mesh().vertex_count());
    }
}

#[test]
fn terrain_is_seamless_across_the_origin() {
    // Columns on both sides of x = 0 belong to different chunks; their
    // heights must come from one heightmap, not restart per chunk.
    let mut world = VoxelWorld::new(small_config());
    world.initialize();

    let generator = TerrainGenerator::new(12345, 0.05);
    for z in -5..5 {
        for x in [-2, -1, 0, 1] {
            let ground = generator.ground_height(x, z);
            assert_eq!(
                world.get_block(BlockPos::new(x, ground - 1, z)),
                BlockType::Grass,
                "surface cap at ({}, {})",
                x,
                z
            );
            assert_eq!(world.get_block(BlockPos::new(x, ground, z)), BlockType::Air);
        }
    }
}

#[test]
fn streaming_follows_the_observer_without_eviction() {
    let mut world = VoxelWorld::new(small_config());
    world.initialize();
    assert_eq!(world.chunk_count(), 25);

    world.set_observer(Point3::new(8.0, 70.0, 8.0));
    world.update();
    assert_eq!(
        world.chunk_count(),
        25,
        "an observer inside the initial square adds nothing"
    );

    // Walk eastward one chunk at a time; each step pulls in one new
    // column of chunks and evicts nothing.
    let mut expected = 25;
    for step in 1..=4 {
        let x = (step * 16) as f32 + 8.0;
        world.set_observer(Point3::new(x, 70.0, 8.0));
        world.update();
        expected += 5;
        assert_eq!(world.chunk_count(), expected, "after step {}", step);
    }

    // Returning over generated ground regenerates nothing.
    world.set_observer(Point3::new(8.0, 70.0, 8.0));
    world.update();
    assert_eq!(world.chunk_count(), expected);

    // Everything resident lies within the streaming radius of some
    // point along the walk.
    let centers: Vec<ChunkPos> = (0..=4).map(|x| ChunkPos::new(x, 0)).collect();
    for chunk in world.chunks() {
        let reach = centers
            .iter()
            .map(|c| c.chebyshev_distance(chunk.position()))
            .min()
            .unwrap();
        assert!(
            reach <= 2,
            "chunk {} was never inside the streaming square",
            chunk.position()
        );
    }
}

#[test]
fn explosions_carve_craters_into_terrain() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut world = VoxelWorld::new(small_config());
    world.initialize();

    let spawn = find_spawn_position(&world, 0, 0).expect("origin column is standable");
    let ground = spawn.offset(0, -2, 0);
    assert!(world.get_block(ground).is_solid());

    let mut rng = StdRng::seed_from_u64(99);
    world.explode(ground.center(), 4.0, &mut rng);

    assert_eq!(
        world.get_block(ground),
        BlockType::Air,
        "the crater center is always cleared"
    );
    let deep = ground.offset(0, -8, 0);
    assert!(
        world.get_block(deep).is_solid(),
        "blocks beyond the radius stay intact"
    );
}
