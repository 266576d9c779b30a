use crate::world::{BlockPos, VoxelWorld};

/// Find a standable spawn position in the column at (x, z): the
/// highest Air cell resting on ground that is neither Air nor Water,
/// returned one block up so the spawned entity starts clear of the
/// surface. Returns `None` when the column has no standable pair,
/// for example open water or ungenerated space.
pub fn find_spawn_position(world: &VoxelWorld, x: i32, z: i32) -> Option<BlockPos> {
    let top = world.config().world_height as i32 - 1;

    for y in (1..=top).rev() {
        let at = world.get_block(BlockPos::new(x, y, z));
        let below = world.get_block(BlockPos::new(x, y - 1, z));
        if at.is_air() && below.is_solid() {
            let spawn = BlockPos::new(x, y + 1, z);
            log::debug!("spawn found at {}", spawn);
            return Some(spawn);
        }
    }

    log::warn!("no standable ground in column ({}, {})", x, z);
    None
}
