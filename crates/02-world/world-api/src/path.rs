use crate::iface::{World, WorldError};
use crate::types::{GameObject, Tile};

/// Whether both the player and `target` can reach a tile next to `tile`.
///
/// Each side only needs one reachable neighbour; they do not have to share it.
pub fn both_can_reach(world: &dyn World, target: Tile, tile: Tile) -> Result<bool, WorldError> {
    let player = world.player()?.tile;
    let mut player_ok = false;
    let mut target_ok = false;
    for neighbour in tile.neighbours() {
        if !player_ok && world.can_reach(player, neighbour)? {
            player_ok = true;
        }
        if !target_ok && world.can_reach(target, neighbour)? {
            target_ok = true;
        }
        if player_ok && target_ok {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The door closest to `target` that both the player and `target` can walk up to.
pub fn door_between(world: &dyn World, target: Tile) -> Result<Option<GameObject>, WorldError> {
    let mut doors: Vec<GameObject> = world
        .objects()?
        .into_iter()
        .filter(|o| o.name.to_ascii_lowercase().contains("door"))
        .collect();
    doors.sort_by(|a, b| target.distance(&a.tile).total_cmp(&target.distance(&b.tile)));

    for door in doors {
        if both_can_reach(world, target, door.tile)? {
            log::trace!("door {:?} at {:?} separates us from {:?}", door.id, door.tile, target);
            return Ok(Some(door));
        }
    }
    Ok(None)
}
