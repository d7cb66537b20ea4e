use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use scheduler::{EncodedPriority, Pacing, Priority, PriorityPair, Task};
use world_api::{path, GameObject, Npc, Tab, Target};

use crate::context::{BehaviorError, Context};
use crate::human_delay;

const COMBAT_WAIT: Duration = Duration::from_secs(3);

/// What the fight check settled on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FightTarget {
    /// Closest selected NPC that is free or already fighting us.
    pub npc: Npc,
    /// Door to open first when the NPC is out of reach.
    pub door: Option<GameObject>,
}

/// Attacks the closest selected NPC, opening a door on the way if needed.
#[derive(Debug)]
pub struct FightTask {
    rng: StdRng,
}

impl FightTask {
    /// Registry name.
    pub const NAME: &'static str = "fight";
    /// Declared priority pair.
    pub const PRIORITY: PriorityPair = PriorityPair::new(Priority::Low, Priority::Low);

    /// Creates the unit with its jitter source seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Task<Context> for FightTask {
    type Scratch = FightTarget;
    type Error = BehaviorError;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> EncodedPriority {
        Self::PRIORITY.encode()
    }

    fn check(&mut self, ctx: &Context) -> Result<Option<FightTarget>, BehaviorError> {
        let player = ctx.world.player()?;
        let npc = ctx
            .world
            .npcs()?
            .into_iter()
            .filter(|n| ctx.settings.is_selected(&n.name))
            .filter(|n| !n.in_combat || n.interacting_with_player)
            .min_by(|a, b| {
                a.tile
                    .distance(&player.tile)
                    .total_cmp(&b.tile.distance(&player.tile))
            });
        let Some(npc) = npc else {
            return Ok(None);
        };
        if !npc.attackable || player.in_combat {
            return Ok(None);
        }

        let door = if ctx.world.can_reach(player.tile, npc.tile)? {
            None
        } else {
            path::door_between(ctx.world.as_ref(), npc.tile)?
        };
        Ok(Some(FightTarget { npc, door }))
    }

    fn act(&mut self, ctx: &Context, target: FightTarget) -> Result<Pacing, BehaviorError> {
        if ctx.store.anchor_if_unset(target.npc.tile)? {
            log::info!("fight anchor set to {:?}", target.npc.tile);
        }

        if !ctx.world.auto_retaliate()? && ctx.actions.open_tab(Tab::Combat)? {
            ctx.actions.enable_auto_retaliate()?;
        }

        if let Some(door) = target.door {
            log::debug!("opening {} towards {}", door.name, target.npc.name);
            ctx.actions.interact(Target::Object(door.id), "Open")?;
        } else if ctx.actions.interact(Target::Npc(target.npc.id), "Attack")? {
            ctx.waiter.wait_until(&mut || ctx.player_in_combat(), COMBAT_WAIT);
            ctx.actions.move_mouse_off_screen()?;
        }
        Ok(human_delay(&mut self.rng))
    }
}
