use std::time::Duration;

use scheduler::{EncodedPriority, Pacing, Priority, PriorityPair, Task};
use world_api::{path, ObjectId, Target, Tile};

use crate::context::{BehaviorError, Context};

const DOOR_WAIT: Duration = Duration::from_secs(10);

/// Restocks food at the nearest bank and walks back to the fight anchor.
///
/// Logs out and clears the start flag when the bank has no food left.
#[derive(Debug, Default)]
pub struct BankTask;

impl BankTask {
    /// Registry name.
    pub const NAME: &'static str = "bank";
    /// Declared priority pair.
    pub const PRIORITY: PriorityPair = PriorityPair::new(Priority::High, Priority::Normal);

    /// Stateless; every trip starts from the current world.
    pub fn new() -> Self {
        Self
    }

    fn open_blocking_door(ctx: &Context, from: Tile, bank: Tile) -> Result<(), BehaviorError> {
        let Some(step) = ctx.world.first_waypoint(from, bank)? else {
            return Ok(());
        };
        if ctx.world.can_reach(from, step)? {
            return Ok(());
        }
        let Some(door) = path::door_between(ctx.world.as_ref(), step)? else {
            return Ok(());
        };
        if ctx.actions.interact(Target::Object(door.id), "Open")? {
            let opened = ctx.waiter.wait_while(&mut || still_closed(ctx, door.id), DOOR_WAIT);
            if !opened {
                log::warn!("door {:?} still closed after {DOOR_WAIT:?}", door.id);
            }
        }
        Ok(())
    }
}

/// Query failures end the wait; the next cycle re-checks the route.
fn still_closed(ctx: &Context, door: ObjectId) -> bool {
    match ctx.world.objects() {
        Ok(objects) => objects.iter().any(|o| o.id == door && o.has_action("Open")),
        Err(err) => {
            log::debug!("door {door:?} state unknown: {err}");
            false
        }
    }
}

impl Task<Context> for BankTask {
    type Scratch = ();
    type Error = BehaviorError;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> EncodedPriority {
        Self::PRIORITY.encode()
    }

    fn check(&mut self, ctx: &Context) -> Result<Option<()>, BehaviorError> {
        if !ctx.eating_enabled() {
            return Ok(None);
        }
        let out_of_food = !ctx
            .world
            .inventory()?
            .iter()
            .any(|item| item.matches(&ctx.settings.food_name));
        Ok(out_of_food.then_some(()))
    }

    fn act(&mut self, ctx: &Context, _: ()) -> Result<Pacing, BehaviorError> {
        let here = ctx.world.player()?.tile;
        let bank = ctx.world.nearest_bank()?.ok_or(BehaviorError::NoBank)?;
        Self::open_blocking_door(ctx, here, bank)?;

        if !ctx.actions.walk_to(bank)? || !ctx.actions.open_nearest_bank()? {
            return Ok(Pacing::ZERO);
        }

        let food = &ctx.settings.food_name;
        if ctx.actions.withdraw_all(food)? {
            ctx.actions.close_bank()?;
            if let Some(anchor) = ctx.settings.fight_anchor {
                ctx.actions.walk_to(anchor)?;
            }
        } else {
            log::warn!("bank has no more {food}; stopping");
            if ctx.actions.close_bank()? {
                ctx.actions.logout()?;
                ctx.store.set_started(false)?;
            }
        }
        Ok(Pacing::ZERO)
    }
}
