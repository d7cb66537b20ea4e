use rand::rngs::StdRng;
use rand::SeedableRng;
use scheduler::{EncodedPriority, Pacing, Priority, PriorityPair, Task};
use world_api::{Item, Tab, Target};

use crate::context::{BehaviorError, Context};
use crate::human_delay;

/// Eats configured food once health drops to the threshold.
#[derive(Debug)]
pub struct EatTask {
    rng: StdRng,
}

impl EatTask {
    /// Registry name.
    pub const NAME: &'static str = "eat";
    /// Declared priority pair.
    pub const PRIORITY: PriorityPair = PriorityPair::new(Priority::Normal, Priority::Normal);

    /// Creates the unit with its jitter source seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Task<Context> for EatTask {
    type Scratch = Item;
    type Error = BehaviorError;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> EncodedPriority {
        Self::PRIORITY.encode()
    }

    fn check(&mut self, ctx: &Context) -> Result<Option<Item>, BehaviorError> {
        if !ctx.eating_enabled() {
            return Ok(None);
        }
        let Some(food) = ctx
            .world
            .inventory()?
            .into_iter()
            .find(|item| item.matches(&ctx.settings.food_name))
        else {
            return Ok(None);
        };
        let hungry = ctx.world.player()?.health_percent <= ctx.settings.eat_percent;
        Ok(hungry.then_some(food))
    }

    fn act(&mut self, ctx: &Context, food: Item) -> Result<Pacing, BehaviorError> {
        let tab_ready =
            ctx.world.is_tab_open(Tab::Inventory)? || ctx.actions.open_tab(Tab::Inventory)?;
        if tab_ready {
            ctx.actions.interact(Target::Inventory(food.slot), "Eat")?;
        }
        Ok(human_delay(&mut self.rng))
    }
}
