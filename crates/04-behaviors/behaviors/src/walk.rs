use scheduler::{EncodedPriority, Pacing, Priority, PriorityPair, Task};
use world_api::Tile;

use crate::context::{BehaviorError, Context};

/// Walks back to the fight anchor once the agent strays too far.
#[derive(Debug, Default)]
pub struct WalkTask;

impl WalkTask {
    /// Registry name.
    pub const NAME: &'static str = "walk";
    /// Declared priority pair.
    pub const PRIORITY: PriorityPair = PriorityPair::new(Priority::Normal, Priority::Low);

    /// Walks to whatever anchor the settings hold.
    pub fn new() -> Self {
        Self
    }
}

impl Task<Context> for WalkTask {
    type Scratch = Tile;
    type Error = BehaviorError;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> EncodedPriority {
        Self::PRIORITY.encode()
    }

    fn check(&mut self, ctx: &Context) -> Result<Option<Tile>, BehaviorError> {
        let Some(anchor) = ctx.settings.fight_anchor else {
            return Ok(None);
        };
        let here = ctx.world.player()?.tile;
        Ok((!anchor.area_contains(ctx.settings.anchor_radius, &here)).then_some(anchor))
    }

    fn act(&mut self, ctx: &Context, anchor: Tile) -> Result<Pacing, BehaviorError> {
        if ctx.world.should_walk()? {
            ctx.actions.walk_to(anchor)?;
        }
        Ok(Pacing::ZERO)
    }
}
