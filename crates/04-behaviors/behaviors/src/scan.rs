use scheduler::{Pacing, Task};

use crate::context::{BehaviorError, Context};

/// Collects the names of nearby NPCs for the settings panel while the
/// combat units are stopped.
#[derive(Debug, Default)]
pub struct ScanTask;

impl ScanTask {
    /// Registry name.
    pub const NAME: &'static str = "scan";
    /// Delay after every scan.
    pub const PACING: Pacing = Pacing::from_millis(1000);

    /// Stateless unit.
    pub fn new() -> Self {
        Self
    }
}

impl Task<Context> for ScanTask {
    type Scratch = ();
    type Error = BehaviorError;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn check(&mut self, ctx: &Context) -> Result<Option<()>, BehaviorError> {
        Ok((!ctx.settings.script_started).then_some(()))
    }

    fn act(&mut self, ctx: &Context, _: ()) -> Result<Pacing, BehaviorError> {
        if !ctx.world.is_logged_in()? {
            return Ok(Self::PACING);
        }
        let here = ctx.world.player()?.tile;
        let radius = f64::from(ctx.settings.scan_radius);
        let names: Vec<String> = ctx
            .world
            .npcs()?
            .into_iter()
            .filter(|npc| npc.tile.distance(&here) < radius)
            .map(|npc| npc.name)
            .collect();
        let added = ctx.store.record_npcs(&names)?;
        if added > 0 {
            log::debug!("scan found {added} new NPC name(s)");
        }
        Ok(Self::PACING)
    }
}
