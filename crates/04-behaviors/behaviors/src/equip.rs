use scheduler::{EncodedPriority, Pacing, Priority, PriorityPair, Task};
use world_api::{EquipmentSlot, Item};

use crate::context::{BehaviorError, Context};

const WEAPON: &str = "sword";
const SHIELD: &str = "shield";

/// Fills empty weapon and shield slots from the inventory.
#[derive(Debug, Default)]
pub struct EquipTask;

impl EquipTask {
    /// Registry name.
    pub const NAME: &'static str = "equip";
    /// Declared priority pair.
    pub const PRIORITY: PriorityPair = PriorityPair::new(Priority::Normal, Priority::Normal);

    /// Stateless unit.
    pub fn new() -> Self {
        Self
    }
}

fn any_matches(items: &[Item], fragment: &str) -> bool {
    items.iter().any(|i| i.matches(fragment))
}

impl Task<Context> for EquipTask {
    /// Slots to fill, each with the name fragment to look for.
    type Scratch = Vec<(EquipmentSlot, &'static str)>;
    type Error = BehaviorError;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> EncodedPriority {
        Self::PRIORITY.encode()
    }

    fn check(&mut self, ctx: &Context) -> Result<Option<Self::Scratch>, BehaviorError> {
        let worn = ctx.world.equipment()?;
        let carried = ctx.world.inventory()?;
        let slots = [(EquipmentSlot::Weapon, WEAPON), (EquipmentSlot::Shield, SHIELD)];
        let missing: Vec<_> = slots
            .into_iter()
            .filter(|(_, fragment)| !any_matches(&worn, fragment))
            .filter(|(_, fragment)| any_matches(&carried, fragment))
            .collect();
        Ok((!missing.is_empty()).then_some(missing))
    }

    fn act(&mut self, ctx: &Context, missing: Self::Scratch) -> Result<Pacing, BehaviorError> {
        for (slot, fragment) in missing {
            if !ctx.actions.equip(slot, fragment)? {
                log::warn!("could not equip {fragment} into {slot:?}");
            }
        }
        Ok(Pacing::ZERO)
    }
}
