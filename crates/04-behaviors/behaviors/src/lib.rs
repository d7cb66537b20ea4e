#![deny(missing_docs)]
//! Combat behaviour units plugged into the scheduler.
//!
//! Every unit is a [`scheduler::Task`] over [`Context`]. Units only talk to
//! the world through the context's interfaces and only read the settings
//! snapshot taken for the current cycle.

mod bank;
mod context;
mod eat;
mod equip;
mod fight;
mod scan;
mod walk;

pub use crate::bank::BankTask;
pub use crate::context::{BehaviorError, Context};
pub use crate::eat::EatTask;
pub use crate::equip::EquipTask;
pub use crate::fight::{FightTarget, FightTask};
pub use crate::scan::ScanTask;
pub use crate::walk::WalkTask;

use scheduler::{ConfigError, Pacing, Scheduler, TaskId};

/// Pacing range shared by units that imitate a human reaction delay.
pub(crate) fn human_delay<R: rand::Rng + ?Sized>(rng: &mut R) -> Pacing {
    Pacing::jittered(300, 300, rng)
}

/// Registers the combat units in their canonical order: fight, eat, bank,
/// walk, equip. `seed` drives the units' pacing jitter.
pub fn register_combat_units(
    scheduler: &mut Scheduler<Context>,
    seed: u64,
) -> Result<Vec<TaskId>, ConfigError> {
    Ok(vec![
        scheduler.register(FightTask::new(seed))?,
        scheduler.register(EatTask::new(seed.wrapping_add(1)))?,
        scheduler.register(BankTask::new())?,
        scheduler.register(WalkTask::new())?,
        scheduler.register(EquipTask::new())?,
    ])
}
