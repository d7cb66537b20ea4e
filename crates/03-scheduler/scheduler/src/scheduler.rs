use thiserror::Error;

use priority::ConfigError;

use crate::pacing::{Pacer, Pacing};
use crate::registry::{Registry, TaskId};
use crate::task::Task;

/// Wait used when no unit was eligible, so an idle loop does not spin.
pub const DEFAULT_IDLE_PACING: Pacing = Pacing::from_millis(600);

/// A cycle that did not complete.
///
/// The registry is left as it was; the scheduler never retries.
#[derive(Debug, Error)]
pub enum CycleError {
    /// A unit's eligibility check failed.
    #[error("eligibility check of `{task}` failed: {source}")]
    Eligibility {
        /// Unit name.
        task: String,
        /// Error raised by the unit.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The selected unit's action failed.
    #[error("action of `{task}` failed: {source}")]
    Action {
        /// Unit name.
        task: String,
        /// Error raised by the unit.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CycleError {
    /// Name of the unit that failed.
    pub fn task(&self) -> &str {
        match self {
            CycleError::Eligibility { task, .. } | CycleError::Action { task, .. } => task,
        }
    }
}

/// What a completed cycle did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The named unit acted.
    Acted {
        /// Registration handle of the unit.
        id: TaskId,
        /// Unit name.
        name: String,
    },
    /// Nothing was eligible.
    Idle,
}

/// Summary of one completed cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    /// Zero-based cycle counter.
    pub seq: u64,
    /// Selected unit, if any.
    pub outcome: CycleOutcome,
    /// Wait before the next cycle.
    pub pacing: Pacing,
}

impl Cycle {
    /// Name of the unit that acted.
    pub fn acted(&self) -> Option<&str> {
        match &self.outcome {
            CycleOutcome::Acted { name, .. } => Some(name),
            CycleOutcome::Idle => None,
        }
    }
}

/// Single-threaded arbitration loop over a [`Registry`].
pub struct Scheduler<C: ?Sized> {
    registry: Registry<C>,
    idle_pacing: Pacing,
    cycles: u64,
}

impl<C: ?Sized> Scheduler<C> {
    /// Scheduler idling for [`DEFAULT_IDLE_PACING`].
    pub fn new() -> Self {
        Self::with_idle_pacing(DEFAULT_IDLE_PACING)
    }

    /// Scheduler idling for `idle_pacing` when nothing is eligible.
    pub fn with_idle_pacing(idle_pacing: Pacing) -> Self {
        Self {
            registry: Registry::new(),
            idle_pacing,
            cycles: 0,
        }
    }

    /// Queues `task`; it joins arbitration at the next cycle.
    pub fn register<T>(&mut self, task: T) -> Result<TaskId, ConfigError>
    where
        T: Task<C> + Send + 'static,
    {
        self.registry.register(task)
    }

    /// Queues removal of `id`; it leaves arbitration at the next cycle.
    pub fn unregister(&mut self, id: TaskId) -> bool {
        self.registry.unregister(id)
    }

    /// Registered units.
    pub fn registry(&self) -> &Registry<C> {
        &self.registry
    }

    /// Registered units, for hosts that apply changes eagerly.
    pub fn registry_mut(&mut self) -> &mut Registry<C> {
        &mut self.registry
    }

    /// Pacing used for idle cycles.
    pub fn idle_pacing(&self) -> Pacing {
        self.idle_pacing
    }

    /// Number of cycles completed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Runs one Select/Act (or Idle) cycle without waiting afterwards.
    pub fn run_one_cycle(&mut self, ctx: &C) -> Result<Cycle, CycleError> {
        self.registry.apply_pending();
        let seq = self.cycles;

        let mut outcome = CycleOutcome::Idle;
        let mut pacing = self.idle_pacing;
        for entry in self.registry.entries_mut() {
            match entry.task.attempt(ctx)? {
                Some(returned) => {
                    let name = entry.task.name().to_owned();
                    log::debug!("cycle {seq}: `{name}` acted, pacing {returned:?}");
                    outcome = CycleOutcome::Acted { id: entry.id, name };
                    pacing = returned;
                    break;
                }
                None => log::trace!("cycle {seq}: `{}` not eligible", entry.task.name()),
            }
        }
        if outcome == CycleOutcome::Idle {
            log::debug!("cycle {seq}: idle, pacing {pacing:?}");
        }

        self.cycles += 1;
        Ok(Cycle {
            seq,
            outcome,
            pacing,
        })
    }

    /// Runs one cycle, then waits out its pacing on `pacer`.
    ///
    /// Zero pacing returns without touching the pacer. A failed cycle
    /// returns the error without waiting.
    pub fn tick<P: Pacer + ?Sized>(&mut self, ctx: &C, pacer: &mut P) -> Result<Cycle, CycleError> {
        let cycle = self.run_one_cycle(ctx)?;
        if !cycle.pacing.is_zero() {
            pacer.pause(cycle.pacing.as_duration());
        }
        Ok(cycle)
    }
}

impl<C: ?Sized> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}
