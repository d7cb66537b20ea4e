#![deny(missing_docs)]
//! Reactive priority arbitration over a pool of task units.
//!
//! Each cycle the [`Scheduler`] walks its [`Registry`] from the highest
//! encoded priority down, runs the first unit whose eligibility check
//! passes, and reports how long the host should wait before the next cycle.

mod pacing;
mod registry;
mod scheduler;
mod task;

pub use crate::pacing::{Pacer, Pacing, ThreadPacer};
pub use crate::registry::{Registry, TaskId, TaskInfo};
pub use crate::scheduler::{Cycle, CycleError, CycleOutcome, Scheduler, DEFAULT_IDLE_PACING};
pub use crate::task::Task;

pub use priority::{ConfigError, EncodedPriority, Priority, PriorityPair};
