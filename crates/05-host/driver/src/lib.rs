#![deny(missing_docs)]
//! Host side of the scheduler: owns the loop, the start/stop lifecycle and
//! the policy applied to failed cycles.

mod builder;
mod command;
mod driver;

pub use crate::builder::DriverBuilder;
pub use crate::command::{Command, DriverHandle};
pub use crate::driver::{Driver, DriverError, DriverStats, FailurePolicy};
