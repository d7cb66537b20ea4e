#![deny(missing_docs)]
//! Priority model shared by every task unit and the scheduler.
//!
//! Units rank themselves either with a flat integer or with a two-level
//! [`PriorityPair`]. Both forms collapse into an [`EncodedPriority`], the
//! scalar the scheduler sorts on.

mod encode;
mod error;
mod level;

pub use crate::encode::{EncodedPriority, PriorityPair};
pub use crate::error::ConfigError;
pub use crate::level::Priority;
