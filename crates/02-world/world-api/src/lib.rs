#![deny(missing_docs)]
//! Capability interfaces the behaviour units consult.
//!
//! Nothing in this crate talks to a real client. Hosts plug in
//! implementations of [`World`], [`Actions`] and [`Waiter`]; the scheduler
//! never sees them, only the units do.

/// Read-only world queries and the action surface.
pub mod iface;
/// Door and reachability helpers built on [`World`].
pub mod path;
/// Value types describing the agent and its surroundings.
pub mod types;
/// Bounded wait-with-predicate primitive.
pub mod wait;

pub use crate::iface::{Actions, World, WorldError};
pub use crate::types::{
    EquipmentSlot, GameObject, Item, Npc, NpcId, ObjectId, Player, Tab, Target, Tile,
};
pub use crate::wait::{PollingWaiter, Waiter, DEFAULT_POLL_INTERVAL, MAX_WAIT};
