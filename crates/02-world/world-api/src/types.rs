#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// A map coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub plane: u8,
}

impl Tile {
    /// Ground-floor tile.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, plane: 0 }
    }

    /// Euclidean distance; tiles on different planes are infinitely far apart.
    pub fn distance(&self, other: &Tile) -> f64 {
        if self.plane != other.plane {
            return f64::INFINITY;
        }
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// True when `other` lies inside the square area of `radius` around `self`.
    pub fn area_contains(&self, radius: u32, other: &Tile) -> bool {
        let r = i64::from(radius);
        self.plane == other.plane
            && (i64::from(self.x) - i64::from(other.x)).abs() <= r
            && (i64::from(self.y) - i64::from(other.y)).abs() <= r
    }

    /// The four orthogonal neighbours (north, east, south, west).
    pub fn neighbours(&self) -> [Tile; 4] {
        [
            Tile { y: self.y + 1, ..*self },
            Tile { x: self.x + 1, ..*self },
            Tile { y: self.y - 1, ..*self },
            Tile { x: self.x - 1, ..*self },
        ]
    }
}

/// Snapshot of the controlled agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub tile: Tile,
    /// Remaining health, 0..=100.
    pub health_percent: u8,
    pub in_combat: bool,
    pub moving: bool,
}

/// Stable handle for an NPC within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NpcId(pub u32);

/// A non-player character near the agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    pub tile: Tile,
    pub in_combat: bool,
    /// Whether the NPC is currently targeting the agent.
    pub interacting_with_player: bool,
    pub attackable: bool,
}

/// Stable handle for a scenery object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// Scenery the agent can interact with (doors, booths, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameObject {
    pub id: ObjectId,
    pub name: String,
    pub tile: Tile,
    pub actions: Vec<String>,
}

impl GameObject {
    /// Whether the object currently offers `verb`.
    pub fn has_action(&self, verb: &str) -> bool {
        self.actions.iter().any(|a| a == verb)
    }
}

/// An item stack in a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub slot: usize,
    pub name: String,
    pub amount: u32,
}

impl Item {
    /// Name filter used throughout the units: a plain substring match.
    /// An empty fragment matches nothing.
    pub fn matches(&self, fragment: &str) -> bool {
        !fragment.is_empty() && self.name.contains(fragment)
    }
}

/// Equipment slots the units manage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EquipmentSlot {
    Weapon,
    Shield,
}

/// Interface tabs that gate some interactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Inventory,
    Combat,
}

/// Entity addressed by [`crate::Actions::interact`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Npc(NpcId),
    Object(ObjectId),
    /// Inventory slot index.
    Inventory(usize),
}
