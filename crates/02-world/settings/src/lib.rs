#![deny(missing_docs)]
//! User-editable settings the behaviour units read each cycle.
//!
//! The settings panel writes through [`SettingsStore::update`]; units only
//! ever see an immutable [`Settings`] snapshot taken when their cycle began.

mod store;

pub use crate::store::SettingsStore;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use world_api::Tile;

/// Default radius, in tiles, the agent may stray from its fight anchor.
pub const DEFAULT_ANCHOR_RADIUS: u32 = 25;
/// Default radius, in tiles, scanned for NPC names before the script starts.
pub const DEFAULT_SCAN_RADIUS: u32 = 20;

/// Rejected settings edits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Eat threshold above 100%.
    #[error("eat threshold {0}% exceeds 100%")]
    EatPercentOutOfRange(u8),
    /// Anchor radius of zero would pin the agent to a single tile.
    #[error("anchor radius must be positive")]
    ZeroAnchorRadius,
}

/// One consistent view of every user setting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether the combat units are running.
    pub script_started: bool,
    /// Whether the agent eats and banks for food.
    pub should_eat: bool,
    /// Substring identifying food items.
    pub food_name: String,
    /// Health percentage at or below which the agent eats.
    pub eat_percent: u8,
    /// NPC names seen nearby that are not selected.
    pub known_npcs: BTreeSet<String>,
    /// NPC names the agent is allowed to attack.
    pub selected_npcs: BTreeSet<String>,
    /// Tile the agent returns to between fights and after banking.
    pub fight_anchor: Option<Tile>,
    /// How far from the anchor the agent may wander.
    pub anchor_radius: u32,
    /// How far the pre-start scan looks for NPCs.
    pub scan_radius: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            script_started: false,
            should_eat: false,
            food_name: String::new(),
            eat_percent: 0,
            known_npcs: BTreeSet::new(),
            selected_npcs: BTreeSet::new(),
            fight_anchor: None,
            anchor_radius: DEFAULT_ANCHOR_RADIUS,
            scan_radius: DEFAULT_SCAN_RADIUS,
        }
    }
}

impl Settings {
    /// Checks ranges that the settings panel cannot express in its widgets.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.eat_percent > 100 {
            return Err(SettingsError::EatPercentOutOfRange(self.eat_percent));
        }
        if self.anchor_radius == 0 {
            return Err(SettingsError::ZeroAnchorRadius);
        }
        Ok(())
    }

    /// Whether `name` is an allowed target.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_npcs.contains(name)
    }

    /// Moves `name` from the known list to the selected list.
    pub fn select_npc(&mut self, name: &str) {
        self.known_npcs.remove(name);
        self.selected_npcs.insert(name.to_owned());
    }

    /// Moves `name` back from the selected list to the known list.
    pub fn deselect_npc(&mut self, name: &str) {
        if self.selected_npcs.remove(name) {
            self.known_npcs.insert(name.to_owned());
        }
    }

    /// Adds newly seen names to the known list, skipping selected ones.
    /// Returns how many names were new.
    pub fn record_npcs<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for name in names {
            let name = name.as_ref();
            if name.is_empty() || self.selected_npcs.contains(name) {
                continue;
            }
            if self.known_npcs.insert(name.to_owned()) {
                added += 1;
            }
        }
        added
    }
}
