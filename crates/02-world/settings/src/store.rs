use std::sync::Arc;

use arc_swap::ArcSwap;
use world_api::Tile;

use crate::{Settings, SettingsError};

/// Shared, copy-on-write settings cell.
///
/// Readers take cheap [`Arc`] snapshots; writers clone, edit, validate and
/// publish. A snapshot never changes after it was taken.
#[derive(Debug)]
pub struct SettingsStore {
    current: ArcSwap<Settings>,
}

impl SettingsStore {
    /// Creates a store seeded with `settings`.
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            current: ArcSwap::from_pointee(settings),
        })
    }

    /// Current settings.
    pub fn snapshot(&self) -> Arc<Settings> {
        self.current.load_full()
    }

    /// Applies `edit` to a copy of the current settings and publishes it.
    ///
    /// `edit` may run more than once when writers race. Invalid results are
    /// discarded and the stored settings stay as they were.
    pub fn update<F>(&self, mut edit: F) -> Result<Arc<Settings>, SettingsError>
    where
        F: FnMut(&mut Settings),
    {
        loop {
            let current = self.current.load_full();
            let mut next = Settings::clone(&current);
            edit(&mut next);
            next.validate()?;
            let next = Arc::new(next);
            let previous = self.current.compare_and_swap(&current, Arc::clone(&next));
            if Arc::ptr_eq(&*previous, &current) {
                return Ok(next);
            }
            log::trace!("settings update raced with another writer; retrying");
        }
    }

    /// Sets the start/stop flag.
    pub fn set_started(&self, started: bool) -> Result<(), SettingsError> {
        self.update(|s| s.script_started = started).map(drop)
    }

    /// Records `tile` as the fight anchor unless one is already set.
    /// Returns whether the anchor changed.
    pub fn anchor_if_unset(&self, tile: Tile) -> Result<bool, SettingsError> {
        let mut changed = false;
        self.update(|s| {
            changed = s.fight_anchor.is_none();
            if changed {
                s.fight_anchor = Some(tile);
            }
        })?;
        Ok(changed)
    }

    /// Marks `name` as an allowed target.
    pub fn select_npc(&self, name: &str) -> Result<(), SettingsError> {
        self.update(|s| s.select_npc(name)).map(drop)
    }

    /// Adds newly seen NPC names to the known list.
    pub fn record_npcs(&self, names: &[String]) -> Result<usize, SettingsError> {
        let mut added = 0;
        self.update(|s| added = s.record_npcs(names))?;
        Ok(added)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            current: ArcSwap::from_pointee(Settings::default()),
        }
    }
}
