#![deny(missing_docs)]
//! In-memory world with just enough physics for the behaviour units.
//!
//! Interactions mutate the shared state immediately, so a unit that acts
//! and then waits on a condition sees the effect on its first poll. Every
//! action is appended to a journal that tests assert against.

mod state;

pub use crate::state::{MockState, Side, Wall};

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use world_api::{
    Actions, EquipmentSlot, GameObject, Item, Npc, NpcId, ObjectId, Player, Tab, Target, Tile,
    World, WorldError,
};

/// Cloneable handle to a shared [`MockState`].
#[derive(Clone, Debug, Default)]
pub struct MockWorld {
    inner: Arc<Mutex<MockState>>,
}

impl MockWorld {
    /// Logged-in player at `tile` with full health.
    pub fn new(tile: Tile) -> Self {
        let world = Self::default();
        {
            let mut state = world.state();
            state.logged_in = true;
            state.player.tile = tile;
        }
        world
    }

    /// Locks the state for inspection or scripting.
    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock()
    }

    /// Spawns an attackable NPC.
    pub fn add_npc(&self, name: &str, tile: Tile) -> NpcId {
        let mut state = self.state();
        let id = NpcId(state.next_id());
        state.npcs.push(Npc {
            id,
            name: name.to_owned(),
            tile,
            in_combat: false,
            interacting_with_player: false,
            attackable: true,
        });
        id
    }

    /// Builds a wall at column `x` with a closed door at `(x, door_y)`.
    pub fn add_wall(&self, x: i32, door_y: i32) -> ObjectId {
        let mut state = self.state();
        let door = ObjectId(state.next_id());
        state.objects.push(GameObject {
            id: door,
            name: "Large door".to_owned(),
            tile: Tile::new(x, door_y),
            actions: vec!["Open".to_owned()],
        });
        state.wall = Some(Wall { x, door });
        door
    }

    /// Adds `amount` of `name` to the inventory.
    pub fn give(&self, name: &str, amount: u32) {
        let mut state = self.state();
        let slot = state.inventory.len();
        state.inventory.push(Item {
            slot,
            name: name.to_owned(),
            amount,
        });
    }

    /// Puts `amount` of `name` in the bank at `tile`.
    pub fn stock_bank(&self, tile: Tile, name: &str, amount: u32) {
        let mut state = self.state();
        state.bank_tile = Some(tile);
        let slot = state.bank.len();
        state.bank.push(Item {
            slot,
            name: name.to_owned(),
            amount,
        });
    }

    /// Makes the next world or action call fail with `err`.
    pub fn fail_next(&self, err: WorldError) {
        self.state().fail_next = Some(err);
    }

    /// Actions performed so far, oldest first.
    pub fn journal(&self) -> Vec<String> {
        self.state().journal.clone()
    }

    fn read<R>(&self, f: impl FnOnce(&MockState) -> R) -> Result<R, WorldError> {
        let mut state = self.state();
        state.take_failure()?;
        if !state.logged_in {
            return Err(WorldError::NotLoggedIn);
        }
        Ok(f(&state))
    }

    fn act(
        &self,
        entry: String,
        f: impl FnOnce(&mut MockState) -> bool,
    ) -> Result<bool, WorldError> {
        let mut state = self.state();
        state.take_failure()?;
        if !state.logged_in {
            return Err(WorldError::NotLoggedIn);
        }
        let ok = f(&mut state);
        log::trace!("mock action `{entry}` -> {ok}");
        state.journal.push(entry);
        Ok(ok)
    }
}

impl World for MockWorld {
    fn is_logged_in(&self) -> Result<bool, WorldError> {
        let mut state = self.state();
        state.take_failure()?;
        Ok(state.logged_in)
    }

    fn player(&self) -> Result<Player, WorldError> {
        self.read(|s| s.player.clone())
    }

    fn npcs(&self) -> Result<Vec<Npc>, WorldError> {
        self.read(|s| s.npcs.clone())
    }

    fn objects(&self) -> Result<Vec<GameObject>, WorldError> {
        self.read(|s| s.objects.clone())
    }

    fn inventory(&self) -> Result<Vec<Item>, WorldError> {
        self.read(|s| s.inventory.clone())
    }

    fn equipment(&self) -> Result<Vec<Item>, WorldError> {
        self.read(|s| s.equipment.values().cloned().collect())
    }

    fn can_reach(&self, from: Tile, to: Tile) -> Result<bool, WorldError> {
        self.read(|s| s.reachable(from, to))
    }

    fn first_waypoint(&self, from: Tile, to: Tile) -> Result<Option<Tile>, WorldError> {
        self.read(|s| Some(s.first_waypoint(from, to)))
    }

    fn nearest_bank(&self) -> Result<Option<Tile>, WorldError> {
        self.read(|s| s.bank_tile)
    }

    fn should_walk(&self) -> Result<bool, WorldError> {
        self.read(|s| !s.player.moving)
    }

    fn auto_retaliate(&self) -> Result<bool, WorldError> {
        self.read(|s| s.auto_retaliate)
    }

    fn is_tab_open(&self, tab: Tab) -> Result<bool, WorldError> {
        self.read(|s| s.open_tab == tab)
    }
}

impl Actions for MockWorld {
    fn interact(&self, target: Target, verb: &str) -> Result<bool, WorldError> {
        self.act(format!("{verb} {target:?}"), |s| s.interact(target, verb))
    }

    fn walk_to(&self, tile: Tile) -> Result<bool, WorldError> {
        self.act(format!("walk ({}, {})", tile.x, tile.y), |s| {
            if s.reachable(s.player.tile, tile) {
                s.player.tile = tile;
                true
            } else {
                false
            }
        })
    }

    fn open_tab(&self, tab: Tab) -> Result<bool, WorldError> {
        self.act(format!("tab {tab:?}"), |s| {
            s.open_tab = tab;
            true
        })
    }

    fn enable_auto_retaliate(&self) -> Result<bool, WorldError> {
        self.act("auto-retaliate".to_owned(), |s| {
            let ok = s.open_tab == Tab::Combat;
            s.auto_retaliate |= ok;
            ok
        })
    }

    fn move_mouse_off_screen(&self) -> Result<bool, WorldError> {
        self.act("mouse away".to_owned(), |_| true)
    }

    fn open_nearest_bank(&self) -> Result<bool, WorldError> {
        self.act("open bank".to_owned(), |s| {
            s.bank_open = s.bank_tile == Some(s.player.tile);
            s.bank_open
        })
    }

    fn withdraw_all(&self, fragment: &str) -> Result<bool, WorldError> {
        self.act(format!("withdraw {fragment}"), |s| s.withdraw_all(fragment))
    }

    fn close_bank(&self) -> Result<bool, WorldError> {
        self.act("close bank".to_owned(), |s| {
            let was_open = s.bank_open;
            s.bank_open = false;
            was_open
        })
    }

    fn equip(&self, slot: EquipmentSlot, fragment: &str) -> Result<bool, WorldError> {
        self.act(format!("equip {slot:?} {fragment}"), |s| s.equip(slot, fragment))
    }

    fn logout(&self) -> Result<bool, WorldError> {
        self.act("logout".to_owned(), |s| {
            s.logged_in = false;
            true
        })
    }
}
