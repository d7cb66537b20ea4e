use std::collections::BTreeMap;

use world_api::{
    EquipmentSlot, GameObject, Item, Npc, ObjectId, Player, Tab, Target, Tile, WorldError,
};

/// Health restored by eating one item.
const HEAL_PER_BITE: u8 = 20;

/// A north-south wall with a single door.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wall {
    /// Column the wall occupies.
    pub x: i32,
    /// Door set into the wall.
    pub door: ObjectId,
}

/// Which side of the wall a tile lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// West of the wall.
    West,
    /// On the wall itself.
    Wall,
    /// East of the wall.
    East,
}

/// Everything the mock world knows.
#[derive(Debug)]
pub struct MockState {
    /// Whether a session is active.
    pub logged_in: bool,
    /// The controlled agent.
    pub player: Player,
    /// NPCs in view.
    pub npcs: Vec<Npc>,
    /// Scenery in view.
    pub objects: Vec<GameObject>,
    /// Carried items.
    pub inventory: Vec<Item>,
    /// Worn items.
    pub equipment: BTreeMap<EquipmentSlot, Item>,
    /// Bank contents.
    pub bank: Vec<Item>,
    /// Where the bank booth stands.
    pub bank_tile: Option<Tile>,
    /// Whether the bank interface is open.
    pub bank_open: bool,
    /// Optional wall splitting the map.
    pub wall: Option<Wall>,
    /// Visible interface tab.
    pub open_tab: Tab,
    /// Whether the agent retaliates on its own.
    pub auto_retaliate: bool,
    /// Failure injected into the next call.
    pub fail_next: Option<WorldError>,
    /// Actions performed so far.
    pub journal: Vec<String>,
    ids: u32,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            logged_in: false,
            player: Player {
                tile: Tile::default(),
                health_percent: 100,
                in_combat: false,
                moving: false,
            },
            npcs: Vec::new(),
            objects: Vec::new(),
            inventory: Vec::new(),
            equipment: BTreeMap::new(),
            bank: Vec::new(),
            bank_tile: None,
            bank_open: false,
            wall: None,
            open_tab: Tab::Inventory,
            auto_retaliate: true,
            fail_next: None,
            journal: Vec::new(),
            ids: 0,
        }
    }
}

impl MockState {
    pub(crate) fn next_id(&mut self) -> u32 {
        self.ids += 1;
        self.ids
    }

    pub(crate) fn take_failure(&mut self) -> Result<(), WorldError> {
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Whether the wall's door has been opened (or there is no wall).
    pub fn door_open(&self) -> bool {
        let Some(wall) = self.wall else {
            return true;
        };
        self.objects
            .iter()
            .find(|o| o.id == wall.door)
            .map_or(true, |door| !door.has_action("Open"))
    }

    /// Side of the wall `tile` is on; everything is `West` without a wall.
    pub fn side(&self, tile: Tile) -> Side {
        match self.wall {
            Some(wall) if tile.x < wall.x => Side::West,
            Some(wall) if tile.x == wall.x => Side::Wall,
            Some(_) => Side::East,
            None => Side::West,
        }
    }

    /// Local reachability: the same side of the wall, or anywhere once the
    /// door is open. Wall tiles are only reachable from themselves.
    pub fn reachable(&self, from: Tile, to: Tile) -> bool {
        if from == to {
            return true;
        }
        if from.plane != to.plane {
            return false;
        }
        let (a, b) = (self.side(from), self.side(to));
        if a == Side::Wall || b == Side::Wall {
            let door_tile = self
                .wall
                .and_then(|w| self.objects.iter().find(|o| o.id == w.door))
                .map(|o| o.tile);
            let through_door = |t: Tile| self.side(t) != Side::Wall || Some(t) == door_tile;
            return self.door_open() && through_door(from) && through_door(to);
        }
        a == b || self.door_open()
    }

    /// First tile of the route: just past the wall when it is in the way.
    pub fn first_waypoint(&self, from: Tile, to: Tile) -> Tile {
        match (self.wall, self.side(from), self.side(to)) {
            (Some(wall), Side::West, Side::East) => Tile::new(wall.x + 1, from.y),
            (Some(wall), Side::East, Side::West) => Tile::new(wall.x - 1, from.y),
            _ => to,
        }
    }

    pub(crate) fn interact(&mut self, target: Target, verb: &str) -> bool {
        match (target, verb) {
            (Target::Npc(id), "Attack") => {
                let player_tile = self.player.tile;
                let Some(idx) = self.npcs.iter().position(|n| n.id == id) else {
                    return false;
                };
                if !self.npcs[idx].attackable || !self.reachable(player_tile, self.npcs[idx].tile) {
                    return false;
                }
                let npc = &mut self.npcs[idx];
                npc.in_combat = true;
                npc.interacting_with_player = true;
                self.player.in_combat = true;
                true
            }
            (Target::Object(id), "Open") => {
                match self.objects.iter_mut().find(|o| o.id == id) {
                    Some(object) if object.has_action("Open") => {
                        object.actions = vec!["Close".to_owned()];
                        true
                    }
                    _ => false,
                }
            }
            (Target::Inventory(slot), "Eat") => {
                let Some(idx) = self.inventory.iter().position(|i| i.slot == slot) else {
                    return false;
                };
                let item = &mut self.inventory[idx];
                item.amount = item.amount.saturating_sub(1);
                if item.amount == 0 {
                    self.inventory.remove(idx);
                }
                self.player.health_percent =
                    self.player.health_percent.saturating_add(HEAL_PER_BITE).min(100);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn withdraw_all(&mut self, fragment: &str) -> bool {
        if !self.bank_open {
            return false;
        }
        let (taken, kept): (Vec<Item>, Vec<Item>) =
            self.bank.drain(..).partition(|i| i.matches(fragment));
        self.bank = kept;
        let any = !taken.is_empty();
        for mut item in taken {
            item.slot = self.inventory.iter().map(|i| i.slot + 1).max().unwrap_or(0);
            self.inventory.push(item);
        }
        any
    }

    pub(crate) fn equip(&mut self, slot: EquipmentSlot, fragment: &str) -> bool {
        let Some(idx) = self.inventory.iter().position(|i| i.matches(fragment)) else {
            return false;
        };
        let item = self.inventory.remove(idx);
        if let Some(previous) = self.equipment.insert(slot, item) {
            self.inventory.push(previous);
        }
        true
    }
}
