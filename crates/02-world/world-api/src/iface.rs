use thiserror::Error;

use crate::types::{EquipmentSlot, GameObject, Item, Npc, Player, Tab, Target, Tile};

/// Failure of the interface itself, as opposed to an interaction that was
/// attempted and did not work (`Ok(false)`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// No session is active.
    #[error("not logged in")]
    NotLoggedIn,

    /// The client could not answer the call.
    #[error("world interface unavailable: {0}")]
    Unavailable(String),

    /// The client refused an interaction outright.
    #[error("`{verb}` rejected: {reason}")]
    Rejected {
        /// Verb that was attempted.
        verb: String,
        /// Client-supplied reason.
        reason: String,
    },
}

impl WorldError {
    /// Convenience constructor for [`WorldError::Unavailable`].
    pub fn unavailable(msg: impl Into<String>) -> Self {
        WorldError::Unavailable(msg.into())
    }
}

/// Point-in-time, side-effect free queries about the agent's surroundings.
pub trait World: Send + Sync {
    /// Whether a session is active.
    fn is_logged_in(&self) -> Result<bool, WorldError>;

    /// The controlled agent.
    fn player(&self) -> Result<Player, WorldError>;

    /// NPCs currently loaded around the agent.
    fn npcs(&self) -> Result<Vec<Npc>, WorldError>;

    /// Scenery currently loaded around the agent.
    fn objects(&self) -> Result<Vec<GameObject>, WorldError>;

    /// Items carried by the agent.
    fn inventory(&self) -> Result<Vec<Item>, WorldError>;

    /// Items worn by the agent.
    fn equipment(&self) -> Result<Vec<Item>, WorldError>;

    /// Whether a local path exists between two tiles.
    fn can_reach(&self, from: Tile, to: Tile) -> Result<bool, WorldError>;

    /// First waypoint of the long-distance route from `from` to `to`.
    fn first_waypoint(&self, from: Tile, to: Tile) -> Result<Option<Tile>, WorldError>;

    /// Centre of the closest bank, if any is known.
    fn nearest_bank(&self) -> Result<Option<Tile>, WorldError>;

    /// Whether the walker is ready for another click.
    fn should_walk(&self) -> Result<bool, WorldError>;

    /// Whether the agent strikes back automatically when attacked.
    fn auto_retaliate(&self) -> Result<bool, WorldError>;

    /// Whether `tab` is the visible interface tab.
    fn is_tab_open(&self, tab: Tab) -> Result<bool, WorldError>;
}

/// Externally visible interactions. Each call attempts exactly one.
pub trait Actions: Send + Sync {
    /// Interact with `target` using `verb` ("Attack", "Open", "Eat", ...).
    fn interact(&self, target: Target, verb: &str) -> Result<bool, WorldError>;

    /// Click towards `tile`.
    fn walk_to(&self, tile: Tile) -> Result<bool, WorldError>;

    /// Switch the visible interface tab.
    fn open_tab(&self, tab: Tab) -> Result<bool, WorldError>;

    /// Turn automatic retaliation on.
    fn enable_auto_retaliate(&self) -> Result<bool, WorldError>;

    /// Park the cursor outside the client.
    fn move_mouse_off_screen(&self) -> Result<bool, WorldError>;

    /// Open the closest bank.
    fn open_nearest_bank(&self) -> Result<bool, WorldError>;

    /// Withdraw every stack whose name contains `fragment`.
    fn withdraw_all(&self, fragment: &str) -> Result<bool, WorldError>;

    /// Close the bank interface.
    fn close_bank(&self) -> Result<bool, WorldError>;

    /// Equip the first carried item matching `fragment` into `slot`.
    fn equip(&self, slot: EquipmentSlot, fragment: &str) -> Result<bool, WorldError>;

    /// End the session.
    fn logout(&self) -> Result<bool, WorldError>;
}
