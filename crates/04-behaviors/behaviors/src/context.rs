use std::sync::Arc;

use settings::{Settings, SettingsError, SettingsStore};
use thiserror::Error;
use world_api::{Actions, Waiter, World, WorldError};

/// Failures a behaviour unit can raise from its check or action.
#[derive(Debug, Error)]
pub enum BehaviorError {
    /// The world or action interface failed.
    #[error(transparent)]
    World(#[from] WorldError),
    /// A settings write was rejected.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Banking was required but no bank is known.
    #[error("no bank location known")]
    NoBank,
}

/// Everything a unit may consult during one cycle.
#[derive(Clone)]
pub struct Context {
    /// Read-only world queries.
    pub world: Arc<dyn World>,
    /// Interaction surface.
    pub actions: Arc<dyn Actions>,
    /// Bounded wait primitive.
    pub waiter: Arc<dyn Waiter>,
    /// Settings as they were when the cycle started.
    pub settings: Arc<Settings>,
    /// Store for edits that become visible next cycle.
    pub store: Arc<SettingsStore>,
}

impl Context {
    /// Builds a context with a fresh settings snapshot.
    pub fn new(
        world: Arc<dyn World>,
        actions: Arc<dyn Actions>,
        waiter: Arc<dyn Waiter>,
        store: Arc<SettingsStore>,
    ) -> Self {
        let settings = store.snapshot();
        Self {
            world,
            actions,
            waiter,
            settings,
            store,
        }
    }

    /// Same handles with a newer settings snapshot.
    pub fn refreshed(&self) -> Self {
        Self {
            settings: self.store.snapshot(),
            ..self.clone()
        }
    }

    /// Whether eating (and banking for food) is configured.
    pub(crate) fn eating_enabled(&self) -> bool {
        self.settings.should_eat && !self.settings.food_name.is_empty()
    }

    /// Whether the player's combat flag is set; interface errors count as no.
    pub(crate) fn player_in_combat(&self) -> bool {
        match self.world.player() {
            Ok(player) => player.in_combat,
            Err(err) => {
                log::debug!("combat state unknown: {err}");
                false
            }
        }
    }
}
