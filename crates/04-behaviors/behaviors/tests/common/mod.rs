//! Context fixtures over the mock world.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use behaviors::Context;
use mock_world::MockWorld;
use settings::{Settings, SettingsStore};
use world_api::{PollingWaiter, Tile};

pub struct Fixture {
    pub world: MockWorld,
    pub store: Arc<SettingsStore>,
}

impl Fixture {
    /// Logged-in player at `(x, 0)` with `edit` applied to default settings.
    pub fn new(x: i32, edit: impl FnOnce(&mut Settings)) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut settings = Settings::default();
        edit(&mut settings);
        Self {
            world: MockWorld::new(Tile::new(x, 0)),
            store: Arc::new(SettingsStore::new(settings).expect("valid settings")),
        }
    }

    /// Context with the current settings snapshot.
    pub fn ctx(&self) -> Context {
        Context::new(
            Arc::new(self.world.clone()),
            Arc::new(self.world.clone()),
            Arc::new(PollingWaiter::new(Duration::from_millis(1))),
            Arc::clone(&self.store),
        )
    }
}

pub fn eating(food: &str, percent: u8) -> impl FnOnce(&mut Settings) + '_ {
    move |s| {
        s.script_started = true;
        s.should_eat = true;
        s.food_name = food.to_owned();
        s.eat_percent = percent;
    }
}
