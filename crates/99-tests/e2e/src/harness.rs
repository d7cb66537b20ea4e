use std::sync::Arc;
use std::time::Duration;

use driver::Driver;
use mock_world::MockWorld;
use settings::{Settings, SettingsStore};
use world_api::{PollingWaiter, Tile};

pub struct Scenario {
    pub world: MockWorld,
    pub store: Arc<SettingsStore>,
    pub driver: Driver,
}

impl Scenario {
    /// Player at `tile`, settings edited by `edit`, driver not yet started.
    pub fn new(tile: Tile, edit: impl FnOnce(&mut Settings)) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let world = MockWorld::new(tile);
        let mut settings = Settings::default();
        edit(&mut settings);
        let store = Arc::new(SettingsStore::new(settings).expect("settings"));
        let driver = Driver::builder()
            .client(Arc::new(world.clone()))
            .waiter(Arc::new(PollingWaiter::new(Duration::from_millis(1))))
            .settings(Arc::clone(&store))
            .seed(11)
            .build()
            .expect("driver");
        Self {
            world,
            store,
            driver,
        }
    }

    /// Runs one cycle and returns the acting unit.
    pub fn step(&mut self) -> Option<String> {
        self.driver
            .step()
            .expect("cycle")
            .acted()
            .map(str::to_owned)
    }
}

/// Goblin hunter eating trout below half health.
pub fn goblin_hunter(s: &mut Settings) {
    s.select_npc("Goblin");
    s.should_eat = true;
    s.food_name = "Trout".into();
    s.eat_percent = 50;
}
