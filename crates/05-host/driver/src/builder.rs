use std::sync::Arc;

use anyhow::{anyhow, Result};
use behaviors::{Context, ScanTask};
use crossbeam_channel::unbounded;
use scheduler::{Pacing, Scheduler, DEFAULT_IDLE_PACING};
use settings::SettingsStore;
use world_api::{Actions, PollingWaiter, Waiter, World};

use crate::driver::{Driver, FailurePolicy};

/// Builder for assembling a [`Driver`] from its world handles.
pub struct DriverBuilder {
    world: Option<Arc<dyn World>>,
    actions: Option<Arc<dyn Actions>>,
    waiter: Option<Arc<dyn Waiter>>,
    store: Option<Arc<SettingsStore>>,
    idle_pacing: Pacing,
    policy: FailurePolicy,
    seed: Option<u64>,
}

impl DriverBuilder {
    /// Creates an empty builder with no world attached.
    pub fn new() -> Self {
        Self {
            world: None,
            actions: None,
            waiter: None,
            store: None,
            idle_pacing: DEFAULT_IDLE_PACING,
            policy: FailurePolicy::default(),
            seed: None,
        }
    }

    /// Sets the world query interface.
    pub fn world(mut self, world: Arc<dyn World>) -> Self {
        self.world = Some(world);
        self
    }

    /// Sets the action interface.
    pub fn actions(mut self, actions: Arc<dyn Actions>) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Uses one object for both world queries and actions.
    pub fn client<T: World + Actions + 'static>(self, client: Arc<T>) -> Self {
        let world: Arc<dyn World> = client.clone();
        self.world(world).actions(client)
    }

    /// Sets the wait primitive.
    pub fn waiter(mut self, waiter: Arc<dyn Waiter>) -> Self {
        self.waiter = Some(waiter);
        self
    }

    /// Polls conditions on the loop thread every 50 ms.
    pub fn polling_waiter(self) -> Self {
        self.waiter(Arc::new(PollingWaiter::default()))
    }

    /// Shares an existing settings store, e.g. one a settings panel edits.
    pub fn settings(mut self, store: Arc<SettingsStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Wait after idle and failed cycles.
    pub fn idle_pacing(mut self, pacing: Pacing) -> Self {
        self.idle_pacing = pacing;
        self
    }

    /// What a failed cycle does to the loop.
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Seeds pacing jitter for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds a [`Driver`], returning an error if a world handle is missing.
    ///
    /// The scan unit is registered straight away; combat units wait for
    /// [`Driver::start`].
    pub fn build(self) -> Result<Driver> {
        let ctx = Context::new(
            self.world.ok_or_else(|| anyhow!("missing world interface"))?,
            self.actions
                .ok_or_else(|| anyhow!("missing action interface"))?,
            self.waiter.ok_or_else(|| anyhow!("missing waiter"))?,
            self.store.unwrap_or_default(),
        );

        let mut scheduler = Scheduler::with_idle_pacing(self.idle_pacing);
        scheduler.register(ScanTask::new())?;

        let (tx, rx) = unbounded();
        Ok(Driver::new(
            scheduler,
            ctx,
            tx,
            rx,
            self.policy,
            self.seed.unwrap_or_else(rand::random),
        ))
    }
}

impl Default for DriverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
