use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use behaviors::{register_combat_units, Context};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use scheduler::{ConfigError, Cycle, CycleError, CycleOutcome, Pacing, Scheduler, TaskId};
use settings::{SettingsError, SettingsStore};
use thiserror::Error;
use world_api::WorldError;

use crate::builder::DriverBuilder;
use crate::command::{Command, DriverHandle};

/// Errors that end [`Driver::run`] or fail a lifecycle transition.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A unit could not be registered.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A settings write was rejected.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The world could not be queried while starting.
    #[error(transparent)]
    World(#[from] WorldError),
    /// A cycle failed under [`FailurePolicy::Stop`].
    #[error(transparent)]
    Cycle(#[from] CycleError),
}

/// What the loop does after a failed cycle or lifecycle command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return the error from [`Driver::run`].
    #[default]
    Stop,
    /// Log it and keep looping; a failed cycle waits the idle pacing.
    Continue,
}

/// Counters kept across the driver's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverStats {
    /// Completed cycles.
    pub cycles: u64,
    /// Completed cycles in which a unit acted.
    pub actions: u64,
    /// Completed cycles in which nothing was eligible.
    pub idles: u64,
    /// Cycles and commands that returned an error.
    pub failures: u64,
}

enum Flow {
    Continue,
    Shutdown,
}

/// Owns the scheduler and runs it on the calling thread.
pub struct Driver {
    scheduler: Scheduler<Context>,
    ctx: Context,
    tx: Sender<Command>,
    rx: Receiver<Command>,
    policy: FailurePolicy,
    seed: u64,
    combat: Vec<TaskId>,
    stats: DriverStats,
}

impl Driver {
    /// Creates a new builder for constructing a driver.
    pub fn builder() -> DriverBuilder {
        DriverBuilder::new()
    }

    pub(crate) fn new(
        scheduler: Scheduler<Context>,
        ctx: Context,
        tx: Sender<Command>,
        rx: Receiver<Command>,
        policy: FailurePolicy,
        seed: u64,
    ) -> Self {
        Self {
            scheduler,
            ctx,
            tx,
            rx,
            policy,
            seed,
            combat: Vec::new(),
            stats: DriverStats::default(),
        }
    }

    /// Handle for sending commands to [`Driver::run`].
    pub fn handle(&self) -> DriverHandle {
        DriverHandle {
            tx: self.tx.clone(),
        }
    }

    /// Settings store shared with the units.
    pub fn settings(&self) -> &Arc<SettingsStore> {
        &self.ctx.store
    }

    /// The scheduler, for overlays listing registered units.
    pub fn scheduler(&self) -> &Scheduler<Context> {
        &self.scheduler
    }

    /// Counters so far.
    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    /// Whether the combat units are registered.
    pub fn is_running(&self) -> bool {
        !self.combat.is_empty()
    }

    /// Registers the combat units and marks the script started.
    ///
    /// A missing fight anchor is taken from the player's tile when logged in.
    pub fn start(&mut self) -> Result<(), DriverError> {
        if self.is_running() {
            return Ok(());
        }
        let world = &self.ctx.world;
        if world.is_logged_in()? {
            let tile = world.player()?.tile;
            if self.ctx.store.anchor_if_unset(tile)? {
                log::info!("fight anchor set to {tile:?}");
            }
        }
        self.combat = register_combat_units(&mut self.scheduler, self.seed)?;
        self.seed = self.seed.wrapping_add(self.combat.len() as u64);
        self.ctx.store.set_started(true)?;
        log::info!("script started with {} combat units", self.combat.len());
        Ok(())
    }

    /// Unregisters the combat units and clears the started flag.
    pub fn stop(&mut self) -> Result<(), DriverError> {
        if !self.is_running() {
            return Ok(());
        }
        for id in self.combat.drain(..) {
            self.scheduler.unregister(id);
        }
        self.ctx.store.set_started(false)?;
        log::info!("script stopped");
        Ok(())
    }

    /// Runs one cycle against a fresh settings snapshot.
    ///
    /// A started flag cleared by a unit stops the script first.
    pub fn step(&mut self) -> Result<Cycle, DriverError> {
        let result = self.cycle();
        match &result {
            Ok(cycle) => {
                self.stats.cycles += 1;
                match cycle.outcome {
                    CycleOutcome::Acted { .. } => self.stats.actions += 1,
                    CycleOutcome::Idle => self.stats.idles += 1,
                }
            }
            Err(_) => self.stats.failures += 1,
        }
        result
    }

    fn cycle(&mut self) -> Result<Cycle, DriverError> {
        if self.is_running() && !self.ctx.store.snapshot().script_started {
            log::info!("started flag cleared; stopping");
            self.stop()?;
        }
        self.ctx = self.ctx.refreshed();
        Ok(self.scheduler.run_one_cycle(&self.ctx)?)
    }

    /// Loops until [`Command::Shutdown`], returning the final counters.
    pub fn run(mut self) -> Result<DriverStats, DriverError> {
        loop {
            if let Flow::Shutdown = self.drain_commands()? {
                break;
            }
            let pacing = match self.step() {
                Ok(cycle) => cycle.pacing,
                Err(err) => {
                    self.tolerate("cycle", err)?;
                    self.scheduler.idle_pacing()
                }
            };
            if let Flow::Shutdown = self.pause(pacing)? {
                break;
            }
        }
        log::info!("driver shut down: {:?}", self.stats);
        Ok(self.stats)
    }

    /// Moves the loop onto its own thread.
    pub fn spawn(
        self,
    ) -> std::io::Result<(DriverHandle, JoinHandle<Result<DriverStats, DriverError>>)> {
        let handle = self.handle();
        let join = thread::Builder::new()
            .name("combat-driver".to_owned())
            .spawn(move || self.run())?;
        Ok((handle, join))
    }

    /// Applies the failure policy: `Err` under [`FailurePolicy::Stop`].
    fn tolerate(&self, what: &str, err: DriverError) -> Result<(), DriverError> {
        match self.policy {
            FailurePolicy::Stop => {
                log::error!("{what} failed, stopping driver: {err}");
                Err(err)
            }
            FailurePolicy::Continue => {
                log::warn!("{what} failed: {err}");
                Ok(())
            }
        }
    }

    fn apply(&mut self, cmd: Command) -> Result<Flow, DriverError> {
        log::debug!("command {cmd:?}");
        let result = match cmd {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Shutdown => return Ok(Flow::Shutdown),
        };
        if let Err(err) = result {
            self.stats.failures += 1;
            self.tolerate("command", err)?;
        }
        Ok(Flow::Continue)
    }

    fn drain_commands(&mut self) -> Result<Flow, DriverError> {
        while let Ok(cmd) = self.rx.try_recv() {
            if let Flow::Shutdown = self.apply(cmd)? {
                return Ok(Flow::Shutdown);
            }
        }
        Ok(Flow::Continue)
    }

    /// Waits out `pacing` on the command channel. Commands are applied as
    /// they arrive; only Shutdown ends the wait early.
    fn pause(&mut self, pacing: Pacing) -> Result<Flow, DriverError> {
        if pacing.is_zero() {
            return Ok(Flow::Continue);
        }
        let deadline = Instant::now() + pacing.as_duration();
        loop {
            let cmd = match self.rx.recv_deadline(deadline) {
                Ok(cmd) => cmd,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return Ok(Flow::Continue)
                }
            };
            if let Flow::Shutdown = self.apply(cmd)? {
                return Ok(Flow::Shutdown);
            }
        }
    }
}
