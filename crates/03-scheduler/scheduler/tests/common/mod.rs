//! Probe units shared by the scheduler integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use scheduler::{EncodedPriority, Pacer, Pacing, Task};

/// Ordered record of every check and action across all probes.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    let _ = env_logger::builder().is_test(true).try_init();
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().clone()
}

#[derive(Debug, thiserror::Error)]
#[error("probe failure: {0}")]
pub struct ProbeError(pub &'static str);

/// How a probe behaves when checked or run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    FailCheck,
    FailAct,
}

/// Unit whose eligibility can be flipped from the test body.
pub struct Probe {
    pub name: &'static str,
    pub priority: EncodedPriority,
    pub eligible: Arc<AtomicBool>,
    pub pacing: Pacing,
    pub mode: Mode,
    pub journal: Journal,
}

impl Probe {
    pub fn new(name: &'static str, priority: u32, eligible: bool, journal: &Journal) -> Self {
        Self {
            name,
            priority: EncodedPriority::flat(priority),
            eligible: Arc::new(AtomicBool::new(eligible)),
            pacing: Pacing::ZERO,
            mode: Mode::Normal,
            journal: Arc::clone(journal),
        }
    }

    pub fn pacing(mut self, millis: u64) -> Self {
        self.pacing = Pacing::from_millis(millis);
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn switch(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.eligible)
    }
}

impl Task<()> for Probe {
    type Scratch = ();
    type Error = ProbeError;

    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> EncodedPriority {
        self.priority
    }

    fn check(&mut self, _ctx: &()) -> Result<Option<()>, ProbeError> {
        self.journal.lock().push(format!("check {}", self.name));
        if self.mode == Mode::FailCheck {
            return Err(ProbeError("check"));
        }
        Ok(self.eligible.load(Ordering::SeqCst).then_some(()))
    }

    fn act(&mut self, _ctx: &(), _scratch: ()) -> Result<Pacing, ProbeError> {
        self.journal.lock().push(format!("act {}", self.name));
        if self.mode == Mode::FailAct {
            return Err(ProbeError("act"));
        }
        Ok(self.pacing)
    }
}

/// Pacer that records requested pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
