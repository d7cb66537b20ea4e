use std::thread;
use std::time::Duration;

use rand::Rng;

/// How long the host idles after a cycle before selecting again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pacing(Duration);

impl Pacing {
    /// Re-evaluate immediately.
    pub const ZERO: Pacing = Pacing(Duration::ZERO);

    /// Pacing of `millis` milliseconds.
    pub const fn from_millis(millis: u64) -> Self {
        Pacing(Duration::from_millis(millis))
    }

    /// Uniformly random pacing in `[base, base + spread)` milliseconds,
    /// saturating at `u64::MAX`.
    pub fn jittered<R: Rng + ?Sized>(base: u64, spread: u64, rng: &mut R) -> Self {
        if spread == 0 {
            return Self::from_millis(base);
        }
        Self::from_millis(base.saturating_add(rng.gen_range(0..spread)))
    }

    /// The wait as a [`Duration`].
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    /// Whether the next cycle may start right away.
    pub const fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl From<Duration> for Pacing {
    fn from(duration: Duration) -> Self {
        Pacing(duration)
    }
}

/// Performs the inter-cycle wait.
pub trait Pacer {
    /// Blocks for at least `duration`.
    fn pause(&mut self, duration: Duration);
}

/// [`Pacer`] that sleeps the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
