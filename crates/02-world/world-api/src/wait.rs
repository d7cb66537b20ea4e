use std::thread;
use std::time::{Duration, Instant};

/// Longest wait any caller may request; larger timeouts are clamped.
pub const MAX_WAIT: Duration = Duration::from_secs(60);

/// Poll interval used by [`PollingWaiter::default`].
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Blocks the calling thread until a condition flips or a timeout elapses.
///
/// Both methods return `true` when the condition resolved and `false` on
/// timeout. A timeout is an ordinary outcome, not an error.
pub trait Waiter: Send + Sync {
    /// Wait until `condition` holds.
    fn wait_until(&self, condition: &mut dyn FnMut() -> bool, timeout: Duration) -> bool;

    /// Wait until `condition` stops holding.
    fn wait_while(&self, condition: &mut dyn FnMut() -> bool, timeout: Duration) -> bool {
        self.wait_until(&mut || !condition(), timeout)
    }
}

/// [`Waiter`] that re-evaluates the condition at a fixed interval.
#[derive(Clone, Copy, Debug)]
pub struct PollingWaiter {
    interval: Duration,
}

impl PollingWaiter {
    /// Creates a waiter polling every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Poll interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for PollingWaiter {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl Waiter for PollingWaiter {
    fn wait_until(&self, condition: &mut dyn FnMut() -> bool, timeout: Duration) -> bool {
        let timeout = timeout.min(MAX_WAIT);
        let deadline = Instant::now() + timeout;
        loop {
            if condition() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                log::trace!("wait timed out after {timeout:?}");
                return false;
            }
            thread::sleep(self.interval.min(deadline - now));
        }
    }
}
