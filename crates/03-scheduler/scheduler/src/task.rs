use priority::EncodedPriority;

use crate::pacing::Pacing;

/// A behaviour competing for the single action slot of each cycle.
///
/// `C` is whatever context the host hands to every cycle (world handles, a
/// settings snapshot, ...). The scheduler never looks inside it.
///
/// A unit that overrides nothing has the lowest priority, is never eligible
/// and does nothing when acting.
pub trait Task<C: ?Sized> {
    /// What the eligibility check found, handed to [`Task::act`] in the same
    /// cycle and dropped afterwards.
    type Scratch;

    /// Failure raised by the unit's own check or action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name used in logs and for duplicate detection.
    fn name(&self) -> &str;

    /// Encoded priority. Read once at registration, so it must only depend
    /// on the unit's fixed configuration.
    fn priority(&self) -> EncodedPriority {
        EncodedPriority::UNSET
    }

    /// Returns `Some(scratch)` when the unit may act this cycle.
    ///
    /// May be called repeatedly without an action in between; it must not
    /// change anything outside the unit itself.
    fn check(&mut self, ctx: &C) -> Result<Option<Self::Scratch>, Self::Error> {
        let _ = ctx;
        Ok(None)
    }

    /// Performs at most one interaction (or one bounded wait) and returns
    /// the pacing for the next cycle.
    fn act(&mut self, ctx: &C, scratch: Self::Scratch) -> Result<Pacing, Self::Error> {
        let _ = (ctx, scratch);
        Ok(Pacing::ZERO)
    }
}
