use std::fmt;

use crate::error::ConfigError;
use crate::level::Priority;

/// Scalar priority used to totally order task units.
///
/// `0` is reserved for units that never declared a priority; every
/// [`PriorityPair`] encodes to at least `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedPriority(u32);

impl EncodedPriority {
    /// Lowest possible priority.
    pub const UNSET: EncodedPriority = EncodedPriority(0);

    /// Identity encoding for units ranked by a flat integer.
    pub const fn flat(value: u32) -> Self {
        EncodedPriority(value)
    }

    /// Raw scalar.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EncodedPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PriorityPair> for EncodedPriority {
    fn from(pair: PriorityPair) -> Self {
        pair.encode()
    }
}

/// Two-level priority: `major` dominates, `minor` orders within a major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PriorityPair {
    /// Dominant level.
    pub major: Priority,
    /// Tie-breaking level within `major`.
    pub minor: Priority,
}

impl PriorityPair {
    /// Builds a pair from both levels.
    pub const fn new(major: Priority, minor: Priority) -> Self {
        Self { major, minor }
    }

    /// Builds a pair that only sets the minor level; major stays `Low`.
    pub const fn minor_only(minor: Priority) -> Self {
        Self {
            major: Priority::Low,
            minor,
        }
    }

    /// Builds a pair from raw level numbers, rejecting anything outside the
    /// enumeration.
    pub fn from_levels(major: u8, minor: u8) -> Result<Self, ConfigError> {
        Ok(Self {
            major: Priority::try_from(major)?,
            minor: Priority::try_from(minor)?,
        })
    }

    /// Encodes the pair as `major * L + (minor + 1)`.
    ///
    /// Any higher major outranks every lower major because `minor + 1`
    /// never exceeds `L`.
    pub const fn encode(self) -> EncodedPriority {
        let levels = Priority::LEVELS as u32;
        EncodedPriority(self.major.value() as u32 * levels + (self.minor.value() as u32 + 1))
    }
}
