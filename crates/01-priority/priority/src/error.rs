use thiserror::Error;

/// Configuration mistakes detected while building or registering task units.
///
/// These are fatal to the registration that raised them and never surface
/// from a running cycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A raw priority level was outside the fixed enumeration.
    #[error("priority level {level} is out of range (expected 0..{levels})")]
    LevelOutOfRange {
        /// Level that was supplied.
        level: u8,
        /// Number of valid levels.
        levels: u8,
    },

    /// A task with the same name is already registered or queued.
    #[error("task `{0}` is already registered")]
    DuplicateTask(String),
}
