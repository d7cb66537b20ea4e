use crate::error::ConfigError;

/// Discrete importance level (higher value wins).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Background work.
    #[default]
    Low,
    /// Routine upkeep.
    Normal,
    /// Work that pre-empts everything else.
    High,
}

impl Priority {
    /// Number of levels, the `L` of the pair encoding.
    pub const LEVELS: u8 = 3;

    /// Every level in ascending order.
    pub const ALL: [Priority; Priority::LEVELS as usize] =
        [Priority::Low, Priority::Normal, Priority::High];

    /// Numeric value of the level.
    pub const fn value(self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Normal => 1,
            Priority::High => 2,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Priority::ALL
            .get(usize::from(level))
            .copied()
            .ok_or(ConfigError::LevelOutOfRange {
                level,
                levels: Priority::LEVELS,
            })
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.value()
    }
}
