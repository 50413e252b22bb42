//! River banks.

/// The bank of the river the boat currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    /// The starting bank. Configuration counts always refer to this bank.
    Origin,
    /// The far bank.
    Destination,
}

impl Location {
    /// The other bank.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Origin => Self::Destination,
            Self::Destination => Self::Origin,
        }
    }

    /// Stable name used in rendered output and canonical JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Origin => "ORIGIN",
            Self::Destination => "DESTINATION",
        }
    }

    /// Single identity byte used in fingerprints.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Origin => 0,
            Self::Destination => 1,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
