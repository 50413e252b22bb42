//! Configuration: the immutable search state.

use crate::model::location::Location;
use crate::model::population::Population;
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_CONFIGURATION};

/// Number of bytes in [`Configuration::identity_bytes`].
pub const IDENTITY_BYTE_LEN: usize = 9;

/// Counts on the origin bank plus the boat's bank.
///
/// Only constructible through validation ([`Configuration::new`] or
/// [`Population::configuration`]), so every value holds a safe pair.
/// Equality and hashing are structural over all three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Configuration {
    missionaries: u32,
    cannibals: u32,
    boat: Location,
}

impl Configuration {
    /// Build a configuration for [`Population::STANDARD`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if the pair is not a safe combination.
    pub fn new(missionaries: u32, cannibals: u32, boat: Location) -> Result<Self, InvalidStateError> {
        Population::STANDARD.configuration(missionaries, cannibals, boat)
    }

    pub(crate) const fn from_validated(missionaries: u32, cannibals: u32, boat: Location) -> Self {
        Self {
            missionaries,
            cannibals,
            boat,
        }
    }

    /// Missionaries on the origin bank.
    #[must_use]
    pub const fn missionaries(&self) -> u32 {
        self.missionaries
    }

    /// Cannibals on the origin bank.
    #[must_use]
    pub const fn cannibals(&self) -> u32 {
        self.cannibals
    }

    #[must_use]
    pub const fn boat(&self) -> Location {
        self.boat
    }

    /// Fixed-width identity encoding: missionaries (u32 LE), cannibals
    /// (u32 LE), boat code (u8).
    #[must_use]
    pub fn identity_bytes(&self) -> [u8; IDENTITY_BYTE_LEN] {
        let mut out = [0u8; IDENTITY_BYTE_LEN];
        out[..4].copy_from_slice(&self.missionaries.to_le_bytes());
        out[4..8].copy_from_slice(&self.cannibals.to_le_bytes());
        out[8] = self.boat.code();
        out
    }

    /// Content fingerprint of [`Self::identity_bytes`].
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_CONFIGURATION, &self.identity_bytes())
    }

    /// JSON form used in audit artifacts.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "boat": self.boat.as_str(),
            "cannibals": self.cannibals,
            "missionaries": self.missionaries,
        })
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.missionaries, self.cannibals, self.boat
        )
    }
}

/// Typed failure for configuration construction.
///
/// Expected and frequent during transition generation, where it marks a ride
/// as unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateError {
    /// A count is negative or exceeds the population size.
    OutOfBounds {
        missionaries: i64,
        cannibals: i64,
        per_class: u32,
    },
    /// Counts are in range but cannibals outnumber missionaries on a bank.
    Unsafe { missionaries: u32, cannibals: u32 },
}

impl std::fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds {
                missionaries,
                cannibals,
                per_class,
            } => write!(
                f,
                "impossible state: missionaries={missionaries}, cannibals={cannibals} outside [0, {per_class}]"
            ),
            Self::Unsafe {
                missionaries,
                cannibals,
            } => write!(
                f,
                "unsafe state: missionaries={missionaries}, cannibals={cannibals}"
            ),
        }
    }
}

impl std::error::Error for InvalidStateError {}
