//! Population size and the safety predicate.
//!
//! A pair `(missionaries, cannibals)` counts agents on the origin bank; the
//! destination bank holds the complement `(N - missionaries, N - cannibals)`.
//! The pair is safe when both counts lie in `[0, N]` and, on each bank,
//! cannibals do not outnumber missionaries unless no missionary is there.

use crate::model::configuration::{Configuration, InvalidStateError};
use crate::model::location::Location;

/// Number of agents in each class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Population {
    per_class: u32,
}

impl Population {
    /// The classic instance: three missionaries and three cannibals.
    pub const STANDARD: Self = Self::new(3);

    #[must_use]
    pub const fn new(per_class: u32) -> Self {
        Self { per_class }
    }

    /// Agents per class (`N`).
    #[must_use]
    pub const fn per_class(self) -> u32 {
        self.per_class
    }

    /// Whether the origin-bank pair is safe on both banks.
    ///
    /// Out-of-range counts are never safe.
    #[must_use]
    pub fn is_safe(self, missionaries: u32, cannibals: u32) -> bool {
        let n = self.per_class;
        if missionaries > n || cannibals > n {
            return false;
        }
        bank_is_safe(missionaries, cannibals) && bank_is_safe(n - missionaries, n - cannibals)
    }

    /// All safe origin-bank pairs, ascending by `(missionaries, cannibals)`.
    #[must_use]
    pub fn safe_combinations(self) -> Vec<(u32, u32)> {
        let n = self.per_class;
        (0..=n)
            .flat_map(|m| (0..=n).map(move |c| (m, c)))
            .filter(|&(m, c)| self.is_safe(m, c))
            .collect()
    }

    /// Build a configuration, rejecting pairs outside the safe set.
    ///
    /// # Errors
    ///
    /// - [`InvalidStateError::OutOfBounds`] if either count exceeds `N`.
    /// - [`InvalidStateError::Unsafe`] if the pair violates the outnumbering rule.
    pub fn configuration(
        self,
        missionaries: u32,
        cannibals: u32,
        boat: Location,
    ) -> Result<Configuration, InvalidStateError> {
        self.validate(i64::from(missionaries), i64::from(cannibals))?;
        Ok(Configuration::from_validated(missionaries, cannibals, boat))
    }

    /// Signed variant used by the crossing operator, where a ride may drive a
    /// count below zero.
    pub(crate) fn configuration_signed(
        self,
        missionaries: i64,
        cannibals: i64,
        boat: Location,
    ) -> Result<Configuration, InvalidStateError> {
        let (m, c) = self.validate(missionaries, cannibals)?;
        Ok(Configuration::from_validated(m, c, boat))
    }

    /// Whether `config` could have been built for this population.
    #[must_use]
    pub fn admits(self, config: &Configuration) -> bool {
        self.is_safe(config.missionaries(), config.cannibals())
    }

    fn validate(self, missionaries: i64, cannibals: i64) -> Result<(u32, u32), InvalidStateError> {
        let bound = i64::from(self.per_class);
        let in_range = |x: i64| (0..=bound).contains(&x);
        if !in_range(missionaries) || !in_range(cannibals) {
            return Err(InvalidStateError::OutOfBounds {
                missionaries,
                cannibals,
                per_class: self.per_class,
            });
        }
        // Both values are within [0, per_class], which fits in u32.
        let m = u32::try_from(missionaries).unwrap_or(u32::MAX);
        let c = u32::try_from(cannibals).unwrap_or(u32::MAX);
        if !self.is_safe(m, c) {
            return Err(InvalidStateError::Unsafe {
                missionaries: m,
                cannibals: c,
            });
        }
        Ok((m, c))
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn bank_is_safe(missionaries: u32, cannibals: u32) -> bool {
    missionaries == 0 || cannibals <= missionaries
}
