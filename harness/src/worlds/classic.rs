//! `Classic`: three missionaries, three cannibals, a boat for two.

use ferry_kernel::model::configuration::Configuration;
use ferry_kernel::model::population::Population;

use crate::contract::{PuzzleWorld, WorldError};
use crate::worlds::scaled::Scaled;

/// The textbook instance.
#[derive(Debug, Clone)]
pub struct Classic {
    inner: Scaled,
}

impl Classic {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Scaled::new(Population::STANDARD.per_class()),
        }
    }
}

impl Default for Classic {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleWorld for Classic {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "classic"
    }

    fn population(&self) -> Population {
        Population::STANDARD
    }

    fn initial(&self) -> Result<Configuration, WorldError> {
        self.inner.initial()
    }

    fn goal(&self) -> Result<Configuration, WorldError> {
        self.inner.goal()
    }
}
