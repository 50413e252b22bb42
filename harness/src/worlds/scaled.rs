//! `Scaled`: `N` missionaries and `N` cannibals, boat of two.
//!
//! Solvable for `N <= 3`. From `N = 4` on, a two-seat boat cannot move
//! everyone across, and the search reports no solution.

use ferry_kernel::model::configuration::Configuration;
use ferry_kernel::model::location::Location;
use ferry_kernel::model::population::Population;

use crate::contract::{PuzzleWorld, WorldError};

/// Everyone starts at the origin with the boat; everyone must reach the
/// destination with the boat.
#[derive(Debug, Clone)]
pub struct Scaled {
    population: Population,
    world_id: String,
}

impl Scaled {
    #[must_use]
    pub fn new(per_class: u32) -> Self {
        Self {
            population: Population::new(per_class),
            world_id: format!("scaled_{per_class}"),
        }
    }
}

impl PuzzleWorld for Scaled {
    fn world_id(&self) -> &str {
        &self.world_id
    }

    fn population(&self) -> Population {
        self.population
    }

    fn initial(&self) -> Result<Configuration, WorldError> {
        let n = self.population.per_class();
        self.population
            .configuration(n, n, Location::Origin)
            .map_err(|source| WorldError::InvalidConfiguration {
                role: "initial",
                source,
            })
    }

    fn goal(&self) -> Result<Configuration, WorldError> {
        self.population
            .configuration(0, 0, Location::Destination)
            .map_err(|source| WorldError::InvalidConfiguration {
                role: "goal",
                source,
            })
    }
}
