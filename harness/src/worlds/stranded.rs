//! `Stranded`: the classic start with an unreachable goal.
//!
//! The goal has everyone on the far bank but the boat back at the origin.
//! Nobody is left to have rowed it, so no crossing sequence ends there. Used
//! to exercise the no-solution path end to end.

use ferry_kernel::model::configuration::Configuration;
use ferry_kernel::model::location::Location;
use ferry_kernel::model::population::Population;

use crate::contract::{PuzzleWorld, WorldError};

#[derive(Debug, Clone, Copy, Default)]
pub struct Stranded;

impl PuzzleWorld for Stranded {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "stranded"
    }

    fn population(&self) -> Population {
        Population::STANDARD
    }

    fn initial(&self) -> Result<Configuration, WorldError> {
        Configuration::new(3, 3, Location::Origin).map_err(|source| {
            WorldError::InvalidConfiguration {
                role: "initial",
                source,
            }
        })
    }

    fn goal(&self) -> Result<Configuration, WorldError> {
        Configuration::new(0, 0, Location::Origin).map_err(|source| {
            WorldError::InvalidConfiguration {
                role: "goal",
                source,
            }
        })
    }
}
