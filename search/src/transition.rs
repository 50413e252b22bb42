//! Transition generation: every ride in the catalog, tried in order.

use ferry_kernel::model::configuration::{Configuration, InvalidStateError};
use ferry_kernel::model::population::Population;
use ferry_kernel::model::rider::Ride;
use ferry_kernel::operators::crossing::{cross, RIDE_CATALOG};

/// A legal crossing: the ride taken and the configuration it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub configuration: Configuration,
    pub ride: Ride,
}

/// A catalog ride paired with the result of attempting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub ride: Ride,
    pub result: Result<Configuration, InvalidStateError>,
}

/// Attempt every ride in [`RIDE_CATALOG`] from `config`, in catalog order.
///
/// Rejected rides are kept so callers can audit why they were pruned.
#[must_use]
pub fn enumerate_candidates(population: &Population, config: &Configuration) -> Vec<Candidate> {
    RIDE_CATALOG
        .iter()
        .map(|&ride| Candidate {
            ride,
            result: cross(population, config, ride),
        })
        .collect()
}

/// Every legal next configuration reachable by one crossing, in catalog order.
#[must_use]
pub fn generate_transitions(population: &Population, config: &Configuration) -> Vec<Transition> {
    enumerate_candidates(population, config)
        .into_iter()
        .filter_map(|candidate| {
            candidate.result.ok().map(|configuration| Transition {
                configuration,
                ride: candidate.ride,
            })
        })
        .collect()
}
