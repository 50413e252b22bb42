//! `cross()`: move one boatload of riders to the other bank.
//!
//! Boat at origin: riders leave the origin bank, counts decrease.
//! Boat at destination: riders return to the origin bank, counts increase.
//! The boat always ends on the opposite bank.

use crate::model::configuration::{Configuration, InvalidStateError};
use crate::model::location::Location;
use crate::model::population::Population;
use crate::model::rider::{Ride, RiderKind};

const M: RiderKind = RiderKind::Missionary;
const C: RiderKind = RiderKind::Cannibal;

/// Every ride the boat can make, in the order transitions are tried.
///
/// The order decides which solution a depth-first search reports first.
pub const RIDE_CATALOG: [Ride; 5] = [
    Ride::new(&[M]),
    Ride::new(&[M, M]),
    Ride::new(&[C]),
    Ride::new(&[C, C]),
    Ride::new(&[M, C]),
];

/// Maximum riders per crossing.
pub const BOAT_CAPACITY: usize = 2;

/// Apply `ride` to `config` under `population`.
///
/// # Errors
///
/// - [`InvalidStateError::OutOfBounds`] if the ride needs more riders than
///   are on the boat's bank (a count would leave `[0, N]`).
/// - [`InvalidStateError::Unsafe`] if the result violates the outnumbering rule.
pub fn cross(
    population: &Population,
    config: &Configuration,
    ride: Ride,
) -> Result<Configuration, InvalidStateError> {
    let sign: i64 = match config.boat() {
        Location::Origin => -1,
        Location::Destination => 1,
    };
    let missionaries = i64::from(config.missionaries()) + sign * i64::from(ride.count(M));
    let cannibals = i64::from(config.cannibals()) + sign * i64::from(ride.count(C));
    population.configuration_signed(missionaries, cannibals, config.boat().opposite())
}
