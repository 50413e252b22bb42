//! Value types: banks, riders, rides, populations, configurations.

pub mod configuration;
pub mod location;
pub mod population;
pub mod rider;
