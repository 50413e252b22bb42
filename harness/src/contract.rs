//! World contract: the minimal trait a puzzle instance must implement.
//!
//! Worlds supply a population plus start and goal configurations. They do
//! not search, hash, or render; those are the runner's concerns.

use ferry_kernel::model::configuration::{Configuration, InvalidStateError};
use ferry_kernel::model::population::Population;

/// Typed failure for world construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The world's initial or goal configuration is not valid for its population.
    InvalidConfiguration {
        role: &'static str,
        source: InvalidStateError,
    },
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration { role, source } => {
                write!(f, "world {role} configuration is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for WorldError {}

/// The contract a puzzle instance must implement to be run by the harness.
pub trait PuzzleWorld {
    /// Unique world identifier (e.g., `"classic"`).
    fn world_id(&self) -> &str;

    /// Agents per class.
    fn population(&self) -> Population;

    /// Where the search starts.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfiguration`] if the configuration is unsafe.
    fn initial(&self) -> Result<Configuration, WorldError>;

    /// Where the search must end.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfiguration`] if the configuration is unsafe.
    fn goal(&self) -> Result<Configuration, WorldError>;
}
