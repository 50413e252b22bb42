//! Harness runner: solves a world and packages the result.
//!
//! # Pipeline
//!
//! ```text
//! world.initial()/goal() → solve_with() → collect flagged path
//!   → SolutionPath::verify() → RunReport::build() (transcript + graph + digest)
//! ```
//!
//! A flagged path that fails verification is a runner error: the report is
//! never built from a tree that disagrees with the crossing operator.

use ferry_search::error::SearchError;
use ferry_search::path::PathViolation;
use ferry_search::policy::SearchPolicy;
use ferry_search::search::solve_with;

use crate::contract::{PuzzleWorld, WorldError};
use crate::report::RunReport;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The world could not supply its endpoints.
    World(WorldError),
    /// Search pre-flight validation failed.
    Search(SearchError),
    /// The flagged path did not replay.
    PathRejected(PathViolation),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::World(e) => write!(f, "world error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::PathRejected(v) => write!(f, "solution path rejected: {v}"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<WorldError> for RunError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Solve `world` under `policy` and build its report.
///
/// An unsolvable world is not an error; the report says so.
///
/// # Errors
///
/// Returns [`RunError`] if the world is malformed, the policy is rejected,
/// the flagged path fails replay, or serialization fails.
pub fn run<W: PuzzleWorld + ?Sized>(world: &W, policy: &SearchPolicy) -> Result<RunReport, RunError> {
    let population = world.population();
    let initial = world.initial()?;
    let goal = world.goal()?;

    let result = solve_with(initial, goal, &population, policy)?;

    if let Some(path) = result.outcome.path() {
        path.verify(&population, &initial, &goal)
            .map_err(RunError::PathRejected)?;
    }

    RunReport::build(world.world_id(), initial, goal, result).map_err(|e| RunError::CanonFailed {
        detail: e.to_string(),
    })
}
