//! The discovered solution: an ordered chain of crossings.
//!
//! [`SolutionPath::verify`] re-plays the chain through the kernel crossing
//! operator, so a path read back from anywhere can be checked independently
//! of the search that produced it.

use std::collections::HashMap;

use ferry_kernel::model::configuration::Configuration;
use ferry_kernel::model::population::Population;
use ferry_kernel::model::rider::Ride;
use ferry_kernel::operators::crossing::cross;

use crate::node::TreeNode;

/// One entry of a solution path: the ride taken and where it led.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    /// Empty for the first step (the initial configuration).
    pub ride: Ride,
    pub configuration: Configuration,
}

impl From<&TreeNode> for PathStep {
    fn from(node: &TreeNode) -> Self {
        Self {
            ride: node.ride(),
            configuration: *node.configuration(),
        }
    }
}

/// Root-to-goal chain of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath {
    steps: Vec<PathStep>,
}

/// Why a path failed verification. Indices refer to [`SolutionPath::steps`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathViolation {
    Empty,
    WrongStart { found: Configuration },
    WrongEnd { found: Configuration },
    /// The first step must not carry a ride.
    RideOnFirstStep,
    /// Re-applying the ride did not reproduce the recorded configuration.
    IllegalCrossing { index: usize, detail: String },
    /// The configuration already appeared earlier in the chain.
    Repeated { index: usize, first: usize },
}

impl std::fmt::Display for PathViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("path has no steps"),
            Self::WrongStart { found } => write!(f, "path starts at {found}"),
            Self::WrongEnd { found } => write!(f, "path ends at {found}"),
            Self::RideOnFirstStep => f.write_str("first step carries a ride"),
            Self::IllegalCrossing { index, detail } => {
                write!(f, "step {index} is not a legal crossing: {detail}")
            }
            Self::Repeated { index, first } => {
                write!(f, "step {index} repeats the configuration of step {first}")
            }
        }
    }
}

impl std::error::Error for PathViolation {}

impl SolutionPath {
    #[must_use]
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// Collect the flagged chain below `root`. `None` if `root` is unflagged.
    #[must_use]
    pub fn from_tree(root: &TreeNode) -> Option<Self> {
        let chain = root.solution_chain();
        if chain.is_empty() {
            return None;
        }
        Some(Self::new(chain.into_iter().map(PathStep::from).collect()))
    }

    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of boat crossings (steps after the initial one).
    #[must_use]
    pub fn crossings(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn configurations(&self) -> impl Iterator<Item = &Configuration> + '_ {
        self.steps.iter().map(|s| &s.configuration)
    }

    /// Check that the path runs from `initial` to `goal` through legal,
    /// non-repeating crossings under `population`.
    ///
    /// # Errors
    ///
    /// Returns the first [`PathViolation`] found, scanning from the start.
    pub fn verify(
        &self,
        population: &Population,
        initial: &Configuration,
        goal: &Configuration,
    ) -> Result<(), PathViolation> {
        let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) else {
            return Err(PathViolation::Empty);
        };
        if first.configuration != *initial {
            return Err(PathViolation::WrongStart {
                found: first.configuration,
            });
        }
        if !first.ride.is_empty() {
            return Err(PathViolation::RideOnFirstStep);
        }

        let mut first_index: HashMap<Configuration, usize> = HashMap::new();
        first_index.insert(first.configuration, 0);

        for (index, pair) in self.steps.windows(2).enumerate() {
            let index = index + 1;
            let (prev, step) = (&pair[0], &pair[1]);
            let replayed = cross(population, &prev.configuration, step.ride).map_err(|e| {
                PathViolation::IllegalCrossing {
                    index,
                    detail: e.to_string(),
                }
            })?;
            if replayed != step.configuration || step.ride.is_empty() {
                return Err(PathViolation::IllegalCrossing {
                    index,
                    detail: format!(
                        "ride {} from {} gives {replayed}, recorded {}",
                        step.ride, prev.configuration, step.configuration
                    ),
                });
            }
            if let Some(&first) = first_index.get(&step.configuration) {
                return Err(PathViolation::Repeated { index, first });
            }
            first_index.insert(step.configuration, index);
        }

        if last.configuration != *goal {
            return Err(PathViolation::WrongEnd {
                found: last.configuration,
            });
        }
        Ok(())
    }

    /// JSON form used in transcripts.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let steps: Vec<serde_json::Value> = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                serde_json::json!({
                    "configuration": step.configuration.to_json_value(),
                    "index": index,
                    "ride": step.ride.riders().iter().map(|r| r.as_str()).collect::<Vec<_>>(),
                })
            })
            .collect();
        serde_json::json!({
            "crossings": self.crossings(),
            "steps": steps,
        })
    }
}
