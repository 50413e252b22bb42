//! Search entry points and the recursive depth-first expansion.

use std::collections::HashSet;

use ferry_kernel::model::configuration::Configuration;
use ferry_kernel::model::population::Population;

use crate::error::{ConfigurationRole, SearchError};
use crate::graph::{
    CandidateOutcome, CandidateRecord, ExpandEvent, RejectionKind, SearchGraph,
    SearchGraphMetadata, TerminationReason,
};
use crate::node::TreeNode;
use crate::path::{PathStep, SolutionPath};
use crate::policy::SearchPolicy;
use crate::transition::enumerate_candidates;

/// Configurations already entered. Shared by the whole traversal, insert-only.
pub type VisitedSet = HashSet<Configuration>;

/// Result of searching below one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached; the path starts at the searched node.
    Found(SolutionPath),
    NotFound,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub fn path(&self) -> Option<&SolutionPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }
}

/// Result of a full search from a root.
///
/// Always carries the tree and its audit graph, whether or not the goal was
/// reached.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub root: TreeNode,
    pub outcome: SearchOutcome,
    pub graph: SearchGraph,
}

impl SearchResult {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Counters {
    candidates_generated: u64,
    rejected: u64,
    duplicates_suppressed: u64,
    depth_skipped: u64,
    children_attached: u64,
    max_depth_reached: u32,
}

/// Depth-first searcher for one population and policy.
///
/// Holds the audit log; the visited set is passed in by the caller so its
/// lifetime and ownership stay explicit.
#[derive(Debug)]
pub struct Searcher<'p> {
    population: Population,
    policy: &'p SearchPolicy,
    expansions: Vec<ExpandEvent>,
    counters: Counters,
    goal_depth: Option<u32>,
    budget_exhausted: bool,
}

impl<'p> Searcher<'p> {
    #[must_use]
    pub fn new(population: Population, policy: &'p SearchPolicy) -> Self {
        Self {
            population,
            policy,
            expansions: Vec::new(),
            counters: Counters::default(),
            goal_depth: None,
            budget_exhausted: false,
        }
    }

    /// Search below `node` for `goal`.
    ///
    /// Marks `node` visited, returns `Found` at once if it is the goal, and
    /// otherwise attaches one child per unvisited legal transition before
    /// searching those children in order. The first successful child is
    /// flagged and its later siblings are left unexplored. `node` itself is
    /// never flagged here; that is the caller's decision.
    ///
    /// Each call starts a fresh audit log and expansion budget.
    pub fn search(
        &mut self,
        node: &mut TreeNode,
        goal: &Configuration,
        visited: &mut VisitedSet,
    ) -> SearchOutcome {
        self.reset();
        match self.descend(node, goal, visited, 0) {
            Some(mut reversed) => {
                reversed.reverse();
                SearchOutcome::Found(SolutionPath::new(reversed))
            }
            None => SearchOutcome::NotFound,
        }
    }

    fn reset(&mut self) {
        self.expansions.clear();
        self.counters = Counters::default();
        self.goal_depth = None;
        self.budget_exhausted = false;
    }

    /// Returns the path from `node` to the goal in reverse (goal first).
    fn descend(
        &mut self,
        node: &mut TreeNode,
        goal: &Configuration,
        visited: &mut VisitedSet,
        depth: u32,
    ) -> Option<Vec<PathStep>> {
        visited.insert(*node.configuration());
        self.counters.max_depth_reached = self.counters.max_depth_reached.max(depth);

        if node.configuration() == goal {
            self.goal_depth = Some(depth);
            return Some(vec![PathStep::from(&*node)]);
        }

        if self.expansions.len() as u64 >= self.policy.max_expansions {
            self.budget_exhausted = true;
            return None;
        }
        self.expand(node, visited, depth);

        let here = PathStep::from(&*node);
        for child in node.children_mut() {
            if let Some(mut reversed) = self.descend(child, goal, visited, depth + 1) {
                child.mark_on_solution_path();
                reversed.push(here);
                return Some(reversed);
            }
            if self.budget_exhausted {
                return None;
            }
        }
        None
    }

    /// Attach children for every unvisited legal transition and log the event.
    fn expand(&mut self, node: &mut TreeNode, visited: &VisitedSet, depth: u32) {
        let config = *node.configuration();
        let mut records = Vec::new();

        for (index, candidate) in enumerate_candidates(&self.population, &config)
            .into_iter()
            .enumerate()
        {
            self.counters.candidates_generated += 1;
            let outcome = match candidate.result {
                Err(err) => {
                    self.counters.rejected += 1;
                    CandidateOutcome::Rejected(RejectionKind::from(&err))
                }
                Ok(configuration) if visited.contains(&configuration) => {
                    self.counters.duplicates_suppressed += 1;
                    CandidateOutcome::DuplicateSuppressed { configuration }
                }
                Ok(configuration) if depth >= self.policy.max_depth => {
                    self.counters.depth_skipped += 1;
                    CandidateOutcome::SkippedByDepthLimit { configuration }
                }
                Ok(configuration) => {
                    self.counters.children_attached += 1;
                    let child_index = node.add_child(configuration, candidate.ride);
                    CandidateOutcome::Attached {
                        child_index: child_index as u64,
                        configuration,
                    }
                }
            };
            records.push(CandidateRecord {
                index: index as u64,
                ride: candidate.ride,
                outcome,
            });
        }

        self.expansions.push(ExpandEvent {
            expansion_order: self.expansions.len() as u64,
            depth,
            configuration: config,
            candidates: records,
        });
    }

    /// How the most recent [`Searcher::search`] call ended.
    #[must_use]
    pub fn termination_reason(&self) -> TerminationReason {
        match self.goal_depth {
            Some(depth) => TerminationReason::GoalReached { depth },
            None if self.budget_exhausted => TerminationReason::ExpansionBudgetExceeded,
            None => TerminationReason::Exhausted,
        }
    }

    /// Expansion events recorded so far.
    #[must_use]
    pub fn expansions(&self) -> &[ExpandEvent] {
        &self.expansions
    }

    /// Consume the searcher into an audit graph for a search from `root` to `goal`.
    #[must_use]
    pub fn into_graph(
        self,
        root: &Configuration,
        goal: &Configuration,
        outcome: &SearchOutcome,
    ) -> SearchGraph {
        let termination_reason = self.termination_reason();
        let metadata = SearchGraphMetadata {
            per_class: self.population.per_class(),
            root_fingerprint: root.fingerprint(),
            goal_fingerprint: goal.fingerprint(),
            policy: self.policy.clone(),
            total_expansions: self.expansions.len() as u64,
            total_candidates_generated: self.counters.candidates_generated,
            total_rejected: self.counters.rejected,
            total_duplicates_suppressed: self.counters.duplicates_suppressed,
            total_depth_skipped: self.counters.depth_skipped,
            total_nodes: 1 + self.counters.children_attached,
            max_depth_reached: self.counters.max_depth_reached,
            solution_crossings: outcome.path().map(|p| p.crossings() as u64),
            termination_reason,
        };
        SearchGraph {
            expansions: self.expansions,
            metadata,
        }
    }
}

/// Solve from `initial` to `goal` under an explicit population and policy.
///
/// A search that finds nothing is `Ok` with an unflagged root.
///
/// # Errors
///
/// - [`SearchError::UnsupportedPolicy`] if the policy fails validation.
/// - [`SearchError::ForeignConfiguration`] if `initial` or `goal` is not a
///   safe configuration for `population`.
pub fn solve_with(
    initial: Configuration,
    goal: Configuration,
    population: &Population,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;
    for (role, config) in [
        (ConfigurationRole::Initial, &initial),
        (ConfigurationRole::Goal, &goal),
    ] {
        if !population.admits(config) {
            return Err(SearchError::ForeignConfiguration {
                role,
                detail: format!(
                    "{config} is not a safe configuration for {} per class",
                    population.per_class()
                ),
            });
        }
    }

    let mut root = TreeNode::root(initial);
    let mut visited = VisitedSet::new();
    let mut searcher = Searcher::new(*population, policy);
    let outcome = searcher.search(&mut root, &goal, &mut visited);
    if outcome.is_found() {
        root.mark_on_solution_path();
    }
    let graph = searcher.into_graph(&initial, &goal, &outcome);

    Ok(SearchResult {
        root,
        outcome,
        graph,
    })
}

/// Solve the standard (three per class) puzzle with the default policy.
///
/// Returns the root whether or not a solution exists; inspect
/// [`TreeNode::is_on_solution_path`] on the root to tell. Configurations
/// built for another population are not searched and yield an unflagged root.
#[must_use]
pub fn solve(initial: Configuration, goal: Configuration) -> TreeNode {
    // The default policy is valid, so the only reachable error is
    // `ForeignConfiguration`.
    solve_with(initial, goal, &Population::STANDARD, &SearchPolicy::default())
        .map_or_else(|_| TreeNode::root(initial), |result| result.root)
}
