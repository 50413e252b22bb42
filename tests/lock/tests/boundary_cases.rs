//! Boundary and no-solution behavior.

use ferry_harness::runner::run;
use ferry_harness::worlds::scaled::Scaled;
use ferry_harness::worlds::stranded::Stranded;
use ferry_kernel::model::configuration::Configuration;
use ferry_kernel::model::location::Location;
use ferry_kernel::model::population::Population;
use ferry_search::error::{ConfigurationRole, SearchError};
use ferry_search::graph::TerminationReason;
use ferry_search::path::SolutionPath;
use ferry_search::policy::SearchPolicy;
use ferry_search::search::{solve, solve_with};
use lock_tests::fixtures::{classic_goal, classic_initial};

// ---------------------------------------------------------------------------
// Goal equals initial
// ---------------------------------------------------------------------------

#[test]
fn goal_equal_to_initial_is_a_zero_crossing_solution() {
    let root = solve(classic_initial(), classic_initial());
    assert!(root.is_on_solution_path());
    assert!(root.children().is_empty());

    let path = SolutionPath::from_tree(&root).expect("trivially solved");
    assert_eq!(path.crossings(), 0);
    assert_eq!(path.steps().len(), 1);
}

#[test]
fn goal_equal_to_initial_records_no_expansion() {
    let result = solve_with(
        classic_initial(),
        classic_initial(),
        &Population::STANDARD,
        &SearchPolicy::default(),
    )
    .unwrap();
    assert!(result.graph.expansions.is_empty());
    assert_eq!(result.graph.metadata.total_nodes, 1);
    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReason::GoalReached { depth: 0 }
    );
}

// ---------------------------------------------------------------------------
// Unreachable goals
// ---------------------------------------------------------------------------

#[test]
fn unreachable_goal_leaves_root_unflagged() {
    let stranded_goal = Configuration::new(0, 0, Location::Origin).unwrap();
    let root = solve(classic_initial(), stranded_goal);
    assert!(!root.is_on_solution_path());
    assert!(SolutionPath::from_tree(&root).is_none());
    // The tree is still populated: the search did run.
    assert!(!root.children().is_empty());
}

#[test]
fn stranded_search_exhausts_the_reachable_space() {
    let report = run(&Stranded, &SearchPolicy::default()).unwrap();
    assert!(!report.is_solved());
    assert!(report.verify());

    let meta = &report.result.graph.metadata;
    assert_eq!(meta.termination_reason, TerminationReason::Exhausted);
    assert_eq!(meta.total_expansions, 18);
    assert_eq!(meta.total_candidates_generated, 90);
    assert_eq!(meta.total_rejected, 52);
    assert_eq!(meta.total_duplicates_suppressed, 21);
    assert_eq!(meta.total_nodes, 18);
    assert_eq!(meta.solution_crossings, None);
}

#[test]
fn unflagged_tree_has_no_flagged_node_anywhere() {
    fn any_flagged(node: &ferry_search::node::TreeNode) -> bool {
        node.is_on_solution_path() || node.children().iter().any(any_flagged)
    }
    let stranded_goal = Configuration::new(0, 0, Location::Origin).unwrap();
    let root = solve(classic_initial(), stranded_goal);
    assert!(!any_flagged(&root));
}

// ---------------------------------------------------------------------------
// Scaled populations
// ---------------------------------------------------------------------------

#[test]
fn scaled_population_outcomes_locked() {
    let policy = SearchPolicy::default();
    let cases: [(u32, Option<usize>); 5] = [
        (1, Some(1)),
        (2, Some(5)),
        (3, Some(11)),
        (4, None),
        (5, None),
    ];
    for (per_class, crossings) in cases {
        let report = run(&Scaled::new(per_class), &policy).unwrap();
        assert_eq!(report.crossings(), crossings, "per_class={per_class}");
        assert!(report.verify(), "per_class={per_class}");
    }
}

// ---------------------------------------------------------------------------
// Pre-flight rejection
// ---------------------------------------------------------------------------

#[test]
fn foreign_initial_is_rejected_before_search() {
    let wide = Population::new(4);
    let initial = wide.configuration(4, 4, Location::Origin).unwrap();
    let err = solve_with(
        initial,
        classic_goal(),
        &Population::STANDARD,
        &SearchPolicy::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SearchError::ForeignConfiguration {
            role: ConfigurationRole::Initial,
            ..
        }
    ));
}

#[test]
fn foreign_goal_is_rejected_before_search() {
    let wide = Population::new(4);
    let goal = wide.configuration(4, 0, Location::Destination).unwrap();
    assert!(!Population::STANDARD.admits(&goal));
    let err = solve_with(
        classic_initial(),
        goal,
        &Population::STANDARD,
        &SearchPolicy::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SearchError::ForeignConfiguration {
            role: ConfigurationRole::Goal,
            ..
        }
    ));

    let root = solve(classic_initial(), goal);
    assert!(!root.is_on_solution_path());
    assert!(root.children().is_empty());
}

#[test]
fn solve_with_foreign_configuration_yields_unflagged_root() {
    let wide = Population::new(4);
    let initial = wide.configuration(4, 4, Location::Origin).unwrap();
    let root = solve(initial, classic_goal());
    assert!(!root.is_on_solution_path());
    assert!(root.children().is_empty());
}

#[test]
fn zero_expansion_budget_is_rejected() {
    let policy = SearchPolicy {
        max_expansions: 0,
        ..SearchPolicy::default()
    };
    let err = solve_with(classic_initial(), classic_goal(), &Population::STANDARD, &policy)
        .unwrap_err();
    assert!(matches!(err, SearchError::UnsupportedPolicy { .. }));
}

#[test]
fn tight_expansion_budget_stops_search() {
    let policy = SearchPolicy {
        max_expansions: 5,
        ..SearchPolicy::default()
    };
    let result =
        solve_with(classic_initial(), classic_goal(), &Population::STANDARD, &policy).unwrap();
    assert!(!result.outcome.is_found());
    assert!(!result.root.is_on_solution_path());
    assert_eq!(result.graph.metadata.total_expansions, 5);
    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReason::ExpansionBudgetExceeded
    );
}

#[test]
fn shallow_depth_limit_prevents_solution() {
    let policy = SearchPolicy {
        max_depth: 5,
        ..SearchPolicy::default()
    };
    let result =
        solve_with(classic_initial(), classic_goal(), &Population::STANDARD, &policy).unwrap();
    assert!(!result.outcome.is_found());
    assert!(result.graph.metadata.total_depth_skipped > 0);
    assert!(result.graph.metadata.max_depth_reached <= 5);
}

#[test]
fn empty_origin_bank_already_at_goal() {
    let empty = Configuration::new(0, 0, Location::Origin).unwrap();
    let root = solve(empty, empty);
    assert!(root.is_on_solution_path());
    assert!(root.children().is_empty());
}
