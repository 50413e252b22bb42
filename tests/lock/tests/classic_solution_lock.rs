//! Locks the classic (three per class) solution and its audit counters.
//!
//! Depth-first search with catalog order `[M], [M,M], [C], [C,C], [M,C]`
//! finds an 11-crossing solution after 13 expansions. Any change to the
//! catalog order, child ordering, or duplicate suppression moves these
//! numbers.

use ferry_kernel::model::location::Location;
use ferry_kernel::model::population::Population;
use ferry_search::graph::{CandidateOutcome, RejectionKind, TerminationReason};
use ferry_search::path::SolutionPath;
use ferry_search::policy::SearchPolicy;
use ferry_search::search::{solve, solve_with};
use lock_tests::fixtures::{classic_goal, classic_initial, CLASSIC_COUNTS, CLASSIC_RIDES};

// ---------------------------------------------------------------------------
// Path shape
// ---------------------------------------------------------------------------

#[test]
fn classic_path_matches_locked_rides() {
    let root = solve(classic_initial(), classic_goal());
    assert!(root.is_on_solution_path());

    let path = SolutionPath::from_tree(&root).expect("classic is solvable");
    assert_eq!(path.crossings(), 11);

    let rides: Vec<_> = path.steps().iter().skip(1).map(|s| s.ride.riders()).collect();
    assert_eq!(rides, CLASSIC_RIDES.to_vec());
}

#[test]
fn classic_path_matches_locked_configurations() {
    let root = solve(classic_initial(), classic_goal());
    let path = SolutionPath::from_tree(&root).expect("classic is solvable");

    let counts: Vec<_> = path
        .configurations()
        .map(|c| (c.missionaries(), c.cannibals()))
        .collect();
    assert_eq!(counts, CLASSIC_COUNTS.to_vec());

    // The boat alternates, starting at the origin.
    for (i, config) in path.configurations().enumerate() {
        let expected = if i % 2 == 0 {
            Location::Origin
        } else {
            Location::Destination
        };
        assert_eq!(config.boat(), expected, "boat side at step {i}");
    }
}

#[test]
fn first_step_carries_no_ride() {
    let root = solve(classic_initial(), classic_goal());
    let path = SolutionPath::from_tree(&root).expect("classic is solvable");
    assert!(path.steps()[0].ride.is_empty());
    assert!(path.steps().iter().skip(1).all(|s| !s.ride.is_empty()));
}

#[test]
fn classic_path_replays() {
    let root = solve(classic_initial(), classic_goal());
    let path = SolutionPath::from_tree(&root).expect("classic is solvable");
    path.verify(&Population::STANDARD, &classic_initial(), &classic_goal())
        .expect("flagged path replays through the crossing operator");
}

#[test]
fn flagged_chain_has_no_repeated_configuration() {
    let root = solve(classic_initial(), classic_goal());
    let chain = root.solution_chain();
    for (i, a) in chain.iter().enumerate() {
        for b in &chain[i + 1..] {
            assert_ne!(a.configuration(), b.configuration());
        }
    }
}

#[test]
fn exactly_one_child_flagged_along_the_chain() {
    let root = solve(classic_initial(), classic_goal());
    let chain = root.solution_chain();
    // Every node before the goal has one flagged child; the goal has none.
    for node in &chain[..chain.len() - 1] {
        let flagged = node
            .children()
            .iter()
            .filter(|c| c.is_on_solution_path())
            .count();
        assert_eq!(flagged, 1, "node {} has {flagged} flagged children", node.configuration());
    }
    assert!(chain[chain.len() - 1].flagged_child().is_none());
}

// ---------------------------------------------------------------------------
// Audit counters
// ---------------------------------------------------------------------------

#[test]
fn classic_graph_counters_locked() {
    let result = solve_with(
        classic_initial(),
        classic_goal(),
        &Population::STANDARD,
        &SearchPolicy::default(),
    )
    .unwrap();
    let meta = &result.graph.metadata;

    assert_eq!(meta.total_expansions, 13);
    assert_eq!(meta.total_candidates_generated, 65);
    assert_eq!(meta.total_rejected, 37);
    assert_eq!(meta.total_duplicates_suppressed, 13);
    assert_eq!(meta.total_depth_skipped, 0);
    assert_eq!(meta.total_nodes, 16);
    assert_eq!(meta.solution_crossings, Some(11));
    assert_eq!(meta.termination_reason, TerminationReason::GoalReached { depth: 11 });
    assert_eq!(result.root.node_count() as u64, meta.total_nodes);
}

#[test]
fn root_expansion_locked() {
    let result = solve_with(
        classic_initial(),
        classic_goal(),
        &Population::STANDARD,
        &SearchPolicy::default(),
    )
    .unwrap();
    let root_event = &result.graph.expansions[0];
    assert_eq!(root_event.expansion_order, 0);
    assert_eq!(root_event.depth, 0);
    assert_eq!(root_event.configuration, classic_initial());

    let outcomes: Vec<_> = root_event.candidates.iter().map(|c| c.outcome).collect();
    assert_eq!(outcomes[0], CandidateOutcome::Rejected(RejectionKind::Unsafe));
    assert_eq!(outcomes[1], CandidateOutcome::Rejected(RejectionKind::Unsafe));
    assert!(matches!(outcomes[2], CandidateOutcome::Attached { child_index: 0, .. }));
    assert!(matches!(outcomes[3], CandidateOutcome::Attached { child_index: 1, .. }));
    assert!(matches!(outcomes[4], CandidateOutcome::Attached { child_index: 2, .. }));
}

#[test]
fn every_expansion_records_the_full_catalog() {
    let result = solve_with(
        classic_initial(),
        classic_goal(),
        &Population::STANDARD,
        &SearchPolicy::default(),
    )
    .unwrap();
    for event in &result.graph.expansions {
        assert_eq!(event.candidates.len(), 5);
        let indices: Vec<u64> = event.candidates.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }
}

#[test]
fn expansion_order_is_contiguous() {
    let result = solve_with(
        classic_initial(),
        classic_goal(),
        &Population::STANDARD,
        &SearchPolicy::default(),
    )
    .unwrap();
    for (i, event) in result.graph.expansions.iter().enumerate() {
        assert_eq!(event.expansion_order, i as u64);
    }
}
