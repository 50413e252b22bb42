//! Shared helpers for ferry benchmark suites.

use ferry_harness::contract::PuzzleWorld;
use ferry_search::policy::SearchPolicy;
use ferry_search::search::{solve_with, SearchResult};

/// Resolve a world's endpoints and search it directly, bypassing report
/// assembly.
///
/// # Panics
///
/// Panics if the world is malformed or the policy is rejected. Benchmark
/// setup failures are fatal.
pub fn search_only<W: PuzzleWorld + ?Sized>(world: &W, policy: &SearchPolicy) -> SearchResult {
    let initial = world.initial().expect("world initial");
    let goal = world.goal().expect("world goal");
    solve_with(initial, goal, &world.population(), policy).expect("search pre-flight")
}
