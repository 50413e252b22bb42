//! Ferry Search: deterministic depth-first search over crossing configurations.
//!
//! This crate provides the search layer. It depends only on `ferry_kernel`;
//! it does NOT depend on `ferry_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! ferry_kernel  ←  ferry_search  ←  ferry_harness
//! (state model)    (tree, DFS)      (worlds, runner, rendering)
//! ```
//!
//! # Key types
//!
//! - [`node::TreeNode`] — exploration tree with solution-path flags
//! - [`transition::Transition`] — one legal crossing out of a configuration
//! - [`search::Searcher`] — recursive depth-first search with a shared visited set
//! - [`path::SolutionPath`] — the discovered root-to-goal chain
//! - [`graph::SearchGraph`] — expansion-event audit log
//! - [`policy::SearchPolicy`] — depth and expansion budgets

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod graph;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
pub mod transition;
