//! Ferry Harness: problem instances, orchestration, and presentation.
//!
//! The harness runs a world through the search (`solve_with` → verify the
//! flagged path → serialize transcript and audit graph → digest) and
//! renders the result for people.
//!
//! The harness does NOT implement search logic — it delegates to
//! `ferry_search`. Worlds provide instance data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod render;
pub mod report;
pub mod runner;
pub mod worlds;
