//! Ferry Kernel: the state model and crossing operator for the
//! river-crossing puzzle.
//!
//! # API Surface
//!
//! - [`model::population::Population::configuration`] -- validate and build a [`model::configuration::Configuration`]
//! - [`operators::crossing::cross`] -- apply one boat ride to a configuration
//! - [`proof::hash::canonical_hash`] -- domain-separated content fingerprints
//!
//! # Module Dependency Direction
//!
//! `model` ← `operators` ← `proof`
//!
//! `model` depends on `proof` only for fingerprinting. `operators` depends
//! on `model`. Nothing here knows about search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod model;
pub mod operators;
pub mod proof;
