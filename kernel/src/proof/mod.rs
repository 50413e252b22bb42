//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Every digest in the workspace flows through this module.

pub mod canon;
pub mod hash;
