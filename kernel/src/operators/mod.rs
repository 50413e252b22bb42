//! Operators module: the ride catalog and the crossing operator.
//!
//! Depends on `model`.

pub mod crossing;
