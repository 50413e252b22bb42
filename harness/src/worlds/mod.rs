//! World implementations for the harness runner.

pub mod classic;
pub mod scaled;
pub mod stranded;
