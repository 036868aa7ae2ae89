//! CLI command implementations.

pub mod locate;
pub mod metrics;
pub mod tree;
