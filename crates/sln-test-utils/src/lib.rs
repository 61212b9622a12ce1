//! Shared test utilities for the solution-sanitizer workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`solution`]: [`TestSolution`] builder for on-disk solution trees
//! - [`samples`]: canned solution texts

pub mod samples;
pub mod solution;

pub use solution::TestSolution;
