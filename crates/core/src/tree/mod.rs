//! Whole-document invariants that hold regardless of tier or prior version.

pub mod depth;
pub mod keys;

pub use depth::{check_nesting_depth, nesting_depth, DEFAULT_MAX_DEPTH};
pub use keys::{check_unique_keys, collect_keys};
