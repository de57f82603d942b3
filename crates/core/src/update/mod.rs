//! The write path: merge a proposal over the stored snapshot, validate it,
//! and gate structural changes on the caller's tier.

pub mod gate;
pub mod types;

pub use gate::{UpdateError, UpdateGate};
pub use types::{merge, DocumentUpdate};
