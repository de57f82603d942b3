use std::fmt;

use serde::{Deserialize, Serialize};

/// Capability level of the actor proposing a change.
///
/// Resolved by the caller from whatever identity system it uses; this crate
/// only consumes the value. Ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// May edit block data but never the shape of the document.
    ContentEditor,
    /// May add, remove, reorder and retype sections and blocks.
    Builder,
}

impl Tier {
    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Tier::ContentEditor => "Content Editor",
            Tier::Builder => "Builder",
        }
    }

    /// The least privileged tier that may edit structure.
    pub fn structural_minimum() -> Tier {
        Tier::Builder
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether `tier` may change the count, order, keys or types of sections
/// and blocks.
pub fn is_structural_edit_allowed(tier: Tier) -> bool {
    tier >= Tier::structural_minimum()
}
