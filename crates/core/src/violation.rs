use pagetree_schema::FieldIssue;
use serde::{Deserialize, Serialize};

use crate::tier::{is_structural_edit_allowed, Tier};

/// A single reason a proposed document cannot be written.
///
/// Serialized with a camelCase `type` tag so a transport layer can forward
/// it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Violation {
    #[error("duplicate keys: {}", join(.keys))]
    DuplicateKey { keys: Vec<String> },

    #[error("nesting depth {observed} exceeds maximum {max}")]
    NestingDepthExceeded { observed: usize, max: usize },

    #[error("{tag} `{key}`: {field}: {reason}")]
    GrammarViolation {
        key: String,
        tag: String,
        field: String,
        reason: FieldIssue,
    },

    #[error("section count changed from {existing} to {proposed}")]
    SectionCountChanged { existing: usize, proposed: usize },

    #[error("section `{key}` reordered (found `{found}` in its place)")]
    SectionReordered { key: String, found: String },

    #[error("block count changed from {existing} to {proposed} in section `{section_key}`")]
    BlockCountChanged {
        section_key: String,
        /// Enclosing container, absent for a section's top-level blocks.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parent_key: Option<String>,
        existing: usize,
        proposed: usize,
    },

    #[error("block `{key}` reordered (found `{found}` in its place)")]
    BlockReordered { key: String, found: String },

    #[error("block `{key}` changed type from {from_tag} to {to_tag}")]
    BlockTypeChanged {
        key: String,
        from_tag: String,
        to_tag: String,
    },
}

fn join(keys: &[String]) -> String {
    keys.join(", ")
}

/// The three error families, which differ in when they are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationClass {
    /// Malformed payload for a declared tag. Always fatal.
    Grammar,
    /// Duplicate key or excess nesting. Always fatal.
    Invariant,
    /// Shape changed; fatal only for tiers without structural rights.
    StructuralPolicy,
}

impl Violation {
    pub fn class(&self) -> ViolationClass {
        match self {
            Violation::GrammarViolation { .. } => ViolationClass::Grammar,
            Violation::DuplicateKey { .. } | Violation::NestingDepthExceeded { .. } => {
                ViolationClass::Invariant
            }
            Violation::SectionCountChanged { .. }
            | Violation::SectionReordered { .. }
            | Violation::BlockCountChanged { .. }
            | Violation::BlockReordered { .. }
            | Violation::BlockTypeChanged { .. } => ViolationClass::StructuralPolicy,
        }
    }

    pub fn is_fatal_for(&self, tier: Tier) -> bool {
        match self.class() {
            ViolationClass::Grammar | ViolationClass::Invariant => true,
            ViolationClass::StructuralPolicy => !is_structural_edit_allowed(tier),
        }
    }

    /// Stable camelCase identifier, the same string as the serialized `type`.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::DuplicateKey { .. } => "duplicateKey",
            Violation::NestingDepthExceeded { .. } => "nestingDepthExceeded",
            Violation::GrammarViolation { .. } => "grammarViolation",
            Violation::SectionCountChanged { .. } => "sectionCountChanged",
            Violation::SectionReordered { .. } => "sectionReordered",
            Violation::BlockCountChanged { .. } => "blockCountChanged",
            Violation::BlockReordered { .. } => "blockReordered",
            Violation::BlockTypeChanged { .. } => "blockTypeChanged",
        }
    }

    /// Text suitable for showing to the editor who proposed the change.
    pub fn user_message(&self) -> String {
        match self {
            Violation::DuplicateKey { keys } => format!(
                "Every section and block needs a unique key. Duplicated: {}.",
                join(keys)
            ),
            Violation::NestingDepthExceeded { observed, max } => format!(
                "Blocks are nested {observed} levels deep. At most {max} levels are allowed."
            ),
            Violation::GrammarViolation {
                key,
                tag,
                field,
                reason,
            } => format!("Invalid {tag} `{key}`: field `{field}` {reason}."),
            Violation::SectionCountChanged { .. } => structural_denied("add or remove sections"),
            Violation::SectionReordered { .. } => structural_denied("reorder sections"),
            Violation::BlockCountChanged { .. } => structural_denied("add or remove blocks"),
            Violation::BlockReordered { .. } => structural_denied("reorder blocks"),
            Violation::BlockTypeChanged { .. } => structural_denied("change block types"),
        }
    }
}

fn structural_denied(action: &str) -> String {
    format!(
        "{} tier cannot {action}. Upgrade to {} tier to modify page structure.",
        Tier::ContentEditor.label(),
        Tier::structural_minimum().label(),
    )
}
