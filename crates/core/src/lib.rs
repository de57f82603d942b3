//! Validation and tier-gated structural diffing for page documents.
//!
//! A page is a tree of sections holding blocks, some of which hold further
//! blocks. Two tiers edit the same tree: a content editor may change block
//! data only, a builder may also change the tree's shape. Everything here is
//! pure and synchronous; storage, identity and transport live elsewhere.
//!
//! Typical use goes through [`UpdateGate`]:
//!
//! ```
//! use pagetree_core::{Document, DocumentUpdate, Tier, UpdateGate};
//! use serde_json::json;
//!
//! let existing: Document = serde_json::from_value(json!({"sections": [
//!     {"_key": "s1", "_type": "section", "blocks": [
//!         {"_key": "h1", "_type": "heading-block", "data": {"text": "Hello", "level": "h1"}}
//!     ]}
//! ]})).unwrap();
//!
//! let update: DocumentUpdate = serde_json::from_value(json!({"sections": [
//!     {"_key": "s1", "_type": "section", "blocks": [
//!         {"_key": "h1", "_type": "heading-block", "data": {"text": "Hello World", "level": "h1"}}
//!     ]}
//! ]})).unwrap();
//!
//! let gate = UpdateGate::default();
//! let accepted = gate.check_update(&existing, update, Tier::ContentEditor).unwrap();
//! assert_eq!(accepted.sections[0].blocks[0].data["text"], "Hello World");
//! ```

pub mod config;
pub mod diff;
pub mod document;
pub mod report;
pub mod tier;
pub mod tree;
pub mod update;
pub mod violation;

pub use config::{ConfigError, ValidatorConfig};
pub use diff::{diff_with_mode, structural_diff, structural_diff_all, DiffMode};
pub use document::{check_grammar, Block, Document, Section};
pub use report::ErrorBody;
pub use tier::{is_structural_edit_allowed, Tier};
pub use tree::{check_nesting_depth, check_unique_keys, collect_keys, nesting_depth};
pub use update::{merge, DocumentUpdate, UpdateError, UpdateGate};
pub use violation::{Violation, ViolationClass};

pub use pagetree_schema as schema;
