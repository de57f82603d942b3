//! Block variant grammar for page documents.
//!
//! The catalogue of block types is closed: every variant, its payload field
//! table and its child-arity rule are declared here, and everything that walks
//! a page tree dispatches on [`BlockKind`] with an exhaustive match.

pub mod catalog;
pub mod conform;
pub mod field;
pub mod kind;

pub use catalog::COLUMN_COUNT_FIELD;
pub use conform::{
    check_arity, check_block, check_data, expected_children, CHILDREN_FIELD, TYPE_FIELD,
};
pub use field::{json_type_name, FieldIssue, FieldKind, FieldSpec, FieldViolation};
pub use kind::{BlockClass, BlockKind, UnknownTag};
