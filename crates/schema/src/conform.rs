use serde_json::{Map, Value};

use crate::catalog::COLUMN_COUNT_FIELD;
use crate::field::{FieldIssue, FieldViolation};
use crate::kind::BlockKind;

/// Pseudo-field name used when the block's tag itself is at fault.
pub const TYPE_FIELD: &str = "_type";
/// Pseudo-field name used for child-list violations.
pub const CHILDREN_FIELD: &str = "blocks";

/// Check a block's `data` payload against the field table of its variant.
///
/// Every violation is reported, in field-table order. Fields the table does
/// not name are ignored.
pub fn check_data(kind: BlockKind, data: &Map<String, Value>) -> Result<(), Vec<FieldViolation>> {
    let violations: Vec<FieldViolation> = kind
        .fields()
        .iter()
        .filter_map(|spec| {
            spec.check(data.get(spec.name))
                .err()
                .map(|issue| FieldViolation::new(spec.name, issue))
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// The exact number of children a variant requires, if it fixes one.
///
/// Returns `None` when any count is acceptable, or when the declared count is
/// itself malformed (that is reported by [`check_data`]).
pub fn expected_children(kind: BlockKind, data: &Map<String, Value>) -> Option<usize> {
    match kind {
        BlockKind::Columns => {
            let spec = kind.field(COLUMN_COUNT_FIELD)?;
            let value = data.get(COLUMN_COUNT_FIELD);
            spec.check(value).ok()?;
            value
                .and_then(Value::as_u64)
                .and_then(|n| usize::try_from(n).ok())
        }
        _ if kind.is_container() => None,
        _ => Some(0),
    }
}

/// Check that a block carries a legal number of children.
pub fn check_arity(
    kind: BlockKind,
    data: &Map<String, Value>,
    child_count: usize,
) -> Result<(), FieldViolation> {
    if !kind.is_container() {
        if child_count > 0 {
            return Err(FieldViolation::new(
                CHILDREN_FIELD,
                FieldIssue::ChildrenNotAllowed,
            ));
        }
        return Ok(());
    }

    match expected_children(kind, data) {
        Some(expected) if expected != child_count => Err(FieldViolation::new(
            CHILDREN_FIELD,
            FieldIssue::ArityMismatch {
                expected,
                found: child_count,
            },
        )),
        _ => Ok(()),
    }
}

/// Resolve a raw tag and check the payload and child arity in one call.
pub fn check_block(
    tag: &str,
    data: &Map<String, Value>,
    child_count: usize,
) -> Result<BlockKind, Vec<FieldViolation>> {
    let Some(kind) = BlockKind::from_tag(tag) else {
        tracing::debug!(tag, "rejecting unknown block type");
        return Err(vec![FieldViolation::new(TYPE_FIELD, FieldIssue::UnknownTag)]);
    };

    let mut violations = check_data(kind, data).err().unwrap_or_default();
    if let Err(arity) = check_arity(kind, data, child_count) {
        violations.push(arity);
    }

    if violations.is_empty() {
        Ok(kind)
    } else {
        tracing::debug!(tag, count = violations.len(), "block does not conform");
        Err(violations)
    }
}
