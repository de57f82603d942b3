//! Per-node grammar checks over a whole document.

use pagetree_schema::{check_block, json_type_name, FieldIssue, FieldViolation, TYPE_FIELD};

use super::model::{Block, Document, Section, SECTION_TYPE};
use crate::violation::Violation;

const KEY_FIELD: &str = "_key";
const DATA_FIELD: &str = "data";

/// Check every section and block against the block grammar.
///
/// Walks the whole tree once and reports every violation found, in document
/// order. Children are visited even when their parent is malformed.
pub fn check_grammar(document: &Document) -> Vec<Violation> {
    let mut violations = Vec::new();
    for section in &document.sections {
        check_section(section, &mut violations);
    }
    violations
}

fn check_section(section: &Section, out: &mut Vec<Violation>) {
    let violation = |field: &str, reason: FieldIssue| Violation::GrammarViolation {
        key: section.key.clone(),
        tag: SECTION_TYPE.to_string(),
        field: field.to_string(),
        reason,
    };

    if section.key.trim().is_empty() {
        out.push(violation(KEY_FIELD, FieldIssue::Empty));
    }
    match section.section_type.as_deref() {
        None => out.push(violation(TYPE_FIELD, FieldIssue::Missing)),
        Some(SECTION_TYPE) => {}
        Some(other) => out.push(violation(
            TYPE_FIELD,
            FieldIssue::NotAllowed {
                value: other.to_string(),
                allowed: vec![SECTION_TYPE.to_string()],
            },
        )),
    }

    for block in &section.blocks {
        check_block_tree(block, out);
    }
}

fn check_block_tree(block: &Block, out: &mut Vec<Violation>) {
    let to_violation = |v: FieldViolation| Violation::GrammarViolation {
        key: block.key.clone(),
        tag: block.block_type.clone(),
        field: v.field,
        reason: v.issue,
    };

    if block.key.trim().is_empty() {
        out.push(to_violation(FieldViolation::new(KEY_FIELD, FieldIssue::Empty)));
    }

    let children = block.children();
    match block.data_object() {
        Some(data) => {
            if let Err(errs) = check_block(&block.block_type, &data, children.len()) {
                out.extend(errs.into_iter().map(to_violation));
            }
        }
        None => out.push(to_violation(FieldViolation::new(
            DATA_FIELD,
            FieldIssue::WrongType {
                expected: "object".to_string(),
                found: json_type_name(&block.data).to_string(),
            },
        ))),
    }

    for child in children {
        check_block_tree(child, out);
    }
}
