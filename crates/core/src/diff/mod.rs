//! Structural comparison of a stored document against a proposed one.
//!
//! Only shape is compared: section and block counts, keys and tags, matched
//! strictly by position. Block `data` payloads are never looked at, so any
//! content edit passes. Moving a block is indistinguishable from deleting and
//! re-inserting it and is reported as a reorder.

use std::ops::ControlFlow;

use crate::document::{Block, Document, Section};
use crate::violation::Violation;

/// How many structural violations a diff reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiffMode {
    /// Stop at the first violation, top-down and left-to-right.
    #[default]
    FirstViolation,
    /// Keep walking and report every violation.
    AllViolations,
}

/// First structural difference between `existing` and `proposed`, if any.
pub fn structural_diff(existing: &Document, proposed: &Document) -> Result<(), Violation> {
    match diff_with_mode(existing, proposed, DiffMode::FirstViolation)
        .into_iter()
        .next()
    {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Every structural difference between `existing` and `proposed`.
pub fn structural_diff_all(existing: &Document, proposed: &Document) -> Vec<Violation> {
    diff_with_mode(existing, proposed, DiffMode::AllViolations)
}

pub fn diff_with_mode(existing: &Document, proposed: &Document, mode: DiffMode) -> Vec<Violation> {
    let mut walker = Walker {
        mode,
        found: Vec::new(),
    };
    let _ = walker.sections(&existing.sections, &proposed.sections);
    tracing::debug!(?mode, violations = walker.found.len(), "structural diff complete");
    walker.found
}

struct Walker {
    mode: DiffMode,
    found: Vec<Violation>,
}

impl Walker {
    fn report(&mut self, violation: Violation) -> ControlFlow<()> {
        self.found.push(violation);
        match self.mode {
            DiffMode::FirstViolation => ControlFlow::Break(()),
            DiffMode::AllViolations => ControlFlow::Continue(()),
        }
    }

    fn sections(&mut self, existing: &[Section], proposed: &[Section]) -> ControlFlow<()> {
        if existing.len() != proposed.len() {
            self.report(Violation::SectionCountChanged {
                existing: existing.len(),
                proposed: proposed.len(),
            })?;
        }

        for (old, new) in existing.iter().zip(proposed) {
            if old.key != new.key {
                self.report(Violation::SectionReordered {
                    key: old.key.clone(),
                    found: new.key.clone(),
                })?;
                continue;
            }
            self.blocks(&old.key, None, &old.blocks, &new.blocks)?;
        }
        ControlFlow::Continue(())
    }

    fn blocks(
        &mut self,
        section_key: &str,
        parent_key: Option<&str>,
        existing: &[Block],
        proposed: &[Block],
    ) -> ControlFlow<()> {
        if existing.len() != proposed.len() {
            self.report(Violation::BlockCountChanged {
                section_key: section_key.to_string(),
                parent_key: parent_key.map(str::to_string),
                existing: existing.len(),
                proposed: proposed.len(),
            })?;
        }

        for (old, new) in existing.iter().zip(proposed) {
            if old.key != new.key {
                self.report(Violation::BlockReordered {
                    key: old.key.clone(),
                    found: new.key.clone(),
                })?;
                continue;
            }

            if old.block_type != new.block_type {
                self.report(Violation::BlockTypeChanged {
                    key: old.key.clone(),
                    from_tag: old.block_type.clone(),
                    to_tag: new.block_type.clone(),
                })?;
            }

            // Either side being a container is enough: a container that lost
            // its children list shows up as a count change.
            if old.has_children_list() || new.has_children_list() {
                self.blocks(section_key, Some(&old.key), old.children(), new.children())?;
            }
        }
        ControlFlow::Continue(())
    }
}
