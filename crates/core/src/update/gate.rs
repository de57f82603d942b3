use crate::config::ValidatorConfig;
use crate::diff::diff_with_mode;
use crate::document::{check_grammar, Document};
use crate::report::ErrorBody;
use crate::tier::{is_structural_edit_allowed, Tier};
use crate::tree::{check_nesting_depth, check_unique_keys};
use crate::violation::Violation;

use super::types::{merge, DocumentUpdate};

/// Why a proposed document may not be persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateError {
    /// The proposal is malformed or breaks a tree invariant. Fatal for every
    /// tier.
    #[error("document failed validation: {}", first_message(.violations))]
    Invalid { violations: Vec<Violation> },

    /// The proposal changes document shape and the tier forbids that.
    #[error("{tier} tier cannot change document structure: {}", first_message(.violations))]
    StructuralEditDenied {
        tier: Tier,
        violations: Vec<Violation>,
    },
}

fn first_message(violations: &[Violation]) -> String {
    violations
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

impl UpdateError {
    pub fn violations(&self) -> &[Violation] {
        match self {
            UpdateError::Invalid { violations } => violations,
            UpdateError::StructuralEditDenied { violations, .. } => violations,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UpdateError::Invalid { .. } => "invalidDocument",
            UpdateError::StructuralEditDenied { .. } => "structuralEditDenied",
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody::new(self.code(), self.violations())
    }
}

/// Decides whether a proposed snapshot may replace the stored one.
///
/// The gate holds no state beyond its configuration and never mutates the
/// documents it is given; it can be shared freely across requests.
#[derive(Debug, Clone, Default)]
pub struct UpdateGate {
    config: ValidatorConfig,
}

impl UpdateGate {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Grammar and tree-invariant checks, independent of tier.
    ///
    /// With `fail_fast` set, grammar violations are returned without running
    /// the key and depth checks.
    pub fn validate(&self, document: &Document) -> Result<(), UpdateError> {
        let mut violations = check_grammar(document);

        if violations.is_empty() || !self.config.fail_fast {
            if let Err(v) = check_unique_keys(document) {
                violations.push(v);
            }
            if let Err(v) = check_nesting_depth(document, self.config.max_nesting_depth) {
                violations.push(v);
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(violations = violations.len(), "document failed validation");
            Err(UpdateError::Invalid { violations })
        }
    }

    /// Validate a brand-new document. There is no prior shape to protect.
    pub fn check_create(&self, document: Document) -> Result<Document, UpdateError> {
        self.validate(&document)?;
        Ok(document)
    }

    /// Merge a partial update over `existing` and gate the result.
    ///
    /// `existing` must be the most recently committed snapshot; the gate does
    /// not detect stale baselines.
    pub fn check_update(
        &self,
        existing: &Document,
        update: DocumentUpdate,
        tier: Tier,
    ) -> Result<Document, UpdateError> {
        let touches_structure = update.touches_structure();
        let proposed = merge(existing, update);
        self.gate(existing, proposed, touches_structure, tier)
    }

    /// Gate a full replacement snapshot.
    pub fn check_replace(
        &self,
        existing: &Document,
        proposed: Document,
        tier: Tier,
    ) -> Result<Document, UpdateError> {
        self.gate(existing, proposed, true, tier)
    }

    fn gate(
        &self,
        existing: &Document,
        proposed: Document,
        touches_structure: bool,
        tier: Tier,
    ) -> Result<Document, UpdateError> {
        self.validate(&proposed)?;

        if is_structural_edit_allowed(tier) {
            tracing::debug!(%tier, "structural edits permitted, skipping diff");
            return Ok(proposed);
        }
        if !touches_structure {
            return Ok(proposed);
        }

        let violations = diff_with_mode(existing, &proposed, self.config.diff_mode);
        if violations.is_empty() {
            return Ok(proposed);
        }

        tracing::warn!(
            %tier,
            sections = proposed.sections.len(),
            blocks = proposed.block_count(),
            violations = violations.len(),
            "rejecting structural edit"
        );
        Err(UpdateError::StructuralEditDenied { tier, violations })
    }
}
