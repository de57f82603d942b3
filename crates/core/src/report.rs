use serde::{Deserialize, Serialize};

use crate::violation::Violation;

/// Machine-readable rejection body a transport layer can return as-is.
///
/// ```json
/// { "error": { "type": "structuralEditDenied", "message": "...", "violations": [...] } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    /// User-facing text for the first violation.
    pub message: String,
    pub violations: Vec<ViolationEntry>,
}

/// One violation plus its rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationEntry {
    #[serde(flatten)]
    pub violation: Violation,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error_type: impl Into<String>, violations: &[Violation]) -> Self {
        let message = violations
            .first()
            .map(Violation::user_message)
            .unwrap_or_else(|| "The document could not be validated".to_string());

        Self {
            error: ErrorDetail {
                error_type: error_type.into(),
                message,
                violations: violations
                    .iter()
                    .map(|v| ViolationEntry {
                        violation: v.clone(),
                        message: v.user_message(),
                    })
                    .collect(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|err| {
            tracing::error!("Failed to serialize error body: {err}");
            serde_json::json!({
                "error": { "type": self.error.error_type, "message": self.error.message }
            })
        })
    }
}
