use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The legal shape of one field inside a block's `data` payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Primitive or enum-like constraint on a payload field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// A string. `non_empty` rejects strings that are blank after trimming.
    Text { non_empty: bool },
    /// A whole number, optionally bounded (inclusive).
    Integer { min: Option<i64>, max: Option<i64> },
    /// Any JSON number.
    Number,
    Boolean,
    /// A string drawn from a fixed set.
    Choice(&'static [&'static str]),
    /// An array of opaque items.
    List { min_items: usize },
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    /// Check a single payload value against this spec.
    ///
    /// `null` is treated the same as an absent field.
    pub fn check(&self, value: Option<&Value>) -> Result<(), FieldIssue> {
        let value = match value {
            None | Some(Value::Null) => {
                return if self.required {
                    Err(FieldIssue::Missing)
                } else {
                    Ok(())
                };
            }
            Some(v) => v,
        };

        match self.kind {
            FieldKind::Text { non_empty } => {
                let s = value.as_str().ok_or_else(|| wrong_type("string", value))?;
                if non_empty && s.trim().is_empty() {
                    return Err(FieldIssue::Empty);
                }
                Ok(())
            }
            FieldKind::Integer { min, max } => {
                let n = match (value.as_i64(), value.as_u64()) {
                    (Some(n), _) => n,
                    // Past i64::MAX: above any upper bound, below none.
                    (None, Some(_)) if max.is_some() => {
                        return Err(FieldIssue::OutOfRange { min, max })
                    }
                    (None, Some(_)) => return Ok(()),
                    (None, None) => return Err(wrong_type("integer", value)),
                };
                let below = min.is_some_and(|min| n < min);
                let above = max.is_some_and(|max| n > max);
                if below || above {
                    return Err(FieldIssue::OutOfRange { min, max });
                }
                Ok(())
            }
            FieldKind::Number => {
                if value.is_number() {
                    Ok(())
                } else {
                    Err(wrong_type("number", value))
                }
            }
            FieldKind::Boolean => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    Err(wrong_type("boolean", value))
                }
            }
            FieldKind::Choice(allowed) => {
                let s = value.as_str().ok_or_else(|| wrong_type("string", value))?;
                if allowed.contains(&s) {
                    Ok(())
                } else {
                    Err(FieldIssue::NotAllowed {
                        value: s.to_string(),
                        allowed: allowed.iter().map(|a| a.to_string()).collect(),
                    })
                }
            }
            FieldKind::List { min_items } => {
                let items = value.as_array().ok_or_else(|| wrong_type("array", value))?;
                if items.len() < min_items {
                    return Err(FieldIssue::TooFewItems {
                        min: min_items,
                        found: items.len(),
                    });
                }
                Ok(())
            }
        }
    }
}

fn wrong_type(expected: &str, found: &Value) -> FieldIssue {
    FieldIssue::WrongType {
        expected: expected.to_string(),
        found: json_type_name(found).to_string(),
    }
}

/// Name of a JSON value's primitive type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Why a field (or the block as a whole) does not conform to its variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldIssue {
    #[error("required field is missing")]
    Missing,

    #[error("value cannot be empty")]
    Empty,

    #[error("expected {expected}, found {found}")]
    WrongType { expected: String, found: String },

    #[error("`{value}` is not one of: {}", join_allowed(.allowed))]
    NotAllowed { value: String, allowed: Vec<String> },

    #[error("value out of range ({})", range_text(.min, .max))]
    OutOfRange { min: Option<i64>, max: Option<i64> },

    #[error("expected at least {min} items, found {found}")]
    TooFewItems { min: usize, found: usize },

    #[error("unknown block type")]
    UnknownTag,

    #[error("content blocks cannot have child blocks")]
    ChildrenNotAllowed,

    #[error("expected {expected} child blocks, found {found}")]
    ArityMismatch { expected: usize, found: usize },
}

fn join_allowed(allowed: &[String]) -> String {
    allowed.join(", ")
}

fn range_text(min: &Option<i64>, max: &Option<i64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("must be between {min} and {max}"),
        (Some(min), None) => format!("must be at least {min}"),
        (None, Some(max)) => format!("must be at most {max}"),
        (None, None) => "unbounded".to_string(),
    }
}

/// A single field-level grammar failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{field}: {issue}")]
pub struct FieldViolation {
    pub field: String,
    pub issue: FieldIssue,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, issue: FieldIssue) -> Self {
        Self {
            field: field.into(),
            issue,
        }
    }
}
