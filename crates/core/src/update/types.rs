use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::{Document, Section};

/// A partial replacement for a stored document.
///
/// Present fields overwrite the stored ones; absent fields are kept. A
/// `null` top-level field is stored as `null`, not removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DocumentUpdate {
    /// An update that replaces the whole section tree.
    pub fn with_sections(sections: Vec<Section>) -> Self {
        Self {
            sections: Some(sections),
            fields: Map::new(),
        }
    }

    /// Whether the update carries block/section content at all.
    pub fn touches_structure(&self) -> bool {
        self.sections.is_some()
    }
}

/// Build the proposed snapshot by applying `update` over `existing`.
///
/// `existing` is left untouched.
pub fn merge(existing: &Document, update: DocumentUpdate) -> Document {
    let mut fields = existing.fields.clone();
    fields.extend(update.fields);

    Document {
        sections: update
            .sections
            .unwrap_or_else(|| existing.sections.clone()),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored() -> Document {
        serde_json::from_value(json!({
            "title": "Home",
            "slug": "home",
            "sections": [{"_key": "s1", "_type": "section", "blocks": []}]
        }))
        .unwrap()
    }

    #[test]
    fn fields_only_update_keeps_sections() {
        let update: DocumentUpdate = serde_json::from_value(json!({"title": "Welcome"})).unwrap();
        assert!(!update.touches_structure());

        let existing = stored();
        let merged = merge(&existing, update);
        assert_eq!(merged.sections, existing.sections);
        assert_eq!(merged.fields["title"], json!("Welcome"));
        assert_eq!(merged.fields["slug"], json!("home"));
        assert_eq!(existing.fields["title"], json!("Home"));
    }

    #[test]
    fn sections_replace_wholesale() {
        let update: DocumentUpdate = serde_json::from_value(json!({"sections": []})).unwrap();
        assert!(update.touches_structure());
        let merged = merge(&stored(), update);
        assert!(merged.sections.is_empty());
        assert_eq!(merged.fields["title"], json!("Home"));
    }
}
