use std::borrow::Cow;

use pagetree_schema::BlockKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `_type` every section must carry.
pub const SECTION_TYPE: &str = "section";

/// A page or post content tree: an ordered list of sections.
///
/// Fields other than `sections` (title, slug, seo, ...) belong to the
/// content store and are carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One vertical region of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "_key")]
    pub key: String,
    /// Must be `"section"`; absence is reported by the grammar walk.
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub section_type: Option<String>,
    /// Presentation settings. Opaque; passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Value>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A content or container unit.
///
/// `_type` and `data` are kept as raw wire values so that an unknown tag or a
/// non-object payload surfaces as a grammar violation instead of a
/// deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub block_type: String,
    #[serde(default = "empty_data")]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
}

fn empty_data() -> Value {
    Value::Object(Map::new())
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            fields: Map::new(),
        }
    }

    /// Total number of blocks at every depth.
    pub fn block_count(&self) -> usize {
        fn count(blocks: &[Block]) -> usize {
            blocks.iter().map(|b| 1 + count(b.children())).sum()
        }
        self.sections.iter().map(|s| count(&s.blocks)).sum()
    }
}

impl Section {
    pub fn new(key: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            key: key.into(),
            section_type: Some(SECTION_TYPE.to_string()),
            background: None,
            spacing: None,
            width: None,
            align: None,
            blocks,
        }
    }
}

impl Block {
    /// A leaf block with the given payload.
    pub fn new(key: impl Into<String>, kind: BlockKind, data: Map<String, Value>) -> Self {
        Self {
            key: key.into(),
            block_type: kind.tag().to_string(),
            data: Value::Object(data),
            blocks: None,
        }
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.blocks = Some(children);
        self
    }

    /// The resolved variant, or `None` for an unknown tag.
    pub fn kind(&self) -> Option<BlockKind> {
        BlockKind::from_tag(&self.block_type)
    }

    /// The payload as an object. `null` reads as empty; any other
    /// non-object yields `None`.
    pub fn data_object(&self) -> Option<Cow<'_, Map<String, Value>>> {
        match &self.data {
            Value::Object(map) => Some(Cow::Borrowed(map)),
            Value::Null => Some(Cow::Owned(Map::new())),
            _ => None,
        }
    }

    /// Child blocks; an absent list reads as empty.
    pub fn children(&self) -> &[Block] {
        self.blocks.as_deref().unwrap_or_default()
    }

    pub fn has_children_list(&self) -> bool {
        self.blocks.is_some()
    }
}
