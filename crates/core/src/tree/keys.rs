use std::collections::{HashMap, HashSet};

use crate::document::{Block, Document};
use crate::violation::Violation;

/// Every section and block key, pre-order, in document order.
pub fn collect_keys(document: &Document) -> Vec<&str> {
    fn walk<'a>(blocks: &'a [Block], keys: &mut Vec<&'a str>) {
        for block in blocks {
            keys.push(&block.key);
            walk(block.children(), keys);
        }
    }

    let mut keys = Vec::with_capacity(document.sections.len() + document.block_count());
    for section in &document.sections {
        keys.push(section.key.as_str());
        walk(&section.blocks, &mut keys);
    }
    keys
}

/// Fail if any key occurs more than once anywhere in the document.
///
/// Keys are unique across the whole tree, not just among siblings. Every
/// duplicated key is listed once, in order of first occurrence.
pub fn check_unique_keys(document: &Document) -> Result<(), Violation> {
    let keys = collect_keys(document);

    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(keys.len());
    for &key in &keys {
        *counts.entry(key).or_default() += 1;
    }
    if counts.len() == keys.len() {
        return Ok(());
    }

    let mut seen = HashSet::new();
    let duplicates: Vec<String> = keys
        .into_iter()
        .filter(|key| counts[key] > 1 && seen.insert(*key))
        .map(str::to_string)
        .collect();

    tracing::debug!(duplicates = duplicates.len(), "duplicate keys in document");
    Err(Violation::DuplicateKey { keys: duplicates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    fn text(key: &str) -> serde_json::Value {
        json!({"_key": key, "_type": "text-block", "data": {"text": key}})
    }

    #[test]
    fn collects_pre_order() {
        let d = doc(json!({"sections": [
            {"_key": "s1", "_type": "section", "blocks": [
                {"_key": "g1", "_type": "grid-block", "data": {"columns": 2}, "blocks": [text("a"), text("b")]},
                text("c")
            ]},
            {"_key": "s2", "_type": "section", "blocks": [text("d")]}
        ]}));
        assert_eq!(collect_keys(&d), vec!["s1", "g1", "a", "b", "c", "s2", "d"]);
        assert!(check_unique_keys(&d).is_ok());
    }

    #[test]
    fn duplicate_across_sections_and_depths() {
        let d = doc(json!({"sections": [
            {"_key": "s1", "_type": "section", "blocks": [
                {"_key": "g1", "_type": "grid-block", "data": {"columns": 1}, "blocks": [text("dup")]}
            ]},
            {"_key": "s2", "_type": "section", "blocks": [text("dup")]}
        ]}));
        assert_eq!(
            check_unique_keys(&d),
            Err(Violation::DuplicateKey {
                keys: vec!["dup".into()],
            })
        );
    }

    #[test]
    fn every_duplicate_is_reported_once() {
        let d = doc(json!({"sections": [
            {"_key": "x", "_type": "section", "blocks": [text("y"), text("x"), text("y"), text("y")]}
        ]}));
        assert_eq!(
            check_unique_keys(&d),
            Err(Violation::DuplicateKey {
                keys: vec!["x".into(), "y".into()],
            })
        );
    }

    #[test]
    fn empty_document_has_no_keys() {
        let d = Document::default();
        assert!(collect_keys(&d).is_empty());
        assert!(check_unique_keys(&d).is_ok());
    }
}
