use crate::document::{Block, Document, Section};
use crate::violation::Violation;

/// section → container → container → content.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// The deepest level reached by any section, where a section is level 1 and
/// each nested block list adds one. An empty document has depth 0.
pub fn nesting_depth(document: &Document) -> usize {
    document.sections.iter().map(section_depth).max().unwrap_or(0)
}

fn section_depth(section: &Section) -> usize {
    list_depth(&section.blocks, 1)
}

/// Depth of a block list whose owner sits at `depth`. An empty list
/// contributes the owner's own depth.
fn list_depth(blocks: &[Block], depth: usize) -> usize {
    blocks
        .iter()
        .map(|block| block_depth(block, depth + 1))
        .max()
        .unwrap_or(depth)
}

fn block_depth(block: &Block, depth: usize) -> usize {
    list_depth(block.children(), depth)
}

pub fn check_nesting_depth(document: &Document, max_depth: usize) -> Result<(), Violation> {
    let observed = nesting_depth(document);
    if observed > max_depth {
        tracing::debug!(observed, max_depth, "nesting depth exceeded");
        return Err(Violation::NestingDepthExceeded {
            observed,
            max: max_depth,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn leaf() -> Value {
        json!({"_key": "leaf", "_type": "text-block", "data": {"text": "x"}})
    }

    fn wrap(levels: usize, inner: Value) -> Value {
        (0..levels).fold(inner, |child, i| {
            json!({"_key": format!("stack{i}"), "_type": "stack-block", "data": {}, "blocks": [child]})
        })
    }

    fn doc_with(block: Value) -> Document {
        serde_json::from_value(json!({"sections": [
            {"_key": "s1", "_type": "section", "blocks": [block]}
        ]}))
        .unwrap()
    }

    #[test]
    fn empty_section_is_depth_one() {
        let d: Document =
            serde_json::from_value(json!({"sections": [{"_key": "s1", "_type": "section", "blocks": []}]}))
                .unwrap();
        assert_eq!(nesting_depth(&d), 1);
        assert!(check_nesting_depth(&d, DEFAULT_MAX_DEPTH).is_ok());
        assert_eq!(nesting_depth(&Document::default()), 0);
    }

    #[test]
    fn empty_container_counts_as_a_level() {
        let d = doc_with(json!({"_key": "g", "_type": "grid-block", "data": {"columns": 2}, "blocks": []}));
        assert_eq!(nesting_depth(&d), 2);
    }

    #[test]
    fn depth_boundary() {
        let four = doc_with(wrap(2, leaf()));
        assert_eq!(nesting_depth(&four), 4);
        assert!(check_nesting_depth(&four, DEFAULT_MAX_DEPTH).is_ok());

        let five = doc_with(wrap(3, leaf()));
        assert_eq!(
            check_nesting_depth(&five, DEFAULT_MAX_DEPTH),
            Err(Violation::NestingDepthExceeded {
                observed: 5,
                max: DEFAULT_MAX_DEPTH,
            })
        );
    }

    #[test]
    fn deepest_branch_wins() {
        let d = doc_with(json!({
            "_key": "g", "_type": "grid-block", "data": {"columns": 2},
            "blocks": [leaf(), wrap(1, leaf())]
        }));
        assert_eq!(nesting_depth(&d), 4);
    }
}
