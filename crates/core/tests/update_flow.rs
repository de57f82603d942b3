use pagetree_core::{
    check_nesting_depth, check_unique_keys, is_structural_edit_allowed, structural_diff,
    tree::DEFAULT_MAX_DEPTH, Document, DocumentUpdate, Tier, UpdateError, UpdateGate, Violation,
};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn doc(value: Value) -> Document {
    serde_json::from_value(value).unwrap()
}

fn update(value: Value) -> DocumentUpdate {
    serde_json::from_value(value).unwrap()
}

fn heading(key: &str, text: &str) -> Value {
    json!({"_key": key, "_type": "heading-block", "data": {"text": text, "level": "h1"}})
}

fn landing_page() -> Document {
    doc(json!({
        "title": "Landing",
        "sections": [
            {"_key": "hero", "_type": "section", "background": "dark", "blocks": [
                heading("hero-title", "Build faster"),
                {"_key": "hero-cols", "_type": "columns-block", "data": {"count": 2}, "blocks": [
                    {"_key": "hero-copy", "_type": "text-block", "data": {"text": "Ship pages in minutes."}},
                    {"_key": "hero-img", "_type": "image-block", "data": {"src": "/img/hero.png", "alt": "Hero"}}
                ]}
            ]},
            {"_key": "features", "_type": "section", "blocks": [
                {"_key": "feature-grid", "_type": "grid-block", "data": {"columns": 3, "gap": "md"}, "blocks": [
                    {"_key": "f1", "_type": "card-block", "data": {"title": "Fast"}},
                    {"_key": "f2", "_type": "card-block", "data": {"title": "Safe"}},
                    {"_key": "f3", "_type": "stack-block", "data": {"gap": "sm"}, "blocks": [
                        {"_key": "f3-icon", "_type": "icon-block", "data": {"name": "bolt"}},
                        {"_key": "f3-cta", "_type": "button-block", "data": {"label": "Try it", "href": "/signup"}}
                    ]}
                ]}
            ]},
            {"_key": "footer", "_type": "section", "blocks": []}
        ]
    }))
}

#[test]
fn hello_world_scenario() {
    init_tracing();
    let gate = UpdateGate::default();
    let existing = doc(json!({"sections": [
        {"_key": "s1", "_type": "section", "blocks": [heading("h1", "Hello")]}
    ]}));

    let edit = update(json!({"sections": [
        {"_key": "s1", "_type": "section", "blocks": [heading("h1", "Hello World")]}
    ]}));
    let accepted = gate
        .check_update(&existing, edit, Tier::ContentEditor)
        .unwrap();
    assert_eq!(accepted.sections[0].blocks[0].data["text"], "Hello World");

    let grow = json!({"sections": [
        {"_key": "s1", "_type": "section", "blocks": [
            heading("h1", "Hello World"),
            {"_key": "b2", "_type": "text-block", "data": {"text": "More"}}
        ]}
    ]});

    let err = gate
        .check_update(&existing, update(grow.clone()), Tier::ContentEditor)
        .unwrap_err();
    match err {
        UpdateError::StructuralEditDenied { tier, violations } => {
            assert_eq!(tier, Tier::ContentEditor);
            assert!(matches!(
                &violations[..],
                [Violation::BlockCountChanged { section_key, parent_key: None, .. }] if section_key == "s1"
            ));
        }
        other => panic!("expected structural denial, got {other:?}"),
    }

    let accepted = gate
        .check_update(&existing, update(grow), Tier::Builder)
        .unwrap();
    assert_eq!(accepted.sections[0].blocks.len(), 2);
}

#[test]
fn diff_of_a_document_against_itself_is_empty() {
    let page = landing_page();
    assert_eq!(structural_diff(&page, &page.clone()), Ok(()));

    let roundtrip: Document = serde_json::from_str(&serde_json::to_string(&page).unwrap()).unwrap();
    assert_eq!(structural_diff(&page, &roundtrip), Ok(()));
}

#[test]
fn content_edits_pass_for_both_tiers() {
    let gate = UpdateGate::default();
    let existing = landing_page();

    let mut proposed = landing_page();
    let stack = &mut proposed.sections[1].blocks[0].blocks.as_mut().unwrap()[2];
    stack.blocks.as_mut().unwrap()[1].data["label"] = json!("Start free trial");
    proposed.sections[0].background = Some(json!("light"));

    assert!(!is_structural_edit_allowed(Tier::ContentEditor));
    for tier in [Tier::ContentEditor, Tier::Builder] {
        let accepted = gate
            .check_replace(&existing, proposed.clone(), tier)
            .unwrap();
        assert_eq!(accepted, proposed);
    }
}

#[test]
fn nested_reorder_blocked_for_content_editor() {
    let gate = UpdateGate::default();
    let existing = landing_page();

    let mut proposed = landing_page();
    proposed.sections[1].blocks[0].blocks.as_mut().unwrap().swap(0, 1);

    let err = gate
        .check_replace(&existing, proposed.clone(), Tier::ContentEditor)
        .unwrap_err();
    assert_eq!(
        err.violations(),
        &[Violation::BlockReordered {
            key: "f1".into(),
            found: "f2".into(),
        }]
    );
    assert!(err.violations()[0].is_fatal_for(Tier::ContentEditor));

    assert!(gate.check_replace(&existing, proposed, Tier::Builder).is_ok());
}

#[test]
fn duplicate_key_across_sections_fails_for_everyone() {
    let gate = UpdateGate::default();
    let existing = landing_page();

    let mut proposed = landing_page();
    proposed.sections[2].blocks.push(
        serde_json::from_value(json!({"_key": "f3-icon", "_type": "divider-block", "data": {}}))
            .unwrap(),
    );

    assert_eq!(
        check_unique_keys(&proposed),
        Err(Violation::DuplicateKey {
            keys: vec!["f3-icon".into()],
        })
    );

    let err = gate
        .check_replace(&existing, proposed, Tier::Builder)
        .unwrap_err();
    assert_eq!(err.code(), "invalidDocument");
}

#[test]
fn depth_limit_applies_to_builders() {
    let gate = UpdateGate::default();
    let existing = landing_page();

    // features → grid → stack → stack → icon is five levels.
    let mut proposed = landing_page();
    let stack = &mut proposed.sections[1].blocks[0].blocks.as_mut().unwrap()[2];
    let icon = stack.blocks.as_mut().unwrap().remove(0);
    stack.blocks.as_mut().unwrap().insert(
        0,
        serde_json::from_value(json!({"_key": "inner", "_type": "stack-block", "data": {}})).unwrap(),
    );
    stack.blocks.as_mut().unwrap()[0].blocks = Some(vec![icon]);

    assert_eq!(
        check_nesting_depth(&proposed, DEFAULT_MAX_DEPTH),
        Err(Violation::NestingDepthExceeded {
            observed: 5,
            max: 4,
        })
    );
    let err = gate
        .check_replace(&existing, proposed, Tier::Builder)
        .unwrap_err();
    assert!(matches!(
        err.violations(),
        [Violation::NestingDepthExceeded { observed: 5, .. }]
    ));
}

#[test]
fn columns_arity_is_enforced_on_write() {
    let gate = UpdateGate::default();
    let existing = landing_page();

    let mut proposed = landing_page();
    proposed.sections[0].blocks[1].data["count"] = json!(3);

    let err = gate
        .check_replace(&existing, proposed, Tier::ContentEditor)
        .unwrap_err();
    let body = err.to_body().to_json();
    assert_eq!(body["error"]["type"], "invalidDocument");
    assert_eq!(body["error"]["violations"][0]["type"], "grammarViolation");
    assert_eq!(body["error"]["violations"][0]["key"], "hero-cols");
    assert_eq!(body["error"]["violations"][0]["reason"]["kind"], "arityMismatch");
}

#[test]
fn metadata_only_update_never_diffs() {
    let gate = UpdateGate::default();
    let existing = landing_page();

    let accepted = gate
        .check_update(&existing, update(json!({"title": "Landing v2"})), Tier::ContentEditor)
        .unwrap();
    assert_eq!(accepted.fields["title"], "Landing v2");
    assert_eq!(accepted.sections, existing.sections);
}
