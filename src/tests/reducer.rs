use super::{append_section_content, contain_structure, reduce, DocumentEvent};
use crate::builder::template;
use crate::document::parse;
use crate::section::{SectionDefinition, SectionPlan};

fn vision_plan() -> SectionPlan {
    SectionPlan::new(vec![SectionDefinition::new("vision", "Product Vision", "_TBD_")]).unwrap()
}

fn two_section_plan() -> SectionPlan {
    SectionPlan::new(vec![
        SectionDefinition::new("vision", "Product Vision", "_TBD_"),
        SectionDefinition::new("users", "Target Users", "_TBD_"),
    ])
    .unwrap()
}

#[test]
fn test_journaling_scenario() {
    let plan = vision_plan();
    let doc = "# X\n\n## Product Vision\n\n_TBD_\n";

    let first = append_section_content(doc, &plan, "vision", "We build a journaling app.");
    assert_eq!(
        parse(&first, &plan).section("vision"),
        Some("We build a journaling app.")
    );
    assert!(!first.contains("_TBD_"), "placeholder should be gone: {first:?}");

    let second = append_section_content(&first, &plan, "vision", "We build a journaling app.");
    assert_eq!(first, second, "re-applying the same addition must not change the document");
}

#[test]
fn test_append_restated_document_only_touches_target() {
    let plan = two_section_plan();
    let doc = template(&plan, "App");
    let doc = append_section_content(&doc, &plan, "users", "Writers.");

    let reply = "# App\n\n## Product Vision\n\nA calm journal.\n\n## Target Users\n\nSomeone else entirely.";
    let next = append_section_content(&doc, &plan, "vision", reply);
    let parsed = parse(&next, &plan);

    assert_eq!(parsed.section("vision"), Some("A calm journal."));
    assert_eq!(parsed.section("users"), Some("Writers."));
}

#[test]
fn test_append_accumulates_new_blocks() {
    let plan = vision_plan();
    let doc = template(&plan, "App");
    let doc = append_section_content(&doc, &plan, "vision", "Private by default.");
    let doc = append_section_content(&doc, &plan, "vision", "Works offline.");

    assert_eq!(
        parse(&doc, &plan).section("vision"),
        Some("Private by default.\n\nWorks offline.")
    );
}

#[test]
fn test_stray_headings_cannot_split_the_document() {
    let plan = two_section_plan();
    let doc = template(&plan, "App");
    let doc = append_section_content(&doc, &plan, "vision", "## Goals\n\nShip it.\n\n# Oops\n\nMore.");
    let parsed = parse(&doc, &plan);

    assert_eq!(parsed.title, "App");
    assert_eq!(
        parsed.section("vision"),
        Some("### Goals\n\nShip it.\n\n### Oops\n\nMore.")
    );
    assert_eq!(parsed.appendix, "");
}

#[test]
fn test_unknown_key_leaves_document_unchanged() {
    let plan = vision_plan();
    let doc = "not even canonical";
    assert_eq!(append_section_content(doc, &plan, "nope", "text"), doc);
    let event = DocumentEvent::ClearSection {
        key: "nope".to_string(),
    };
    assert_eq!(reduce(doc, &plan, &event), doc);
}

#[test]
fn test_replace_clear_and_title_events() {
    let plan = vision_plan();
    let doc = reduce(
        "",
        &plan,
        &DocumentEvent::Initialize {
            title: "Draft".to_string(),
        },
    );
    assert_eq!(doc, "# Draft\n\n## Product Vision\n\n_TBD_\n");

    let doc = reduce(
        &doc,
        &plan,
        &DocumentEvent::ReplaceSection {
            key: "vision".to_string(),
            content: "Hand edited.".to_string(),
        },
    );
    assert_eq!(parse(&doc, &plan).section("vision"), Some("Hand edited."));

    let doc = reduce(
        &doc,
        &plan,
        &DocumentEvent::SetTitle {
            title: "Final".to_string(),
        },
    );
    assert!(doc.starts_with("# Final\n"));

    let doc = reduce(
        &doc,
        &plan,
        &DocumentEvent::ClearSection {
            key: "vision".to_string(),
        },
    );
    assert_eq!(doc, "# Final\n\n## Product Vision\n\n_TBD_\n");
}

#[test]
fn test_canonicalize_event() {
    let plan = vision_plan();
    let messy = "## Product Vision\r\n\r\n\r\n\r\nIdea.";
    let doc = reduce(messy, &plan, &DocumentEvent::Canonicalize);
    assert_eq!(doc, "# Design Document\n\n## Product Vision\n\nIdea.\n");
}

#[test]
fn test_events_serialize_with_type_tag() {
    let event = DocumentEvent::AppendSection {
        key: "vision".to_string(),
        content: "x".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"type":"append_section","key":"vision","content":"x"}"#);

    let back: DocumentEvent = serde_json::from_str(r#"{"type":"canonicalize"}"#).unwrap();
    assert_eq!(back, DocumentEvent::Canonicalize);
}

#[test]
fn test_contain_structure() {
    assert_eq!(contain_structure("# A\n## B\n### C"), "### A\n### B\n### C");
    assert_eq!(
        contain_structure("```md\n## kept\n```"),
        "```md\n## kept\n```"
    );
    assert_eq!(
        contain_structure("Example:\n\n```rust\nfn main() {}"),
        "Example:\n\n```rust\nfn main() {}\n```"
    );
    assert_eq!(contain_structure("~~~~\nx\n~~~~"), "~~~~\nx\n~~~~");
}
