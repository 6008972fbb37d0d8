use super::{extract_for_section, has_structural_heading};
use crate::section::{SectionDefinition, SectionPlan};

fn plan() -> SectionPlan {
    SectionPlan::new(vec![
        SectionDefinition::new("vision", "Product Vision", "_TBD_"),
        SectionDefinition::new("users", "Target Users", "_TBD_"),
    ])
    .unwrap()
}

#[test]
fn test_heading_free_reply_is_taken_whole() {
    assert_eq!(
        extract_for_section("\n  We build a journaling app.  \n", &plan(), "vision"),
        "We build a journaling app."
    );
}

#[test]
fn test_deeper_headings_do_not_count_as_structure() {
    let reply = "### Goals\n\nShip it.";
    assert!(!has_structural_heading(reply));
    assert_eq!(extract_for_section(reply, &plan(), "vision"), reply);
}

#[test]
fn test_partial_document_is_narrowed_to_the_key() {
    let reply = "Here is the update.\n\n## Product Vision\n\nA calm place to write.\n\n## Target Users\n\nBusy parents.";
    assert_eq!(
        extract_for_section(reply, &plan(), "vision"),
        "A calm place to write."
    );
    assert_eq!(extract_for_section(reply, &plan(), "users"), "Busy parents.");
}

#[test]
fn test_full_document_restatement() {
    let reply = "# Journal\n\n## Product Vision\n\nVision text.\n\n## Target Users\n\n_TBD_\n";
    assert_eq!(extract_for_section(reply, &plan(), "vision"), "Vision text.");
    assert_eq!(
        extract_for_section(reply, &plan(), "users"),
        "",
        "a section the reply left empty is legitimately empty"
    );
}

#[test]
fn test_unrecognised_headings_fall_back_to_whole_reply() {
    let reply = "## Something Else\n\nUseful detail.";
    assert_eq!(extract_for_section(reply, &plan(), "vision"), reply);

    let titled = "# Product Vision\n\nAn h1 instead of an h2.";
    assert_eq!(extract_for_section(titled, &plan(), "vision"), titled);
}

#[test]
fn test_headings_inside_fences_are_ignored() {
    let reply = "```md\n## Product Vision\n```";
    assert!(!has_structural_heading(reply));
    assert_eq!(extract_for_section(reply, &plan(), "users"), reply);
}

#[test]
fn test_empty_reply() {
    assert_eq!(extract_for_section("", &plan(), "vision"), "");
    assert_eq!(extract_for_section("##", &plan(), "vision"), "##");
}
