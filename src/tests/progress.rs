use super::{next_pending_section, section_statuses};
use crate::builder::template;
use crate::reducer::append_section_content;
use crate::section::{SectionDefinition, SectionPlan};

fn plan() -> SectionPlan {
    SectionPlan::new(vec![
        SectionDefinition::new("vision", "Product Vision", "_TBD_"),
        SectionDefinition::new("users", "Target Users", "_TBD_"),
        SectionDefinition::new("roadmap", "Roadmap", "_TBD_"),
    ])
    .unwrap()
}

#[test]
fn test_fresh_template_is_all_pending() {
    let plan = plan();
    let doc = template(&plan, "App");

    let statuses = section_statuses(&doc, &plan);
    assert_eq!(statuses.len(), 3);
    assert!(statuses.iter().all(|s| !s.populated && s.blocks == 0));
    assert_eq!(next_pending_section(&doc, &plan).map(|s| s.key.as_str()), Some("vision"));
}

#[test]
fn test_next_pending_follows_plan_order() {
    let plan = plan();
    let doc = template(&plan, "App");
    let doc = append_section_content(&doc, &plan, "vision", "One.\n\nTwo.");
    let doc = append_section_content(&doc, &plan, "roadmap", "Q1: beta.");

    let statuses = section_statuses(&doc, &plan);
    assert!(statuses[0].populated);
    assert_eq!(statuses[0].blocks, 2);
    assert!(!statuses[1].populated);
    assert_eq!(next_pending_section(&doc, &plan).map(|s| s.key.as_str()), Some("users"));

    let doc = append_section_content(&doc, &plan, "users", "Writers.");
    assert!(next_pending_section(&doc, &plan).is_none());
}
