use super::Session;
use crate::edit_plan::EditPlan;
use crate::section::{SectionDefinition, SectionPlan};

fn plan() -> SectionPlan {
    SectionPlan::new(vec![
        SectionDefinition::new("vision", "Product Vision", "_TBD_"),
        SectionDefinition::new("users", "Target Users", "_TBD_"),
    ])
    .unwrap()
}

#[test]
fn test_session_walks_the_plan() {
    let mut session = Session::from_template(plan(), "Journal");
    assert_eq!(session.revision(), 1);
    assert_eq!(session.next_pending().map(|s| s.key.as_str()), Some("vision"));

    session.append("vision", "A calm place to write.");
    assert_eq!(session.next_pending().map(|s| s.key.as_str()), Some("users"));

    session.append("users", "Busy parents.");
    assert!(session.next_pending().is_none());
    assert!(session.statuses().iter().all(|s| s.populated));
    assert_eq!(session.revision(), 3);
}

#[test]
fn test_history_replays_to_the_same_document() {
    let mut session = Session::from_template(plan(), "Journal");
    session.append("vision", "A calm place to write.");
    session.append("vision", "A calm place to write.\n\nWorks offline.");

    let replayed = session.edit_plan().apply("", session.plan());
    assert_eq!(replayed, session.document());
    assert_eq!(session.edit_plan().events.len(), 3);
}

#[test]
fn test_session_on_existing_document() {
    let existing = "# Mine\n\n## Product Vision\n\nAlready here.\n";
    let mut session = Session::new(plan(), existing);
    let doc = session.append("vision", "Already here.").to_string();

    assert!(doc.contains("Already here."));
    assert_eq!(doc.matches("Already here.").count(), 1);
    assert_eq!(session.into_document(), doc);
    assert_eq!(EditPlan::default().events.len(), 0);
}
