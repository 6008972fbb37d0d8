//! A single owner for one evolving document.
//!
//! Each merge needs the current document as input, so merges against a stale copy would lose
//! edits. A `Session` holds the only copy and takes `&mut self` to change it, which serialises
//! every event applied to that document.

use crate::edit_plan::EditPlan;
use crate::progress::{next_pending_section, section_statuses, SectionStatus};
use crate::reducer::{reduce, DocumentEvent};
use crate::section::{SectionDefinition, SectionPlan};

/// Current document plus the plan it follows and the events applied so far.
pub struct Session {
    plan: SectionPlan,
    document: String,
    history: Vec<DocumentEvent>,
}

impl Session {
    #[must_use]
    /// Starts a session on an existing document.
    pub fn new(plan: SectionPlan, document: impl Into<String>) -> Self {
        Self {
            plan,
            document: document.into(),
            history: Vec::new(),
        }
    }

    #[must_use]
    /// Starts a session on a fresh template.
    pub fn from_template(plan: SectionPlan, title: &str) -> Self {
        let mut session = Self::new(plan, String::new());
        session.apply(DocumentEvent::Initialize {
            title: title.to_string(),
        });
        session
    }

    /// Applies an event and returns the resulting document.
    pub fn apply(&mut self, event: DocumentEvent) -> &str {
        let next = reduce(&self.document, &self.plan, &event);
        if next != self.document {
            tracing::debug!(revision = self.history.len() + 1, "document updated");
        }
        self.document = next;
        self.history.push(event);
        &self.document
    }

    /// Merges a chat reply into a section; shorthand for an `AppendSection` event.
    pub fn append(&mut self, key: &str, content: &str) -> &str {
        self.apply(DocumentEvent::AppendSection {
            key: key.to_string(),
            content: content.to_string(),
        })
    }

    #[must_use]
    /// The current document.
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    /// The section plan.
    pub fn plan(&self) -> &SectionPlan {
        &self.plan
    }

    #[must_use]
    /// Number of events applied in this session.
    pub fn revision(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    /// Status of each planned section.
    pub fn statuses(&self) -> Vec<SectionStatus> {
        section_statuses(&self.document, &self.plan)
    }

    #[must_use]
    /// The section the conversation should cover next.
    pub fn next_pending(&self) -> Option<&SectionDefinition> {
        next_pending_section(&self.document, &self.plan)
    }

    #[must_use]
    /// Events applied so far, as a replayable edit plan.
    pub fn edit_plan(&self) -> EditPlan {
        EditPlan {
            events: self.history.clone(),
        }
    }

    #[must_use]
    /// Ends the session, handing back the document.
    pub fn into_document(self) -> String {
        self.document
    }
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod tests;
