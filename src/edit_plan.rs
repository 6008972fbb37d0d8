//! The edit plan replays a recorded sequence of document events.
//!
//! A session's chat turns and manual edits can be saved as JSON and applied again later, to the
//! same document or to a fresh one, with the same result each time.

use crate::error::Result;
use crate::reducer::{reduce, DocumentEvent};
use crate::section::SectionPlan;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable sequence of document events applied in order.
pub struct EditPlan {
    /// Events to apply, oldest first.
    pub events: Vec<DocumentEvent>,
}

impl EditPlan {
    /// Loads an edit plan from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid edit plan.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes the edit plan as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    #[must_use]
    /// Folds every event over `document` and returns the final document.
    pub fn apply(&self, document: &str, plan: &SectionPlan) -> String {
        self.events
            .iter()
            .fold(document.to_string(), |current, event| {
                reduce(&current, plan, event)
            })
    }

    /// Applies the plan to a document file in place and returns the new content.
    ///
    /// A missing file is treated as an empty document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn apply_to_file(&self, path: &Path, plan: &SectionPlan) -> Result<String> {
        let current = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let updated = self.apply(&current, plan);
        if updated != current {
            fs::write(path, &updated)?;
        }
        tracing::debug!(
            path = %path.display(),
            events = self.events.len(),
            changed = updated != current,
            "applied edit plan"
        );
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
