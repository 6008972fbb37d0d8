//! Section plans: the declarative outline a design document is expected to follow.
//!
//! A plan fixes which `##` sections exist, their order, and the placeholder shown until a
//! section has real content. Plan order doubles as the order in which the assistant asks about
//! sections.

use crate::error::PlanError;
use crate::normalize::normalize_heading;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One expected section of the document.
pub struct SectionDefinition {
    /// Stable identifier, never shown to the user.
    pub key: String,
    /// Literal `##` heading text used to render and to recognise the section.
    pub heading: String,
    /// Body shown while the section has no content; also the "not yet populated" sentinel.
    pub placeholder: String,
}

impl SectionDefinition {
    #[must_use]
    /// Convenience constructor.
    pub fn new(
        key: impl Into<String>,
        heading: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            heading: heading.into(),
            placeholder: placeholder.into(),
        }
    }

    #[must_use]
    /// Comparison key of the heading, see [`normalize_heading`].
    pub fn heading_key(&self) -> String {
        normalize_heading(&self.heading)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "Vec<SectionDefinition>", into = "Vec<SectionDefinition>")]
/// Ordered list of section definitions with unique, non-empty keys and headings.
pub struct SectionPlan {
    sections: Vec<SectionDefinition>,
}

impl SectionPlan {
    /// Validates and wraps an ordered list of definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is blank or appears more than once, or if a heading normalises
    /// to nothing or to the same text as an earlier heading.
    pub fn new(sections: Vec<SectionDefinition>) -> Result<Self, PlanError> {
        let mut seen = HashSet::new();
        let mut headings: HashMap<String, &str> = HashMap::new();
        for section in &sections {
            if section.key.trim().is_empty() {
                return Err(PlanError::EmptyKey(section.heading.clone()));
            }
            if !seen.insert(section.key.as_str()) {
                return Err(PlanError::DuplicateKey(section.key.clone()));
            }
            let heading_key = section.heading_key();
            if heading_key.is_empty() {
                return Err(PlanError::EmptyHeading(section.key.clone()));
            }
            if let Some(earlier) = headings.insert(heading_key, &section.heading) {
                return Err(PlanError::DuplicateHeading(
                    earlier.to_string(),
                    section.heading.clone(),
                ));
            }
        }
        Ok(Self { sections })
    }

    #[must_use]
    /// Definitions in document order.
    pub fn sections(&self) -> &[SectionDefinition] {
        &self.sections
    }

    #[must_use]
    /// Looks up a definition by key.
    pub fn get(&self, key: &str) -> Option<&SectionDefinition> {
        self.sections.iter().find(|s| s.key == key)
    }

    #[must_use]
    /// Position of a key in plan order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.key == key)
    }

    #[must_use]
    /// Finds the planned section whose heading matches a raw heading line.
    pub fn match_heading(&self, heading: &str) -> Option<usize> {
        let wanted = normalize_heading(heading);
        if wanted.is_empty() {
            return None;
        }
        self.sections.iter().position(|s| s.heading_key() == wanted)
    }

    #[must_use]
    /// Number of planned sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Whether the plan has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl TryFrom<Vec<SectionDefinition>> for SectionPlan {
    type Error = PlanError;

    fn try_from(sections: Vec<SectionDefinition>) -> Result<Self, Self::Error> {
        Self::new(sections)
    }
}

impl From<SectionPlan> for Vec<SectionDefinition> {
    fn from(plan: SectionPlan) -> Self {
        plan.sections
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
