//! The document as a pure reducer: `(document, event) -> document`.
//!
//! Every event parses the current markdown, changes the section map, and builds a new canonical
//! string. Nothing is held between calls, so the same inputs always give the same document and
//! callers own the loop that feeds events in order.

use crate::builder::{build, template};
use crate::document::{parse, section_heading, title_heading};
use crate::extract::extract_for_section;
use crate::formats::markdown::{close_open_fence, fenced_lines};
use crate::merge::SectionMerger;
use crate::normalize::normalize_newlines;
use crate::section::SectionPlan;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
/// A change to apply to the document.
pub enum DocumentEvent {
    /// Start over from the plan's template.
    Initialize {
        /// Title of the new document.
        title: String,
    },
    /// Merge a chat reply into a section.
    AppendSection {
        /// Target section key.
        key: String,
        /// Raw reply text, possibly a partial or full document.
        content: String,
    },
    /// Overwrite a section with user-edited text.
    ReplaceSection {
        /// Target section key.
        key: String,
        /// New section body.
        content: String,
    },
    /// Reset a section to its placeholder.
    ClearSection {
        /// Target section key.
        key: String,
    },
    /// Change the document title.
    SetTitle {
        /// New title.
        title: String,
    },
    /// Rewrite the document in canonical form.
    Canonicalize,
}

impl DocumentEvent {
    #[must_use]
    /// Section key the event targets, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::AppendSection { key, .. }
            | Self::ReplaceSection { key, .. }
            | Self::ClearSection { key } => Some(key.as_str()),
            Self::Initialize { .. } | Self::SetTitle { .. } | Self::Canonicalize => None,
        }
    }
}

#[must_use]
/// Applies one event to `document` and returns the next document.
///
/// Events that name a key outside the plan leave the document untouched.
pub fn reduce(document: &str, plan: &SectionPlan, event: &DocumentEvent) -> String {
    if let Some(key) = event.key() {
        if plan.get(key).is_none() {
            tracing::warn!(key, "ignoring event for a section that is not in the plan");
            return document.to_string();
        }
    }

    match event {
        DocumentEvent::Initialize { title } => template(plan, title),
        DocumentEvent::AppendSection { key, content } => {
            append_section_content(document, plan, key, content)
        }
        DocumentEvent::ReplaceSection { key, content } => {
            let mut parsed = parse(document, plan);
            parsed.set_section(key, &contain_structure(content));
            build(&parsed, plan)
        }
        DocumentEvent::ClearSection { key } => {
            let mut parsed = parse(document, plan);
            parsed.set_section(key, "");
            build(&parsed, plan)
        }
        DocumentEvent::SetTitle { title } => {
            let mut parsed = parse(document, plan);
            if !title.trim().is_empty() {
                parsed.title = title.trim().to_string();
            }
            build(&parsed, plan)
        }
        DocumentEvent::Canonicalize => build(&parse(document, plan), plan),
    }
}

#[must_use]
/// Merges a chat reply into the section `key` and returns the rebuilt document.
///
/// The reply is narrowed to the section, stray top-level headings in it are demoted so they
/// cannot split the document, and the result is merged with what the section already holds.
/// Unknown keys return the document unchanged.
pub fn append_section_content(
    document: &str,
    plan: &SectionPlan,
    key: &str,
    addition: &str,
) -> String {
    let Some(definition) = plan.get(key) else {
        tracing::warn!(key, "cannot append to a section that is not in the plan");
        return document.to_string();
    };

    let mut parsed = parse(document, plan);
    let extracted = contain_structure(&extract_for_section(addition, plan, key));
    let existing = parsed.section(key).unwrap_or_default();

    let (merged, rule) =
        SectionMerger::for_section(definition).merge_with_rule(existing, &extracted);
    tracing::debug!(key, rule = ?rule, "appended to section");

    parsed.set_section(key, &merged);
    build(&parsed, plan)
}

#[must_use]
/// Makes section text safe to embed under a `##` heading.
///
/// `#` and `##` headings outside code become `###`, and an unterminated code fence is closed.
pub fn contain_structure(text: &str) -> String {
    let text = normalize_newlines(text);
    let fenced = fenced_lines(&text);
    let mut lines: Vec<String> = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let in_fence = fenced.get(index).copied().unwrap_or(false);
        if !in_fence {
            if let Some(heading) = title_heading(line).or_else(|| section_heading(line)) {
                lines.push(format!("### {heading}"));
                continue;
            }
        }
        lines.push(line.to_string());
    }

    close_open_fence(lines.join("\n").trim())
}

#[cfg(test)]
#[path = "tests/reducer.rs"]
mod tests;
