//! Narrowing a chat reply down to the material for one section.
//!
//! A reply may be bare prose meant for the active section, a partial document with several
//! `##` sections, or the whole document restated. Over-inclusion is the safe failure mode here:
//! the merger deduplicates whatever this module hands it, so anything ambiguous is passed through
//! whole rather than dropped.

use crate::document::{parse, section_heading, title_heading};
use crate::formats::markdown::fenced_lines;
use crate::normalize::normalize_newlines;
use crate::section::SectionPlan;

#[must_use]
/// Whether `text` contains a `#` or `##` heading outside fenced code.
pub fn has_structural_heading(text: &str) -> bool {
    let fenced = fenced_lines(text);
    text.split('\n').enumerate().any(|(index, line)| {
        !fenced.get(index).copied().unwrap_or(false)
            && (title_heading(line).is_some() || section_heading(line).is_some())
    })
}

#[must_use]
/// Returns the part of `raw` that belongs to the section `key`.
///
/// - Heading-free input is assumed to be scoped to `key` already and comes back trimmed.
/// - Input recognised as a (partial) document yields the body under `key`, which may be empty
///   when the reply covered other sections only.
/// - Input with headings of which none is planned falls back to the whole trimmed text.
pub fn extract_for_section(raw: &str, plan: &SectionPlan, key: &str) -> String {
    let text = normalize_newlines(raw);
    let trimmed = text.trim();

    if !has_structural_heading(trimmed) {
        tracing::debug!(key, "extract: no headings, using whole reply");
        return trimmed.to_string();
    }

    let fenced = fenced_lines(trimmed);
    let recognised = trimmed.split('\n').enumerate().any(|(index, line)| {
        !fenced.get(index).copied().unwrap_or(false)
            && section_heading(line).is_some_and(|h| plan.match_heading(h).is_some())
    });

    if !recognised {
        tracing::debug!(key, "extract: no planned headings recognised, using whole reply");
        return trimmed.to_string();
    }

    match parse(trimmed, plan).section(key) {
        Some(content) => {
            tracing::debug!(key, bytes = content.len(), "extract: section isolated");
            content.to_string()
        }
        None => {
            tracing::debug!(key, "extract: key not in plan, using whole reply");
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
