//! Combining a section's existing body with newly contributed text.
//!
//! Rules are tried cheapest and most certain first:
//!
//! ```text
//! strip echoed heading -> strip placeholder blocks
//!   -> either side empty?          take the other
//!   -> same after normalisation?   keep existing
//!   -> new contains existing?      take new (restated and expanded)
//!   -> existing contains new?      keep existing
//!   -> otherwise                   existing blocks + unseen new blocks
//! ```
//!
//! The containment checks catch a model that resends the whole section with light edits; without
//! them every paragraph of the resend would look new and be duplicated.

use crate::blocks::{join_blocks, normalize_block, split_blocks};
use crate::normalize::{normalize_heading, normalize_newlines, normalize_text};
use crate::section::SectionDefinition;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The rule that decided a merge, reported for logging and tests.
pub enum MergeRule {
    /// Nothing new after cleaning; existing content kept.
    NothingNew,
    /// Section was empty; new content taken.
    FirstContent,
    /// Both sides normalise to the same text.
    Unchanged,
    /// New content contains the existing content.
    Superset,
    /// Existing content already contains the new content.
    Subset,
    /// Blocks of both sides combined without duplicates.
    BlockUnion,
}

#[derive(Clone, Copy, Debug)]
/// Merges content into one section, knowing its heading and placeholder.
pub struct SectionMerger<'a> {
    placeholder: &'a str,
    heading: Option<&'a str>,
}

impl<'a> SectionMerger<'a> {
    #[must_use]
    /// A merger that only knows the placeholder, so echoed headings are left alone.
    pub fn new(placeholder: &'a str) -> Self {
        Self {
            placeholder,
            heading: None,
        }
    }

    #[must_use]
    /// A merger for a planned section, stripping echoes of its heading as well.
    pub fn for_section(definition: &'a SectionDefinition) -> Self {
        Self {
            placeholder: &definition.placeholder,
            heading: Some(&definition.heading),
        }
    }

    #[must_use]
    /// Merges `addition` into `existing`, returning the new section body.
    pub fn merge(&self, existing: &str, addition: &str) -> String {
        self.merge_with_rule(existing, addition).0
    }

    #[must_use]
    /// Like [`SectionMerger::merge`], also reporting which rule produced the result.
    pub fn merge_with_rule(&self, existing: &str, addition: &str) -> (String, MergeRule) {
        let addition = normalize_newlines(addition);
        let addition = match self.heading {
            Some(heading) => strip_echoed_heading(&addition, heading),
            None => addition.trim(),
        };

        let existing = self.strip_placeholder(existing);
        let addition = self.strip_placeholder(addition);

        let (merged, rule) = if addition.is_empty() {
            (existing, MergeRule::NothingNew)
        } else if existing.is_empty() {
            (addition, MergeRule::FirstContent)
        } else {
            let existing_norm = normalize_text(&existing);
            let addition_norm = normalize_text(&addition);

            if existing_norm == addition_norm {
                (existing, MergeRule::Unchanged)
            } else if addition_norm.contains(&existing_norm) {
                (addition, MergeRule::Superset)
            } else if existing_norm.contains(&addition_norm) {
                (existing, MergeRule::Subset)
            } else {
                (union_blocks(&existing, &addition), MergeRule::BlockUnion)
            }
        };

        tracing::debug!(rule = ?rule, bytes = merged.len(), "merged section content");
        (merged, rule)
    }

    /// Drops every block that is only the placeholder and rejoins the rest.
    fn strip_placeholder(&self, text: &str) -> String {
        let placeholder = normalize_text(self.placeholder);
        let blocks = split_blocks(text);
        if placeholder.is_empty() {
            return join_blocks(&blocks);
        }
        let kept: Vec<String> = blocks
            .into_iter()
            .filter(|block| normalize_text(block) != placeholder)
            .collect();
        join_blocks(&kept)
    }
}

#[must_use]
/// Merges `addition` into `existing` for a section with the given placeholder.
pub fn merge(existing: &str, addition: &str, placeholder: &str) -> String {
    SectionMerger::new(placeholder).merge(existing, addition)
}

/// Removes a first non-blank line that repeats the section heading as a heading.
///
/// Only an ATX heading or a line wholly wrapped in emphasis counts; prose that happens to match
/// the heading text is kept.
fn strip_echoed_heading<'t>(text: &'t str, heading: &str) -> &'t str {
    let wanted = normalize_heading(heading);
    let text = text.trim();
    if wanted.is_empty() {
        return text;
    }
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    if is_heading_like(first) && normalize_heading(first) == wanted {
        rest.trim()
    } else {
        text
    }
}

fn is_heading_like(line: &str) -> bool {
    let line = line.trim();
    if line.starts_with('#') {
        return true;
    }
    ['*', '_'].iter().any(|&marker| {
        line.len() > 2 && line.starts_with(marker) && line.ends_with(marker)
    })
}

/// Existing blocks in order, then new blocks whose key is not already present.
fn union_blocks(existing: &str, addition: &str) -> String {
    let mut blocks = split_blocks(existing);
    let mut seen: HashSet<String> = blocks.iter().map(|b| normalize_block(b)).collect();

    for block in split_blocks(addition) {
        if seen.insert(normalize_block(&block)) {
            blocks.push(block);
        }
    }

    join_blocks(&blocks)
}

#[cfg(test)]
#[path = "tests/merge.rs"]
mod tests;
