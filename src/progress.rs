//! Which sections have real content, and which one the conversation should visit next.

use crate::blocks::split_blocks;
use crate::document::parse;
use crate::section::{SectionDefinition, SectionPlan};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// Population state of one planned section.
pub struct SectionStatus {
    /// Section key.
    pub key: String,
    /// Display heading.
    pub heading: String,
    /// Whether the section holds anything beyond its placeholder.
    pub populated: bool,
    /// Number of blocks in the section body.
    pub blocks: usize,
}

#[must_use]
/// Status of every planned section, in plan order.
pub fn section_statuses(document: &str, plan: &SectionPlan) -> Vec<SectionStatus> {
    let parsed = parse(document, plan);
    plan.sections()
        .iter()
        .map(|definition| {
            let body = parsed.section(&definition.key).unwrap_or_default();
            SectionStatus {
                key: definition.key.clone(),
                heading: definition.heading.clone(),
                populated: !body.is_empty(),
                blocks: split_blocks(body).len(),
            }
        })
        .collect()
}

#[must_use]
/// First planned section that still has no real content.
pub fn next_pending_section<'p>(
    document: &str,
    plan: &'p SectionPlan,
) -> Option<&'p SectionDefinition> {
    let parsed = parse(document, plan);
    plan.sections()
        .iter()
        .find(|definition| parsed.section(&definition.key).is_none_or(str::is_empty))
}

#[cfg(test)]
#[path = "tests/progress.rs"]
mod tests;
