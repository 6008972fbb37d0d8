//! Blank-line-delimited blocks, the unit of deduplication.
//!
//! Merging at paragraph granularity keeps tables, lists and code samples intact while still
//! answering "is this already in the section?".

use crate::formats::markdown::fenced_lines;
use crate::normalize::{collapse_whitespace, normalize_newlines};

#[must_use]
/// Splits text into trimmed, non-empty blocks separated by one or more blank lines.
///
/// Blank lines inside a fenced code block belong to the block rather than separating it.
pub fn split_blocks(text: &str) -> Vec<String> {
    let text = normalize_newlines(text);
    let fenced = fenced_lines(&text);

    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let in_fence = fenced.get(index).copied().unwrap_or(false);
        if line.is_empty() && !in_fence {
            push_block(&mut blocks, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_block(&mut blocks, &current);

    blocks
}

fn push_block(blocks: &mut Vec<String>, lines: &[&str]) {
    let block = lines.join("\n");
    let trimmed = block.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
}

#[must_use]
/// Deduplication key for a block: lower-cased with whitespace collapsed.
pub fn normalize_block(block: &str) -> String {
    collapse_whitespace(&block.to_lowercase())
}

#[must_use]
/// Joins blocks back into section text with a single blank line between each.
pub fn join_blocks<S: AsRef<str>>(blocks: &[S]) -> String {
    blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
#[path = "tests/blocks.rs"]
mod tests;
