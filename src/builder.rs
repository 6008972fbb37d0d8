//! Serialising a parsed document back to canonical markdown.
//!
//! The output layout is fixed: title, preface, every planned section in plan order, appendix.
//! Building an already canonical document reproduces it byte for byte, which is what lets each
//! chat turn re-parse and re-build the whole document without drift.

use crate::document::{ParsedDocument, DEFAULT_TITLE};
use crate::formats::markdown::{close_open_fence, fenced_lines};
use crate::section::SectionPlan;

#[must_use]
/// Renders the canonical markdown for `parsed` under `plan`.
///
/// Empty sections fall back to their placeholder and a blank title to [`DEFAULT_TITLE`]. A code
/// fence left open in any region is closed there, so it cannot hide the headings after it. Runs
/// of blank lines outside fenced code are collapsed to one, and the result ends with exactly one
/// newline.
pub fn build(parsed: &ParsedDocument, plan: &SectionPlan) -> String {
    let title = parsed.title.trim();
    let title = if title.is_empty() { DEFAULT_TITLE } else { title };
    let mut out = format!("# {title}\n\n");

    let preface = parsed.preface.trim();
    if !preface.is_empty() {
        out.push_str(&close_open_fence(preface));
        out.push_str("\n\n");
    }

    for definition in plan.sections() {
        let content = parsed
            .section(&definition.key)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| definition.placeholder.trim());

        out.push_str("## ");
        out.push_str(definition.heading.trim());
        out.push_str("\n\n");
        out.push_str(&close_open_fence(content));
        out.push_str("\n\n");
    }

    let appendix = parsed.appendix.trim();
    if !appendix.is_empty() {
        out.push_str(&close_open_fence(appendix));
        out.push('\n');
    }

    collapse_blank_lines(&out)
}

#[must_use]
/// A document for `plan` with every section showing its placeholder.
pub fn template(plan: &SectionPlan, title: &str) -> String {
    build(&ParsedDocument::empty(title, plan), plan)
}

/// Keeps at most one blank line between content lines, leaving fenced code untouched.
fn collapse_blank_lines(text: &str) -> String {
    let fenced = fenced_lines(text);
    let mut kept: Vec<&str> = Vec::new();
    let mut previous_blank = false;

    for (index, line) in text.split('\n').enumerate() {
        let blank = line.is_empty() && !fenced.get(index).copied().unwrap_or(false);
        if blank && previous_blank {
            continue;
        }
        kept.push(line);
        previous_blank = blank;
    }

    let mut out = kept.join("\n").trim_end().to_string();
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "tests/builder.rs"]
mod tests;
