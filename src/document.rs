//! Parsing a markdown design document against a section plan.
//!
//! The parser is deliberately forgiving: anything that is not a recognised `##` heading is body
//! text of whatever region is open, unknown headings are kept in the preface or appendix, and no
//! input makes it fail. A parsed document is a transient view, rebuilt from the markdown string on
//! every operation.

use crate::formats::markdown::fenced_lines;
use crate::normalize::{normalize_heading, normalize_newlines, normalize_text};
use crate::section::{SectionDefinition, SectionPlan};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Title used when a document has no `#` heading.
pub const DEFAULT_TITLE: &str = "Design Document";

static TITLE_RE: OnceLock<Regex> = OnceLock::new();
static SECTION_RE: OnceLock<Regex> = OnceLock::new();

fn title_re() -> &'static Regex {
    TITLE_RE.get_or_init(|| Regex::new(r"^#\s+(\S.*?)\s*$").unwrap())
}

fn section_re() -> &'static Regex {
    SECTION_RE.get_or_init(|| Regex::new(r"^##\s+(\S.*?)\s*$").unwrap())
}

#[must_use]
/// Text of a `# Title` line, if `line` is one.
pub fn title_heading(line: &str) -> Option<&str> {
    title_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[must_use]
/// Text of a `## Section` line, if `line` is one.
///
/// A bare `##` with nothing after it is not a heading.
pub fn section_heading(line: &str) -> Option<&str> {
    section_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Body of one planned section.
pub struct SectionContent {
    /// Key of the planned section.
    pub key: String,
    /// Trimmed body; empty while the section has no real content.
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Structured view of a document relative to a section plan.
pub struct ParsedDocument {
    /// Text of the first `#` heading.
    pub title: String,
    /// Content before the first recognised section heading.
    pub preface: String,
    /// One entry per planned section, in plan order.
    pub sections: Vec<SectionContent>,
    /// Unrecognised `##` sections found after the first recognised one.
    pub appendix: String,
}

impl ParsedDocument {
    #[must_use]
    /// A document with the given title and every planned section empty.
    ///
    /// A blank title becomes [`DEFAULT_TITLE`].
    pub fn empty(title: &str, plan: &SectionPlan) -> Self {
        let title = match title.trim() {
            "" => DEFAULT_TITLE,
            trimmed => trimmed,
        };
        Self {
            title: title.to_string(),
            preface: String::new(),
            sections: plan
                .sections()
                .iter()
                .map(|s| SectionContent {
                    key: s.key.clone(),
                    content: String::new(),
                })
                .collect(),
            appendix: String::new(),
        }
    }

    #[must_use]
    /// Body of a section, or `None` if the key is not planned.
    pub fn section(&self, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.content.as_str())
    }

    /// Replaces the body of a section. Returns `false` if the key is not planned.
    pub fn set_section(&mut self, key: &str, content: &str) -> bool {
        match self.sections.iter_mut().find(|s| s.key == key) {
            Some(section) => {
                section.content = content.trim().to_string();
                true
            }
            None => false,
        }
    }

    #[must_use]
    /// Whether at least one planned section has content.
    pub fn has_content(&self) -> bool {
        self.sections.iter().any(|s| !s.content.is_empty())
    }
}

/// Which region unclaimed lines are currently flowing into.
#[derive(Clone, Copy)]
enum Region {
    Preface,
    Section(usize),
    Appendix,
}

#[must_use]
/// Splits a markdown document into title, preface, planned sections and appendix.
///
/// Lines inside fenced code blocks are never treated as headings. When the same planned heading
/// appears more than once, the last occurrence wins. A body that only repeats the section's
/// placeholder is reported as empty.
pub fn parse(markdown: &str, plan: &SectionPlan) -> ParsedDocument {
    let text = normalize_newlines(markdown);
    let lines: Vec<&str> = text.split('\n').collect();
    let fenced = fenced_lines(&text);
    let is_fenced = |index: usize| fenced.get(index).copied().unwrap_or(false);

    let title_index =
        (0..lines.len()).find(|&i| !is_fenced(i) && title_heading(lines[i]).is_some());
    let title = title_index
        .and_then(|i| title_heading(lines[i]))
        .map_or_else(|| DEFAULT_TITLE.to_string(), str::to_string);

    let lookup: HashMap<String, usize> = plan
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| (section.heading_key(), index))
        .collect();

    let mut parsed = ParsedDocument::empty(&title, plan);
    let mut preface: Vec<&str> = Vec::new();
    let mut appendix: Vec<&str> = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut region = Region::Preface;

    for (index, &line) in lines.iter().enumerate() {
        if Some(index) == title_index {
            continue;
        }

        let heading = if is_fenced(index) {
            None
        } else {
            section_heading(line)
        };

        if let Some(heading) = heading {
            if let Region::Section(open) = region {
                flush(&mut parsed, plan, open, &buffer);
            }
            buffer.clear();

            if let Some(&matched) = lookup.get(&normalize_heading(heading)) {
                region = Region::Section(matched);
            } else {
                region = match region {
                    Region::Preface => {
                        preface.push(line);
                        Region::Preface
                    }
                    Region::Section(_) | Region::Appendix => {
                        appendix.push(line);
                        Region::Appendix
                    }
                };
            }
            continue;
        }

        match region {
            Region::Preface => preface.push(line),
            Region::Section(_) => buffer.push(line),
            Region::Appendix => appendix.push(line),
        }
    }

    if let Region::Section(open) = region {
        flush(&mut parsed, plan, open, &buffer);
    }

    parsed.preface = preface.join("\n").trim().to_string();
    parsed.appendix = appendix.join("\n").trim().to_string();
    parsed
}

fn flush(parsed: &mut ParsedDocument, plan: &SectionPlan, index: usize, buffer: &[&str]) {
    let body = buffer.join("\n");
    let body = body.trim();
    let Some(definition) = plan.sections().get(index) else {
        return;
    };
    let content = if is_placeholder(body, definition) {
        ""
    } else {
        body
    };
    parsed.sections[index].content = content.to_string();
}

#[must_use]
/// Whether `body` is nothing but the section's placeholder text.
pub fn is_placeholder(body: &str, definition: &SectionDefinition) -> bool {
    let placeholder = normalize_text(&definition.placeholder);
    !placeholder.is_empty() && normalize_text(body) == placeholder
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
