//! Format trait and the line mask built from it.
//!
//! The engine scans documents line by line, but some lines must never be read as structure: a
//! `## Heading` inside a fenced code sample is code, not a section boundary. A `Format` supplies
//! the tree-sitter grammar and the query naming those verbatim regions.

pub mod markdown;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Tree-sitter grammar plus the query that captures verbatim regions.
pub trait Format {
    /// Grammar used to parse the document.
    fn language(&self) -> tree_sitter::Language;
    /// Query whose captures span lines that must be treated as opaque text.
    fn verbatim_query(&self) -> &str;
}

#[must_use]
/// Marks which lines of `text` sit inside a verbatim region.
///
/// The returned vector has one entry per `'\n'`-separated line. If the grammar cannot be loaded
/// or the text cannot be parsed, every line is reported as ordinary text.
pub fn verbatim_lines(text: &str, format: &impl Format) -> Vec<bool> {
    let lines: Vec<&str> = text.split('\n').collect();
    let line_count = lines.len();
    let mut mask = vec![false; line_count];

    let language = format.language();
    let mut parser = Parser::new();
    if parser.set_language(&language).is_err() {
        tracing::debug!("verbatim mask unavailable: grammar failed to load");
        return mask;
    }
    let Some(tree) = parser.parse(text, None) else {
        return mask;
    };
    let Ok(query) = Query::new(&language, format.verbatim_query()) else {
        tracing::debug!("verbatim mask unavailable: query failed to compile");
        return mask;
    };

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), text.as_bytes());
    while let Some(query_match) = matches.next() {
        for capture in query_match.captures {
            let start = capture.node.start_position();
            let end = capture.node.end_position();
            // A node ending at column 0 stops before that row.
            let mut last_row = if end.column == 0 && end.row > start.row {
                end.row - 1
            } else {
                end.row
            };
            last_row = last_row.min(line_count.saturating_sub(1));
            // Trailing blank lines separate the region from what follows.
            while last_row > start.row && lines[last_row].trim().is_empty() {
                last_row -= 1;
            }
            for flag in mask.iter_mut().take(last_row + 1).skip(start.row) {
                *flag = true;
            }
        }
    }

    mask
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
