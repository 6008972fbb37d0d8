//! Markdown format implementation using tree-sitter-md.
//!
//! Only the block grammar is needed: fenced code blocks are the regions whose lines must not be
//! mistaken for headings or block separators.

use crate::formats::Format;

/// Tree-sitter block grammar for markdown with a fenced-code query.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn verbatim_query(&self) -> &'static str {
        "(fenced_code_block) @verbatim"
    }
}

#[must_use]
/// Convenience wrapper for [`crate::formats::verbatim_lines`] with the markdown grammar.
pub fn fenced_lines(text: &str) -> Vec<bool> {
    crate::formats::verbatim_lines(text, &MarkdownFormat)
}

#[must_use]
/// Appends a closing fence if `text` leaves a code fence open.
pub fn close_open_fence(text: &str) -> String {
    let open = text.split('\n').fold(None, track_fence);
    match open {
        Some(fence) => format!("{}\n{fence}", text.trim_end()),
        None => text.to_string(),
    }
}

/// Updates the open-fence marker after reading `line`.
fn track_fence(open: Option<String>, line: &str) -> Option<String> {
    let stripped = line.trim_start();
    if line.len() - stripped.len() > 3 {
        return open;
    }
    let marker_char = match stripped.chars().next() {
        Some(c @ ('`' | '~')) => c,
        _ => return open,
    };
    let run = stripped.chars().take_while(|&c| c == marker_char).count();
    if run < 3 {
        return open;
    }

    match open {
        // A backtick fence's info string cannot itself contain backticks.
        None if marker_char == '`' && stripped[run..].contains('`') => None,
        None => Some(marker_char.to_string().repeat(run)),
        Some(fence) => {
            let closes = fence.starts_with(marker_char)
                && run >= fence.len()
                && stripped[run..].trim().is_empty();
            if closes {
                None
            } else {
                Some(fence)
            }
        }
    }
}
