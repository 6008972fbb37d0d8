//! Text canonicalisation used to compare markdown by meaning rather than formatting.
//!
//! Language-model output rarely echoes a heading byte-for-byte: it adds emphasis, a trailing
//! colon, a blockquote marker or a stray `##`. Every comparison the engine makes between a line
//! and a planned heading, or between two bodies of prose, goes through the functions here.

/// Characters treated as inline emphasis or code markup.
const EMPHASIS_MARKERS: [char; 4] = ['*', '_', '`', '~'];

#[must_use]
/// Canonicalises a heading line into a comparison key.
///
/// Strips emphasis and code markers, leading blockquote, ATX heading and list markers, and
/// trailing colons or dashes, then collapses whitespace and lower-cases. The result is a fixed
/// point: normalising it again returns it unchanged.
pub fn normalize_heading(text: &str) -> String {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !EMPHASIS_MARKERS.contains(c))
        .collect();

    let mut rest = lowered.as_str();
    loop {
        rest = rest.trim_start();
        if let Some(stripped) = strip_line_prefix(rest) {
            rest = stripped;
        } else {
            break;
        }
    }

    let rest = rest.trim_end_matches(|c: char| c == ':' || c == '-' || c.is_whitespace());
    collapse_whitespace(rest)
}

/// Removes one leading blockquote, heading or list marker, if present.
fn strip_line_prefix(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix('>') {
        return Some(rest);
    }
    if line.starts_with('#') {
        return Some(line.trim_start_matches('#'));
    }
    for bullet in ['-', '+'] {
        if let Some(rest) = line.strip_prefix(bullet) {
            if rest.starts_with(char::is_whitespace) {
                return Some(rest);
            }
        }
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(after) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            if after.starts_with(char::is_whitespace) {
                return Some(after);
            }
        }
    }
    None
}

#[must_use]
/// Emphasis-stripped, whitespace-collapsed, lower-cased form of a whole body of text.
///
/// Unlike [`normalize_heading`] this keeps structural prefixes such as `#` and list bullets,
/// since it compares entire sections rather than single heading lines.
pub fn normalize_text(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !EMPHASIS_MARKERS.contains(c))
        .collect();
    collapse_whitespace(&stripped.to_lowercase())
}

#[must_use]
/// Replaces every run of whitespace (newlines included) with a single space and trims.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[must_use]
/// Converts CRLF and lone CR line endings to LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
#[path = "tests/normalize.rs"]
mod tests;
