use super::{collapse_whitespace, normalize_heading, normalize_newlines, normalize_text};

#[test]
fn test_heading_markup_is_ignored() {
    assert_eq!(normalize_heading("## Product Vision"), "product vision");
    assert_eq!(normalize_heading("**Product Vision:**"), "product vision");
    assert_eq!(normalize_heading("> ### _Product_   Vision --"), "product vision");
    assert_eq!(normalize_heading("`Product` ~~Vision~~"), "product vision");
}

#[test]
fn test_list_prefixes_are_stripped() {
    assert_eq!(normalize_heading("- Roadmap"), "roadmap");
    assert_eq!(normalize_heading("2. Roadmap:"), "roadmap");
    assert_eq!(normalize_heading("3) Roadmap"), "roadmap");
    // A hyphenated word is not a list marker.
    assert_eq!(normalize_heading("-Roadmap"), "-roadmap");
}

#[test]
fn test_heading_normalization_is_idempotent() {
    let inputs = [
        "## Product Vision",
        "*# Nested*",
        "- :",
        "-:",
        "1.",
        ">>  ## Tech -- Stack::",
        "  Target   Users  ",
        "",
        "###",
        "1. - # Odd",
    ];
    for input in inputs {
        let once = normalize_heading(input);
        assert_eq!(
            normalize_heading(&once),
            once,
            "normalize_heading not idempotent for {input:?}"
        );
    }
}

#[test]
fn test_normalize_text_keeps_structure_but_drops_emphasis() {
    assert_eq!(
        normalize_text("We **build**\n\n- a _journaling_ app"),
        "we build - a journaling app"
    );
}

#[test]
fn test_collapse_and_newlines() {
    assert_eq!(collapse_whitespace("  a \t b\n\nc "), "a b c");
    assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\nc");
}
