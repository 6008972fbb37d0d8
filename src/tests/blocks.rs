use super::{join_blocks, normalize_block, split_blocks};

#[test]
fn test_split_on_blank_lines() {
    let blocks = split_blocks("First para\nwraps here.\n\n\n\n- item one\n- item two\n\n  Last  ");
    assert_eq!(
        blocks,
        vec!["First para\nwraps here.", "- item one\n- item two", "Last"]
    );
}

#[test]
fn test_empty_input_has_no_blocks() {
    assert!(split_blocks("").is_empty());
    assert!(split_blocks("\n\n\n").is_empty());
}

#[test]
fn test_crlf_input_splits_like_lf() {
    assert_eq!(split_blocks("a\r\n\r\nb"), vec!["a", "b"]);
}

#[test]
fn test_blank_lines_inside_fence_do_not_split() {
    let text = "Setup:\n\n```sh\ncargo build\n\ncargo test\n```\n\nDone.";
    let blocks = split_blocks(text);
    assert_eq!(blocks.len(), 3, "got {blocks:?}");
    assert_eq!(blocks[1], "```sh\ncargo build\n\ncargo test\n```");
}

#[test]
fn test_table_stays_one_block() {
    let table = "| a | b |\n|---|---|\n| 1 | 2 |";
    assert_eq!(split_blocks(table), vec![table]);
}

#[test]
fn test_normalize_block_ignores_case_and_spacing() {
    assert_eq!(
        normalize_block("We  Build\nA journaling app."),
        normalize_block("we build a   JOURNALING app.")
    );
}

#[test]
fn test_join_blocks() {
    assert_eq!(join_blocks(&["a", "b"]), "a\n\nb");
    assert_eq!(join_blocks::<&str>(&[]), "");
}
