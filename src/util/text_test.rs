use super::*;

// =============================================================
// Truncation
// =============================================================

#[test]
fn short_content_is_not_truncated() {
    let content = "a".repeat(TRUNCATE_THRESHOLD);
    assert!(!needs_truncation(&content));
    assert_eq!(truncated(&content), content);
}

#[test]
fn long_content_is_truncated_with_ellipsis() {
    let content = "a".repeat(TRUNCATE_THRESHOLD + 1);
    assert!(needs_truncation(&content));
    let collapsed = truncated(&content);
    assert_eq!(collapsed.chars().count(), TRUNCATE_THRESHOLD + 1);
    assert!(collapsed.ends_with('…'));
}

#[test]
fn threshold_counts_characters_not_bytes() {
    let content = "é".repeat(TRUNCATE_THRESHOLD);
    assert!(!needs_truncation(&content));
}
