//! Tests for the markup sanitizer

use blogctx_domain::constants::ELLIPSIS;
use blogctx_domain::utils::sanitize;

#[test]
fn test_strips_inline_tags() {
    assert_eq!(sanitize("<b>hi</b> there", 100), "hi there");
}

#[test]
fn test_long_input_is_cut_with_ellipsis() {
    let result = sanitize("abcdefghij", 5);
    assert_eq!(result, format!("abcde{ELLIPSIS}"));
}

#[test]
fn test_short_input_is_unchanged() {
    assert_eq!(sanitize("abcde", 5), "abcde");
    assert_eq!(sanitize("ab", 5), "ab");
    assert_eq!(sanitize("", 5), "");
}

#[test]
fn test_limit_applies_after_tag_removal() {
    // 5 visible characters once the tags are gone
    assert_eq!(sanitize("<p><strong>abcde</strong></p>", 5), "abcde");
}

#[test]
fn test_wordpress_excerpt() {
    let html = "<p>会社員からフリーランスになって1年。</p>\n<p class=\"more\">続きを読む</p>\n";
    assert_eq!(
        sanitize(html, 200),
        "会社員からフリーランスになって1年。\n続きを読む\n"
    );
}
