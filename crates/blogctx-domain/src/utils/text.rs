//! Markup sanitizer

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::ELLIPSIS;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

/// Strip markup tags and truncate to `limit` characters
///
/// Every `<...>` run is deleted. When the remaining text is longer than
/// `limit` characters, the first `limit` characters are kept and
/// [`ELLIPSIS`] is appended. Entities such as `&amp;` are left as they are.
///
/// ```rust
/// use blogctx_domain::utils::sanitize;
///
/// assert_eq!(sanitize("<b>hi</b> there", 100), "hi there");
/// assert_eq!(sanitize("abcdefgh", 5), "abcde...");
/// ```
pub fn sanitize(html: &str, limit: usize) -> String {
    let text = strip_tags(html);

    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text,
    }
}

/// Strip markup tags without truncating
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}
