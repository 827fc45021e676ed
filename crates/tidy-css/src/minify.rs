//! Whitespace and punctuation compaction for validated stylesheets.

use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_PUNCT_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{}:;,>+~])\s*").unwrap());
static RE_IMPORTANT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*!important").unwrap());

/// Compact already-validated CSS. Comments are stripped upstream.
pub fn minify(css: &str) -> String {
    let collapsed = RE_WHITESPACE.replace_all(css, " ");
    let tightened = RE_PUNCT_SPACING.replace_all(&collapsed, "$1");
    // Single pass: the last declaration in a block never needs its terminator
    let no_trailing = tightened.replace(";}", "}");
    let important = RE_IMPORTANT.replace_all(&no_trailing, "!important");
    important.trim().to_string()
}
