//! Comment stripping — runs before any validation or correction.

use regex::Regex;
use std::sync::LazyLock;

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Delete every `/* ... */` span. Non-nesting, non-greedy.
pub fn strip_comments(css: &str) -> String {
    RE_COMMENT.replace_all(css, "").to_string()
}
