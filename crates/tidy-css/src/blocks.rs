//! Declaration block extraction.

use regex::Regex;
use std::sync::LazyLock;

static RE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^{}]*\}").unwrap());

/// Interiors of innermost `{...}` spans, braces stripped.
///
/// Non-nesting on purpose: a rule block wrapping other blocks (media query
/// style) is never matched as a whole, and the validator only inspects flat
/// declaration lists.
pub fn block_contents(css: &str) -> Vec<&str> {
    RE_BLOCK
        .find_iter(css)
        .map(|m| {
            let s = m.as_str();
            &s[1..s.len() - 1]
        })
        .collect()
}
