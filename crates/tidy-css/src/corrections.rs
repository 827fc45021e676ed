//! Safe property-name corrections (small predefined map only).

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Build the known-misspelling table. Immutable for the process lifetime.
pub fn property_corrections() -> HashMap<&'static str, &'static str> {
    let mut m = HashMap::new();
    m.insert("backgroung", "background");
    m.insert("colr", "color");
    m.insert("widht", "width");
    m.insert("heigth", "height");
    m
}

pub(crate) struct CachedPatterns {
    /// `identifier:` in property position, anywhere in the text.
    pub(crate) property_scan: Regex,
    /// Known misspellings only, trailing `:` captured for re-emit.
    pub(crate) misspelling_fix: Regex,
    pub(crate) table: HashMap<&'static str, &'static str>,
}

pub(crate) static PATTERNS: LazyLock<CachedPatterns> = LazyLock::new(|| {
    let table = property_corrections();
    let mut keys: Vec<&'static str> = table.keys().copied().collect();
    // Longest first so no alternative shadows a longer one
    keys.sort_unstable_by(|a, b| b.len().cmp(&a.len()));
    let alternation = keys.join("|");

    CachedPatterns {
        property_scan: Regex::new(r"\b([a-zA-Z-]+)\s*:").unwrap(),
        misspelling_fix: Regex::new(&format!(r"\b({alternation})\b(\s*:)")).unwrap(),
        table,
    }
});
