//! Structural validation — four independent checks, none short-circuited.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::balance;
use crate::blocks;
use crate::corrections::PATTERNS;

/// Declaration span missing its `;` before the next property or a `}`.
pub(crate) static RE_MISSING_SEMICOLON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z-]+\s*:\s*[^;{}]+)(\s+[a-zA-Z-]+\s*:|\s*\})").unwrap()
});

/// Aggregated verdict. Errors block minification, warnings never do.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Validation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Existence-only check: one hit is enough to flag the stylesheet.
pub fn has_missing_semicolon(css: &str) -> bool {
    RE_MISSING_SEMICOLON.is_match(css)
}

/// A block containing a `;`-separated segment that lacks a `:`, or whose
/// property or value side is blank. Empty segments (from `;;`) are filtered
/// before the check.
pub fn has_invalid_declaration_format(css: &str) -> bool {
    blocks::block_contents(css).iter().any(|content| {
        content
            .split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .any(|declaration| match declaration.split_once(':') {
                None => true,
                Some((property, value)) => {
                    property.trim().is_empty() || value.trim().is_empty()
                }
            })
    })
}

/// Run all four checks. Errors are ordered balance, semicolon, format;
/// typo findings are warnings only, one per occurrence in scan order.
pub fn validate(css: &str) -> Validation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !balance::analyze(css).is_balanced() {
        errors.push("Unmatched bracket detected.".to_string());
    }

    if has_missing_semicolon(css) {
        errors.push("Missing semicolon before } detected.".to_string());
    }

    for caps in PATTERNS.property_scan.captures_iter(css) {
        let property = &caps[1];
        if let Some(fixed) = PATTERNS.table.get(property) {
            warnings.push(format!("Property typo found: \"{property}\" -> \"{fixed}\""));
        }
    }

    if has_invalid_declaration_format(css) {
        errors.push("Invalid CSS property format detected.".to_string());
    }

    Validation { errors, warnings }
}
