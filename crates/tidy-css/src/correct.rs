//! Safe, rule-based auto-correction — three passes, applied once, in order.

use regex::Captures;
use serde::Serialize;

use crate::balance;
use crate::corrections::PATTERNS;
use crate::validate::RE_MISSING_SEMICOLON;

/// Corrected text plus one human-readable entry per applied rule instance.
#[derive(Debug, Clone, Serialize)]
pub struct Correction {
    pub text: String,
    pub fixes: Vec<String>,
}

/// Apply the three fix passes: semicolon insertion, spelling correction,
/// brace closing. A single application each; no iteration.
pub fn auto_correct(css: &str) -> Correction {
    let mut fixes = Vec::new();

    // 1) Insert the missing semicolon before the next property or `}`.
    let semicolon_fixed = RE_MISSING_SEMICOLON.replace_all(css, "${1};${2}");
    let mut corrected = if semicolon_fixed != css {
        fixes.push("Auto-corrected missing semicolon before }".to_string());
        semicolon_fixed.into_owned()
    } else {
        css.to_string()
    };

    // 2) Rewrite known property misspellings, logged per occurrence.
    corrected = PATTERNS
        .misspelling_fix
        .replace_all(&corrected, |caps: &Captures| {
            let bad = &caps[1];
            let good = PATTERNS.table.get(bad).copied().unwrap_or(bad);
            if good != bad {
                fixes.push(format!("Corrected spelling: {bad} -> {good}"));
            }
            format!("{good}{}", &caps[2])
        })
        .into_owned();

    // 3) Close unclosed blocks at end of file, only when no stray `}`
    //    exists (guessing which close is spurious is not safe).
    let info = balance::analyze(&corrected);
    if !info.has_extra_closing && info.missing_closing > 0 {
        corrected.push_str(&"}".repeat(info.missing_closing));
        fixes.push("Auto-closed unclosed block at end of file".to_string());
    }

    Correction { text: corrected, fixes }
}
