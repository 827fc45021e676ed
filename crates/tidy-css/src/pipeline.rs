//! The minification pipeline — strip comments, validate, correct once, minify.

use serde::Serialize;
use tracing::debug;

use crate::{comments, correct, minify, validate};

/// Terminal result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PipelineOutcome {
    /// Input was empty or whitespace-only; nothing ran.
    EmptyInput,
    /// Input validated as-is.
    Minified { output: String },
    /// Input validated after the auto-correction attempt.
    CorrectedAndMinified { output: String, fixes: Vec<String> },
    /// Still invalid after the single correction attempt; output cleared.
    Rejected,
}

impl PipelineOutcome {
    /// Minified text, when the run produced any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Minified { output } | Self::CorrectedAndMinified { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Two-attempt policy: validate, correct once, revalidate. No retry loop
/// and no partial minification of invalid input.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CssPipeline {
    pub auto_correct: bool,
}

impl CssPipeline {
    pub fn new(auto_correct: bool) -> Self {
        Self { auto_correct }
    }

    pub fn run(&self, raw: &str) -> PipelineOutcome {
        if raw.trim().is_empty() {
            return PipelineOutcome::EmptyInput;
        }

        let stripped = comments::strip_comments(raw);
        let initial = validate::validate(&stripped);
        debug!(
            errors = initial.errors.len(),
            warnings = initial.warnings.len(),
            "validated input"
        );

        if initial.is_valid() {
            return PipelineOutcome::Minified { output: minify::minify(&stripped) };
        }

        if !self.auto_correct {
            return PipelineOutcome::Rejected;
        }

        let correction = correct::auto_correct(&stripped);
        let revalidated = validate::validate(&correction.text);
        debug!(
            fixes = correction.fixes.len(),
            recovered = revalidated.is_valid(),
            "auto-correction attempted"
        );

        if revalidated.is_valid() {
            PipelineOutcome::CorrectedAndMinified {
                output: minify::minify(&correction.text),
                fixes: correction.fixes,
            }
        } else {
            PipelineOutcome::Rejected
        }
    }
}

impl Default for CssPipeline {
    fn default() -> Self {
        Self::new(true)
    }
}
