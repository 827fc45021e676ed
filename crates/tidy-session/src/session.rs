use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use tidy_core::{StatusReport, TextSink, TidyConfig, TidyError};
use tidy_css::{CssPipeline, PipelineOutcome};

/// Transient editor state: current input/output text plus the last status.
///
/// Every action runs to completion synchronously and is stateless across
/// invocations — nothing is memoized, so repeated calls are safe.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub input: String,
    pub output: String,
    pub status: StatusReport,
    #[serde(skip)]
    pipeline: CssPipeline,
    #[serde(skip)]
    json_indent: usize,
}

impl Session {
    pub fn new(config: &TidyConfig) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            input: String::new(),
            output: String::new(),
            status: StatusReport::info("Ready."),
            pipeline: CssPipeline::new(config.css.auto_correct),
            json_indent: config.json.indent_width,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.touch();
    }

    /// Run the CSS pipeline over the current input.
    pub fn minify_css(&mut self) -> &StatusReport {
        match self.pipeline.run(&self.input) {
            PipelineOutcome::EmptyInput => {
                self.output.clear();
                self.status = StatusReport::error("Please enter CSS input first.");
            }
            PipelineOutcome::Minified { output } => {
                self.output = output;
                self.status = StatusReport::success("CSS validated and minified");
            }
            PipelineOutcome::CorrectedAndMinified { output, fixes } => {
                self.output = output;
                let fix_text = if fixes.is_empty() {
                    "Auto-correction applied".to_string()
                } else {
                    fixes.join(" | ")
                };
                self.status =
                    StatusReport::warning(format!("{fix_text} | CSS validated and minified"));
            }
            PipelineOutcome::Rejected => {
                self.output.clear();
                self.status = StatusReport::error("Invalid CSS structure detected");
            }
        }
        debug!(session = %self.id, level = ?self.status.level, "minify_css");
        self.touch();
        &self.status
    }

    /// Pretty-print the current input as JSON.
    pub fn format_json(&mut self) -> &StatusReport {
        match tidy_json::format(&self.input, self.json_indent) {
            Ok(formatted) => {
                self.output = formatted;
                self.status = StatusReport::success("JSON formatted successfully.");
            }
            Err(TidyError::EmptyInput) => {
                self.output.clear();
                self.status = StatusReport::error("Input is empty. Paste JSON to continue.");
            }
            Err(err) => {
                self.output.clear();
                self.status = StatusReport::error(err.to_string());
            }
        }
        self.touch();
        &self.status
    }

    /// Syntax-check the current input as JSON. Output is left untouched.
    pub fn validate_json(&mut self) -> &StatusReport {
        self.status = match tidy_json::validate(&self.input) {
            Ok(()) => StatusReport::success("JSON is valid."),
            Err(TidyError::EmptyInput) => {
                StatusReport::error("Input is empty. Paste JSON to continue.")
            }
            Err(err) => StatusReport::error(err.to_string()),
        };
        self.touch();
        &self.status
    }

    pub fn clear(&mut self) -> &StatusReport {
        self.input.clear();
        self.output.clear();
        self.status = StatusReport::info("Editors cleared.");
        self.touch();
        &self.status
    }

    /// Export the output through the sink. Fire-and-forget: failure only
    /// changes the status message, never the texts.
    pub fn copy_output(&mut self, sink: &dyn TextSink) -> &StatusReport {
        if self.output.trim().is_empty() {
            self.status = StatusReport::error("No output available to copy.");
        } else {
            self.status = match sink.write_text(&self.output) {
                Ok(()) => StatusReport::success("Output copied to clipboard."),
                Err(_) => StatusReport::error("Copy failed. Please copy manually."),
            };
        }
        self.touch();
        &self.status
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&TidyConfig::default())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session(id={}, status={:?})", self.id, self.status.level)
    }
}
