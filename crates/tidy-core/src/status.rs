//! Status reporting and the output text sink.

use serde::{Deserialize, Serialize};

/// Severity of a status message shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A human-readable status line with its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub level: StatusLevel,
    pub message: String,
}

impl StatusReport {
    pub fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, message)
    }
}

/// Destination for exported output text (clipboard, file, test buffer).
///
/// Sink failures are reported through the session status and never affect
/// pipeline state.
pub trait TextSink: Send + Sync {
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}
