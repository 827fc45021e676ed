//! JSON formatting — a thin wrapper over serde_json with positioned errors.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use tidy_core::{Result, TidyError};

fn positioned(err: serde_json::Error) -> TidyError {
    TidyError::JsonSyntax {
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    }
}

/// Parse JSON text. Blank input is `EmptyInput`; a syntax failure carries
/// the line and column where parsing stopped.
pub fn parse(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TidyError::EmptyInput);
    }
    serde_json::from_str(trimmed).map_err(positioned)
}

/// Pretty-print with `indent_width` spaces per level.
pub fn format(text: &str, indent_width: usize) -> Result<String> {
    let value = parse(text)?;
    let indent = vec![b' '; indent_width];
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|err| TidyError::Other(err.into()))
}

/// Serialize without any whitespace.
pub fn compact(text: &str) -> Result<String> {
    let value = parse(text)?;
    Ok(serde_json::to_string(&value)?)
}

/// Syntax check only.
pub fn validate(text: &str) -> Result<()> {
    parse(text).map(|_| ())
}
