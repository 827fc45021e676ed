use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use tidy_core::TidyError;
use tidy_css::{comments, validate, PipelineOutcome};
use tidy_session::Session;

use crate::error::ApiError;
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn css_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/css/minify", post(minify_css))
        .route("/api/v1/css/validate", post(validate_css))
}

pub fn json_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/json/format", post(format_json))
        .route("/api/v1/json/validate", post(validate_json))
}

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/session", get(list_sessions).post(create_session))
        .route("/api/v1/session/{id}", get(get_session))
}

#[derive(Debug, Deserialize)]
struct TextRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
struct FormatRequest {
    text: String,
    indent: Option<usize>,
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn minify_css(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<Value>, ApiError> {
    let original_len = req.text.len();
    match state.pipeline.run(&req.text) {
        PipelineOutcome::EmptyInput => Err(TidyError::EmptyInput.into()),
        PipelineOutcome::Rejected => {
            // Surface the full first-pass error list, not the terse verdict
            let report = validate::validate(&comments::strip_comments(&req.text));
            Err(TidyError::InvalidStylesheet { errors: report.errors }.into())
        }
        PipelineOutcome::Minified { output } => {
            Ok(Json(minify_body("minified", &output, original_len, None)))
        }
        PipelineOutcome::CorrectedAndMinified { output, fixes } => Ok(Json(minify_body(
            "corrected_and_minified",
            &output,
            original_len,
            Some(&fixes),
        ))),
    }
}

fn minify_body(kind: &str, output: &str, original_len: usize, fixes: Option<&[String]>) -> Value {
    let reduction_pct = if original_len > 0 {
        (original_len.saturating_sub(output.len()) as f64 / original_len as f64) * 100.0
    } else {
        0.0
    };
    let mut body = json!({
        "kind": kind,
        "output": output,
        "original_len": original_len,
        "output_len": output.len(),
        "reduction_pct": reduction_pct,
    });
    if let Some(fixes) = fixes {
        body["fixes"] = json!(fixes);
    }
    body
}

async fn validate_css(Json(req): Json<TextRequest>) -> Json<Value> {
    let report = validate::validate(&comments::strip_comments(&req.text));
    Json(json!({
        "is_valid": report.is_valid(),
        "errors": report.errors,
        "warnings": report.warnings,
    }))
}

async fn format_json(
    State(state): State<AppState>,
    Json(req): Json<FormatRequest>,
) -> Result<Json<Value>, ApiError> {
    let indent = req.indent.unwrap_or(state.config.json.indent_width);
    let output = tidy_json::format(&req.text, indent)?;
    Ok(Json(json!({ "output": output })))
}

async fn validate_json(Json(req): Json<TextRequest>) -> Result<Json<Value>, ApiError> {
    tidy_json::validate(&req.text)?;
    Ok(Json(json!({ "valid": true })))
}

async fn create_session(State(state): State<AppState>) -> Json<Value> {
    let session = state.sessions.create();
    info!(id = %session.id, "session created");
    Json(json!({ "id": session.id, "created_at": session.created_at }))
}

async fn list_sessions(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "sessions": state.sessions.list_ids() }))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    state
        .sessions
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Session not found: {id}")))
}
