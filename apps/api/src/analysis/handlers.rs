//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::{analyze_resume, AnalysisReport};
use crate::errors::AppError;
use crate::state::AppState;

const PDF_CONTENT_TYPE: &str = "application/pdf";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Both fields may be absent or `null`; the handler reports which one is missing.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: Option<String>,
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores pasted (or previously extracted) resume text against a role.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let Json(request) = payload?;

    let role_id = request.role_id.as_deref().unwrap_or_default().trim();
    if role_id.is_empty() {
        return Err(AppError::Validation("Please select a job role.".to_string()));
    }

    let resume_text = request.resume_text.as_deref().unwrap_or_default().trim();
    if resume_text.is_empty() {
        return Err(AppError::Validation(
            "Please paste your resume text.".to_string(),
        ));
    }

    let report = analyze_resume(&state.catalog, role_id, resume_text)?;

    info!(
        role = %report.role_id,
        score = report.score,
        missing = report.missing_keywords.len(),
        "Resume analyzed"
    );

    Ok(Json(report))
}

/// POST /api/v1/extract
///
/// Pulls plain text out of an uploaded PDF (multipart field `file`). The client
/// may review or edit the text before sending it to `/api/v1/analyze`.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        if !is_pdf_upload(field.content_type(), file_name.as_deref()) {
            return Err(AppError::Validation(
                "Please select a valid PDF file.".to_string(),
            ));
        }

        let document = field.bytes().await?;
        let text = state.extractor.extract_text(document).await?;
        if text.trim().is_empty() {
            warn!(file = ?file_name, "PDF contained no extractable text");
        }

        return Ok(Json(ExtractResponse { file_name, text }));
    }

    Err(AppError::Validation(
        "Missing multipart field 'file'".to_string(),
    ))
}

/// Accepts `application/pdf`, or a `.pdf` file name when the client sent a
/// generic content type.
fn is_pdf_upload(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    match content_type {
        Some(ct) if ct.eq_ignore_ascii_case(PDF_CONTENT_TYPE) => true,
        Some(ct) if ct != "application/octet-stream" => false,
        _ => file_name
            .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false),
    }
}
