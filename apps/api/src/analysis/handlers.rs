//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::engine::AtsReport;
use crate::analysis::store::{self, NewAnalysis};
use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind, ExtractError};
use crate::models::analysis::{AnalysisRow, AnalysisSummaryRow};
use crate::state::AppState;

/// Multipart field names accepted by the analyze endpoint.
const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// The analyze response: storage id plus the flattened report fields.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub report: AtsReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses (multipart: `resume` file + `jobDescription` text)
///
/// Validates the upload, extracts text, scores it against the job
/// description, stores the result, and returns the report with its id.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut original_name: Option<String> = None;
    let mut document: Option<Bytes> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                original_name = field.file_name().map(str::to_string);
                document = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read resume upload: {e}"))
                })?);
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job description: {e}"))
                })?);
            }
            _ => {} // unknown fields are ignored
        }
    }

    let document =
        document.ok_or_else(|| AppError::Validation("No resume file uploaded".to_string()))?;
    let original_name = original_name.unwrap_or_else(|| "resume".to_string());
    let kind = DocumentKind::from_filename(&original_name).ok_or_else(|| {
        AppError::Validation(
            "Invalid file type. Only PDF, DOC, DOCX, and TXT files are allowed.".to_string(),
        )
    })?;
    // Blank-check only; the analyzed string stays untrimmed.
    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Job description is required".to_string()))?;

    info!("Analyzing upload '{original_name}' ({} bytes)", document.len());

    // Extraction and scoring are CPU-bound; keep them off the async runtime.
    let engine = state.engine.clone();
    let jd = job_description.clone();
    let (resume_text, report) = tokio::task::spawn_blocking(move || {
        let resume_text = extract_text(kind, &document)?;
        let report = engine.analyze(&resume_text, &jd);
        Ok::<_, ExtractError>((resume_text, report))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))??;

    let row = store::insert_analysis(
        &state.db,
        NewAnalysis {
            original_name: &original_name,
            resume_text: &resume_text,
            job_description: &job_description,
            report: &report,
        },
    )
    .await
    .map_err(AppError::Internal)?;

    Ok(Json(AnalyzeResponse { id: row.id, report }))
}

/// GET /api/v1/analyses/history
///
/// The ten most recent analyses, newest first.
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisSummaryRow>>, AppError> {
    let rows = store::recent_analyses(&state.db)
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(rows))
}

/// GET /api/v1/analyses/:id
///
/// The full stored analysis, including the extracted text and both verdicts.
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRow>, AppError> {
    let row = sqlx::query_as::<_, AnalysisRow>("SELECT * FROM analyses WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Analysis not found".to_string()))?;

    Ok(Json(row))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
