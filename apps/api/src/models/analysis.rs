use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored analysis, as returned by the fetch-by-id endpoint.
///
/// The keyword/formatting verdicts live in JSONB columns and are carried
/// opaquely here; the engine's typed structs are the write-side source.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRow {
    pub id: Uuid,
    pub original_name: String,
    pub resume_text: String,
    pub job_description: String,
    pub ats_score: i32,
    pub keyword_analysis: Value,
    pub formatting_analysis: Value,
    pub improvement_tips: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// History projection: just enough to render a recent-analyses list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummaryRow {
    pub id: Uuid,
    pub original_name: String,
    pub ats_score: i32,
    pub created_at: DateTime<Utc>,
}
