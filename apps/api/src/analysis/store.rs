//! Persistence for completed analyses.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::analysis::engine::AtsReport;
use crate::models::analysis::{AnalysisRow, AnalysisSummaryRow};

/// How many entries the history endpoint returns.
const HISTORY_LIMIT: i64 = 10;

/// Parameters for inserting a completed analysis.
pub struct NewAnalysis<'a> {
    pub original_name: &'a str,
    pub resume_text: &'a str,
    pub job_description: &'a str,
    pub report: &'a AtsReport,
}

/// Inserts a completed analysis and returns the stored row.
pub async fn insert_analysis(pool: &PgPool, new: NewAnalysis<'_>) -> Result<AnalysisRow> {
    let id = Uuid::new_v4();
    let keyword_analysis = serde_json::to_value(&new.report.keyword_analysis)?;
    let formatting_analysis = serde_json::to_value(&new.report.formatting_analysis)?;

    let row = sqlx::query_as::<_, AnalysisRow>(
        r#"
        INSERT INTO analyses
            (id, original_name, resume_text, job_description, ats_score,
             keyword_analysis, formatting_analysis, improvement_tips)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(new.original_name)
    .bind(new.resume_text)
    .bind(new.job_description)
    .bind(new.report.ats_score as i32)
    .bind(keyword_analysis)
    .bind(formatting_analysis)
    .bind(new.report.improvement_tips.as_slice())
    .fetch_one(pool)
    .await?;

    info!("Stored analysis {id} (score {})", new.report.ats_score);
    Ok(row)
}

/// Returns the most recent analyses, newest first.
pub async fn recent_analyses(pool: &PgPool) -> Result<Vec<AnalysisSummaryRow>> {
    Ok(sqlx::query_as::<_, AnalysisSummaryRow>(
        r#"
        SELECT id, original_name, ats_score, created_at
        FROM analyses
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(HISTORY_LIMIT)
    .fetch_all(pool)
    .await?)
}
