#![allow(dead_code)]

//! The scoring engine: one immutable struct tying keyword extraction, job
//! keyword detection, formatting checks, and tip generation into a verdict.
//!
//! Construction compiles every pattern table once; after that the engine is
//! pure and lock-free, so `AppState` shares a single instance via `Arc`.

use anyhow::Result;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::analysis::formatting::{FormattingAnalysis, FormattingAnalyzer};
use crate::analysis::job_keywords::JobKeywordDetector;
use crate::analysis::keywords::KeywordExtractor;
use crate::analysis::tips::generate_improvement_tips;

/// Weighting of the two component scores in the overall result.
const KEYWORD_WEIGHT: f64 = 0.6;
const FORMATTING_WEIGHT: f64 = 0.4;

/// The report carries at most this many matched/missing keywords each.
const KEYWORD_LIST_CAP: usize = 20;

/// Keyword-side verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Percentage of job keywords found in the resume, rounded.
    pub keyword_density: u32,
}

/// Complete analysis of one resume against one job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub ats_score: u32,
    pub keyword_analysis: KeywordAnalysis,
    pub formatting_analysis: FormattingAnalysis,
    pub improvement_tips: Vec<String>,
}

/// Deterministic resume scoring engine.
pub struct AtsEngine {
    extractor: KeywordExtractor,
    detector: JobKeywordDetector,
    formatting: FormattingAnalyzer,
}

impl AtsEngine {
    pub fn new() -> Result<Self> {
        Ok(AtsEngine {
            extractor: KeywordExtractor::default(),
            detector: JobKeywordDetector::new()?,
            formatting: FormattingAnalyzer::new()?,
        })
    }

    /// Scores a resume against a job description.
    ///
    /// Algorithm:
    /// 1. Detect job keywords (pattern groups plus frequency pool).
    /// 2. Partition them by raw substring search against the lowercased
    ///    resume. Substring semantics are intentional: "java" in the job
    ///    description is satisfied by "javascript" in the resume.
    /// 3. Keyword score = matched / total × 100; 0 when nothing was asked.
    /// 4. Run the formatting checks.
    /// 5. Overall score = round(keyword × 0.6 + formatting × 0.4).
    /// 6. Tips see the uncapped lists; the report carries at most 20 each.
    pub fn analyze(&self, resume_text: &str, job_description: &str) -> AtsReport {
        let job_keywords = self.detector.detect(&self.extractor, job_description);

        let resume_lowered = resume_text.to_lowercase();
        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for keyword in &job_keywords {
            if resume_lowered.contains(keyword.as_str()) {
                matched.push(keyword.clone());
            } else {
                missing.push(keyword.clone());
            }
        }

        let keyword_score = if job_keywords.is_empty() {
            0.0
        } else {
            matched.len() as f64 / job_keywords.len() as f64 * 100.0
        };

        let formatting = self.formatting.analyze(resume_text);

        let ats_score = (keyword_score * KEYWORD_WEIGHT
            + f64::from(formatting.score) * FORMATTING_WEIGHT)
            .round() as u32;

        let improvement_tips = generate_improvement_tips(&matched, &missing, &formatting, ats_score);

        matched.truncate(KEYWORD_LIST_CAP);
        missing.truncate(KEYWORD_LIST_CAP);

        AtsReport {
            ats_score,
            keyword_analysis: KeywordAnalysis {
                matched_keywords: matched,
                missing_keywords: missing,
                keyword_density: keyword_score.round() as u32,
            },
            formatting_analysis: formatting,
            improvement_tips,
        }
    }

    /// Frequency-ranked keywords of any text (the shared tokenizer).
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extractor.extract(text)
    }

    /// The ordered job keyword set on its own.
    pub fn extract_job_keywords(&self, job_description: &str) -> IndexSet<String> {
        self.detector.detect(&self.extractor, job_description)
    }

    /// The formatting verdict on its own.
    pub fn analyze_formatting(&self, resume_text: &str) -> FormattingAnalysis {
        self.formatting.analyze(resume_text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
