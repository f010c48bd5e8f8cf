//! Improvement tips assembled from the keyword and formatting verdicts.

use crate::analysis::formatting::FormattingAnalysis;

/// Tips never exceed this many entries.
const MAX_TIPS: usize = 8;
/// Below this many tips, generic best practices pad the list.
const MIN_SUBSTANTIVE_TIPS: usize = 5;
/// How many missing keywords get named outright.
const NAMED_MISSING_LIMIT: usize = 5;
/// Fewer matches than this reads as a misaligned skills section.
const LOW_MATCH_THRESHOLD: usize = 5;

/// Builds the tip list, in rule order, capped at `MAX_TIPS`.
///
/// Takes the uncapped matched/missing lists so the thresholds see the full
/// picture, not a truncated one.
pub fn generate_improvement_tips(
    matched: &[String],
    missing: &[String],
    formatting: &FormattingAnalysis,
    ats_score: u32,
) -> Vec<String> {
    let mut tips = Vec::new();

    if missing.len() > NAMED_MISSING_LIMIT {
        let named: Vec<&str> = missing
            .iter()
            .take(NAMED_MISSING_LIMIT)
            .map(String::as_str)
            .collect();
        tips.push(format!(
            "Add these important keywords from the job description: {}",
            named.join(", ")
        ));
    }

    if matched.len() < LOW_MATCH_THRESHOLD {
        tips.push(
            "Your resume lacks key skills mentioned in the job description. \
             Review and align your skills section."
                .to_string(),
        );
    }

    tips.extend(formatting.issues.iter().cloned());

    if ats_score < 50 {
        tips.push(
            "Consider tailoring your resume more specifically to this job description".to_string(),
        );
        tips.push("Use exact phrases from the job posting where applicable".to_string());
    } else if ats_score < 70 {
        tips.push("Good start! Focus on incorporating more technical keywords".to_string());
        tips.push("Ensure your most relevant experience is prominently displayed".to_string());
    } else {
        tips.push("Strong match! Fine-tune by adding any missing critical keywords".to_string());
    }

    if tips.len() < MIN_SUBSTANTIVE_TIPS {
        tips.push("Use standard section headings (Experience, Education, Skills)".to_string());
        tips.push(
            "Avoid graphics, tables, and complex formatting that ATS may not parse".to_string(),
        );
        tips.push("Save your resume as a .docx or .pdf file for best compatibility".to_string());
    }

    tips.truncate(MAX_TIPS);
    tips
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
