#![allow(dead_code)]

//! Formatting analysis: the structural checks a tracking system runs before
//! any human reads the resume.
//!
//! Every check is a deduction from a perfect score of 100. Contact details
//! and quantified achievements are matched against the raw text; section cues
//! and action verbs are matched against the lowercased text.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Verbs that signal accomplishment-oriented writing.
const ACTION_VERBS: &[&str] = &[
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "led",
    "improved",
    "achieved",
    "delivered",
    "coordinated",
];

/// Word-count bounds: shorter reads as thin, longer reads as unfocused.
const MIN_WORD_COUNT: usize = 150;
const MAX_WORD_COUNT: usize = 1500;

// Penalty weights. The score starts at 100 and clamps at 0.
const MISSING_EMAIL_PENALTY: i32 = 15;
const MISSING_PHONE_PENALTY: i32 = 10;
const MISSING_EDUCATION_PENALTY: i32 = 15;
const MISSING_EXPERIENCE_PENALTY: i32 = 20;
const MISSING_SKILLS_PENALTY: i32 = 15;
const MISSING_SUMMARY_PENALTY: i32 = 5;
const TOO_SHORT_PENALTY: i32 = 10;
const TOO_LONG_PENALTY: i32 = 5;
const NO_ACTION_VERBS_PENALTY: i32 = 5;
const NO_ACHIEVEMENTS_PENALTY: i32 = 10;

/// Structural verdict for a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingAnalysis {
    /// Education, experience, and skills sections all present.
    pub has_proper_sections: bool,
    /// Email or phone number present.
    pub has_contact_info: bool,
    pub has_education: bool,
    pub has_experience: bool,
    pub has_skills: bool,
    /// Human-readable findings, in check order.
    pub issues: Vec<String>,
    /// 0-100 after deductions.
    pub score: u32,
}

/// Runs the structural checks. Patterns compile once at construction; the
/// analyzer is immutable afterwards.
pub struct FormattingAnalyzer {
    email: Regex,
    phone: Regex,
    education: Regex,
    experience: Regex,
    skills: Regex,
    summary: Regex,
    achievements: Regex,
}

impl FormattingAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(FormattingAnalyzer {
            email: compile(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}", "email")?,
            phone: compile(
                r"(\+?1?[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
                "phone",
            )?,
            education: compile(
                r"(education|academic|degree|university|college|bachelor|master|phd)",
                "education section",
            )?,
            experience: compile(
                r"(experience|employment|work history|professional background)",
                "experience section",
            )?,
            skills: compile(
                r"(skills|technologies|technical skills|competencies|proficiencies)",
                "skills section",
            )?,
            summary: compile(r"(summary|objective|profile|about)", "summary section")?,
            achievements: compile(
                r"(?i)\d+%|\$\d+|\d+\s*(years?|months?|projects?|team|people|clients?)",
                "quantified achievements",
            )?,
        })
    }

    /// Scores the structure of a resume.
    ///
    /// Issues are pushed in a fixed order (contact details, sections, length,
    /// writing style) so downstream consumers see a stable list.
    pub fn analyze(&self, resume_text: &str) -> FormattingAnalysis {
        let lowered = resume_text.to_lowercase();

        let has_email = self.email.is_match(resume_text);
        let has_phone = self.phone.is_match(resume_text);
        let has_education = self.education.is_match(&lowered);
        let has_experience = self.experience.is_match(&lowered);
        let has_skills = self.skills.is_match(&lowered);
        let has_summary = self.summary.is_match(&lowered);

        let mut issues = Vec::new();
        let mut score: i32 = 100;

        if !has_email {
            issues.push("Missing email address".to_string());
            score -= MISSING_EMAIL_PENALTY;
        }
        if !has_phone {
            issues.push("Missing phone number".to_string());
            score -= MISSING_PHONE_PENALTY;
        }
        if !has_education {
            issues.push("Missing Education section".to_string());
            score -= MISSING_EDUCATION_PENALTY;
        }
        if !has_experience {
            issues.push("Missing Experience section".to_string());
            score -= MISSING_EXPERIENCE_PENALTY;
        }
        if !has_skills {
            issues.push("Missing Skills section".to_string());
            score -= MISSING_SKILLS_PENALTY;
        }
        if !has_summary {
            issues.push("Consider adding a Professional Summary section".to_string());
            score -= MISSING_SUMMARY_PENALTY;
        }

        let word_count = resume_text.split_whitespace().count();
        if word_count < MIN_WORD_COUNT {
            issues.push("Resume appears too short. Consider adding more detail.".to_string());
            score -= TOO_SHORT_PENALTY;
        }
        if word_count > MAX_WORD_COUNT {
            issues.push("Resume may be too long. Consider condensing to 1-2 pages.".to_string());
            score -= TOO_LONG_PENALTY;
        }

        if !ACTION_VERBS.iter().any(|verb| lowered.contains(verb)) {
            issues.push("Use more action verbs to describe your accomplishments".to_string());
            score -= NO_ACTION_VERBS_PENALTY;
        }
        if !self.achievements.is_match(resume_text) {
            issues.push(
                "Add quantifiable achievements (numbers, percentages, metrics)".to_string(),
            );
            score -= NO_ACHIEVEMENTS_PENALTY;
        }

        FormattingAnalysis {
            has_proper_sections: has_education && has_experience && has_skills,
            has_contact_info: has_email || has_phone,
            has_education,
            has_experience,
            has_skills,
            issues,
            score: score.max(0) as u32,
        }
    }

    /// LinkedIn presence. Detected but not part of the score yet.
    pub fn has_linkedin(&self, resume_text: &str) -> bool {
        resume_text.to_lowercase().contains("linkedin")
    }
}

fn compile(pattern: &str, name: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("invalid {name} pattern"))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
