#![allow(dead_code)]

//! Job keyword detection: the terms a job description actually asks for.
//!
//! Two sources feed the result set: curated technology/skill pattern groups
//! run over the raw text, and the top frequency-ranked general keywords from
//! the shared extractor. Pattern hits come first so the most load-bearing
//! terms survive any downstream truncation.

use anyhow::{Context, Result};
use indexmap::IndexSet;
use regex::Regex;

use crate::analysis::keywords::KeywordExtractor;

/// Declarative pattern groups: one word-bounded alternation per category.
///
/// Matching happens on the lowercased raw text (not tokens), so multi-word
/// terms like `machine learning` and slash terms like `ci/cd` are caught
/// whole. Alternatives whose `\b` cannot be satisfied against adjacent
/// punctuation (`c++`, `c#`, `.net`) never fire here; such terms reach the
/// set through the frequency pool instead.
const PATTERN_GROUPS: &[(&str, &str)] = &[
    (
        "languages",
        r"\b(javascript|python|java|c\+\+|c#|ruby|php|swift|kotlin|go|rust|typescript|scala|r)\b",
    ),
    (
        "frameworks",
        r"\b(react|angular|vue|node\.?js|express|django|flask|spring|rails|laravel|\.net|tensorflow|pytorch)\b",
    ),
    (
        "databases",
        r"\b(sql|mysql|postgresql|mongodb|redis|elasticsearch|oracle|dynamodb|cassandra)\b",
    ),
    (
        "cloud-devops",
        r"\b(aws|azure|gcp|docker|kubernetes|jenkins|ci/cd|terraform|ansible|linux)\b",
    ),
    (
        "tooling",
        r"\b(git|agile|scrum|jira|rest|api|microservices|machine learning|data science|ai)\b",
    ),
    (
        "soft-skills",
        r"\b(leadership|communication|teamwork|problem.solving|analytical|management)\b",
    ),
];

/// How many frequency-ranked general keywords round out the set.
const GENERAL_KEYWORD_LIMIT: usize = 30;

/// A compiled pattern group.
pub struct PatternGroup {
    pub category: &'static str,
    regex: Regex,
}

/// Detects job keywords via pattern groups plus a general frequency pool.
///
/// Patterns are compiled once at construction; the detector is immutable
/// afterwards.
pub struct JobKeywordDetector {
    groups: Vec<PatternGroup>,
}

impl JobKeywordDetector {
    pub fn new() -> Result<Self> {
        let mut groups = Vec::with_capacity(PATTERN_GROUPS.len());
        for &(category, alternation) in PATTERN_GROUPS {
            let regex = Regex::new(alternation)
                .with_context(|| format!("invalid '{category}' pattern group"))?;
            groups.push(PatternGroup { category, regex });
        }
        Ok(JobKeywordDetector { groups })
    }

    /// Returns the ordered, deduplicated keyword set for a job description.
    ///
    /// Order is deterministic: pattern groups in declaration order, matches
    /// within a group in positional order, then general keywords in extractor
    /// rank order. First insertion wins on duplicates.
    pub fn detect(&self, extractor: &KeywordExtractor, job_description: &str) -> IndexSet<String> {
        let lowered = job_description.to_lowercase();
        let mut keywords = IndexSet::new();

        for group in &self.groups {
            for hit in group.regex.find_iter(&lowered) {
                keywords.insert(hit.as_str().to_string());
            }
        }

        for keyword in extractor
            .extract(job_description)
            .into_iter()
            .take(GENERAL_KEYWORD_LIMIT)
        {
            keywords.insert(keyword);
        }

        keywords
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(job_description: &str) -> IndexSet<String> {
        let detector = JobKeywordDetector::new().unwrap();
        detector.detect(&KeywordExtractor::default(), job_description)
    }

    #[test]
    fn test_multiword_and_slash_terms_match_on_raw_text() {
        let keywords = detect("We practice CI/CD and machine learning daily");
        assert!(keywords.contains("ci/cd"));
        assert!(keywords.contains("machine learning"));
        // "daily" contains "ai" but the boundary check rejects it.
        assert!(!keywords.contains("ai"));
    }

    #[test]
    fn test_detected_keywords_are_lowercase() {
        let keywords = detect("PYTHON and Docker on AWS");
        assert!(keywords.contains("python"));
        assert!(keywords.contains("docker"));
        assert!(keywords.contains("aws"));
        assert!(!keywords.contains("PYTHON"));
    }

    #[test]
    fn test_pattern_hits_precede_general_keywords() {
        // "kafka" is the most frequent token but "python" is a pattern hit,
        // so python takes the first slot.
        let keywords = detect("backend kafka kafka python");
        let ordered: Vec<&str> = keywords.iter().map(String::as_str).collect();
        assert_eq!(ordered, vec!["python", "kafka", "backend"]);
    }

    #[test]
    fn test_duplicates_collapse_to_first_insertion() {
        let keywords = detect("python python python");
        assert_eq!(keywords.len(), 1);
        assert!(keywords.contains("python"));
    }

    #[test]
    fn test_general_keywords_capped_at_thirty() {
        let words: Vec<String> = (0..35).map(|i| format!("flurm{i:02}")).collect();
        let keywords = detect(&words.join(" "));
        assert_eq!(keywords.len(), 30);
        assert!(keywords.contains("flurm00"));
        assert!(!keywords.contains("flurm34"));
    }

    #[test]
    fn test_csharp_alone_yields_nothing() {
        // '#' blocks the trailing word boundary in the pattern, and the token
        // is too short for the frequency pool. The term is undetectable.
        let keywords = detect("c#");
        assert!(keywords.is_empty(), "got {keywords:?}");
    }

    #[test]
    fn test_cpp_arrives_via_frequency_pool() {
        // Same boundary restriction as c#, but "c++" clears the length floor
        // in the frequency pool.
        let keywords = detect("c++ and c# teams");
        assert!(keywords.contains("c++"));
        assert!(!keywords.contains("c#"));
    }

    #[test]
    fn test_nodejs_spelling_variants_both_match() {
        let keywords = detect("node.js and nodejs shops");
        assert!(keywords.contains("node.js"));
        assert!(keywords.contains("nodejs"));
    }

    #[test]
    fn test_empty_job_description_yields_empty_set() {
        assert!(detect("").is_empty());
    }
}
