//! Keyword extraction: frequency-ranked terms from free text.
//!
//! This is the shared tokenizer for both sides of an analysis: the job
//! description feeds it to build the general keyword pool, and callers can
//! use it directly to inspect any text.

use std::collections::HashSet;

use indexmap::IndexMap;

/// Common English function words excluded from keyword extraction.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "this", "but", "they",
    "have", "had", "what", "when", "where", "who", "which", "why", "how", "all", "each", "every",
    "both", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "so", "than", "too", "very", "can", "just", "should", "now", "or", "if", "our", "we",
    "you", "your", "their", "them", "i", "me", "my", "myself", "us", "am",
];

/// Tokens shorter than this are discarded (articles, initials, stray digits).
const MIN_TOKEN_LEN: usize = 3;

/// Frequency-based keyword extractor with an injected stop-word table.
///
/// Immutable after construction; safe to share across threads.
pub struct KeywordExtractor {
    stop_words: HashSet<&'static str>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::with_stop_words(STOP_WORDS)
    }
}

impl KeywordExtractor {
    /// Builds an extractor over a custom stop-word table.
    pub fn with_stop_words(words: &[&'static str]) -> Self {
        KeywordExtractor {
            stop_words: words.iter().copied().collect(),
        }
    }

    /// Extracts distinct keywords ranked by frequency.
    ///
    /// Algorithm:
    /// 1. Lowercase, then replace every character outside `[a-z0-9 \s + # .]`
    ///    with a space. `+`, `#`, and `.` survive so terms like `c++` and
    ///    `node.js` stay intact (sentence-final periods also stick to their
    ///    token; downstream matching relies on that).
    /// 2. Split on whitespace runs.
    /// 3. Drop tokens shorter than `MIN_TOKEN_LEN` and stop words.
    /// 4. Count occurrences; order by count descending, ties broken by first
    ///    occurrence in the text (stable sort over insertion order).
    pub fn extract(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);

        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for token in normalized.split_whitespace() {
            if token.len() < MIN_TOKEN_LEN || self.stop_words.contains(token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        // Stable: equal counts keep first-occurrence order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked.into_iter().map(|(token, _)| token.to_string()).collect()
    }
}

/// Lowercases and maps every non-token character to a space.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if is_token_char(c) { c } else { ' ' })
        .collect()
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '#' | '.')
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::default()
    }

    #[test]
    fn test_stop_words_are_filtered() {
        let keywords = extractor().extract("the team and the manager with the roadmap");
        assert!(!keywords.contains(&"the".to_string()));
        assert!(!keywords.contains(&"and".to_string()));
        assert!(!keywords.contains(&"with".to_string()));
        assert!(keywords.contains(&"team".to_string()));
        assert!(keywords.contains(&"manager".to_string()));
        assert!(keywords.contains(&"roadmap".to_string()));
    }

    #[test]
    fn test_short_tokens_are_dropped() {
        // "go" and "c4" fall under the length floor even though neither is a stop word.
        let keywords = extractor().extract("go c4 ml");
        assert!(keywords.is_empty(), "got {keywords:?}");
    }

    #[test]
    fn test_compound_terms_survive_normalization() {
        let keywords = extractor().extract("Expert in C++ and Node.js development");
        assert!(keywords.contains(&"c++".to_string()));
        assert!(keywords.contains(&"node.js".to_string()));
        // "c#" would be kept by the character filter but falls under the length floor.
        let keywords = extractor().extract("C# C# C#");
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_sentence_periods_stick_to_tokens() {
        // The character filter keeps '.', so sentence-final periods are part
        // of the token. Matching downstream depends on this exact behavior.
        let keywords = extractor().extract("Five years of experience. More experience.");
        assert!(keywords.contains(&"experience.".to_string()));
        assert!(!keywords.contains(&"experience".to_string()));
    }

    #[test]
    fn test_frequency_ordering() {
        let keywords = extractor().extract("rust python rust kafka rust python");
        assert_eq!(keywords, vec!["rust", "python", "kafka"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let keywords = extractor().extract("zebra apple zebra apple mango");
        assert_eq!(
            keywords,
            vec!["zebra", "apple", "mango"],
            "equal counts must preserve first-occurrence order"
        );
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let keywords = extractor().extract("rust,kafka;python|terraform");
        assert_eq!(keywords, vec!["rust", "kafka", "python", "terraform"]);
    }

    #[test]
    fn test_empty_input_yields_no_keywords() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract("   \n\t  ").is_empty());
    }

    #[test]
    fn test_output_has_no_duplicates() {
        let keywords = extractor().extract("docker docker docker kubernetes kubernetes");
        assert_eq!(keywords, vec!["docker", "kubernetes"]);
    }

    #[test]
    fn test_reextraction_is_idempotent() {
        let first = extractor().extract("Led migration of billing services to Kubernetes");
        let second = extractor().extract(&first.join(" "));
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_stop_word_table() {
        let custom = KeywordExtractor::with_stop_words(&["rust"]);
        let keywords = custom.extract("rust kafka rust");
        assert_eq!(keywords, vec!["kafka"]);
    }
}
