//! Keyword extraction: turns free text into a ranked list of significant terms.
//!
//! Algorithm:
//! 1. Lower-case, replace every non-word, non-whitespace character with a space
//! 2. Split on whitespace, drop short tokens and stop-words
//! 3. Count occurrences, remembering where each token was first seen
//! 4. Stable sort by count descending (ties keep first-seen order), keep the top N

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::ats::policy::AtsPolicy;

/// Common English function words excluded from keyword extraction.
const STOP_WORD_LIST: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "will", "would", "should", "could", "may", "might",
    "must", "can", "shall", "this", "that", "these", "those", "i", "you", "he", "she", "it",
    "we", "they", "them", "their", "what", "which", "who", "when", "where", "why", "how", "all",
    "each", "every", "both", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "just", "dont", "now",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Extracts keywords using the default policy.
pub fn extract_keywords(text: &str) -> Vec<String> {
    KeywordExtractor::default().extract(text)
}

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    min_len: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::from_policy(&AtsPolicy::default())
    }
}

/// Occurrence count plus the position of the first occurrence in the filtered stream.
struct TokenStats {
    count: usize,
    first_seen: usize,
}

impl KeywordExtractor {
    pub fn from_policy(policy: &AtsPolicy) -> Self {
        Self {
            min_len: policy.min_keyword_len,
            max_keywords: policy.max_keywords,
        }
    }

    /// Returns unique keywords ranked by frequency, most frequent first.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);

        let mut table: HashMap<&str, TokenStats> = HashMap::new();
        for (position, token) in normalized
            .split_whitespace()
            .filter(|t| self.is_keyword(t))
            .enumerate()
        {
            table
                .entry(token)
                .and_modify(|stats| stats.count += 1)
                .or_insert(TokenStats {
                    count: 1,
                    first_seen: position,
                });
        }

        let mut ranked: Vec<(&str, TokenStats)> = table.into_iter().collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });

        ranked
            .into_iter()
            .take(self.max_keywords)
            .map(|(token, _)| token.to_string())
            .collect()
    }

    fn is_keyword(&self, token: &str) -> bool {
        token.len() > self.min_len && !is_stop_word(token)
    }
}

/// Lower-cases and blanks out everything except ASCII word characters and whitespace.
/// After this pass every surviving token is ASCII, so byte length equals char count.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}
