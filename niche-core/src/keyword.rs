//! Keyword candidates harvested from suggestion endpoints

use serde::{Deserialize, Serialize};

/// Anything that carries keyword text the scorer and categorizer can read
pub trait Keyworded {
    fn keyword(&self) -> &str;
}

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A harvested keyword string. Two candidates are the same keyword only when
/// their text is byte-for-byte equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordCandidate {
    pub text: String,
}

impl KeywordCandidate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Keyworded for KeywordCandidate {
    fn keyword(&self) -> &str {
        &self.text
    }
}

impl From<String> for KeywordCandidate {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// A keyword with its opportunity score, as exported to CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    pub keyword: String,
    /// Opportunity score (0 - 100)
    pub score: u8,
    pub word_count: usize,
}

impl ScoredKeyword {
    pub fn new(keyword: impl Into<String>, score: u8) -> Self {
        let keyword = keyword.into();
        let word_count = word_count(&keyword);
        Self {
            keyword,
            score,
            word_count,
        }
    }
}

impl Keyworded for ScoredKeyword {
    fn keyword(&self) -> &str {
        &self.keyword
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_collapses_whitespace() {
        assert_eq!(word_count("air  fryer\trecipes "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_scored_keyword_derives_word_count() {
        let kw = ScoredKeyword::new("best air fryer", 40);
        assert_eq!(kw.word_count, 3);
        assert_eq!(kw.keyword(), "best air fryer");
    }

    #[test]
    fn test_candidate_identity_is_case_sensitive() {
        assert_ne!(KeywordCandidate::new("Air Fryer"), KeywordCandidate::new("air fryer"));
    }
}
