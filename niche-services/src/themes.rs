//! Recurring-term extraction

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A recurring term and how many keywords mention it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTerm {
    pub term: String,
    pub count: usize,
}

/// Most frequent lower-cased words longer than three characters.
///
/// When `exclude` is given, that phrase is removed from each keyword before
/// splitting so the seed itself does not dominate. Ties keep first-seen order.
pub fn top_terms<'a, I>(keywords: I, exclude: Option<&str>, limit: usize) -> Vec<ThemeTerm>
where
    I: IntoIterator<Item = &'a str>,
{
    let exclude = exclude
        .map(|phrase| phrase.trim().to_lowercase())
        .filter(|phrase| !phrase.is_empty());

    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for keyword in keywords {
        let mut lower = keyword.to_lowercase();
        if let Some(phrase) = &exclude {
            lower = lower.replace(phrase.as_str(), "");
        }
        for word in lower.split_whitespace() {
            if word.chars().count() > 3 {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut terms: Vec<ThemeTerm> = counts
        .into_iter()
        .map(|(term, count)| ThemeTerm { term, count })
        .collect();
    terms.sort_by(|a, b| b.count.cmp(&a.count));
    terms.truncate(limit);
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_terms_excludes_seed_and_short_words() {
        let keywords = [
            "air fryer recipes chicken",
            "air fryer recipes for chicken wings",
            "Air Fryer Recipes vegetables",
            "easy air fryer recipes",
        ];
        let terms = top_terms(keywords, Some("air fryer recipes"), 10);

        assert_eq!(
            terms,
            vec![
                ThemeTerm { term: "chicken".into(), count: 2 },
                ThemeTerm { term: "wings".into(), count: 1 },
                ThemeTerm { term: "vegetables".into(), count: 1 },
                ThemeTerm { term: "easy".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_limit_and_no_exclusion() {
        let keywords = ["coffee maker", "coffee grinder", "cold brew coffee"];
        let terms = top_terms(keywords, None, 2);
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0], ThemeTerm { term: "coffee".into(), count: 3 });
        assert_eq!(terms[1].term, "maker");
    }
}
