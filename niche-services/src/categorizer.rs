//! Topical categorization of keywords and trends

use niche_core::{Categorized, Keyworded};
use serde::{Deserialize, Serialize};

/// A category and the substrings that place a keyword in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub label: String,
    /// Lower-case needles matched as substrings of the lower-cased keyword
    pub needles: Vec<String>,
}

impl CategoryRule {
    pub fn new(label: &str, needles: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            needles: needles.iter().map(|n| n.to_lowercase()).collect(),
        }
    }

    pub fn matches(&self, keyword: &str) -> bool {
        let lower = keyword.to_lowercase();
        self.needles.iter().any(|needle| lower.contains(needle.as_str()))
    }
}

/// Niche categories in priority order
pub fn default_categories() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            "Tech & Gadgets",
            &[
                "tech", "phone", "laptop", "software", "ai", "app", "game", "iphone", "android",
            ],
        ),
        CategoryRule::new(
            "Health & Fitness",
            &[
                "health",
                "fitness",
                "diet",
                "workout",
                "weight",
                "yoga",
                "nutrition",
            ],
        ),
        CategoryRule::new(
            "Finance",
            &[
                "stock",
                "crypto",
                "bitcoin",
                "investment",
                "money",
                "finance",
                "trading",
            ],
        ),
        CategoryRule::new(
            "Home & Living",
            &["home", "kitchen", "furniture", "decor", "garden", "cleaning"],
        ),
        CategoryRule::new(
            "Fashion & Beauty",
            &["fashion", "beauty", "makeup", "skincare", "clothing", "style"],
        ),
        CategoryRule::new(
            "Travel",
            &["travel", "hotel", "flight", "vacation", "trip", "destination"],
        ),
        CategoryRule::new(
            "Food",
            &["food", "recipe", "cooking", "restaurant", "coffee", "wine"],
        ),
        CategoryRule::new(
            "Education",
            &["course", "learn", "tutorial", "education", "study", "training"],
        ),
        CategoryRule::new(
            "Entertainment",
            &["movie", "music", "celebrity", "tv", "show", "entertainment"],
        ),
    ]
}

/// Partition records by the first matching category.
///
/// Categories are tried in declared order; a record that matches none goes to
/// the `other` bucket. Every input record lands in exactly one bucket and
/// keeps its relative order within it.
pub fn categorize<T: Keyworded>(records: Vec<T>, rules: &[CategoryRule]) -> Categorized<T> {
    let mut categorized = Categorized::with_labels(rules.iter().map(|rule| rule.label.clone()));

    for record in records {
        match rules.iter().find(|rule| rule.matches(record.keyword())) {
            Some(rule) => categorized.push(&rule.label, record),
            None => categorized.push_other(record),
        }
    }

    categorized
}

#[cfg(test)]
mod tests {
    use super::*;
    use niche_core::KeywordCandidate;

    fn candidates(texts: &[&str]) -> Vec<KeywordCandidate> {
        texts.iter().map(|t| KeywordCandidate::new(*t)).collect()
    }

    #[test]
    fn test_first_declared_category_wins() {
        // "kitchen" is Home & Living, "recipe" is Food; Home & Living is declared first
        let categorized = categorize(
            candidates(&["kitchen recipe ideas"]),
            &default_categories(),
        );
        assert_eq!(categorized.get("Home & Living").map(<[_]>::len), Some(1));
        assert_eq!(categorized.get("Food").map(<[_]>::len), Some(0));
    }

    #[test]
    fn test_earlier_rule_wins_on_shared_needle() {
        let rules = vec![
            CategoryRule::new("Gadgets", &["phone"]),
            CategoryRule::new("Audio", &["phone", "speaker"]),
        ];
        let categorized = categorize(candidates(&["wireless headphones", "smart speaker"]), &rules);

        let gadgets: Vec<&str> = categorized
            .get("Gadgets")
            .map(|items| items.iter().map(|c| c.text.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(gadgets, vec!["wireless headphones"]);
        assert_eq!(
            categorized.get("Audio").map(|items| items[0].text.as_str()),
            Some("smart speaker")
        );
        assert_eq!(categorized.get("Audio").map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_partition_covers_every_record() {
        let input = candidates(&[
            "iPhone 17 launch",
            "yoga for beginners",
            "bitcoin halving",
            "solar eclipse",
            "Paris travel guide",
            "new coffee shop",
            "zzz",
        ]);
        let total = input.len();
        let categorized = categorize(input, &default_categories());

        let bucketed: usize = categorized.buckets().map(|(_, items)| items.len()).sum::<usize>()
            + categorized.other().len();
        assert_eq!(bucketed, total);
        assert_eq!(categorized.len(), total);

        let other: Vec<&str> = categorized.other().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(other, vec!["solar eclipse", "zzz"]);
        assert_eq!(
            categorized.get("Tech & Gadgets").map(|items| items[0].text.as_str()),
            Some("iPhone 17 launch")
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let rules = vec![CategoryRule::new("Coffee", &["Espresso"])];
        let categorized = categorize(candidates(&["ESPRESSO machine"]), &rules);
        assert_eq!(categorized.get("Coffee").map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_declared_order_is_kept() {
        let categorized = categorize(Vec::<KeywordCandidate>::new(), &default_categories());
        let labels: Vec<&str> = categorized.buckets().map(|(label, _)| label).collect();
        assert_eq!(labels.first(), Some(&"Tech & Gadgets"));
        assert_eq!(labels.last(), Some(&"Entertainment"));
        assert!(categorized.is_empty());
    }
}
