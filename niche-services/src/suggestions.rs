//! Niche suggestions from categorized trends

use niche_core::{Categorized, ScoredTrend, Suggestion};

/// A category is suggested only when its best trend scores above this
pub const OPPORTUNITY_THRESHOLD: u8 = 30;

const RELATED_TRENDS: usize = 3;

/// Domain stem from the first two words of a keyword.
///
/// Words longer than three characters are kept, stripped to alphanumerics;
/// when that leaves nothing the short words are used instead.
fn domain_core(keyword: &str) -> String {
    let lower = keyword.to_lowercase();
    let tokens: Vec<String> = lower
        .split_whitespace()
        .take(2)
        .map(|token| token.chars().filter(|c| c.is_alphanumeric()).collect())
        .collect();

    let long: String = tokens
        .iter()
        .filter(|token| token.chars().count() > 3)
        .map(String::as_str)
        .collect();
    if long.is_empty() {
        tokens.concat()
    } else {
        long
    }
}

/// Four domain-name ideas for a keyword
pub fn domain_ideas(keyword: &str) -> Vec<String> {
    let core = domain_core(keyword);
    vec![
        format!("{}hub.com", core),
        format!("{}guide.com", core),
        format!("best{}.com", core),
        format!("{}review.com", core),
    ]
}

/// Five article ideas for a keyword
pub fn content_ideas(keyword: &str, year: i32) -> Vec<String> {
    vec![
        format!("Best {} in {}", keyword, year),
        format!("How to choose {}", keyword),
        format!("{} review and comparison", keyword),
        format!("Top 10 {} for beginners", keyword),
        format!("{} buying guide", keyword),
    ]
}

fn suggest(category: &str, trends: &[ScoredTrend], year: i32) -> Option<Suggestion> {
    let mut ranked: Vec<&ScoredTrend> = trends.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let (top, rest) = ranked.split_first()?;
    if top.score <= OPPORTUNITY_THRESHOLD {
        return None;
    }

    let seed = top.record.keyword.as_str();
    Some(Suggestion {
        category: category.to_string(),
        seed_keyword: seed.to_string(),
        opportunity_score: top.score,
        related_trends: rest
            .iter()
            .take(RELATED_TRENDS)
            .map(|t| t.record.keyword.clone())
            .collect(),
        suggested_domains: domain_ideas(seed),
        content_ideas: content_ideas(seed, year),
    })
}

/// One suggestion per declared category whose best trend clears
/// [`OPPORTUNITY_THRESHOLD`], best opportunity first.
///
/// The `other` bucket never produces a suggestion.
pub fn generate(categorized: &Categorized<ScoredTrend>, year: i32) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = categorized
        .buckets()
        .filter_map(|(category, trends)| suggest(category, trends, year))
        .collect();
    suggestions.sort_by(|a, b| b.opportunity_score.cmp(&a.opportunity_score));
    suggestions
}
