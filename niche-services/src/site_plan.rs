//! Site-building plan from ranked keywords and competitor analyses

use indexmap::{IndexMap, IndexSet};
use niche_core::{CompetitorAnalysis, ContentStrategy, ScoredKeyword, SitePlan};

/// Keywords the plan is derived from
pub const PLAN_KEYWORDS: usize = 20;

const INITIAL_ARTICLES: usize = 10;
const FREQUENT_WORDS: usize = 10;
const NICHE_WORDS: usize = 3;

const STOPWORDS: &[&str] = &["the", "a", "an", "of", "to", "in", "for", "and", "or"];

const DEFAULT_MONETIZATION: &[&str] = &["Google AdSense", "Amazon Associates"];

/// Most common words of the keywords, stopwords dropped afterwards
fn common_words(keywords: &[&ScoredKeyword]) -> Vec<String> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for keyword in keywords {
        for word in keyword.keyword.to_lowercase().split_whitespace() {
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(FREQUENT_WORDS)
        .map(|(word, _)| word)
        .filter(|word| !STOPWORDS.contains(&word.as_str()))
        .collect()
}

fn recommend_tech_stack(competitors: &[CompetitorAnalysis]) -> String {
    let uses = |name: &str| {
        competitors
            .iter()
            .any(|c| c.tech_stack.iter().any(|tech| tech == name))
    };

    if uses("WordPress") {
        "WordPress (most common, rich plugin ecosystem)".to_string()
    } else if uses("Next.js") {
        "Next.js (fast and SEO friendly)".to_string()
    } else {
        "Next.js (recommended for automated publishing)".to_string()
    }
}

/// Plan a niche site from scored keywords and the analyzed competitors.
///
/// Returns `None` when no competitor was analyzed.
pub fn plan_site(keywords: &[ScoredKeyword], competitors: &[CompetitorAnalysis]) -> Option<SitePlan> {
    if competitors.is_empty() {
        return None;
    }

    let mut top: Vec<&ScoredKeyword> = keywords.iter().collect();
    top.sort_by(|a, b| b.score.cmp(&a.score));
    top.truncate(PLAN_KEYWORDS);

    let common = common_words(&top);
    let niche = common
        .iter()
        .take(NICHE_WORDS)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let domain_base: String = common.iter().take(2).map(String::as_str).collect();

    let detected: IndexSet<String> = competitors
        .iter()
        .flat_map(|c| c.monetization.iter().cloned())
        .collect();
    let monetization_plan = if detected.is_empty() {
        DEFAULT_MONETIZATION.iter().map(|m| m.to_string()).collect()
    } else {
        detected.into_iter().collect()
    };

    Some(SitePlan {
        niche,
        recommended_domains: vec![
            format!("{}hub.com", domain_base),
            format!("{}guide.com", domain_base),
        ],
        content_strategy: ContentStrategy::default(),
        monetization_plan,
        tech_stack: recommend_tech_stack(competitors),
        initial_articles: top
            .iter()
            .take(INITIAL_ARTICLES)
            .map(|k| k.keyword.clone())
            .collect(),
    })
}
