//! Site-building plan derived from keywords and competitor analyses

use serde::{Deserialize, Serialize};

/// First-month content plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStrategy {
    pub total_articles: u32,
    /// Article type and how many of it to publish
    pub article_types: Vec<(String, u32)>,
    pub publishing_frequency: String,
    pub word_count: String,
}

impl Default for ContentStrategy {
    fn default() -> Self {
        Self {
            total_articles: 30,
            article_types: vec![
                ("Product reviews".to_string(), 10),
                ("Comparisons".to_string(), 5),
                ("How-to guides".to_string(), 10),
                ("List posts".to_string(), 5),
            ],
            publishing_frequency: "1 article per day".to_string(),
            word_count: "1500-2500 words per article".to_string(),
        }
    }
}

/// Recommended niche site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePlan {
    pub niche: String,
    pub recommended_domains: Vec<String>,
    pub content_strategy: ContentStrategy,
    pub monetization_plan: Vec<String>,
    pub tech_stack: String,
    /// Titles for the first articles, best keywords first
    pub initial_articles: Vec<String>,
}
