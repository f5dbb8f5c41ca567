//! Competitor site analysis results

use serde::{Deserialize, Serialize};

/// Heading structure of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStructure {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    /// First five h1 texts
    pub h1_texts: Vec<String>,
    /// First ten h2 texts
    pub h2_texts: Vec<String>,
}

/// What a competitor's landing page reveals about its niche strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub url: String,
    pub domain: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Entries of the `keywords` meta tag
    pub keywords: Vec<String>,
    pub content_structure: ContentStructure,
    /// Detected ad networks and affiliate programs
    pub monetization: Vec<String>,
    /// Detected site generators / frameworks
    pub tech_stack: Vec<String>,
    /// Number of distinct article-like links on the page
    pub article_count: usize,
    pub sample_articles: Vec<String>,
    /// Navigation link labels
    pub categories: Vec<String>,
}

impl CompetitorAnalysis {
    /// An analysis with only the address filled in
    pub fn new(url: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            domain: domain.into(),
            ..Self::default()
        }
    }
}
