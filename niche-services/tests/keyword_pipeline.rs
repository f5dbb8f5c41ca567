//! End-to-end keyword pipeline against a scripted suggestion endpoint

use std::time::Duration;

use async_trait::async_trait;
use niche_core::RunConfig;
use niche_harvest::{HarvestError, QueryPlan, SuggestionEndpoint};
use niche_services::{boxed_harvester, KeywordService, RuleTable, Scorer};

/// Answers "air fryer {letter}" queries from a fixed table; everything else,
/// including the prefix queries, comes back empty.
struct ScriptedEndpoint;

#[async_trait]
impl SuggestionEndpoint for ScriptedEndpoint {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, query: &str, _language: &str) -> Result<Vec<String>, HarvestError> {
        let completions: &[&str] = match query {
            "air fryer b" => &["best air fryer chicken recipes 2024", "air fryer basket"],
            "air fryer c" => &["air fryer chicken", "cheap air fryer deals"],
            "air fryer h" => &[
                "healthy air fryer recipes",
                "how long to cook fries in air fryer",
            ],
            "air fryer w" => &["air fryer wings", "air fryer basket"],
            _ => &[],
        };
        Ok(completions.iter().map(|c| c.to_string()).collect())
    }
}

fn service() -> KeywordService {
    KeywordService::new(
        vec![boxed_harvester(
            ScriptedEndpoint,
            QueryPlan::google(),
            Duration::from_millis(300),
        )],
        Scorer::new(RuleTable::keyword_mining(), 2024),
    )
}

#[tokio::test(start_paused = true)]
async fn test_scored_and_sorted_keywords() {
    let report = service().run(&RunConfig::with_seed("air fryer")).await;

    let ranked: Vec<(&str, u8)> = report
        .keywords
        .iter()
        .map(|k| (k.keyword.as_str(), k.score))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("best air fryer chicken recipes 2024", 75),
            ("cheap air fryer deals", 55),
            ("how long to cook fries in air fryer", 40),
            ("healthy air fryer recipes", 35),
            ("air fryer chicken", 30),
            // equal scores fall back to alphabetical order
            ("air fryer basket", 20),
            ("air fryer wings", 20),
        ]
    );
    assert_eq!(report.top(5).len(), 5);
    assert_eq!(report.keywords[3].word_count, 4);
}

#[tokio::test(start_paused = true)]
async fn test_run_summary_and_themes() {
    let report = service().run(&RunConfig::with_seed("air fryer")).await;

    // 26 letter queries + 7 prefix queries
    assert_eq!(report.summary.total(), 33);
    assert_eq!(report.summary.succeeded, 4);
    assert_eq!(report.summary.empty, 29);
    assert!(!report.summary.has_fatal());

    let themes: Vec<&str> = report.themes.iter().map(|t| t.term.as_str()).collect();
    assert_eq!(&themes[..2], &["chicken", "recipes"]);
    assert!(!themes.contains(&"fryer"));

    assert!(report.competitors.is_empty());
    assert!(report.plan.is_none());
}
