//! Trend Service
//!
//! Collects trending topics for the selected regions, scores each as a site
//! opportunity, buckets them by niche and turns the strongest buckets into
//! suggestions.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use niche_core::{Categorized, ProxyConfig, RunConfig, ScoredTrend, Suggestion, TrendRecord};
use niche_harvest::{
    feeds_for_regions, GoogleTrendsFeed, Harvest, HttpConfig, HttpFetcher, RunSummary, TrendFeed,
    TrendHarvester,
};

use crate::categorizer::{categorize, default_categories, CategoryRule};
use crate::error::ServiceResult;
use crate::scoring::{RuleTable, Scorer};
use crate::suggestions::generate;
use crate::themes::{top_terms, ThemeTerm};

/// Theme terms reported for a trend run
pub const TREND_THEME_TERMS: usize = 30;

/// Trends shown by a connectivity probe
pub const PROBE_ITEMS: usize = 10;

/// Result of a trend run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Every scored trend, in capture order
    pub trends: Vec<ScoredTrend>,
    pub categorized: Categorized<ScoredTrend>,
    /// Best opportunity first
    pub suggestions: Vec<Suggestion>,
    pub themes: Vec<ThemeTerm>,
    pub summary: RunSummary,
}

impl TrendReport {
    pub fn is_empty(&self) -> bool {
        self.trends.is_empty()
    }
}

/// Trend-harvesting pipeline
pub struct TrendService {
    harvester: TrendHarvester,
    scorer: Scorer,
    categories: Vec<CategoryRule>,
}

impl TrendService {
    pub fn new(harvester: TrendHarvester, scorer: Scorer) -> Self {
        Self {
            harvester,
            scorer,
            categories: default_categories(),
        }
    }

    /// Build the pipeline for a run. Chinese hot lists always connect
    /// directly; the other feeds go through the configured proxy.
    pub fn from_config(config: &RunConfig) -> ServiceResult<Self> {
        config.validate_for_trends()?;

        let http = HttpConfig::feeds_for(config);
        let proxied = HttpFetcher::new(&http)?;
        let direct = HttpFetcher::new(&http.direct())?;
        let feeds = feeds_for_regions(&config.regions, &config.subreddit, &proxied, &direct);

        let harvester = TrendHarvester::new(feeds, Duration::from_millis(config.request_delay_ms));
        info!("Trend feeds: {}", harvester.feed_names().join(", "));

        Ok(Self::new(
            harvester,
            Scorer::for_today(RuleTable::trend_opportunity()),
        ))
    }

    /// Score, categorize and derive suggestions from already-harvested records
    pub fn analyze(&self, harvest: Harvest<TrendRecord>) -> TrendReport {
        let trends: Vec<ScoredTrend> = harvest
            .items
            .into_iter()
            .map(|record| self.scorer.score_trend(record))
            .collect();

        let categorized = categorize(trends.clone(), &self.categories);
        for (category, count) in categorized.counts() {
            info!("  {}: {}", category, count);
        }

        let suggestions = generate(&categorized, self.scorer.year());
        let themes = top_terms(
            trends.iter().map(|t| t.record.keyword.as_str()),
            None,
            TREND_THEME_TERMS,
        );

        TrendReport {
            trends,
            categorized,
            suggestions,
            themes,
            summary: harvest.summary,
        }
    }

    /// Run the whole trend pipeline
    #[instrument(skip(self))]
    pub async fn run(&self) -> TrendReport {
        let harvest = self.harvester.harvest().await;
        let report = self.analyze(harvest);
        info!(
            "Trend run finished: {} trends, {} suggestions",
            report.trends.len(),
            report.suggestions.len()
        );
        report
    }
}

/// Quick connectivity check: today's top Google Trends searches for a region
pub async fn probe(geo: &str, proxy: Option<ProxyConfig>) -> ServiceResult<Harvest<TrendRecord>> {
    let feed: Box<dyn TrendFeed> = Box::new(GoogleTrendsFeed::new(
        HttpFetcher::new(&HttpConfig::feeds(proxy))?,
        geo,
    ));
    let mut harvest = TrendHarvester::new(vec![feed], Duration::ZERO)
        .harvest()
        .await;
    harvest.items.truncate(PROBE_ITEMS);
    Ok(harvest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use niche_core::{Traffic, TrendSource};
    use niche_harvest::HarvestError;

    fn record(keyword: &str, traffic: Option<&str>) -> TrendRecord {
        TrendRecord::new(
            keyword,
            TrendSource::GoogleTrends { geo: "US".into() },
            Traffic::from(traffic.map(str::to_string)),
            "trending",
            "2026-10-19 09:00",
        )
    }

    struct FixedFeed(Vec<TrendRecord>);

    #[async_trait::async_trait]
    impl TrendFeed for FixedFeed {
        fn name(&self) -> String {
            "fixed".to_string()
        }

        async fn fetch(&self) -> Result<Vec<TrendRecord>, HarvestError> {
            Ok(self.0.clone())
        }
    }

    fn service(records: Vec<TrendRecord>) -> TrendService {
        let feeds: Vec<Box<dyn TrendFeed>> = vec![Box::new(FixedFeed(records))];
        TrendService::new(
            TrendHarvester::new(feeds, Duration::ZERO),
            Scorer::new(RuleTable::trend_opportunity(), 2026),
        )
    }

    #[tokio::test]
    async fn test_trend_pipeline() {
        let report = service(vec![
            record("best budget phone 2026", Some("200,000+")),
            record("iphone case", None),
            record("coffee", Some("5,000+")),
            record("solar eclipse", Some("500,000+")),
        ])
        .run()
        .await;

        assert_eq!(report.trends.len(), 4);
        // 20 commercial + 15 length + 10 digit + 30 traffic
        assert_eq!(report.trends[0].score, 75);
        assert_eq!(report.categorized.len(), 4);
        assert_eq!(report.categorized.other().len(), 1);

        // Food's only trend scores 0, so only Tech & Gadgets is suggested
        assert_eq!(report.suggestions.len(), 1);
        let tech = &report.suggestions[0];
        assert_eq!(tech.category, "Tech & Gadgets");
        assert_eq!(tech.seed_keyword, "best budget phone 2026");
        assert_eq!(tech.related_trends, vec!["iphone case"]);
        assert_eq!(tech.suggested_domains[0], "bestbudgethub.com");
        assert_eq!(report.summary.succeeded, 1);
    }

    #[tokio::test]
    async fn test_empty_run() {
        let report = service(Vec::new()).run().await;
        assert!(report.is_empty());
        assert!(report.suggestions.is_empty());
        assert_eq!(report.summary.empty, 1);
    }
}
