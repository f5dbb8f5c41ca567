//! Trending-topic harvesting
//!
//! Each [`TrendFeed`] fetches one fixed endpoint and normalizes its items into
//! [`TrendRecord`]s. The [`TrendHarvester`] runs a list of feeds in order.

mod baidu_hot;
mod google_trends;
mod reddit;
mod zhihu;

pub use baidu_hot::{parse_baidu_hot_board, BaiduHotFeed};
pub use google_trends::{parse_trends_rss, GoogleTrendsFeed};
pub use reddit::{parse_reddit_listing, RedditHotFeed};
pub use zhihu::{parse_zhihu_hot_list, ZhihuHotFeed};

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use niche_core::{Region, TrendRecord, TIMESTAMP_FORMAT};
use tracing::{info, warn};

use crate::error::HarvestError;
use crate::http::HttpFetcher;
use crate::outcome::{Harvest, RequestOutcome, RunSummary};
use crate::pacer::RequestPacer;

/// Items kept per feed
pub const ITEMS_PER_FEED: usize = 20;

/// Category given to records from feeds that carry no topical category
pub const TRENDING_CATEGORY: &str = "trending";

/// One trending-topic endpoint
#[async_trait]
pub trait TrendFeed: Send + Sync {
    /// Feed name for logs and reports
    fn name(&self) -> String;

    async fn fetch(&self) -> Result<Vec<TrendRecord>, HarvestError>;
}

/// Capture time stamped on records fetched now
pub(crate) fn capture_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Feeds for each region, in region order.
///
/// US: Google Trends daily (through `proxied`) and Reddit hot (through
/// `proxied`). CN: Baidu hot board and Zhihu hot list (through `direct`).
pub fn feeds_for_regions(
    regions: &[Region],
    subreddit: &str,
    proxied: &HttpFetcher,
    direct: &HttpFetcher,
) -> Vec<Box<dyn TrendFeed>> {
    let mut feeds: Vec<Box<dyn TrendFeed>> = Vec::new();
    for region in regions {
        match region {
            Region::Us => {
                feeds.push(Box::new(GoogleTrendsFeed::new(proxied.clone(), "US")));
                feeds.push(Box::new(RedditHotFeed::new(proxied.clone(), subreddit)));
            }
            Region::Cn => {
                feeds.push(Box::new(BaiduHotFeed::new(direct.clone())));
                feeds.push(Box::new(ZhihuHotFeed::new(direct.clone())));
            }
        }
    }
    feeds
}

/// Fetches a fixed list of feeds one after another
pub struct TrendHarvester {
    feeds: Vec<Box<dyn TrendFeed>>,
    pacer: RequestPacer,
}

impl TrendHarvester {
    pub fn new(feeds: Vec<Box<dyn TrendFeed>>, delay: Duration) -> Self {
        Self {
            feeds,
            pacer: RequestPacer::new(delay, "trends"),
        }
    }

    pub fn feed_names(&self) -> Vec<String> {
        self.feeds.iter().map(|feed| feed.name()).collect()
    }

    /// Fetch every feed. A failing feed contributes nothing and is recorded;
    /// records are deduplicated by exact keyword text, first capture wins.
    pub async fn harvest(&self) -> Harvest<TrendRecord> {
        let mut records = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut summary = RunSummary::default();

        for (i, feed) in self.feeds.iter().enumerate() {
            self.pacer.acquire().await;
            info!("[{}/{}] Fetching {}", i + 1, self.feeds.len(), feed.name());

            let result = feed.fetch().await;
            match &result {
                Ok(items) => info!("{}: {} items", feed.name(), items.len()),
                Err(e) => warn!("Failed to fetch feed {}: {}", feed.name(), e),
            }
            summary.record(feed.name(), RequestOutcome::from_result(&result));

            if let Ok(items) = result {
                records.extend(
                    items
                        .into_iter()
                        .filter(|record| seen.insert(record.keyword.clone())),
                );
            }
        }

        info!(
            "Harvested {} trend records from {} feeds",
            records.len(),
            self.feeds.len()
        );
        Harvest::new(records, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use niche_core::{Traffic, TrendSource};

    struct StaticFeed {
        name: &'static str,
        result: Result<Vec<&'static str>, fn() -> HarvestError>,
    }

    #[async_trait]
    impl TrendFeed for StaticFeed {
        fn name(&self) -> String {
            self.name.to_string()
        }

        async fn fetch(&self) -> Result<Vec<TrendRecord>, HarvestError> {
            match &self.result {
                Ok(keywords) => Ok(keywords
                    .iter()
                    .map(|k| {
                        TrendRecord::new(
                            *k,
                            TrendSource::BaiduHot,
                            Traffic::Unavailable,
                            TRENDING_CATEGORY,
                            "2026-10-19 09:00",
                        )
                    })
                    .collect()),
                Err(make) => Err(make()),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_harvest_skips_failed_feed_and_dedups() {
        let feeds: Vec<Box<dyn TrendFeed>> = vec![
            Box::new(StaticFeed {
                name: "first",
                result: Ok(vec!["solar eclipse", "iphone 17"]),
            }),
            Box::new(StaticFeed {
                name: "broken",
                result: Err(|| HarvestError::Proxy("connection refused".into())),
            }),
            Box::new(StaticFeed {
                name: "second",
                result: Ok(vec!["iphone 17", "world cup"]),
            }),
        ];

        let harvest = TrendHarvester::new(feeds, Duration::from_millis(300))
            .harvest()
            .await;

        let keywords: Vec<&str> = harvest.items.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["solar eclipse", "iphone 17", "world cup"]);
        assert_eq!(harvest.summary.succeeded, 2);
        assert_eq!(harvest.summary.fatal, 1);
        assert_eq!(harvest.summary.notes[0].target, "broken");
    }

    #[test]
    fn test_capture_timestamp_has_minute_precision() {
        // "YYYY-mm-dd HH:MM"
        assert_eq!(capture_timestamp().len(), 16);
    }

    #[test]
    fn test_feeds_follow_region_order() {
        let proxied = HttpFetcher::new(&crate::http::HttpConfig::feeds(None)).unwrap();
        let direct = proxied.clone();
        let names: Vec<String> =
            feeds_for_regions(&[Region::Cn, Region::Us], "technology", &proxied, &direct)
                .iter()
                .map(|f| f.name())
                .collect();
        assert_eq!(
            names,
            vec![
                "Baidu Hot",
                "Zhihu Hot",
                "Google Trends (US)",
                "Reddit r/technology"
            ]
        );
    }
}
