//! Trend harvesting over captured feed bodies, plus live endpoint checks
//!
//! The live checks hit the real endpoints and are ignored by default:
//!   cargo test -p niche-harvest --test trend_feeds -- --ignored --nocapture

use std::time::Duration;

use async_trait::async_trait;
use niche_core::{Region, TrendRecord};
use niche_harvest::trends::{parse_reddit_listing, parse_trends_rss, parse_zhihu_hot_list};
use niche_harvest::{
    feeds_for_regions, GoogleSuggestClient, HarvestError, HttpConfig, HttpFetcher, QueryPlan,
    SuggestionHarvester, TrendFeed, TrendHarvester,
};

const STAMP: &str = "2026-10-19 09:00";

const TRENDS_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss xmlns:ht="https://trends.google.com/trending/rss" version="2.0">
  <channel>
    <title>Daily Search Trends</title>
    <link>https://trends.google.com</link>
    <description>Recent searches</description>
    <item><title>iphone 17 review</title><ht:approx_traffic>200,000+</ht:approx_traffic></item>
    <item><title>world series</title><ht:approx_traffic>1,000,000+</ht:approx_traffic></item>
  </channel>
</rss>"#;

const REDDIT_LISTING: &str = r#"{"kind": "Listing", "data": {"children": [
    {"kind": "t3", "data": {"title": "world series", "score": 99000, "subreddit": "baseball"}},
    {"kind": "t3", "data": {"title": "Best budget laptop?", "score": 4100, "subreddit": "technology"}}
]}}"#;

const ZHIHU_HOT: &str = r#"{"data": [
    {"target": {"title": "如何评价新款手机"}, "detail_text": "1234 万热度"}
]}"#;

/// Serves one captured body through the matching parser
enum Captured {
    Trends,
    Reddit,
    Zhihu,
    Blocked,
}

#[async_trait]
impl TrendFeed for Captured {
    fn name(&self) -> String {
        match self {
            Captured::Trends => "Google Trends (US)",
            Captured::Reddit => "Reddit r/all",
            Captured::Zhihu => "Zhihu Hot",
            Captured::Blocked => "Baidu Hot",
        }
        .to_string()
    }

    async fn fetch(&self) -> Result<Vec<TrendRecord>, HarvestError> {
        match self {
            Captured::Trends => parse_trends_rss(TRENDS_RSS.as_bytes(), "US", STAMP),
            Captured::Reddit => parse_reddit_listing(REDDIT_LISTING, "all", STAMP),
            Captured::Zhihu => parse_zhihu_hot_list(ZHIHU_HOT, STAMP),
            Captured::Blocked => Err(HarvestError::ApiError {
                status: 403,
                message: "Forbidden".to_string(),
            }),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_harvest_across_feeds() {
    let feeds: Vec<Box<dyn TrendFeed>> = vec![
        Box::new(Captured::Trends),
        Box::new(Captured::Reddit),
        Box::new(Captured::Blocked),
        Box::new(Captured::Zhihu),
    ];
    let harvest = TrendHarvester::new(feeds, Duration::from_millis(300))
        .harvest()
        .await;

    let keywords: Vec<&str> = harvest.items.iter().map(|r| r.keyword.as_str()).collect();
    assert_eq!(
        keywords,
        vec![
            "iphone 17 review",
            "world series",
            "Best budget laptop?",
            "如何评价新款手机"
        ]
    );

    // the Google Trends capture of "world series" wins over Reddit's
    assert_eq!(harvest.items[1].traffic.as_str(), Some("1,000,000+"));
    assert_eq!(harvest.items[3].traffic.as_str(), Some("1234 万热度"));

    assert_eq!(harvest.summary.succeeded, 3);
    assert_eq!(harvest.summary.empty, 1);
    assert!(!harvest.summary.has_fatal());
    assert_eq!(harvest.summary.notes[0].target, "Baidu Hot");
}

#[tokio::test]
#[ignore = "hits the live Google suggest endpoint"]
async fn live_google_suggestions() {
    let client = GoogleSuggestClient::new(&HttpConfig::suggestions(None)).expect("client");
    let plan = QueryPlan {
        suffixes: vec!["a".to_string()],
        prefixes: vec!["best".to_string()],
    };
    let harvest = SuggestionHarvester::new(client, plan, Duration::from_millis(300))
        .harvest("coffee maker", "en")
        .await;

    println!("{:#?}", harvest.items);
    assert_eq!(harvest.summary.total(), 2);
}

#[tokio::test]
#[ignore = "hits the live trend feeds"]
async fn live_trend_feeds() {
    let proxied = HttpFetcher::new(&HttpConfig::feeds(None)).expect("fetcher");
    let direct = proxied.clone();
    let feeds = feeds_for_regions(&[Region::Us, Region::Cn], "all", &proxied, &direct);

    let harvest = TrendHarvester::new(feeds, Duration::from_millis(300))
        .harvest()
        .await;

    for record in &harvest.items {
        println!("[{}] {} ({})", record.source, record.keyword, record.traffic);
    }
    println!("{:#?}", harvest.summary);
    assert_eq!(harvest.summary.total(), 4);
}
