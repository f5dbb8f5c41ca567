//! Google Trends daily trending searches (RSS)

use async_trait::async_trait;
use niche_core::{Traffic, TrendRecord, TrendSource};
use tracing::debug;

use crate::error::HarvestError;
use crate::http::HttpFetcher;

use super::{capture_timestamp, TrendFeed, ITEMS_PER_FEED, TRENDING_CATEGORY};

const GOOGLE_TRENDS_RSS_URL: &str = "https://trends.google.com/trends/trendingsearches/daily/rss";

/// Daily trending searches for one country
pub struct GoogleTrendsFeed {
    http: HttpFetcher,
    geo: String,
}

impl GoogleTrendsFeed {
    pub fn new(http: HttpFetcher, geo: &str) -> Self {
        Self {
            http,
            geo: geo.to_uppercase(),
        }
    }

    fn source(&self) -> TrendSource {
        TrendSource::GoogleTrends {
            geo: self.geo.clone(),
        }
    }
}

#[async_trait]
impl TrendFeed for GoogleTrendsFeed {
    fn name(&self) -> String {
        self.source().label()
    }

    async fn fetch(&self) -> Result<Vec<TrendRecord>, HarvestError> {
        let url = format!("{}?geo={}", GOOGLE_TRENDS_RSS_URL, urlencoding::encode(&self.geo));
        let content = self.http.get_bytes(&url).await?;
        let records = parse_trends_rss(&content, &self.geo, &capture_timestamp())?;
        debug!("Google Trends ({}) returned {} items", self.geo, records.len());
        Ok(records)
    }
}

/// Read `<item><title>` and `<ht:approx_traffic>` from the first items of the feed
pub fn parse_trends_rss(
    content: &[u8],
    geo: &str,
    timestamp: &str,
) -> Result<Vec<TrendRecord>, HarvestError> {
    let channel = rss::Channel::read_from(content)
        .map_err(|e| HarvestError::ParseError(format!("Failed to parse Google Trends RSS: {}", e)))?;

    let source = TrendSource::GoogleTrends {
        geo: geo.to_string(),
    };

    Ok(channel
        .items()
        .iter()
        .take(ITEMS_PER_FEED)
        .filter_map(|item| {
            let keyword = item.title()?.trim();
            if keyword.is_empty() {
                return None;
            }

            let traffic = item
                .extensions()
                .get("ht")
                .and_then(|ht| ht.get("approx_traffic"))
                .and_then(|values| values.first())
                .and_then(|ext| ext.value())
                .map(Traffic::reported)
                .unwrap_or_default();

            Some(TrendRecord::new(
                keyword,
                source.clone(),
                traffic,
                TRENDING_CATEGORY,
                timestamp,
            ))
        })
        .collect())
}
