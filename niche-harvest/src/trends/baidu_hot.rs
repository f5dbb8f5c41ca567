//! Baidu realtime hot-search board (HTML)

use async_trait::async_trait;
use niche_core::{Traffic, TrendRecord, TrendSource};
use scraper::{Html, Selector};

use crate::error::HarvestError;
use crate::http::HttpFetcher;

use super::{capture_timestamp, TrendFeed, ITEMS_PER_FEED, TRENDING_CATEGORY};

const BAIDU_HOT_URL: &str = "https://top.baidu.com/board?tab=realtime";

const ENTRY_SELECTOR: &str = "div.c-single-text-ellipsis";

/// Baidu hot-search board
pub struct BaiduHotFeed {
    http: HttpFetcher,
}

impl BaiduHotFeed {
    pub fn new(http: HttpFetcher) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TrendFeed for BaiduHotFeed {
    fn name(&self) -> String {
        TrendSource::BaiduHot.label()
    }

    async fn fetch(&self) -> Result<Vec<TrendRecord>, HarvestError> {
        let html = self.http.get_text(BAIDU_HOT_URL).await?;
        parse_baidu_hot_board(&html, &capture_timestamp())
    }
}

/// Entry texts of the first board rows; entries of two characters or fewer are noise
pub fn parse_baidu_hot_board(html: &str, timestamp: &str) -> Result<Vec<TrendRecord>, HarvestError> {
    let selector = Selector::parse(ENTRY_SELECTOR)
        .map_err(|e| HarvestError::ParseError(format!("Invalid selector: {}", e)))?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .take(ITEMS_PER_FEED)
        .filter_map(|entry| {
            let text = entry.text().collect::<String>();
            let keyword = text.trim();
            (keyword.chars().count() > 2).then(|| {
                TrendRecord::new(
                    keyword,
                    TrendSource::BaiduHot,
                    Traffic::Unavailable,
                    TRENDING_CATEGORY,
                    timestamp,
                )
            })
        })
        .collect())
}
