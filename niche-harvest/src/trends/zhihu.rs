//! Zhihu hot list

use async_trait::async_trait;
use niche_core::{Traffic, TrendRecord, TrendSource};
use serde::Deserialize;

use crate::error::HarvestError;
use crate::http::HttpFetcher;

use super::{capture_timestamp, TrendFeed, ITEMS_PER_FEED, TRENDING_CATEGORY};

const ZHIHU_HOT_URL: &str = "https://www.zhihu.com/api/v3/feed/topstory/hot-lists/total";

#[derive(Debug, Deserialize)]
struct HotList {
    #[serde(default)]
    data: Vec<HotItem>,
}

#[derive(Debug, Deserialize)]
struct HotItem {
    target: Option<HotTarget>,
    detail_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HotTarget {
    title: Option<String>,
}

/// Zhihu site-wide hot list
pub struct ZhihuHotFeed {
    http: HttpFetcher,
}

impl ZhihuHotFeed {
    pub fn new(http: HttpFetcher) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TrendFeed for ZhihuHotFeed {
    fn name(&self) -> String {
        TrendSource::ZhihuHot.label()
    }

    async fn fetch(&self) -> Result<Vec<TrendRecord>, HarvestError> {
        let body = self.http.get_text(ZHIHU_HOT_URL).await?;
        parse_zhihu_hot_list(&body, &capture_timestamp())
    }
}

/// Question titles become keywords; `detail_text` ("1234 万热度") is the traffic
pub fn parse_zhihu_hot_list(body: &str, timestamp: &str) -> Result<Vec<TrendRecord>, HarvestError> {
    let list: HotList = serde_json::from_str(body)
        .map_err(|e| HarvestError::ParseError(format!("Zhihu hot list: {}", e)))?;

    Ok(list
        .data
        .into_iter()
        .take(ITEMS_PER_FEED)
        .filter_map(|item| {
            let title = item.target?.title?;
            let title = title.trim();
            if title.is_empty() {
                return None;
            }
            Some(TrendRecord::new(
                title,
                TrendSource::ZhihuHot,
                Traffic::from(item.detail_text),
                TRENDING_CATEGORY,
                timestamp,
            ))
        })
        .collect())
}
