//! Reddit hot listing

use async_trait::async_trait;
use niche_core::{Traffic, TrendRecord, TrendSource};
use serde::Deserialize;

use crate::error::HarvestError;
use crate::http::HttpFetcher;

use super::{capture_timestamp, TrendFeed, ITEMS_PER_FEED};

const REDDIT_BASE_URL: &str = "https://www.reddit.com";

/// Reddit rejects browser-like agents without cookies
const REDDIT_USER_AGENT: &str = "TrendFinder/1.0";

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: Post,
}

#[derive(Debug, Deserialize)]
struct Post {
    title: String,
    #[serde(default)]
    score: i64,
    subreddit: Option<String>,
}

/// Hot posts of one subreddit
pub struct RedditHotFeed {
    http: HttpFetcher,
    subreddit: String,
}

impl RedditHotFeed {
    pub fn new(http: HttpFetcher, subreddit: &str) -> Self {
        Self {
            http,
            subreddit: subreddit.trim_start_matches("r/").to_string(),
        }
    }
}

#[async_trait]
impl TrendFeed for RedditHotFeed {
    fn name(&self) -> String {
        TrendSource::Reddit {
            subreddit: self.subreddit.clone(),
        }
        .label()
    }

    async fn fetch(&self) -> Result<Vec<TrendRecord>, HarvestError> {
        let url = format!("{}/r/{}/hot.json?limit=25", REDDIT_BASE_URL, self.subreddit);
        let body = self
            .http
            .get_text_as(&url, Some(REDDIT_USER_AGENT))
            .await?;
        parse_reddit_listing(&body, &self.subreddit, &capture_timestamp())
    }
}

/// Post titles become keywords, upvotes the traffic, the post's subreddit the category
pub fn parse_reddit_listing(
    body: &str,
    subreddit: &str,
    timestamp: &str,
) -> Result<Vec<TrendRecord>, HarvestError> {
    let listing: Listing = serde_json::from_str(body)
        .map_err(|e| HarvestError::ParseError(format!("Reddit listing: {}", e)))?;

    let source = TrendSource::Reddit {
        subreddit: subreddit.to_string(),
    };

    Ok(listing
        .data
        .children
        .into_iter()
        .take(ITEMS_PER_FEED)
        .map(|child| {
            let post = child.data;
            TrendRecord::new(
                post.title,
                source.clone(),
                Traffic::reported(format!("{} upvotes", post.score)),
                post.subreddit.unwrap_or_else(|| "general".to_string()),
                timestamp,
            )
        })
        .collect())
}
