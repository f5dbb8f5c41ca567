//! Harvesters for keyword and trend discovery
//!
//! This crate provides clients for collecting raw material from:
//! - Suggestion endpoints: Google and Baidu autocomplete (seed + a-z, prefix + seed)
//! - Trend feeds: Google Trends daily RSS, Reddit hot listing, Zhihu hot list,
//!   Baidu realtime hot-search board
//! - Competitor pages: landing-page structure, monetization and tech stack
//!
//! Every request produces a typed [`RequestOutcome`]; outcomes are folded into
//! a [`RunSummary`] that travels with the harvested data.

pub mod competitor;
pub mod error;
pub mod http;
pub mod outcome;
pub mod pacer;
pub mod suggest;
pub mod trends;

pub use competitor::{analyze_html, domain_of, CompetitorAnalyzer};
pub use error::HarvestError;
pub use http::{HttpConfig, HttpFetcher, DEFAULT_USER_AGENT};
pub use outcome::{Harvest, OutcomeNote, RequestOutcome, RunSummary};
pub use pacer::RequestPacer;
pub use suggest::{
    BaiduSuggestClient, GoogleSuggestClient, QueryPlan, SuggestionEndpoint, SuggestionHarvester,
};
pub use trends::{
    feeds_for_regions, BaiduHotFeed, GoogleTrendsFeed, RedditHotFeed, TrendFeed, TrendHarvester,
    ZhihuHotFeed,
};
