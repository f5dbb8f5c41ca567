//! Core types for Niche Finder
//!
//! This crate defines the shared data structures used across the workspace:
//! keyword candidates, trend records, category buckets, suggestions, site
//! plans, competitor analyses and the run configuration.

pub mod category;
pub mod competitor;
pub mod config;
pub mod error;
pub mod keyword;
pub mod plan;
pub mod trend;

pub use category::{Categorized, Suggestion, OTHER_CATEGORY};
pub use competitor::{CompetitorAnalysis, ContentStructure};
pub use config::{
    ProxyConfig, Region, RunConfig, DEFAULT_PROXY_PORT, DEFAULT_REQUEST_DELAY_MS,
    MAX_COMPETITOR_URLS,
};
pub use error::{NicheError, NicheResult};
pub use keyword::{word_count, KeywordCandidate, Keyworded, ScoredKeyword};
pub use plan::{ContentStrategy, SitePlan};
pub use trend::{ScoredTrend, Traffic, TrendRecord, TrendSource, TIMESTAMP_FORMAT};
