//! Business logic services for Niche Finder
//!
//! This crate turns harvested raw material into ranked, categorized results:
//! heuristic scoring, topical categorization, niche suggestions, theme
//! extraction and site planning, plus the keyword and trend pipelines that
//! drive the harvesters and return structured reports.

pub mod categorizer;
pub mod error;
pub mod keyword_service;
pub mod scoring;
pub mod site_plan;
pub mod suggestions;
pub mod themes;
pub mod trend_service;

pub use categorizer::{categorize, default_categories, CategoryRule};
pub use error::{ServiceError, ServiceResult};
pub use keyword_service::{
    boxed_harvester, rank_keywords, DynHarvester, KeywordReport, KeywordService,
    KEYWORD_THEME_TERMS,
};
pub use scoring::{parse_traffic, Predicate, Rule, RuleTable, Scorer};
pub use site_plan::{plan_site, PLAN_KEYWORDS};
pub use suggestions::{content_ideas, domain_ideas, generate, OPPORTUNITY_THRESHOLD};
pub use themes::{top_terms, ThemeTerm};
pub use trend_service::{probe, TrendReport, TrendService, PROBE_ITEMS, TREND_THEME_TERMS};
