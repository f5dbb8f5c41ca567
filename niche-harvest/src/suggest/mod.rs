//! Autocomplete harvesting
//!
//! A [`QueryPlan`] expands a seed keyword into a fixed battery of partial
//! queries; a [`SuggestionHarvester`] runs the plan against one
//! [`SuggestionEndpoint`] and collects the distinct completions.

mod baidu;
mod google;

pub use baidu::{parse_baidu_jsonp, BaiduSuggestClient};
pub use google::{parse_google_suggestions, GoogleSuggestClient};

use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexSet;
use tracing::{info, instrument, warn};

use crate::error::HarvestError;
use crate::outcome::{Harvest, RequestOutcome, RunSummary};
use crate::pacer::RequestPacer;

/// An autocomplete API returning likely completions for a partial query
#[async_trait]
pub trait SuggestionEndpoint: Send + Sync {
    /// Endpoint name for logs and reports
    fn name(&self) -> &str;

    /// Completions for one partial query
    async fn complete(&self, query: &str, language: &str) -> Result<Vec<String>, HarvestError>;
}

#[async_trait]
impl<E: SuggestionEndpoint + ?Sized> SuggestionEndpoint for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn complete(&self, query: &str, language: &str) -> Result<Vec<String>, HarvestError> {
        (**self).complete(query, language).await
    }
}

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Fixed query variations built around a seed keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    /// Appended after the seed: "{seed} {suffix}"
    pub suffixes: Vec<String>,
    /// Prepended before the seed: "{prefix} {seed}"
    pub prefixes: Vec<String>,
}

impl QueryPlan {
    /// Seed + each letter a-z, then question/modifier word + seed
    pub fn google() -> Self {
        Self {
            suffixes: LETTERS.chars().map(String::from).collect(),
            prefixes: ["how to", "what is", "why", "when", "where", "best", "top"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Seed + each letter a-z and digit 0-9
    pub fn baidu() -> Self {
        Self {
            suffixes: LETTERS.chars().chain(DIGITS.chars()).map(String::from).collect(),
            prefixes: Vec::new(),
        }
    }

    /// Every query of the plan, suffix queries first
    pub fn queries(&self, seed: &str) -> Vec<String> {
        let seed = seed.trim();
        self.suffixes
            .iter()
            .map(|suffix| format!("{} {}", seed, suffix))
            .chain(self.prefixes.iter().map(|prefix| format!("{} {}", prefix, seed)))
            .collect()
    }
}

/// Runs a query plan against one endpoint
pub struct SuggestionHarvester<E> {
    endpoint: E,
    plan: QueryPlan,
    pacer: RequestPacer,
}

impl<E: SuggestionEndpoint> SuggestionHarvester<E> {
    pub fn new(endpoint: E, plan: QueryPlan, delay: Duration) -> Self {
        let pacer = RequestPacer::new(delay, endpoint.name());
        Self {
            endpoint,
            plan,
            pacer,
        }
    }

    /// Issue every query of the plan in order.
    ///
    /// A failed query contributes nothing and is recorded in the summary; it
    /// never stops the batch. Completions are deduplicated by exact text and
    /// keep first-seen order.
    #[instrument(skip(self), fields(endpoint = %self.endpoint.name()))]
    pub async fn harvest(&self, seed: &str, language: &str) -> Harvest<String> {
        let mut suggestions: IndexSet<String> = IndexSet::new();
        let mut summary = RunSummary::default();

        for query in self.plan.queries(seed) {
            self.pacer.acquire().await;

            let result = self.endpoint.complete(&query, language).await;
            if let Err(e) = &result {
                warn!("[{}] query '{}' failed: {}", self.endpoint.name(), query, e);
            }
            summary.record(query.as_str(), RequestOutcome::from_result(&result));

            if let Ok(completions) = result {
                suggestions.extend(completions.into_iter().filter(|s| !s.trim().is_empty()));
            }
        }

        info!(
            "[{}] {} distinct suggestions from {} queries ({} empty, {} fatal)",
            self.endpoint.name(),
            suggestions.len(),
            summary.total(),
            summary.empty,
            summary.fatal
        );

        Harvest::new(suggestions.into_iter().collect(), summary)
    }
}
