//! Google autocomplete client

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::HarvestError;
use crate::http::{HttpConfig, HttpFetcher};

use super::SuggestionEndpoint;

const GOOGLE_SUGGEST_URL: &str = "http://suggestqueries.google.com/complete/search";

/// Google suggest client (`client=firefox` JSON flavour)
pub struct GoogleSuggestClient {
    http: HttpFetcher,
}

impl GoogleSuggestClient {
    pub fn new(config: &HttpConfig) -> Result<Self, HarvestError> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
        })
    }
}

fn query_url(query: &str, language: &str) -> String {
    format!(
        "{}?client=firefox&q={}&hl={}",
        GOOGLE_SUGGEST_URL,
        urlencoding::encode(query),
        urlencoding::encode(language)
    )
}

#[async_trait]
impl SuggestionEndpoint for GoogleSuggestClient {
    fn name(&self) -> &str {
        "Google"
    }

    async fn complete(&self, query: &str, language: &str) -> Result<Vec<String>, HarvestError> {
        let body = self.http.get_text(&query_url(query, language)).await?;
        let suggestions = parse_google_suggestions(&body)?;
        debug!("[Google] '{}' -> {} suggestions", query, suggestions.len());
        Ok(suggestions)
    }
}

/// Parse `["query", ["completion", ...], ...]`.
///
/// A response with no second element means "no completions".
pub fn parse_google_suggestions(body: &str) -> Result<Vec<String>, HarvestError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| HarvestError::ParseError(format!("Google suggest: {}", e)))?;

    let array = value.as_array().ok_or_else(|| {
        HarvestError::ParseError("Google suggest: response is not a JSON array".to_string())
    })?;

    let Some(completions) = array.get(1) else {
        return Ok(Vec::new());
    };

    let completions = completions.as_array().ok_or_else(|| {
        HarvestError::ParseError("Google suggest: second element is not an array".to_string())
    })?;

    Ok(completions
        .iter()
        .filter_map(|c| c.as_str())
        .map(str::to_string)
        .collect())
}
