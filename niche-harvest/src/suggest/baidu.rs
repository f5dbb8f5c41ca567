//! Baidu autocomplete client (Chinese-language seeds)

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::HarvestError;
use crate::http::{HttpConfig, HttpFetcher};

use super::SuggestionEndpoint;

const BAIDU_SUGGEST_URL: &str = "https://www.baidu.com/sugrec";

#[derive(Debug, Deserialize)]
struct SugrecPayload {
    #[serde(default)]
    g: Vec<SugrecItem>,
}

#[derive(Debug, Deserialize)]
struct SugrecItem {
    q: String,
}

/// Baidu `sugrec` client. The endpoint answers with JSONP.
pub struct BaiduSuggestClient {
    http: HttpFetcher,
}

impl BaiduSuggestClient {
    pub fn new(config: &HttpConfig) -> Result<Self, HarvestError> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
        })
    }
}

#[async_trait]
impl SuggestionEndpoint for BaiduSuggestClient {
    fn name(&self) -> &str {
        "Baidu"
    }

    // Baidu picks the language from the query itself
    async fn complete(&self, query: &str, _language: &str) -> Result<Vec<String>, HarvestError> {
        let url = format!(
            "{}?prod=pc&wd={}&cb=jQuery",
            BAIDU_SUGGEST_URL,
            urlencoding::encode(query)
        );
        let body = self.http.get_text(&url).await?;
        let suggestions = parse_baidu_jsonp(&body)?;
        debug!("[Baidu] '{}' -> {} suggestions", query, suggestions.len());
        Ok(suggestions)
    }
}

/// Unwrap `jQuery({...})` and read `g[].q`
pub fn parse_baidu_jsonp(body: &str) -> Result<Vec<String>, HarvestError> {
    let start = body.find('(');
    let end = body.rfind(')');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &body[start + 1..end],
        _ => {
            return Err(HarvestError::ParseError(
                "Baidu suggest: response is not JSONP".to_string(),
            ))
        }
    };

    let payload: SugrecPayload = serde_json::from_str(json)
        .map_err(|e| HarvestError::ParseError(format!("Baidu suggest: {}", e)))?;

    Ok(payload.g.into_iter().map(|item| item.q).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_jsonp() {
        let body = r#"jQuery({"err_no":0,"errmsg":"","q":"咖啡机 a","g":[{"type":"sug","sa":"s_1","q":"咖啡机 api"},{"type":"sug","sa":"s_2","q":"咖啡机 amazon"}],"slid":"1"})"#;
        assert_eq!(
            parse_baidu_jsonp(body).unwrap(),
            vec!["咖啡机 api", "咖啡机 amazon"]
        );
    }

    #[test]
    fn test_parse_without_suggestions() {
        let body = r#"jQuery({"err_no":0,"q":"zzqx"})"#;
        assert!(parse_baidu_jsonp(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        assert!(parse_baidu_jsonp("verification required").is_err());
        assert!(parse_baidu_jsonp(")(").is_err());
    }
}
