//! Shared HTTP client configuration
//!
//! One [`HttpConfig`] (user agent, timeout, optional forward proxy) is applied
//! uniformly to every request a harvester makes.

use std::time::Duration;

use niche_core::{ProxyConfig, RunConfig};
use reqwest::{Client, Proxy, Response};
use tracing::debug;

use crate::error::HarvestError;

/// Browser-like user agent sent unless a feed overrides it
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Client settings for one family of endpoints
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub proxy: Option<ProxyConfig>,
}

impl HttpConfig {
    pub fn new(timeout: Duration, proxy: Option<ProxyConfig>) -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout,
            proxy,
        }
    }

    /// Autocomplete endpoints answer fast; 5 second timeout
    pub fn suggestions(proxy: Option<ProxyConfig>) -> Self {
        Self::new(Duration::from_secs(5), proxy)
    }

    /// Trend feeds; 15 second timeout
    pub fn feeds(proxy: Option<ProxyConfig>) -> Self {
        Self::new(Duration::from_secs(15), proxy)
    }

    /// Competitor pages and hot-list boards; 10 second timeout
    pub fn pages(proxy: Option<ProxyConfig>) -> Self {
        Self::new(Duration::from_secs(10), proxy)
    }

    /// Feed settings for a run
    pub fn feeds_for(run: &RunConfig) -> Self {
        Self::feeds(run.proxy.clone())
    }

    /// Same settings without the proxy
    pub fn direct(&self) -> Self {
        Self {
            proxy: None,
            ..self.clone()
        }
    }
}

/// A reqwest client built from an [`HttpConfig`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    proxied: bool,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, HarvestError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str());

        if let Some(proxy) = &config.proxy {
            let proxy = Proxy::all(proxy.url.as_str())
                .map_err(|e| HarvestError::InvalidConfig(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        } else {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| HarvestError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            proxied: config.proxy.is_some(),
        })
    }

    async fn get(&self, url: &str, user_agent: Option<&str>) -> Result<Response, HarvestError> {
        debug!("GET {}", url);
        let mut request = self.client.get(url);
        if let Some(agent) = user_agent {
            request = request.header(reqwest::header::USER_AGENT, agent);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HarvestError::from_reqwest(e, self.proxied))?;

        if !response.status().is_success() {
            return Err(HarvestError::ApiError {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", url),
            });
        }

        Ok(response)
    }

    /// Fetch a body as text
    pub async fn get_text(&self, url: &str) -> Result<String, HarvestError> {
        self.get_text_as(url, None).await
    }

    /// Fetch a body as text, overriding the user agent
    pub async fn get_text_as(
        &self,
        url: &str,
        user_agent: Option<&str>,
    ) -> Result<String, HarvestError> {
        self.get(url, user_agent)
            .await?
            .text()
            .await
            .map_err(|e| HarvestError::from_reqwest(e, self.proxied))
    }

    /// Fetch a body as raw bytes
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HarvestError> {
        let content = self
            .get(url, None)
            .await?
            .bytes()
            .await
            .map_err(|e| HarvestError::from_reqwest(e, self.proxied))?;
        Ok(content.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_proxy_is_config_error() {
        let config = HttpConfig::feeds(Some(ProxyConfig::new("http://proxy:notaport")));
        let err = HttpFetcher::new(&config).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_direct_drops_proxy() {
        let config = HttpConfig::pages(Some(ProxyConfig::local(7890)));
        assert!(config.direct().proxy.is_none());
        assert_eq!(config.direct().timeout, Duration::from_secs(10));
    }
}
