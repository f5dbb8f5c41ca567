//! Run configuration
//!
//! Everything a run needs is collected up front into a [`RunConfig`], which
//! can be built from CLI flags, environment variables, interactive prompts or
//! a literal in tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::{NicheError, NicheResult};

/// Default local forward-proxy port
pub const DEFAULT_PROXY_PORT: u16 = 7890;

/// Default delay between consecutive requests to the same endpoint
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 300;

/// At most this many competitor URLs are analyzed per run
pub const MAX_COMPETITOR_URLS: usize = 3;

/// Market whose trend sources are harvested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Google Trends (US) and Reddit
    Us,
    /// Baidu hot search and Zhihu hot list
    Cn,
}

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Cn => "CN",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" | "en" => Ok(Region::Us),
            "cn" | "zh" => Ok(Region::Cn),
            _ => Err(format!("Unknown region: {}", s)),
        }
    }
}

/// Forward HTTP/HTTPS proxy applied to outbound requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub url: String,
}

impl ProxyConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Proxy listening on 127.0.0.1
    pub fn local(port: u16) -> Self {
        Self::new(format!("http://127.0.0.1:{}", port))
    }
}

/// Configuration for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Seed keyword for suggestion harvesting
    pub seed: String,
    /// Language / locale passed to suggestion endpoints (e.g. "en", "zh-CN")
    pub language: String,
    /// Markets for trend harvesting, in harvest order
    pub regions: Vec<Region>,
    /// Subreddit used for the US hot listing
    pub subreddit: String,
    pub proxy: Option<ProxyConfig>,
    /// Competitor pages to analyze
    pub competitor_urls: Vec<String>,
    /// Directory export files are written to
    pub output_dir: PathBuf,
    pub request_delay_ms: u64,
    /// Write CSV/text exports
    pub export: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: String::new(),
            language: "en".to_string(),
            regions: vec![Region::Us, Region::Cn],
            subreddit: "all".to_string(),
            proxy: None,
            competitor_urls: Vec::new(),
            output_dir: PathBuf::from("."),
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            export: true,
        }
    }
}

impl RunConfig {
    /// Seed is passed through verbatim but must contain something
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..Self::default()
        }
    }

    /// Chinese-language runs also query Baidu
    pub fn is_chinese(&self) -> bool {
        matches!(self.language.as_str(), "zh" | "zh-CN" | "zh-cn")
    }

    /// Language code sent to Google suggest
    pub fn suggest_language(&self) -> &str {
        if self.is_chinese() {
            "zh-CN"
        } else {
            &self.language
        }
    }

    /// Check settings shared by every run
    pub fn validate(&self) -> NicheResult<()> {
        if let Some(proxy) = &self.proxy {
            let scheme_ok = ["http://", "https://"]
                .iter()
                .any(|scheme| proxy.url.starts_with(scheme));
            if !scheme_ok {
                return Err(NicheError::config(format!(
                    "Proxy URL must start with http:// or https://: {}",
                    proxy.url
                )));
            }
        }
        if self.competitor_urls.len() > MAX_COMPETITOR_URLS {
            return Err(NicheError::config(format!(
                "At most {} competitor URLs are supported, got {}",
                MAX_COMPETITOR_URLS,
                self.competitor_urls.len()
            )));
        }
        Ok(())
    }

    /// Check settings required by a keyword-mining run
    pub fn validate_for_keywords(&self) -> NicheResult<()> {
        self.validate()?;
        if self.seed.trim().is_empty() {
            return Err(NicheError::config("Seed keyword must not be empty"));
        }
        if self.language.trim().is_empty() {
            return Err(NicheError::config("Language must not be empty"));
        }
        Ok(())
    }

    /// Check settings required by a trend run
    pub fn validate_for_trends(&self) -> NicheResult<()> {
        self.validate()?;
        if self.regions.is_empty() {
            return Err(NicheError::config("At least one region is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_seed_rejected() {
        let config = RunConfig::with_seed("   ");
        assert!(matches!(
            config.validate_for_keywords(),
            Err(NicheError::Config(_))
        ));
    }

    #[test]
    fn test_local_proxy_url() {
        assert_eq!(ProxyConfig::local(7890).url, "http://127.0.0.1:7890");
    }

    #[test]
    fn test_bad_proxy_scheme_rejected() {
        let config = RunConfig {
            proxy: Some(ProxyConfig::new("127.0.0.1:7890")),
            ..RunConfig::with_seed("coffee maker")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_many_competitors_rejected() {
        let config = RunConfig {
            competitor_urls: vec!["https://a.com".into(); 4],
            ..RunConfig::with_seed("coffee maker")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_chinese_language_uses_zh_cn() {
        let config = RunConfig {
            language: "zh".to_string(),
            ..RunConfig::with_seed("咖啡机")
        };
        assert!(config.is_chinese());
        assert_eq!(config.suggest_language(), "zh-CN");
    }

    #[test]
    fn test_region_parse() {
        assert_eq!("US".parse::<Region>(), Ok(Region::Us));
        assert_eq!("cn".parse::<Region>(), Ok(Region::Cn));
        assert!("mars".parse::<Region>().is_err());
    }
}
