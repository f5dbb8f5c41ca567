//! Trend records captured from trending-topic feeds

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::keyword::Keyworded;

/// Timestamp format used on every captured record
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Feed a trend record was captured from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TrendSource {
    /// Google Trends daily trending searches for a country code
    GoogleTrends { geo: String },
    /// Reddit hot listing for a subreddit
    Reddit { subreddit: String },
    /// Baidu realtime hot-search board
    BaiduHot,
    /// Zhihu hot list
    ZhihuHot,
}

impl TrendSource {
    /// Display label, also used as the CSV `source` column
    pub fn label(&self) -> String {
        match self {
            TrendSource::GoogleTrends { geo } => format!("Google Trends ({})", geo),
            TrendSource::Reddit { subreddit } => format!("Reddit r/{}", subreddit),
            TrendSource::BaiduHot => "Baidu Hot".to_string(),
            TrendSource::ZhihuHot => "Zhihu Hot".to_string(),
        }
    }
}

impl fmt::Display for TrendSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for TrendSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(geo) = s
            .strip_prefix("Google Trends (")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Ok(TrendSource::GoogleTrends {
                geo: geo.to_string(),
            });
        }
        if let Some(subreddit) = s.strip_prefix("Reddit r/") {
            return Ok(TrendSource::Reddit {
                subreddit: subreddit.to_string(),
            });
        }
        match s {
            "Baidu Hot" => Ok(TrendSource::BaiduHot),
            "Zhihu Hot" => Ok(TrendSource::ZhihuHot),
            _ => Err(format!("Unknown trend source: {}", s)),
        }
    }
}

/// Traffic or engagement indicator as reported by the feed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traffic {
    #[default]
    Unavailable,
    /// Raw text such as "200,000+" or "5321 upvotes"
    Reported(String),
}

impl Traffic {
    pub fn reported(text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
            Traffic::Unavailable
        } else {
            Traffic::Reported(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Traffic::Unavailable => None,
            Traffic::Reported(text) => Some(text),
        }
    }
}

impl fmt::Display for Traffic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().unwrap_or("N/A"))
    }
}

impl From<Option<String>> for Traffic {
    fn from(value: Option<String>) -> Self {
        value.map(Traffic::reported).unwrap_or_default()
    }
}

/// A normalized trending topic. Immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRecord {
    pub keyword: String,
    pub source: TrendSource,
    pub traffic: Traffic,
    pub category: String,
    /// Capture time, formatted with [`TIMESTAMP_FORMAT`]
    pub timestamp: String,
}

impl TrendRecord {
    pub fn new(
        keyword: impl Into<String>,
        source: TrendSource,
        traffic: Traffic,
        category: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            source,
            traffic,
            category: category.into(),
            timestamp: timestamp.into(),
        }
    }
}

impl Keyworded for TrendRecord {
    fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// A trend record with its opportunity score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredTrend {
    pub record: TrendRecord,
    /// Opportunity score (0 - 100)
    pub score: u8,
}

impl Keyworded for ScoredTrend {
    fn keyword(&self) -> &str {
        &self.record.keyword
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label_round_trip() {
        let sources = [
            TrendSource::GoogleTrends {
                geo: "US".to_string(),
            },
            TrendSource::Reddit {
                subreddit: "all".to_string(),
            },
            TrendSource::BaiduHot,
            TrendSource::ZhihuHot,
        ];
        for source in sources {
            let parsed: TrendSource = source.label().parse().unwrap();
            assert_eq!(parsed, source);
        }
    }

    #[test]
    fn test_traffic_na_is_unavailable() {
        assert_eq!(Traffic::reported("N/A"), Traffic::Unavailable);
        assert_eq!(Traffic::reported("  "), Traffic::Unavailable);
        assert_eq!(Traffic::reported("200,000+").as_str(), Some("200,000+"));
        assert_eq!(Traffic::Unavailable.to_string(), "N/A");
    }
}
