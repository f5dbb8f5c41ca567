//! CSV exports
//!
//! Keywords: `keyword,score,word_count`, plain UTF-8.
//! Trends: `keyword,source,traffic,category,opportunity_score,timestamp`,
//! UTF-8 with a byte-order mark so spreadsheet tools detect the encoding of
//! Chinese keywords.

use std::io::{Read, Write};

use niche_core::{ScoredKeyword, ScoredTrend, Traffic, TrendRecord, TrendSource};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

const UTF8_BOM: &str = "\u{feff}";

const KEYWORD_HEADERS: [&str; 3] = ["keyword", "score", "word_count"];

const TREND_HEADERS: [&str; 6] = [
    "keyword",
    "source",
    "traffic",
    "category",
    "opportunity_score",
    "timestamp",
];

/// A CSV writer whose header row goes out even when no rows follow
fn headed_writer<W: Write>(writer: W, headers: &[&str]) -> ReportResult<csv::Writer<W>> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(headers)?;
    Ok(csv)
}

/// One row of the trends CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRow {
    pub keyword: String,
    /// Source label, e.g. "Google Trends (US)"
    pub source: String,
    /// Raw traffic text or "N/A"
    pub traffic: String,
    pub category: String,
    pub opportunity_score: u8,
    pub timestamp: String,
}

impl From<&ScoredTrend> for TrendRow {
    fn from(trend: &ScoredTrend) -> Self {
        let record = &trend.record;
        Self {
            keyword: record.keyword.clone(),
            source: record.source.label(),
            traffic: record.traffic.to_string(),
            category: record.category.clone(),
            opportunity_score: trend.score,
            timestamp: record.timestamp.clone(),
        }
    }
}

impl TrendRow {
    /// Rebuild the scored trend this row was exported from
    pub fn to_scored(&self) -> ReportResult<ScoredTrend> {
        let source: TrendSource = self
            .source
            .parse()
            .map_err(|e: String| ReportError::InvalidRow(format!("{}: {}", self.keyword, e)))?;
        Ok(ScoredTrend {
            record: TrendRecord::new(
                self.keyword.as_str(),
                source,
                Traffic::reported(self.traffic.as_str()),
                self.category.as_str(),
                self.timestamp.as_str(),
            ),
            score: self.opportunity_score,
        })
    }
}

pub fn write_keywords_csv<W: Write>(writer: W, keywords: &[ScoredKeyword]) -> ReportResult<()> {
    let mut csv = headed_writer(writer, &KEYWORD_HEADERS)?;
    for keyword in keywords {
        csv.serialize(keyword)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn read_keywords_csv<R: Read>(reader: R) -> ReportResult<Vec<ScoredKeyword>> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut keywords = Vec::new();
    for row in csv.deserialize() {
        keywords.push(row?);
    }
    Ok(keywords)
}

/// Write the trends CSV, byte-order mark first
pub fn write_trends_csv<W: Write>(mut writer: W, trends: &[ScoredTrend]) -> ReportResult<()> {
    writer.write_all(UTF8_BOM.as_bytes())?;
    let mut csv = headed_writer(writer, &TREND_HEADERS)?;
    for trend in trends {
        csv.serialize(TrendRow::from(trend))?;
    }
    csv.flush()?;
    Ok(())
}

/// Read a trends CSV, with or without a byte-order mark
pub fn read_trends_csv<R: Read>(mut reader: R) -> ReportResult<Vec<TrendRow>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    let body = content.strip_prefix(UTF8_BOM).unwrap_or(&content);

    let mut csv = csv::Reader::from_reader(body.as_bytes());
    let mut rows = Vec::new();
    for row in csv.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
