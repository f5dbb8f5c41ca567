//! Export file naming and writing

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::info;

use niche_services::{KeywordReport, TrendReport};

use crate::csv_export::{write_keywords_csv, write_trends_csv};
use crate::error::{ReportError, ReportResult};
use crate::text::{keyword_report_text, suggestions_report_text};

/// Stamp used in trend export names, e.g. `20261019_093000`
pub fn export_stamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y%m%d_%H%M%S").to_string()
}

/// File-name stem for a seed: path separators, characters reserved on
/// Windows, whitespace and control characters become `_`
fn seed_stem(seed: &str) -> String {
    seed.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect()
}

pub fn keywords_csv_file_name(seed: &str) -> String {
    format!("{}_keywords.csv", seed_stem(seed))
}

pub fn keyword_report_file_name(seed: &str) -> String {
    format!("{}_report.txt", seed_stem(seed))
}

pub fn trends_csv_file_name(stamp: &str) -> String {
    format!("trending_keywords_{}.csv", stamp)
}

pub fn suggestions_file_name(stamp: &str) -> String {
    format!("trending_keywords_suggestions_{}.txt", stamp)
}

fn create(path: &Path) -> ReportResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| ReportError::file(path, e))
}

fn write_text(path: &Path, text: &str) -> ReportResult<()> {
    fs::write(path, text).map_err(|e| ReportError::file(path, e))
}

fn ensure_dir(dir: &Path) -> ReportResult<()> {
    fs::create_dir_all(dir).map_err(|e| ReportError::file(dir, e))
}

/// Write the keywords CSV and the keyword text report into `dir`
pub fn export_keyword_report(dir: &Path, report: &KeywordReport) -> ReportResult<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let csv_path = dir.join(keywords_csv_file_name(&report.seed));
    write_keywords_csv(create(&csv_path)?, &report.keywords)?;
    info!("Keywords exported to {}", csv_path.display());

    let report_path = dir.join(keyword_report_file_name(&report.seed));
    write_text(&report_path, &keyword_report_text(report)?)?;
    info!("Keyword report written to {}", report_path.display());

    Ok(vec![csv_path, report_path])
}

/// Write the trends CSV and the suggestions report into `dir`
pub fn export_trend_report(
    dir: &Path,
    report: &TrendReport,
    stamp: &str,
) -> ReportResult<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let csv_path = dir.join(trends_csv_file_name(stamp));
    write_trends_csv(create(&csv_path)?, &report.trends)?;
    info!("Trends exported to {}", csv_path.display());

    let suggestions_path = dir.join(suggestions_file_name(stamp));
    write_text(&suggestions_path, &suggestions_report_text(&report.suggestions)?)?;
    info!("Suggestions written to {}", suggestions_path.display());

    Ok(vec![csv_path, suggestions_path])
}
