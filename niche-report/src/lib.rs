//! Rendering for Niche Finder results
//!
//! Computation in `niche-services` returns plain report values; this crate
//! turns them into console output, text reports and CSV exports.

pub mod console;
pub mod csv_export;
pub mod error;
pub mod files;
pub mod text;

pub use console::{print_keyword_report, print_probe, print_summary, print_trend_report};
pub use csv_export::{
    read_keywords_csv, read_trends_csv, write_keywords_csv, write_trends_csv, TrendRow,
};
pub use error::{ReportError, ReportResult};
pub use files::{
    export_keyword_report, export_trend_report, export_stamp, keyword_report_file_name,
    keywords_csv_file_name, suggestions_file_name, trends_csv_file_name,
};
pub use text::{keyword_report_text, suggestions_report_text};
