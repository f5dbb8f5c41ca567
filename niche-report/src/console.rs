//! Console rendering

use std::io::Write;

use niche_core::TrendRecord;
use niche_harvest::{Harvest, RequestOutcome, RunSummary};
use niche_services::{KeywordReport, TrendReport};

use crate::error::ReportResult;

/// Keywords shown on screen after a keyword run
pub const CONSOLE_KEYWORDS: usize = 20;

/// Suggestions shown on screen after a trend run
pub const CONSOLE_SUGGESTIONS: usize = 5;

/// Failed requests listed individually before the rest are counted
const CONSOLE_NOTES: usize = 5;

fn banner<W: Write>(w: &mut W, title: &str) -> ReportResult<()> {
    writeln!(w, "{}", "=".repeat(60))?;
    writeln!(w, "{}", title)?;
    writeln!(w, "{}", "=".repeat(60))?;
    Ok(())
}

/// Request counts plus the first few failures
pub fn print_summary<W: Write>(w: &mut W, summary: &RunSummary) -> ReportResult<()> {
    writeln!(
        w,
        "Requests: {} total, {} succeeded, {} empty or failed, {} fatal",
        summary.total(),
        summary.succeeded,
        summary.empty,
        summary.fatal
    )?;
    for note in summary.notes.iter().take(CONSOLE_NOTES) {
        match &note.outcome {
            RequestOutcome::Fatal { error } => writeln!(w, "  ! {}: {}", note.target, error)?,
            RequestOutcome::RecoverableEmpty { reason } => {
                writeln!(w, "  - {}: {}", note.target, reason)?
            }
            RequestOutcome::Success { .. } => {}
        }
    }
    if summary.notes.len() > CONSOLE_NOTES {
        writeln!(w, "  ... and {} more", summary.notes.len() - CONSOLE_NOTES)?;
    }
    Ok(())
}

pub fn print_keyword_report<W: Write>(w: &mut W, report: &KeywordReport) -> ReportResult<()> {
    banner(w, &format!("Keyword mining: {} ({})", report.seed, report.language))?;
    writeln!(w, "Total keywords: {}", report.keywords.len())?;

    if let (Some(best), Some(worst)) = (report.keywords.first(), report.keywords.last()) {
        writeln!(w, "Score range: {} - {}", best.score, worst.score)?;
        writeln!(w)?;
        writeln!(w, "Top {} keywords:", CONSOLE_KEYWORDS)?;
        for (i, keyword) in report.top(CONSOLE_KEYWORDS).iter().enumerate() {
            writeln!(w, "{:2}. [{:3}] {}", i + 1, keyword.score, keyword.keyword)?;
        }
    }

    if !report.themes.is_empty() {
        writeln!(w)?;
        writeln!(w, "Recurring terms:")?;
        for theme in &report.themes {
            writeln!(w, "  {}: {}", theme.term, theme.count)?;
        }
    }

    for competitor in &report.competitors {
        writeln!(w)?;
        writeln!(w, "Competitor: {}", competitor.url)?;
        if !competitor.title.is_empty() {
            writeln!(w, "  Title: {}", competitor.title)?;
        }
        writeln!(
            w,
            "  Headings: {} H1, {} H2, {} H3",
            competitor.content_structure.h1_count,
            competitor.content_structure.h2_count,
            competitor.content_structure.h3_count
        )?;
        writeln!(w, "  Monetization: {}", or_none(&competitor.monetization))?;
        writeln!(w, "  Tech stack: {}", or_none(&competitor.tech_stack))?;
        writeln!(w, "  Articles found: {}", competitor.article_count)?;
    }

    if let Some(plan) = &report.plan {
        writeln!(w)?;
        banner(w, "Site plan")?;
        writeln!(w, "Niche: {}", plan.niche)?;
        writeln!(w, "Domains: {}", plan.recommended_domains.join(" or "))?;
        writeln!(
            w,
            "Content: {} articles, {}",
            plan.content_strategy.total_articles, plan.content_strategy.publishing_frequency
        )?;
        writeln!(w, "Monetization: {}", plan.monetization_plan.join(", "))?;
        writeln!(w, "Tech stack: {}", plan.tech_stack)?;
    }

    writeln!(w)?;
    print_summary(w, &report.summary)
}

fn or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none detected".to_string()
    } else {
        items.join(", ")
    }
}

pub fn print_trend_report<W: Write>(w: &mut W, report: &TrendReport) -> ReportResult<()> {
    banner(w, "Trending keywords")?;
    writeln!(w, "Total trends: {}", report.trends.len())?;
    for (category, count) in report.categorized.counts() {
        writeln!(w, "  {}: {}", category, count)?;
    }

    writeln!(w)?;
    banner(w, "Niche opportunities")?;
    if report.suggestions.is_empty() {
        writeln!(w, "No category cleared the opportunity threshold.")?;
    }
    for (i, suggestion) in report
        .suggestions
        .iter()
        .take(CONSOLE_SUGGESTIONS)
        .enumerate()
    {
        writeln!(w)?;
        writeln!(
            w,
            "#{} {} - score {}/100",
            i + 1,
            suggestion.category,
            suggestion.opportunity_score
        )?;
        writeln!(w, "   Seed: {}", suggestion.seed_keyword)?;
        if let Some(domain) = suggestion.suggested_domains.first() {
            writeln!(w, "   Domain: {}", domain)?;
        }
        if !suggestion.related_trends.is_empty() {
            writeln!(w, "   Related: {}", suggestion.related_trends.join(", "))?;
        }
    }

    writeln!(w)?;
    print_summary(w, &report.summary)
}

/// Connectivity probe result
pub fn print_probe<W: Write>(w: &mut W, geo: &str, harvest: &Harvest<TrendRecord>) -> ReportResult<()> {
    banner(w, &format!("Google Trends probe ({})", geo))?;
    if harvest.items.is_empty() {
        writeln!(w, "No trends received.")?;
    }
    for (i, record) in harvest.items.iter().enumerate() {
        writeln!(w, "{:2}. {} ({})", i + 1, record.keyword, record.traffic)?;
    }
    writeln!(w)?;
    print_summary(w, &harvest.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use niche_core::{ScoredKeyword, Traffic, TrendSource};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> ReportResult<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_summary_lists_failures() {
        let mut summary = RunSummary::default();
        summary.record("tea a", RequestOutcome::Success { items: 2 });
        summary.record(
            "tea b",
            RequestOutcome::Fatal {
                error: "Proxy error: connection refused".into(),
            },
        );

        let text = render(|w| print_summary(w, &summary));
        assert!(text.contains("Requests: 2 total, 1 succeeded, 0 empty or failed, 1 fatal"));
        assert!(text.contains("  ! tea b: Proxy error: connection refused"));
    }

    #[test]
    fn test_keyword_report_shows_score_range() {
        let report = KeywordReport {
            seed: "tea".into(),
            language: "en".into(),
            keywords: vec![ScoredKeyword::new("best tea", 30), ScoredKeyword::new("tea", 5)],
            themes: Vec::new(),
            competitors: Vec::new(),
            plan: None,
            summary: RunSummary::default(),
        };
        let text = render(|w| print_keyword_report(w, &report));
        assert!(text.contains("Score range: 30 - 5"));
        assert!(text.contains(" 1. [ 30] best tea"));
        assert!(!text.contains("Site plan"));
    }

    #[test]
    fn test_probe_output() {
        let harvest = Harvest::new(
            vec![TrendRecord::new(
                "solar eclipse",
                TrendSource::GoogleTrends { geo: "US".into() },
                Traffic::reported("500,000+"),
                "trending",
                "2026-10-19 09:00",
            )],
            RunSummary::default(),
        );
        let text = render(|w| print_probe(w, "US", &harvest));
        assert!(text.contains("Google Trends probe (US)"));
        assert!(text.contains(" 1. solar eclipse (500,000+)"));
    }
}
