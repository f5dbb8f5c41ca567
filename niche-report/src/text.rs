//! Plain-text reports written next to the CSV exports

use std::fmt::Write;

use niche_core::{SitePlan, Suggestion};
use niche_harvest::RunSummary;
use niche_services::KeywordReport;

use crate::error::ReportResult;

/// Keywords listed in the keyword text report
pub const REPORT_KEYWORDS: usize = 50;

/// Domains listed per suggestion in the suggestions report
const REPORT_DOMAINS: usize = 2;

const WIDE_RULE: usize = 60;
const NARROW_RULE: usize = 40;

fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Niche suggestions report
pub fn suggestions_report_text(suggestions: &[Suggestion]) -> ReportResult<String> {
    let mut out = String::new();
    writeln!(out, "{}", rule(WIDE_RULE))?;
    writeln!(out, "Niche Suggestions Report")?;
    writeln!(out, "{}", rule(WIDE_RULE))?;
    writeln!(out)?;

    if suggestions.is_empty() {
        writeln!(out, "No category cleared the opportunity threshold.")?;
    }

    for (i, suggestion) in suggestions.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "Suggestion #{}: {}", i + 1, suggestion.category)?;
        writeln!(out, "{}", rule(NARROW_RULE))?;
        writeln!(out, "Seed keyword: {}", suggestion.seed_keyword)?;
        writeln!(out, "Opportunity score: {}/100", suggestion.opportunity_score)?;

        writeln!(out)?;
        writeln!(out, "Related trends:")?;
        for related in &suggestion.related_trends {
            writeln!(out, "  - {}", related)?;
        }

        writeln!(out)?;
        writeln!(out, "Suggested domains:")?;
        for domain in suggestion.suggested_domains.iter().take(REPORT_DOMAINS) {
            writeln!(out, "  - {}", domain)?;
        }

        writeln!(out)?;
        writeln!(out, "Content ideas:")?;
        for idea in &suggestion.content_ideas {
            writeln!(out, "  - {}", idea)?;
        }
        writeln!(out)?;
    }

    Ok(out)
}

fn write_plan(out: &mut String, plan: &SitePlan) -> std::fmt::Result {
    writeln!(out, "Site Plan")?;
    writeln!(out, "{}", rule(NARROW_RULE))?;
    writeln!(out, "Niche: {}", plan.niche)?;
    writeln!(out, "Domains: {}", plan.recommended_domains.join(" or "))?;

    let strategy = &plan.content_strategy;
    writeln!(
        out,
        "Content: {} articles in the first month, {}, {}",
        strategy.total_articles, strategy.publishing_frequency, strategy.word_count
    )?;
    for (kind, count) in &strategy.article_types {
        writeln!(out, "  - {}: {}", kind, count)?;
    }

    writeln!(out, "Monetization: {}", plan.monetization_plan.join(", "))?;
    writeln!(out, "Tech stack: {}", plan.tech_stack)?;
    writeln!(out, "First articles:")?;
    for (i, title) in plan.initial_articles.iter().enumerate() {
        writeln!(out, "  {:2}. {}", i + 1, title)?;
    }
    Ok(())
}

pub(crate) fn write_summary(out: &mut String, summary: &RunSummary) -> std::fmt::Result {
    writeln!(
        out,
        "Requests: {} total, {} succeeded, {} empty or failed, {} fatal",
        summary.total(),
        summary.succeeded,
        summary.empty,
        summary.fatal
    )?;
    if let Some(error) = summary.first_fatal() {
        writeln!(out, "First fatal error: {}", error)?;
    }
    Ok(())
}

/// Keyword mining report: top keywords, themes and the site plan
pub fn keyword_report_text(report: &KeywordReport) -> ReportResult<String> {
    let mut out = String::new();
    writeln!(out, "{} - Keyword Mining Results", report.seed)?;
    writeln!(out, "{}", rule(WIDE_RULE))?;
    writeln!(out)?;
    writeln!(out, "Total keywords: {}", report.keywords.len())?;
    writeln!(out)?;

    writeln!(out, "Top {} keywords:", REPORT_KEYWORDS)?;
    writeln!(out)?;
    for (i, keyword) in report.top(REPORT_KEYWORDS).iter().enumerate() {
        writeln!(out, "{:2}. [{:3}] {}", i + 1, keyword.score, keyword.keyword)?;
    }

    if !report.themes.is_empty() {
        writeln!(out)?;
        writeln!(out, "Recurring terms:")?;
        for theme in &report.themes {
            writeln!(out, "  - {}: {}", theme.term, theme.count)?;
        }
    }

    if let Some(plan) = &report.plan {
        writeln!(out)?;
        write_plan(&mut out, plan)?;
    }

    writeln!(out)?;
    write_summary(&mut out, &report.summary)?;
    Ok(out)
}
