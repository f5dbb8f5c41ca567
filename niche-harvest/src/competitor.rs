//! Competitor landing-page analysis
//!
//! Reads a competitor's page and reports its heading structure, detected ad
//! networks and affiliate programs, site generator, article links and
//! navigation categories.

use indexmap::IndexSet;
use niche_core::{CompetitorAnalysis, ContentStructure};
use scraper::{ElementRef, Html, Selector};
use tracing::{info, instrument};

use crate::error::HarvestError;
use crate::http::{HttpConfig, HttpFetcher};

/// Substrings identifying each monetization method, checked against lower-cased HTML
const MONETIZATION_MARKERS: &[(&str, &[&str])] = &[
    ("Google AdSense", &["adsense", "googlesyndication"]),
    ("Amazon Associates", &["amazon-adsystem", "amzn.to"]),
    ("Mediavine", &["mediavine"]),
    ("Ezoic", &["ezoic"]),
];

const TECH_MARKERS: &[(&str, &[&str])] = &[
    ("WordPress", &["wp-content", "wordpress"]),
    ("Next.js", &["__next", "_next"]),
    ("Gatsby", &["gatsby"]),
];

/// Path fragments of article-like links
const ARTICLE_PATTERNS: &[&str] = &["/blog/", "/post/", "/article/", "/review/"];

const MAX_H1_TEXTS: usize = 5;
const MAX_H2_TEXTS: usize = 10;
const MAX_SAMPLE_ARTICLES: usize = 10;
const MAX_NAV_CATEGORIES: usize = 15;

/// Fetches and analyzes competitor pages
pub struct CompetitorAnalyzer {
    http: HttpFetcher,
}

impl CompetitorAnalyzer {
    pub fn new(config: &HttpConfig) -> Result<Self, HarvestError> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
        })
    }

    /// Fetch and analyze one page
    #[instrument(skip(self))]
    pub async fn analyze(&self, url: &str) -> Result<CompetitorAnalysis, HarvestError> {
        let html = self.http.get_text(url).await?;
        let analysis = analyze_html(url, &html);
        info!(
            "Analyzed {}: monetization=[{}], tech=[{}], {} articles",
            analysis.domain,
            analysis.monetization.join(", "),
            analysis.tech_stack.join(", "),
            analysis.article_count
        );
        Ok(analysis)
    }
}

/// Host part of a URL, empty when the URL does not parse
pub fn domain_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn texts(document: &Html, css: &str) -> Vec<String> {
    selector(css)
        .map(|sel| document.select(&sel).map(element_text).collect())
        .unwrap_or_default()
}

fn meta_content(document: &Html, name: &str) -> Option<String> {
    let sel = selector(&format!(r#"meta[name="{}"]"#, name))?;
    document
        .select(&sel)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.trim().to_string())
}

fn detect(html_lower: &str, markers: &[(&str, &[&str])]) -> Vec<String> {
    markers
        .iter()
        .filter(|(_, needles)| needles.iter().any(|needle| html_lower.contains(needle)))
        .map(|(label, _)| label.to_string())
        .collect()
}

/// Analyze already-fetched HTML
pub fn analyze_html(url: &str, html: &str) -> CompetitorAnalysis {
    let document = Html::parse_document(html);
    let mut analysis = CompetitorAnalysis::new(url, domain_of(url));

    analysis.title = texts(&document, "title")
        .into_iter()
        .next()
        .unwrap_or_default();
    analysis.meta_description = meta_content(&document, "description");
    analysis.keywords = meta_content(&document, "keywords")
        .map(|content| {
            content
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let h1 = texts(&document, "h1");
    let h2 = texts(&document, "h2");
    let h3_count = texts(&document, "h3").len();
    analysis.content_structure = ContentStructure {
        h1_count: h1.len(),
        h2_count: h2.len(),
        h3_count,
        h1_texts: h1.into_iter().take(MAX_H1_TEXTS).collect(),
        h2_texts: h2.into_iter().take(MAX_H2_TEXTS).collect(),
    };

    let html_lower = html.to_lowercase();
    analysis.monetization = detect(&html_lower, MONETIZATION_MARKERS);
    analysis.tech_stack = detect(&html_lower, TECH_MARKERS);

    if let Some(links) = selector("a[href]") {
        let articles: IndexSet<String> = document
            .select(&links)
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| ARTICLE_PATTERNS.iter().any(|p| href.contains(p)))
            .map(str::to_string)
            .collect();
        analysis.article_count = articles.len();
        analysis.sample_articles = articles.into_iter().take(MAX_SAMPLE_ARTICLES).collect();
    }

    if let (Some(nav_sel), Some(link_sel)) = (selector("nav"), selector("a")) {
        if let Some(nav) = document.select(&nav_sel).next() {
            analysis.categories = nav
                .select(&link_sel)
                .map(element_text)
                .filter(|label| !label.is_empty())
                .take(MAX_NAV_CATEGORIES)
                .collect();
        }
    }

    analysis
}
