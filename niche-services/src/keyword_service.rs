//! Keyword Service
//!
//! Mines autocomplete suggestions for a seed keyword, scores and ranks them,
//! analyzes competitor pages and derives a site plan.

use std::time::Duration;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use niche_core::{CompetitorAnalysis, KeywordCandidate, RunConfig, ScoredKeyword, SitePlan};
use niche_harvest::{
    domain_of, BaiduSuggestClient, CompetitorAnalyzer, GoogleSuggestClient, HttpConfig, QueryPlan,
    RequestOutcome, RunSummary, SuggestionEndpoint, SuggestionHarvester,
};

use crate::error::ServiceResult;
use crate::scoring::{RuleTable, Scorer};
use crate::site_plan::plan_site;
use crate::themes::{top_terms, ThemeTerm};

/// Theme terms reported for a keyword run
pub const KEYWORD_THEME_TERMS: usize = 10;

/// Keywords the theme analysis looks at
const THEME_SOURCE_KEYWORDS: usize = 50;

/// Result of a keyword-mining run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub seed: String,
    pub language: String,
    /// Score descending, keyword ascending on ties
    pub keywords: Vec<ScoredKeyword>,
    pub themes: Vec<ThemeTerm>,
    pub competitors: Vec<CompetitorAnalysis>,
    pub plan: Option<SitePlan>,
    pub summary: RunSummary,
}

impl KeywordReport {
    pub fn top(&self, n: usize) -> &[ScoredKeyword] {
        &self.keywords[..n.min(self.keywords.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Rank keywords best first; ties break alphabetically
pub fn rank_keywords(keywords: &mut [ScoredKeyword]) {
    keywords.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.keyword.cmp(&b.keyword)));
}

pub type DynHarvester = SuggestionHarvester<Box<dyn SuggestionEndpoint>>;

/// Harvester over a boxed endpoint, so different endpoints share one list
pub fn boxed_harvester<E>(endpoint: E, plan: QueryPlan, delay: Duration) -> DynHarvester
where
    E: SuggestionEndpoint + 'static,
{
    let endpoint: Box<dyn SuggestionEndpoint> = Box::new(endpoint);
    SuggestionHarvester::new(endpoint, plan, delay)
}

/// Keyword-mining pipeline
pub struct KeywordService {
    harvesters: Vec<DynHarvester>,
    analyzer: Option<CompetitorAnalyzer>,
    scorer: Scorer,
}

impl KeywordService {
    pub fn new(harvesters: Vec<DynHarvester>, scorer: Scorer) -> Self {
        Self {
            harvesters,
            analyzer: None,
            scorer,
        }
    }

    pub fn with_analyzer(mut self, analyzer: CompetitorAnalyzer) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Build the pipeline for a run: Google suggest always, Baidu suggest as
    /// well for Chinese runs, a competitor analyzer when URLs were given.
    pub fn from_config(config: &RunConfig) -> ServiceResult<Self> {
        config.validate_for_keywords()?;

        let http = HttpConfig::suggestions(config.proxy.clone());
        let delay = Duration::from_millis(config.request_delay_ms);

        let mut harvesters = vec![boxed_harvester(
            GoogleSuggestClient::new(&http)?,
            QueryPlan::google(),
            delay,
        )];
        if config.is_chinese() {
            harvesters.push(boxed_harvester(
                BaiduSuggestClient::new(&http)?,
                QueryPlan::baidu(),
                delay,
            ));
        }

        let mut service = Self::new(harvesters, Scorer::for_today(RuleTable::keyword_mining()));
        if !config.competitor_urls.is_empty() {
            service = service.with_analyzer(CompetitorAnalyzer::new(&HttpConfig::pages(
                config.proxy.clone(),
            ))?);
        }
        Ok(service)
    }

    /// Harvest, score and rank suggestions for the configured seed
    pub async fn mine(&self, seed: &str, language: &str) -> (Vec<ScoredKeyword>, RunSummary) {
        let mut summary = RunSummary::default();
        let mut distinct: IndexSet<KeywordCandidate> = IndexSet::new();

        for harvester in &self.harvesters {
            let harvest = harvester.harvest(seed, language).await;
            distinct.extend(harvest.items.into_iter().map(KeywordCandidate::from));
            summary.merge(harvest.summary);
        }

        info!("Scoring {} distinct keywords", distinct.len());
        let mut keywords: Vec<ScoredKeyword> = distinct
            .iter()
            .map(|candidate| self.scorer.score_keyword(candidate))
            .collect();
        rank_keywords(&mut keywords);

        (keywords, summary)
    }

    /// Analyze each competitor page. A page that cannot be fetched still
    /// yields an analysis carrying only its URL and domain.
    pub async fn analyze_competitors(
        &self,
        urls: &[String],
        summary: &mut RunSummary,
    ) -> Vec<CompetitorAnalysis> {
        let Some(analyzer) = &self.analyzer else {
            return Vec::new();
        };

        let mut analyses = Vec::with_capacity(urls.len());
        for url in urls {
            match analyzer.analyze(url).await {
                Ok(analysis) => {
                    summary.record(url.as_str(), RequestOutcome::Success { items: 1 });
                    analyses.push(analysis);
                }
                Err(e) => {
                    warn!("Competitor analysis failed for {}: {}", url, e);
                    summary.record(url.as_str(), RequestOutcome::from_error(&e));
                    analyses.push(CompetitorAnalysis::new(url.as_str(), domain_of(url)));
                }
            }
        }
        analyses
    }

    /// Run the whole keyword pipeline
    #[instrument(skip(self, config), fields(seed = %config.seed, language = %config.language))]
    pub async fn run(&self, config: &RunConfig) -> KeywordReport {
        let (keywords, mut summary) = self.mine(&config.seed, config.suggest_language()).await;

        let themes = top_terms(
            keywords
                .iter()
                .take(THEME_SOURCE_KEYWORDS)
                .map(|k| k.keyword.as_str()),
            Some(config.seed.as_str()),
            KEYWORD_THEME_TERMS,
        );

        let competitors = self
            .analyze_competitors(&config.competitor_urls, &mut summary)
            .await;
        let plan = plan_site(&keywords, &competitors);

        info!(
            "Keyword run finished: {} keywords, {} competitors, {} of {} requests succeeded",
            keywords.len(),
            competitors.len(),
            summary.succeeded,
            summary.total()
        );

        KeywordReport {
            seed: config.seed.clone(),
            language: config.language.clone(),
            keywords,
            themes,
            competitors,
            plan,
            summary,
        }
    }
}
