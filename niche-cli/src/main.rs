//! Niche Finder CLI
//!
//! Mines keyword suggestions for a seed, harvests trending topics and turns
//! both into ranked niche-site ideas, printed to stdout and exported to CSV
//! and text files.

mod prompt;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use niche_core::{ProxyConfig, Region, RunConfig, DEFAULT_REQUEST_DELAY_MS};
use niche_harvest::RunSummary;
use niche_report::{
    export_keyword_report, export_stamp, export_trend_report, print_keyword_report, print_probe,
    print_trend_report,
};
use niche_services::{probe, KeywordService, TrendService};

use crate::prompt::Prompter;

#[derive(Parser, Debug)]
#[clap(
    name = "niche",
    version,
    about = "Keyword and trend mining for niche sites",
    long_about = "Mines search suggestions for a seed keyword or collects trending topics, scores them as site opportunities and exports the results."
)]
struct Cli {
    #[clap(flatten)]
    global: GlobalArgs,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Forward proxy URL for Google and Reddit (http or https).
    #[clap(long, global = true, env = "NICHE_PROXY")]
    proxy: Option<String>,

    /// Use a proxy on 127.0.0.1 at this port.
    #[clap(long, global = true)]
    proxy_port: Option<u16>,

    /// Connect directly, ignoring any configured proxy.
    #[clap(long, global = true)]
    no_proxy: bool,

    /// Directory for CSV and text exports.
    #[clap(long, global = true, env = "NICHE_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Minimum delay between requests to the same endpoint, in milliseconds.
    #[clap(long, global = true, default_value_t = DEFAULT_REQUEST_DELAY_MS)]
    delay_ms: u64,

    /// Ask for settings on the terminal instead of relying on flags.
    #[clap(long, global = true)]
    interactive: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mine autocomplete suggestions for a seed keyword.
    Keywords(KeywordsArgs),

    /// Collect today's trending topics and suggest niches.
    Trends(TrendsArgs),

    /// Check that Google Trends is reachable.
    Probe(ProbeArgs),
}

#[derive(Args, Debug)]
struct KeywordsArgs {
    /// Seed keyword, e.g. "coffee maker". Asked for with --interactive.
    #[clap(long)]
    seed: Option<String>,

    /// Suggestion language (en, zh, zh-CN, ...). Chinese also queries Baidu.
    #[clap(long, default_value = "en")]
    language: String,

    /// Competitor page to analyze (repeatable, up to 3).
    #[clap(long = "competitor")]
    competitors: Vec<String>,

    /// Print results without writing export files.
    #[clap(long)]
    no_export: bool,
}

#[derive(Args, Debug)]
struct TrendsArgs {
    /// Region to harvest (us, cn); repeatable. Defaults to both.
    #[clap(long = "region")]
    regions: Vec<Region>,

    /// Subreddit for the US hot listing.
    #[clap(long, default_value = "all")]
    subreddit: String,

    /// Print results without writing export files.
    #[clap(long)]
    no_export: bool,
}

#[derive(Args, Debug)]
struct ProbeArgs {
    /// Country code for the Google Trends daily feed.
    #[clap(long, default_value = "US")]
    geo: String,
}

impl GlobalArgs {
    /// `--no-proxy` wins over `--proxy-port`, which wins over `--proxy`
    fn proxy(&self) -> Option<ProxyConfig> {
        if self.no_proxy {
            None
        } else if let Some(port) = self.proxy_port {
            Some(ProxyConfig::local(port))
        } else {
            self.proxy.clone().map(ProxyConfig::new)
        }
    }

    fn base_config(&self) -> RunConfig {
        RunConfig {
            proxy: self.proxy(),
            output_dir: self.output_dir.clone(),
            request_delay_ms: self.delay_ms,
            ..RunConfig::default()
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,niche_cli=debug")),
        )
        .init();
}

/// Fail the run when nothing came back and a request failed systematically
fn check_outcome(produced_nothing: bool, summary: &RunSummary) -> Result<()> {
    if produced_nothing {
        if summary.has_fatal() {
            return Err(anyhow!(
                "No results; requests failed with: {} (check the proxy settings)",
                summary.first_fatal().unwrap_or("unknown error")
            ));
        }
        warn!("Run produced no results");
    }
    Ok(())
}

async fn run_keywords(global: &GlobalArgs, args: KeywordsArgs) -> Result<()> {
    let mut config = global.base_config();
    config.seed = args.seed.unwrap_or_default();
    config.language = args.language;
    config.competitor_urls = args.competitors;
    config.export = !args.no_export;

    if global.interactive {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        prompter.ask_proxy(&mut config)?;
        prompter.ask_keywords(&mut config)?;
    }

    let service = KeywordService::from_config(&config).context("Invalid keyword run")?;
    let report = service.run(&config).await;

    let mut stdout = io::stdout().lock();
    print_keyword_report(&mut stdout, &report)?;
    stdout.flush()?;

    if config.export && !report.is_empty() {
        let paths = export_keyword_report(&config.output_dir, &report)
            .context("Failed to export keyword results")?;
        for path in paths {
            writeln!(stdout, "Saved {}", path.display())?;
        }
    }

    check_outcome(report.is_empty(), &report.summary)
}

async fn run_trends(global: &GlobalArgs, args: TrendsArgs) -> Result<()> {
    let mut config = global.base_config();
    if !args.regions.is_empty() {
        config.regions = args.regions;
    }
    config.subreddit = args.subreddit;
    config.export = !args.no_export;

    if global.interactive {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        prompter.ask_proxy(&mut config)?;
        prompter.ask_regions(&mut config)?;
    }

    let service = TrendService::from_config(&config).context("Invalid trend run")?;
    let report = service.run().await;

    let mut stdout = io::stdout().lock();
    print_trend_report(&mut stdout, &report)?;
    stdout.flush()?;

    if config.export {
        let stamp = export_stamp(&Local::now());
        let paths = export_trend_report(&config.output_dir, &report, &stamp)
            .context("Failed to export trend results")?;
        for path in paths {
            writeln!(stdout, "Saved {}", path.display())?;
        }
    }

    check_outcome(report.is_empty(), &report.summary)
}

async fn run_probe(global: &GlobalArgs, args: ProbeArgs) -> Result<()> {
    let mut config = global.base_config();
    if global.interactive {
        let stdin = io::stdin();
        Prompter::new(stdin.lock(), io::stdout()).ask_proxy(&mut config)?;
    }
    config.validate().context("Invalid probe settings")?;

    let harvest = probe(&args.geo, config.proxy.clone()).await?;

    let mut stdout = io::stdout().lock();
    print_probe(&mut stdout, &args.geo, &harvest)?;
    stdout.flush()?;

    check_outcome(harvest.items.is_empty(), &harvest.summary)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    init_logging();

    let cli = Cli::parse();
    info!("Starting Niche Finder: {:?}", cli.command);

    match cli.command {
        Commands::Keywords(args) => run_keywords(&cli.global, args).await,
        Commands::Trends(args) => run_trends(&cli.global, args).await,
        Commands::Probe(args) => run_probe(&cli.global, args).await,
    }
}
