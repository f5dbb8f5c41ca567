//! Interactive prompts
//!
//! Fills in a [`RunConfig`] by asking on the terminal, the same questions the
//! flags answer.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use niche_core::{ProxyConfig, Region, RunConfig, DEFAULT_PROXY_PORT, MAX_COMPETITOR_URLS};

/// Line-based question/answer session over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask one question; an empty answer (or end of input) yields `default`
    pub fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        if default.is_empty() {
            write!(self.output, "{}: ", question)?;
        } else {
            write!(self.output, "{} [{}]: ", question, default)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        let answer = line.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }

    /// Proxy on by default, on the local port
    pub fn ask_proxy(&mut self, config: &mut RunConfig) -> Result<()> {
        let use_proxy = self.ask("Use a proxy for Google and Reddit? (y/n)", "y")?;
        if !use_proxy.eq_ignore_ascii_case("y") {
            config.proxy = None;
            return Ok(());
        }

        let port = self.ask("Proxy port", &DEFAULT_PROXY_PORT.to_string())?;
        let port: u16 = port
            .parse()
            .with_context(|| format!("Invalid proxy port: {}", port))?;
        config.proxy = Some(ProxyConfig::local(port));
        Ok(())
    }

    pub fn ask_keywords(&mut self, config: &mut RunConfig) -> Result<()> {
        config.seed = self.ask("Seed keyword (e.g. coffee maker)", &config.seed)?;
        config.language = self.ask("Language (en/zh)", &config.language)?;

        writeln!(
            self.output,
            "Enter up to {} competitor URLs from the first search results page (blank to skip)",
            MAX_COMPETITOR_URLS
        )?;
        let mut urls = Vec::new();
        for i in 1..=MAX_COMPETITOR_URLS {
            let url = self.ask(&format!("Competitor {} URL", i), "")?;
            if url.is_empty() {
                break;
            }
            urls.push(url);
        }
        if !urls.is_empty() {
            config.competitor_urls = urls;
        }
        Ok(())
    }

    pub fn ask_regions(&mut self, config: &mut RunConfig) -> Result<()> {
        let choice = self.ask("Regions: 1) US  2) CN  3) both", "3")?;
        config.regions = match choice.as_str() {
            "1" => vec![Region::Us],
            "2" => vec![Region::Cn],
            _ => vec![Region::Us, Region::Cn],
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(answers: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_defaults_on_empty_answers() {
        let mut p = prompter("\n\n");
        let mut config = RunConfig::default();
        p.ask_proxy(&mut config).unwrap();
        assert_eq!(config.proxy, Some(ProxyConfig::local(DEFAULT_PROXY_PORT)));
    }

    #[test]
    fn test_keyword_answers() {
        let mut p = prompter("n\ncoffee maker\nzh\nhttps://a.example\nhttps://b.example\n\n");
        let mut config = RunConfig::default();
        p.ask_proxy(&mut config).unwrap();
        p.ask_keywords(&mut config).unwrap();

        assert_eq!(config.proxy, None);
        assert_eq!(config.seed, "coffee maker");
        assert_eq!(config.language, "zh");
        assert_eq!(
            config.competitor_urls,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_region_choice_and_bad_port() {
        let mut p = prompter("2\n");
        let mut config = RunConfig::default();
        p.ask_regions(&mut config).unwrap();
        assert_eq!(config.regions, vec![Region::Cn]);

        let mut p = prompter("y\nseventy\n");
        assert!(p.ask_proxy(&mut RunConfig::default()).is_err());
    }
}
