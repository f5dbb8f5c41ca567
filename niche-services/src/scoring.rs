//! Heuristic keyword scoring
//!
//! A [`Scorer`] evaluates an ordered [`RuleTable`] against a keyword (and an
//! optional traffic figure) and returns an integer score in `[0, 100]`.
//!
//! Rules are plain data so the weights can be listed and audited. Rules that
//! share a `group` are mutually exclusive: the first matching rule of a group,
//! in table order, applies and later members of that group are skipped.

use std::collections::HashSet;

use chrono::{Datelike, Local};
use niche_core::{word_count, KeywordCandidate, ScoredKeyword, ScoredTrend, TrendRecord};
use serde::{Deserialize, Serialize};

/// Condition a rule checks against the lower-cased keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Whitespace word count within `min..=max` (`max` open when `None`)
    WordCount { min: usize, max: Option<usize> },
    /// Any needle occurs as a substring
    ContainsAny(Vec<String>),
    /// Keyword starts with any prefix
    StartsWithAny(Vec<String>),
    /// Any ASCII decimal digit
    HasDigit,
    /// Current or previous year appears as a literal 4-digit substring
    MentionsRecentYear,
    /// First integer of the traffic figure is strictly greater than the threshold
    TrafficAbove(u64),
}

/// One weighted scoring rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub predicate: Predicate,
    /// Added to the score when the predicate holds (may be negative)
    pub bonus: i32,
    /// Exclusivity group, if any
    pub group: Option<String>,
}

impl Rule {
    pub fn new(name: &str, predicate: Predicate, bonus: i32) -> Self {
        Self {
            name: name.to_string(),
            predicate,
            bonus,
            group: None,
        }
    }

    /// Put the rule in an exclusivity group
    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn exact_words(n: usize) -> Predicate {
    Predicate::WordCount {
        min: n,
        max: Some(n),
    }
}

/// Ordered list of scoring rules
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules for ranking autocomplete suggestions
    ///
    /// | rule | bonus |
    /// |------|-------|
    /// | 4+ words / 3 / 2 / 1 (exclusive) | 25 / 20 / 10 / 5 |
    /// | high intent, else medium intent (exclusive) | 30 / 20 |
    /// | question prefix | 15 |
    /// | contains a digit | 10 |
    /// | current or previous year | 10 |
    /// | food-niche affinity words | 10 |
    pub fn keyword_mining() -> Self {
        Self::new(vec![
            Rule::new(
                "long tail",
                Predicate::WordCount { min: 4, max: None },
                25,
            )
            .in_group("length"),
            Rule::new("three words", exact_words(3), 20).in_group("length"),
            Rule::new("two words", exact_words(2), 10).in_group("length"),
            Rule::new("single word", exact_words(1), 5).in_group("length"),
            Rule::new(
                "high intent",
                Predicate::ContainsAny(words(&[
                    "buy",
                    "price",
                    "cost",
                    "cheap",
                    "affordable",
                    "discount",
                    "deal",
                ])),
                30,
            )
            .in_group("intent"),
            Rule::new(
                "medium intent",
                Predicate::ContainsAny(words(&[
                    "best",
                    "top",
                    "review",
                    "vs",
                    "compare",
                    "alternative",
                ])),
                20,
            )
            .in_group("intent"),
            Rule::new(
                "question",
                Predicate::StartsWithAny(words(&[
                    "how", "what", "why", "when", "where", "who", "which",
                ])),
                15,
            ),
            Rule::new("digit", Predicate::HasDigit, 10),
            Rule::new("recent year", Predicate::MentionsRecentYear, 10),
            Rule::new(
                "niche affinity",
                Predicate::ContainsAny(words(&["healthy", "crispy", "chicken", "potato"])),
                10,
            ),
        ])
    }

    /// Rules for ranking trending topics as site opportunities
    ///
    /// | rule | bonus |
    /// |------|-------|
    /// | commercial intent | 20 |
    /// | 2 to 5 words | 15 |
    /// | contains a digit | 10 |
    /// | traffic > 100k / > 50k / > 10k (exclusive) | 30 / 20 / 10 |
    /// | breaking-news or tragedy wording | -20 |
    pub fn trend_opportunity() -> Self {
        Self::new(vec![
            Rule::new(
                "commercial intent",
                Predicate::ContainsAny(words(&[
                    "best", "buy", "review", "vs", "how to", "top", "cheap", "price",
                ])),
                20,
            ),
            Rule::new(
                "moderate length",
                Predicate::WordCount {
                    min: 2,
                    max: Some(5),
                },
                15,
            ),
            Rule::new("digit", Predicate::HasDigit, 10),
            Rule::new("traffic 100k", Predicate::TrafficAbove(100_000), 30).in_group("traffic"),
            Rule::new("traffic 50k", Predicate::TrafficAbove(50_000), 20).in_group("traffic"),
            Rule::new("traffic 10k", Predicate::TrafficAbove(10_000), 10).in_group("traffic"),
            Rule::new(
                "news",
                Predicate::ContainsAny(words(&[
                    "死", "去世", "事故", "新闻", "快讯", "died", "dies", "dead", "killed",
                    "accident", "crash",
                ])),
                -20,
            ),
        ])
    }
}

/// First integer in a traffic figure, thousands separators ignored.
///
/// `"200,000+"` is 200000, `"5321 upvotes"` is 5321. Absent or number-free
/// text yields `None`.
pub fn parse_traffic(traffic: &str) -> Option<u64> {
    let cleaned = traffic.replace(',', "");
    let number = regex::Regex::new(r"\d+").ok()?;
    number.find(&cleaned)?.as_str().parse().ok()
}

struct Subject<'a> {
    text: &'a str,
    words: usize,
    traffic: Option<u64>,
}

/// Applies a [`RuleTable`] for a fixed current year
#[derive(Debug, Clone)]
pub struct Scorer {
    table: RuleTable,
    year: i32,
}

impl Scorer {
    pub fn new(table: RuleTable, current_year: i32) -> Self {
        Self {
            table,
            year: current_year,
        }
    }

    /// Scorer whose year rule uses today's local date
    pub fn for_today(table: RuleTable) -> Self {
        Self::new(table, Local::now().year())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    fn holds(&self, predicate: &Predicate, subject: &Subject<'_>) -> bool {
        match predicate {
            Predicate::WordCount { min, max } => {
                subject.words >= *min && max.map_or(true, |max| subject.words <= max)
            }
            Predicate::ContainsAny(needles) => {
                needles.iter().any(|needle| subject.text.contains(needle.as_str()))
            }
            Predicate::StartsWithAny(prefixes) => prefixes
                .iter()
                .any(|prefix| subject.text.starts_with(prefix.as_str())),
            Predicate::HasDigit => subject.text.chars().any(|c| c.is_ascii_digit()),
            Predicate::MentionsRecentYear => [self.year, self.year - 1]
                .iter()
                .any(|year| subject.text.contains(&year.to_string())),
            Predicate::TrafficAbove(threshold) => {
                subject.traffic.is_some_and(|traffic| traffic > *threshold)
            }
        }
    }

    /// Score a keyword, with an optional raw traffic figure.
    ///
    /// Never fails: unparseable traffic earns no traffic bonus.
    pub fn score(&self, text: &str, traffic: Option<&str>) -> u8 {
        let lower = text.to_lowercase();
        let subject = Subject {
            text: &lower,
            words: word_count(&lower),
            traffic: traffic.and_then(parse_traffic),
        };

        let mut fired_groups: HashSet<&str> = HashSet::new();
        let mut total: i32 = 0;

        for rule in self.table.rules() {
            if let Some(group) = rule.group.as_deref() {
                if fired_groups.contains(group) {
                    continue;
                }
            }
            if self.holds(&rule.predicate, &subject) {
                total += rule.bonus;
                if let Some(group) = rule.group.as_deref() {
                    fired_groups.insert(group);
                }
            }
        }

        total.clamp(0, 100) as u8
    }

    pub fn score_keyword(&self, candidate: &KeywordCandidate) -> ScoredKeyword {
        ScoredKeyword::new(candidate.text.as_str(), self.score(&candidate.text, None))
    }

    pub fn score_trend(&self, record: TrendRecord) -> ScoredTrend {
        let score = self.score(&record.keyword, record.traffic.as_str());
        ScoredTrend { record, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Scorer {
        Scorer::new(RuleTable::keyword_mining(), 2024)
    }

    fn trends() -> Scorer {
        Scorer::new(RuleTable::trend_opportunity(), 2024)
    }

    #[test]
    fn test_long_tail_recipe_keyword() {
        // 25 length + 20 "best" + 10 digit + 10 year + 10 "chicken"
        assert_eq!(keywords().score("best air fryer chicken recipes 2024", None), 75);
    }

    #[test]
    fn test_intent_group_is_exclusive() {
        // high intent wins; "best" does not add the medium bonus on top
        assert_eq!(keywords().score("best cheap blender", None), 20 + 30);
        assert_eq!(keywords().score("blender review", None), 10 + 20);
    }

    #[test]
    fn test_length_group() {
        let scorer = keywords();
        assert_eq!(scorer.score("blender", None), 5);
        assert_eq!(scorer.score("glass blender", None), 10);
        assert_eq!(scorer.score("glass blender jar", None), 20);
        assert_eq!(scorer.score("glass blender jar lid", None), 25);
        assert_eq!(scorer.score("", None), 0);
    }

    #[test]
    fn test_question_prefix_and_case() {
        assert_eq!(keywords().score("How To Descale Kettle", None), 25 + 15);
    }

    #[test]
    fn test_previous_year_counts() {
        assert_eq!(keywords().score("kettle 2023", None), 10 + 10 + 10);
        assert_eq!(keywords().score("kettle 2019", None), 10 + 10);
    }

    #[test]
    fn test_clamped_to_range() {
        let greedy = Scorer::new(
            RuleTable::new(vec![
                Rule::new("a", Predicate::HasDigit, 80),
                Rule::new("b", Predicate::HasDigit, 80),
            ]),
            2024,
        );
        assert_eq!(greedy.score("x1", None), 100);

        let gloomy = trends();
        assert_eq!(gloomy.score("crash", None), 0);
    }

    #[test]
    fn test_trend_traffic_tiers() {
        let scorer = trends();
        assert_eq!(scorer.score("eclipse", Some("200,000+")), 30);
        assert_eq!(scorer.score("eclipse", Some("60000 upvotes")), 20);
        assert_eq!(scorer.score("eclipse", Some("20K+")), 0);
        assert_eq!(scorer.score("eclipse", Some("10001")), 10);
        assert_eq!(scorer.score("eclipse", Some("N/A")), 0);
        assert_eq!(scorer.score("eclipse", None), 0);
    }

    #[test]
    fn test_trend_commercial_and_news() {
        let scorer = trends();
        assert_eq!(scorer.score("best phones 2025", Some("50,000+")), 20 + 15 + 10 + 10);
        assert_eq!(scorer.score("highway accident report", Some("200,000+")), 15 + 30 - 20);
        assert_eq!(scorer.score("某地交通事故", None), 0);
    }

    #[test]
    fn test_parse_traffic() {
        assert_eq!(parse_traffic("200,000+"), Some(200_000));
        assert_eq!(parse_traffic("5321 upvotes"), Some(5321));
        assert_eq!(parse_traffic("热度 1234 万"), Some(1234));
        assert_eq!(parse_traffic("N/A"), None);
        assert_eq!(parse_traffic(""), None);
    }

    #[test]
    fn test_score_is_deterministic_for_fixed_year() {
        let scorer = keywords();
        let first = scorer.score("what is the best coffee maker 2024", None);
        let second = scorer.score("what is the best coffee maker 2024", None);
        assert_eq!(first, second);
        assert_eq!(first, 25 + 20 + 15 + 10 + 10);
    }
}
