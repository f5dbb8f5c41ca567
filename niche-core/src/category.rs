//! Category buckets and niche suggestions

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Label of the catch-all bucket
pub const OTHER_CATEGORY: &str = "other";

/// Records partitioned into topical categories.
///
/// Declared categories keep their declaration order; records that matched no
/// category live in the separate `other` bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categorized<T> {
    buckets: IndexMap<String, Vec<T>>,
    other: Vec<T>,
}

impl<T> Categorized<T> {
    /// Create empty buckets for the given labels, in order.
    ///
    /// [`OTHER_CATEGORY`] is reserved for the catch-all bucket and never
    /// becomes a declared bucket.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            buckets: labels
                .into_iter()
                .map(Into::<String>::into)
                .filter(|label| label != OTHER_CATEGORY)
                .map(|label| (label, Vec::new()))
                .collect(),
            other: Vec::new(),
        }
    }

    /// Append to a declared bucket, creating it at the end if unknown.
    /// Items labelled [`OTHER_CATEGORY`] go to the catch-all bucket.
    pub fn push(&mut self, label: &str, item: T) {
        if label == OTHER_CATEGORY {
            self.other.push(item);
            return;
        }
        match self.buckets.get_mut(label) {
            Some(bucket) => bucket.push(item),
            None => {
                self.buckets.insert(label.to_string(), vec![item]);
            }
        }
    }

    pub fn push_other(&mut self, item: T) {
        self.other.push(item);
    }

    /// Declared buckets in declaration order (empty ones included)
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.buckets
            .iter()
            .map(|(label, items)| (label.as_str(), items.as_slice()))
    }

    pub fn get(&self, label: &str) -> Option<&[T]> {
        if label == OTHER_CATEGORY {
            return Some(&self.other);
        }
        self.buckets.get(label).map(Vec::as_slice)
    }

    pub fn other(&self) -> &[T] {
        &self.other
    }

    /// Non-empty buckets with their sizes, `other` last
    pub fn counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = self
            .buckets
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(label, items)| (label.clone(), items.len()))
            .collect();
        if !self.other.is_empty() {
            counts.push((OTHER_CATEGORY.to_string(), self.other.len()));
        }
        counts
    }

    /// Total number of records across all buckets
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum::<usize>() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A niche recommendation derived from one category's best trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub seed_keyword: String,
    /// Score of the seed trend (0 - 100)
    pub opportunity_score: u8,
    /// Up to three runner-up keywords from the same category
    pub related_trends: Vec<String>,
    pub suggested_domains: Vec<String>,
    pub content_ideas: Vec<String>,
}
