//! Typed per-request outcomes and the per-run summary

use serde::{Deserialize, Serialize};

use crate::error::HarvestError;

/// What a single request contributed to a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum RequestOutcome {
    /// Request returned at least one item
    Success { items: usize },
    /// Request failed transiently or returned nothing; processing continued
    RecoverableEmpty { reason: String },
    /// Request hit a systematic failure (unreachable proxy, bad configuration)
    Fatal { error: String },
}

impl RequestOutcome {
    /// Classify the result of a request returning a list of items
    pub fn from_result<T>(result: &Result<Vec<T>, HarvestError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => RequestOutcome::RecoverableEmpty {
                reason: "no results".to_string(),
            },
            Ok(items) => RequestOutcome::Success { items: items.len() },
            Err(e) => Self::from_error(e),
        }
    }

    pub fn from_error(error: &HarvestError) -> Self {
        if error.is_fatal() {
            RequestOutcome::Fatal {
                error: error.to_string(),
            }
        } else {
            RequestOutcome::RecoverableEmpty {
                reason: error.to_string(),
            }
        }
    }
}

/// A non-successful request, kept for the run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeNote {
    /// Query text, feed name or URL the request was for
    pub target: String,
    pub outcome: RequestOutcome,
}

/// Counts of request outcomes for a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub succeeded: usize,
    pub empty: usize,
    pub fatal: usize,
    /// Every request that did not succeed, in request order
    pub notes: Vec<OutcomeNote>,
}

impl RunSummary {
    pub fn record(&mut self, target: impl Into<String>, outcome: RequestOutcome) {
        match &outcome {
            RequestOutcome::Success { .. } => {
                self.succeeded += 1;
                return;
            }
            RequestOutcome::RecoverableEmpty { .. } => self.empty += 1,
            RequestOutcome::Fatal { .. } => self.fatal += 1,
        }
        self.notes.push(OutcomeNote {
            target: target.into(),
            outcome,
        });
    }

    /// Fold another summary into this one
    pub fn merge(&mut self, other: RunSummary) {
        self.succeeded += other.succeeded;
        self.empty += other.empty;
        self.fatal += other.fatal;
        self.notes.extend(other.notes);
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.empty + self.fatal
    }

    pub fn has_fatal(&self) -> bool {
        self.fatal > 0
    }

    /// First fatal error message, for diagnostics
    pub fn first_fatal(&self) -> Option<&str> {
        self.notes.iter().find_map(|note| match &note.outcome {
            RequestOutcome::Fatal { error } => Some(error.as_str()),
            _ => None,
        })
    }
}

/// Harvested items together with how the requests went
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harvest<T> {
    pub items: Vec<T>,
    pub summary: RunSummary,
}

impl<T> Harvest<T> {
    pub fn new(items: Vec<T>, summary: RunSummary) -> Self {
        Self { items, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_result() {
        let ok: Result<Vec<u8>, HarvestError> = Ok(vec![1, 2]);
        assert_eq!(
            RequestOutcome::from_result(&ok),
            RequestOutcome::Success { items: 2 }
        );

        let empty: Result<Vec<u8>, HarvestError> = Ok(vec![]);
        assert!(matches!(
            RequestOutcome::from_result(&empty),
            RequestOutcome::RecoverableEmpty { .. }
        ));

        let timeout: Result<Vec<u8>, HarvestError> = Err(HarvestError::Timeout("5s".into()));
        assert!(matches!(
            RequestOutcome::from_result(&timeout),
            RequestOutcome::RecoverableEmpty { .. }
        ));

        let proxy: Result<Vec<u8>, HarvestError> = Err(HarvestError::Proxy("refused".into()));
        assert!(matches!(
            RequestOutcome::from_result(&proxy),
            RequestOutcome::Fatal { .. }
        ));
    }

    #[test]
    fn test_summary_counts_and_notes() {
        let mut summary = RunSummary::default();
        summary.record("coffee a", RequestOutcome::Success { items: 3 });
        summary.record(
            "coffee b",
            RequestOutcome::RecoverableEmpty {
                reason: "no results".into(),
            },
        );
        summary.record(
            "coffee c",
            RequestOutcome::Fatal {
                error: "Proxy unreachable".into(),
            },
        );

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.notes.len(), 2);
        assert!(summary.has_fatal());
        assert_eq!(summary.first_fatal(), Some("Proxy unreachable"));
    }

    #[test]
    fn test_merge() {
        let mut a = RunSummary::default();
        a.record("x", RequestOutcome::Success { items: 1 });
        let mut b = RunSummary::default();
        b.record(
            "y",
            RequestOutcome::RecoverableEmpty {
                reason: "timeout".into(),
            },
        );
        a.merge(b);
        assert_eq!((a.succeeded, a.empty, a.fatal), (1, 1, 0));
        assert_eq!(a.notes[0].target, "y");
    }
}
