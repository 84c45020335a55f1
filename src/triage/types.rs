//! Core triage data types
//!
//! An [`AnswerSet`] captures the user's yes/no answers; scoring and
//! ranking turn it into a [`TriageOutcome`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::kb::Severity;

/// Yes/no answers keyed by symptom key.
///
/// A missing key reads as "no", so partially-collected answer sets
/// still score without special-casing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: HashMap<String, bool>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of affirmed symptom keys
    pub fn from_affirmed(keys: &[&str]) -> Self {
        let mut set = Self::new();
        for key in keys {
            set.record(key, true);
        }
        set
    }

    /// Record one answer, replacing any earlier one for the same key
    pub fn record(&mut self, key: &str, affirmed: bool) {
        self.answers.insert(key.to_string(), affirmed);
    }

    /// Whether the symptom was affirmed. Unanswered keys read as false.
    pub fn is_affirmed(&self, key: &str) -> bool {
        self.answers.get(key).copied().unwrap_or(false)
    }

    /// Whether any answer was recorded for the key
    pub fn was_asked(&self, key: &str) -> bool {
        self.answers.contains_key(key)
    }

    /// Affirmed keys in sorted order
    pub fn affirmed_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .answers
            .iter()
            .filter(|(_, v)| **v)
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn affirmed_count(&self) -> usize {
        self.answers.values().filter(|v| **v).count()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// One condition after scoring, before ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCondition {
    pub name: String,
    /// Sum of weights for affirmed symptoms
    pub raw_score: f64,
    /// Sum of all positive weights in the rule
    pub max_possible: f64,
    pub severity: Severity,
    pub advice: String,
}

/// One condition in the final ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCondition {
    pub name: String,
    pub raw_score: f64,
    /// Raw score as a percentage of the rule's maximum, clamped to 0-100
    pub confidence: f64,
    pub severity: Severity,
    pub advice: String,
}

/// A red-flag trigger that fired
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedFlagHit {
    pub description: String,
    /// The affirmed symptom keys that satisfied the trigger
    pub matched: Vec<String>,
}

/// Outcome of red-flag detection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedFlagResult {
    pub hits: Vec<RedFlagHit>,
}

impl RedFlagResult {
    /// True when at least one trigger fired
    pub fn urgent(&self) -> bool {
        !self.hits.is_empty()
    }
}

/// Complete result of one triage pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageOutcome {
    /// Top conditions after ranking (at most the configured count)
    pub ranked: Vec<RankedCondition>,
    /// Every condition with its raw score, in rule order
    pub scored: Vec<ScoredCondition>,
    pub red_flags: RedFlagResult,
}
