//! Knowledge base: question bank, condition rules, and red-flag triggers
//!
//! All checker data is immutable and assembled once at process start via
//! [`KnowledgeBase::builtin`]. Rule order is load-bearing: ranking breaks
//! score ties by the order conditions appear here.

pub mod conditions;
pub mod red_flags;
pub mod symptoms;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single yes/no question about a symptom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    /// Unique identifier, referenced by condition weights and red flags
    pub key: String,
    /// Question text shown to the user
    pub prompt: String,
}

/// Condition severity, from self-care through emergency care
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// True for the tiers that warrant prompt medical attention
    pub fn is_severe(&self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }

    /// Lowercase name as shown in results and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weighted symptom inside a condition rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomWeight {
    pub key: String,
    pub weight: f64,
}

/// A candidate condition, scored by summing the weights of affirmed symptoms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionRule {
    pub name: String,
    pub weights: Vec<SymptomWeight>,
    pub severity: Severity,
    /// One-sentence self-care or next-step guidance
    pub advice: String,
}

impl ConditionRule {
    /// Weight assigned to a symptom key, if the rule references it
    pub fn weight_for(&self, key: &str) -> Option<f64> {
        self.weights.iter().find(|w| w.key == key).map(|w| w.weight)
    }

    /// Best achievable raw score: the sum of all positive weights.
    ///
    /// A rule with no positive weights is guarded as 1.0 so confidence
    /// math never divides by zero.
    pub fn max_possible(&self) -> f64 {
        let total: f64 = self.weights.iter().map(|w| w.weight.max(0.0)).sum();
        if total > 0.0 {
            total
        } else {
            1.0
        }
    }
}

/// A red-flag trigger: fires when every listed symptom is affirmed.
///
/// A single-key trigger is the one-element case; most built-in triggers
/// are two- or three-symptom combinations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedFlagRule {
    /// Human-readable description of the combination
    pub description: String,
    /// Symptom keys that must all be affirmed for the trigger to fire
    pub all_of: Vec<String>,
}

/// Issue found by knowledge-base validation
#[derive(Debug, Clone, PartialEq)]
pub enum KbIssue {
    DuplicateSymptomKey { key: String },
    EmptyPrompt { key: String },
    EmptyRule { condition: String },
    UnknownWeightKey { condition: String, key: String },
    NonPositiveWeight { condition: String, key: String, weight: f64 },
    UnknownRedFlagKey { trigger: String, key: String },
    EmptyRedFlag { trigger: String },
}

impl fmt::Display for KbIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KbIssue::DuplicateSymptomKey { key } => {
                write!(f, "duplicate symptom key '{}'", key)
            }
            KbIssue::EmptyPrompt { key } => {
                write!(f, "symptom '{}' has an empty prompt", key)
            }
            KbIssue::EmptyRule { condition } => {
                write!(f, "condition '{}' has no symptom weights", condition)
            }
            KbIssue::UnknownWeightKey { condition, key } => {
                write!(f, "condition '{}' weights unknown symptom '{}'", condition, key)
            }
            KbIssue::NonPositiveWeight { condition, key, weight } => {
                write!(
                    f,
                    "condition '{}' has non-positive weight {} for '{}'",
                    condition, weight, key
                )
            }
            KbIssue::UnknownRedFlagKey { trigger, key } => {
                write!(f, "red flag '{}' references unknown symptom '{}'", trigger, key)
            }
            KbIssue::EmptyRedFlag { trigger } => {
                write!(f, "red flag '{}' has no symptom keys", trigger)
            }
        }
    }
}

/// Immutable bundle of all static checker data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Question bank, in the order questions are asked
    pub symptoms: Vec<Symptom>,
    /// Condition rules, in tie-break order
    pub conditions: Vec<ConditionRule>,
    /// Red-flag triggers
    pub red_flags: Vec<RedFlagRule>,
}

impl KnowledgeBase {
    /// Build the built-in knowledge base: 34 symptom questions,
    /// 15 weighted conditions, and 4 red-flag triggers.
    pub fn builtin() -> Self {
        KnowledgeBase {
            symptoms: symptoms::question_bank(),
            conditions: conditions::condition_rules(),
            red_flags: red_flags::red_flag_rules(),
        }
    }

    /// Look up a symptom by key
    pub fn symptom(&self, key: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.key == key)
    }

    /// Look up a condition rule by name
    pub fn condition(&self, name: &str) -> Option<&ConditionRule> {
        self.conditions.iter().find(|c| c.name == name)
    }

    /// Symptom keys referenced by at least one condition or red flag
    pub fn referenced_keys(&self) -> HashSet<&str> {
        let mut keys: HashSet<&str> = HashSet::new();
        for rule in &self.conditions {
            keys.extend(rule.weights.iter().map(|w| w.key.as_str()));
        }
        for flag in &self.red_flags {
            keys.extend(flag.all_of.iter().map(String::as_str));
        }
        keys
    }

    /// Symptoms asked but never used by any condition or red flag
    pub fn orphan_symptoms(&self) -> Vec<&Symptom> {
        let referenced = self.referenced_keys();
        self.symptoms
            .iter()
            .filter(|s| !referenced.contains(s.key.as_str()))
            .collect()
    }

    /// Check every cross-reference in the knowledge base.
    ///
    /// Every weight key and red-flag key must name an existing symptom,
    /// weights must be positive, and rules must be non-empty. Returns all
    /// issues found; an empty vector means the data is sound.
    pub fn validate(&self) -> Vec<KbIssue> {
        let mut issues = Vec::new();

        let mut seen: HashSet<&str> = HashSet::new();
        for symptom in &self.symptoms {
            if !seen.insert(symptom.key.as_str()) {
                issues.push(KbIssue::DuplicateSymptomKey {
                    key: symptom.key.clone(),
                });
            }
            if symptom.prompt.trim().is_empty() {
                issues.push(KbIssue::EmptyPrompt {
                    key: symptom.key.clone(),
                });
            }
        }

        for rule in &self.conditions {
            if rule.weights.is_empty() {
                issues.push(KbIssue::EmptyRule {
                    condition: rule.name.clone(),
                });
            }
            for entry in &rule.weights {
                if !seen.contains(entry.key.as_str()) {
                    issues.push(KbIssue::UnknownWeightKey {
                        condition: rule.name.clone(),
                        key: entry.key.clone(),
                    });
                }
                if entry.weight <= 0.0 {
                    issues.push(KbIssue::NonPositiveWeight {
                        condition: rule.name.clone(),
                        key: entry.key.clone(),
                        weight: entry.weight,
                    });
                }
            }
        }

        for flag in &self.red_flags {
            if flag.all_of.is_empty() {
                issues.push(KbIssue::EmptyRedFlag {
                    trigger: flag.description.clone(),
                });
            }
            for key in &flag.all_of {
                if !seen.contains(key.as_str()) {
                    issues.push(KbIssue::UnknownRedFlagKey {
                        trigger: flag.description.clone(),
                        key: key.clone(),
                    });
                }
            }
        }

        issues
    }
}
