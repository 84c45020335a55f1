//! Condition ranking
//!
//! Converts raw scores to confidence percentages, sorts descending,
//! and keeps the top entries. The sort is stable, so equal scores keep
//! rule order.

use serde::{Deserialize, Serialize};

use super::types::{RankedCondition, ScoredCondition};

/// Ranking configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Number of conditions to keep
    pub top_n: usize,
    /// Drop zero-score conditions before ranking. Off by default, so a
    /// quiet answer set still produces a full result list.
    pub matched_only: bool,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            matched_only: false,
        }
    }
}

/// Ranks scored conditions into the final shortlist
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    /// Create a ranker with the default config
    pub fn new() -> Self {
        Self {
            config: RankerConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Rank conditions by raw score.
    ///
    /// Confidence is raw score over the rule's maximum as a percentage,
    /// clamped to 0-100. With `matched_only` the result may hold fewer
    /// than `top_n` entries.
    pub fn rank(&self, scored: &[ScoredCondition]) -> Vec<RankedCondition> {
        let mut ranked: Vec<RankedCondition> = scored
            .iter()
            .filter(|s| !self.config.matched_only || s.raw_score > 0.0)
            .map(|s| RankedCondition {
                name: s.name.clone(),
                raw_score: s.raw_score,
                confidence: confidence_percent(s.raw_score, s.max_possible),
                severity: s.severity,
                advice: s.advice.clone(),
            })
            .collect();

        // Stable sort: score ties keep rule order
        ranked.sort_by(|a, b| {
            b.raw_score
                .partial_cmp(&a.raw_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked.truncate(self.config.top_n);
        ranked
    }

    /// Get current configuration
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

fn confidence_percent(raw: f64, max_possible: f64) -> f64 {
    let divisor = if max_possible > 0.0 { max_possible } else { 1.0 };
    (raw / divisor * 100.0).clamp(0.0, 100.0)
}
