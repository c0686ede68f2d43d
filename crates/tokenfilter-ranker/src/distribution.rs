//! Heuristic scoring distribution shown above the table.

use serde::Serialize;

use crate::rules::PointRule;
use crate::scorer::ScoredAsset;

#[derive(Debug, Clone, Serialize)]
pub struct RuleHits {
    pub rule: PointRule,
    pub label: &'static str,
    pub hits: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreDistribution {
    /// `by_total[n]` = number of assets with exactly `n` points
    pub by_total: [usize; 6],
    pub rule_hits: Vec<RuleHits>,
    pub assets: usize,
}

impl ScoreDistribution {
    pub fn from_scored(scored: &[ScoredAsset]) -> Self {
        let mut by_total = [0usize; 6];
        for s in scored {
            by_total[usize::from(s.total_points).min(5)] += 1;
        }

        let rule_hits = PointRule::ALL
            .iter()
            .map(|&rule| RuleHits {
                rule,
                label: rule.column_label(),
                hits: scored.iter().filter(|s| s.points.get(rule) == 1).count(),
            })
            .collect();

        Self {
            by_total,
            rule_hits,
            assets: scored.len(),
        }
    }

    /// Largest bucket in `by_total`, for scaling bars.
    pub fn max_bucket(&self) -> usize {
        self.by_total.iter().copied().max().unwrap_or(0)
    }
}
