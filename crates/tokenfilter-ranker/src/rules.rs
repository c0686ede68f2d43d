//! The five volume point rules.
//!
//! | Rule          | Condition (strict)                          |
//! |---------------|---------------------------------------------|
//! | Volume 5x     | volume_usd  > t5x * market_cap / 10         |
//! | Volume 10x    | volume_usd  > t10x * market_cap             |
//! | Volume 50%    | volume_coin > t50pct * market_cap           |
//! | Volume 100%   | volume_coin > t100pct * market_cap          |
//! | Volume 200%   | volume_coin > t200pct * market_cap          |
//!
//! The "past 10 days avg" / "past day avg" wording of the first two rules is
//! a label only. Only the current 24h snapshot is compared.

use serde::{Deserialize, Serialize};
use tokenfilter_common::ScoreThresholds;

/// Validated numeric inputs of one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleInputs {
    pub market_cap_usd: f64,
    pub volume_usd: f64,
    pub volume_coin: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointRule {
    Volume5x,
    Volume10x,
    Volume50Pct,
    Volume100Pct,
    Volume200Pct,
}

impl PointRule {
    pub const ALL: [PointRule; 5] = [
        PointRule::Volume5x,
        PointRule::Volume10x,
        PointRule::Volume50Pct,
        PointRule::Volume100Pct,
        PointRule::Volume200Pct,
    ];

    /// Table column header.
    pub fn column_label(self) -> &'static str {
        match self {
            PointRule::Volume5x => "Volume 5x Points",
            PointRule::Volume10x => "Volume 10x Points",
            PointRule::Volume50Pct => "Volume 50% Points",
            PointRule::Volume100Pct => "Volume 100% Points",
            PointRule::Volume200Pct => "Volume 200% Points",
        }
    }

    /// Label of the threshold input in the scoring form.
    pub fn form_label(self) -> &'static str {
        match self {
            PointRule::Volume5x => "Volume 5x larger than past 10 days avg",
            PointRule::Volume10x => "Volume 10x larger than past day avg",
            PointRule::Volume50Pct | PointRule::Volume100Pct | PointRule::Volume200Pct => {
                "Volume larger than % of market cap"
            }
        }
    }

    /// Query/config key of the threshold driving this rule.
    pub fn threshold_key(self) -> &'static str {
        match self {
            PointRule::Volume5x => "t5x",
            PointRule::Volume10x => "t10x",
            PointRule::Volume50Pct => "t50pct",
            PointRule::Volume100Pct => "t100pct",
            PointRule::Volume200Pct => "t200pct",
        }
    }

    pub fn threshold(self, thresholds: &ScoreThresholds) -> f64 {
        match self {
            PointRule::Volume5x => thresholds.t5x,
            PointRule::Volume10x => thresholds.t10x,
            PointRule::Volume50Pct => thresholds.t50pct,
            PointRule::Volume100Pct => thresholds.t100pct,
            PointRule::Volume200Pct => thresholds.t200pct,
        }
    }

    /// One summary line describing the rule at the given thresholds,
    /// e.g. `volume 5x larger than past 10 days avg` or
    /// `volume larger than 50% of market cap`.
    pub fn summary(self, thresholds: &ScoreThresholds) -> String {
        let t = self.threshold(thresholds);
        match self {
            PointRule::Volume5x => format!("volume {}x larger than past 10 days avg", t),
            PointRule::Volume10x => format!("volume {}x larger than past day avg", t),
            _ => format!("volume larger than {:.0}% of market cap", t * 100.0),
        }
    }

    /// Value the relevant volume must strictly exceed, or `None` when the
    /// rule cannot fire. A zero market cap never fires the 5x rule.
    pub fn cutoff(self, thresholds: &ScoreThresholds, market_cap_usd: f64) -> Option<f64> {
        let t = self.threshold(thresholds);
        match self {
            PointRule::Volume5x if market_cap_usd == 0.0 => None,
            PointRule::Volume5x => Some(t * market_cap_usd / 10.0),
            _ => Some(t * market_cap_usd),
        }
    }

    /// Which volume figure the rule compares.
    pub fn volume(self, inputs: &RuleInputs) -> f64 {
        match self {
            PointRule::Volume5x | PointRule::Volume10x => inputs.volume_usd,
            _ => inputs.volume_coin,
        }
    }

    /// 1 if the rule fires for `inputs`, else 0.
    pub fn evaluate(self, thresholds: &ScoreThresholds, inputs: &RuleInputs) -> u8 {
        match self.cutoff(thresholds, inputs.market_cap_usd) {
            Some(cutoff) => u8::from(self.volume(inputs) > cutoff),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(mcap: f64, vusd: f64, vcoin: f64) -> RuleInputs {
        RuleInputs { market_cap_usd: mcap, volume_usd: vusd, volume_coin: vcoin }
    }

    #[test]
    fn test_summary_lines_at_defaults() {
        let t = ScoreThresholds::default();
        let lines: Vec<String> = PointRule::ALL.iter().map(|r| r.summary(&t)).collect();
        assert_eq!(lines[0], "volume 5x larger than past 10 days avg");
        assert_eq!(lines[1], "volume 10x larger than past day avg");
        assert_eq!(lines[2], "volume larger than 50% of market cap");
        assert_eq!(lines[3], "volume larger than 100% of market cap");
        assert_eq!(lines[4], "volume larger than 200% of market cap");
    }

    #[test]
    fn test_summary_fractional_multiplier() {
        let t = ScoreThresholds { t5x: 2.5, ..Default::default() };
        assert_eq!(PointRule::Volume5x.summary(&t), "volume 2.5x larger than past 10 days avg");
    }

    #[test]
    fn test_equal_to_cutoff_scores_zero() {
        let t = ScoreThresholds::default();
        // 5 * 100 / 10 = 50
        assert_eq!(PointRule::Volume5x.evaluate(&t, &inputs(100.0, 50.0, 0.0)), 0);
        assert_eq!(PointRule::Volume5x.evaluate(&t, &inputs(100.0, 50.000001, 0.0)), 1);
        // 0.5 * 100 = 50
        assert_eq!(PointRule::Volume50Pct.evaluate(&t, &inputs(100.0, 0.0, 50.0)), 0);
    }

    #[test]
    fn test_coin_rules_use_coin_volume() {
        let t = ScoreThresholds::default();
        // 10_000 > 10 * 100, so only the USD rules fire
        let i = inputs(100.0, 10_000.0, 0.0);
        assert_eq!(PointRule::Volume10x.evaluate(&t, &i), 1);
        assert_eq!(PointRule::Volume100Pct.evaluate(&t, &i), 0);
        let i = inputs(100.0, 0.0, 10_000.0);
        assert_eq!(PointRule::Volume10x.evaluate(&t, &i), 0);
        assert_eq!(PointRule::Volume200Pct.evaluate(&t, &i), 1);
    }

    #[test]
    fn test_zero_market_cap_never_fires_5x() {
        let t = ScoreThresholds::default();
        assert_eq!(PointRule::Volume5x.evaluate(&t, &inputs(0.0, 1_000.0, 0.0)), 0);
        // the other rules keep plain arithmetic
        assert_eq!(PointRule::Volume10x.evaluate(&t, &inputs(0.0, 1_000.0, 0.0)), 1);
    }

    #[test]
    fn test_cutoff_absent_for_zero_market_cap_5x() {
        let t = ScoreThresholds::default();
        assert_eq!(PointRule::Volume5x.cutoff(&t, 0.0), None);
        assert_eq!(PointRule::Volume5x.cutoff(&t, 100.0), Some(50.0));
        assert_eq!(PointRule::Volume10x.cutoff(&t, 0.0), Some(0.0));
        assert_eq!(PointRule::Volume200Pct.cutoff(&t, 100.0), Some(200.0));
    }

    #[test]
    fn test_nan_volume_scores_zero() {
        let t = ScoreThresholds::default();
        for rule in PointRule::ALL {
            assert_eq!(rule.evaluate(&t, &inputs(100.0, f64::NAN, f64::NAN)), 0);
        }
    }
}
