//! User-adjustable cutoffs for the five volume point rules.

use serde::{Deserialize, Serialize};
use crate::error::{Result, TokenFilterError};

/// The five threshold inputs of the scoring form.
///
/// Each rule is independent: no ordering is enforced between them, so
/// `t100pct < t50pct` is allowed and simply makes the 100% rule looser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    /// Multiplier for the "5x" rule, compared against market cap / 10
    #[serde(default = "default_t5x")]
    pub t5x: f64,
    /// Multiplier for the "10x" rule, compared against market cap
    #[serde(default = "default_t10x")]
    pub t10x: f64,
    /// Fraction of market cap for the first coin-volume rule
    #[serde(default = "default_t50pct")]
    pub t50pct: f64,
    /// Fraction of market cap for the second coin-volume rule
    #[serde(default = "default_t100pct")]
    pub t100pct: f64,
    /// Fraction of market cap for the third coin-volume rule
    #[serde(default = "default_t200pct")]
    pub t200pct: f64,
}

fn default_t5x() -> f64 { 5.0 }
fn default_t10x() -> f64 { 10.0 }
fn default_t50pct() -> f64 { 0.5 }
fn default_t100pct() -> f64 { 1.0 }
fn default_t200pct() -> f64 { 2.0 }

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            t5x: default_t5x(),
            t10x: default_t10x(),
            t50pct: default_t50pct(),
            t100pct: default_t100pct(),
            t200pct: default_t200pct(),
        }
    }
}

impl ScoreThresholds {
    /// `(field name, value)` pairs in rule order.
    pub fn as_pairs(&self) -> [(&'static str, f64); 5] {
        [
            ("t5x", self.t5x),
            ("t10x", self.t10x),
            ("t50pct", self.t50pct),
            ("t100pct", self.t100pct),
            ("t200pct", self.t200pct),
        ]
    }

    /// Reject negative, NaN or infinite cutoffs.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.as_pairs() {
            if !value.is_finite() || value < 0.0 {
                return Err(TokenFilterError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let t = ScoreThresholds::default();
        assert_eq!(t.t5x, 5.0);
        assert_eq!(t.t10x, 10.0);
        assert_eq!(t.t50pct, 0.5);
        assert_eq!(t.t100pct, 1.0);
        assert_eq!(t.t200pct, 2.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let t = ScoreThresholds { t50pct: -0.1, ..Default::default() };
        match t.validate() {
            Err(TokenFilterError::InvalidThreshold { name, .. }) => assert_eq!(name, "t50pct"),
            other => panic!("expected InvalidThreshold, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let t = ScoreThresholds { t10x: f64::NAN, ..Default::default() };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_unordered_thresholds_allowed() {
        let t = ScoreThresholds { t50pct: 3.0, t100pct: 0.2, ..Default::default() };
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let t: ScoreThresholds = serde_yaml::from_str("t5x: 7").unwrap();
        assert_eq!(t.t5x, 7.0);
        assert_eq!(t.t200pct, 2.0);
    }
}
