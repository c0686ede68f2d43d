//! Per-record point computation and batch ordering.

use serde::{Deserialize, Serialize};
use tokenfilter_common::{AssetRecord, Result, ScoreThresholds, TokenFilterError};
use tracing::debug;

use crate::rules::{PointRule, RuleInputs};

/// The five 0/1 point columns of a scored record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointBreakdown {
    pub volume_5x_points: u8,
    pub volume_10x_points: u8,
    pub volume_50pct_points: u8,
    pub volume_100pct_points: u8,
    pub volume_200pct_points: u8,
}

impl PointBreakdown {
    pub fn evaluate(thresholds: &ScoreThresholds, inputs: &RuleInputs) -> Self {
        Self {
            volume_5x_points: PointRule::Volume5x.evaluate(thresholds, inputs),
            volume_10x_points: PointRule::Volume10x.evaluate(thresholds, inputs),
            volume_50pct_points: PointRule::Volume50Pct.evaluate(thresholds, inputs),
            volume_100pct_points: PointRule::Volume100Pct.evaluate(thresholds, inputs),
            volume_200pct_points: PointRule::Volume200Pct.evaluate(thresholds, inputs),
        }
    }

    pub fn get(&self, rule: PointRule) -> u8 {
        match rule {
            PointRule::Volume5x => self.volume_5x_points,
            PointRule::Volume10x => self.volume_10x_points,
            PointRule::Volume50Pct => self.volume_50pct_points,
            PointRule::Volume100Pct => self.volume_100pct_points,
            PointRule::Volume200Pct => self.volume_200pct_points,
        }
    }

    pub fn as_array(&self) -> [u8; 5] {
        [
            self.volume_5x_points,
            self.volume_10x_points,
            self.volume_50pct_points,
            self.volume_100pct_points,
            self.volume_200pct_points,
        ]
    }

    /// Sum of the five point columns (0–5).
    pub fn total(&self) -> u8 {
        self.as_array().iter().sum()
    }
}

/// A record annotated with its points. `total_points` serializes first so
/// that it leads the table columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAsset {
    pub total_points: u8,
    pub name: String,
    pub market_cap_usd: f64,
    pub volume_usd: f64,
    pub volume_coin: f64,
    #[serde(flatten)]
    pub points: PointBreakdown,
}

impl ScoredAsset {
    pub fn inputs(&self) -> RuleInputs {
        RuleInputs {
            market_cap_usd: self.market_cap_usd,
            volume_usd: self.volume_usd,
            volume_coin: self.volume_coin,
        }
    }
}

fn require(record: &AssetRecord, field: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| TokenFilterError::MissingField {
        record: record.name.clone(),
        field,
    })
}

/// Score a single record. Fails if any numeric field is absent.
pub fn score_record(record: &AssetRecord, thresholds: &ScoreThresholds) -> Result<ScoredAsset> {
    let inputs = RuleInputs {
        market_cap_usd: require(record, "market_cap_usd", record.market_cap_usd)?,
        volume_usd: require(record, "volume_usd", record.volume_usd)?,
        volume_coin: require(record, "volume_coin", record.volume_coin)?,
    };
    let points = PointBreakdown::evaluate(thresholds, &inputs);

    Ok(ScoredAsset {
        total_points: points.total(),
        name: record.name.clone(),
        market_cap_usd: inputs.market_cap_usd,
        volume_usd: inputs.volume_usd,
        volume_coin: inputs.volume_coin,
        points,
    })
}

/// Score a batch and order it by `total_points` descending.
///
/// The sort is stable: records with equal totals keep their input order.
/// Any record with a missing field aborts the whole pass.
pub fn score(records: &[AssetRecord], thresholds: &ScoreThresholds) -> Result<Vec<ScoredAsset>> {
    thresholds.validate()?;

    let mut scored = records
        .iter()
        .map(|r| score_record(r, thresholds))
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    debug!(
        count = scored.len(),
        top = scored.first().map(|s| s.total_points).unwrap_or(0),
        "scored market records"
    );
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_5x_hit() {
        let r = AssetRecord::new("A", 100.0, 60.0, 40.0);
        let s = score_record(&r, &ScoreThresholds::default()).unwrap();
        assert_eq!(s.points.as_array(), [1, 0, 0, 0, 0]);
        assert_eq!(s.total_points, 1);
    }

    #[test]
    fn test_all_rules_hit() {
        let r = AssetRecord::new("B", 100.0, 1200.0, 250.0);
        let s = score_record(&r, &ScoreThresholds::default()).unwrap();
        assert_eq!(s.points.as_array(), [1, 1, 1, 1, 1]);
        assert_eq!(s.total_points, 5);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // both hit p1 and p3 only → total 2
        let records = vec![
            AssetRecord::new("LOW", 100.0, 0.0, 0.0),
            AssetRecord::new("A", 100.0, 60.0, 60.0),
            AssetRecord::new("B", 100.0, 70.0, 70.0),
        ];
        let out = score(&records, &ScoreThresholds::default()).unwrap();
        let names: Vec<&str> = out.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "LOW"]);
        assert_eq!(out[0].total_points, 2);
        assert_eq!(out[1].total_points, 2);
    }

    #[test]
    fn test_empty_batch() {
        let out = score(&[], &ScoreThresholds::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_market_cap_policy() {
        let r = AssetRecord::new("ZERO", 0.0, 10.0, 0.0);
        let s = score_record(&r, &ScoreThresholds::default()).unwrap();
        assert_eq!(s.points.volume_5x_points, 0);
    }

    #[test]
    fn test_missing_field_aborts_batch() {
        let records = vec![
            AssetRecord::new("OK", 100.0, 60.0, 40.0),
            AssetRecord {
                name: "BROKEN".to_string(),
                market_cap_usd: Some(100.0),
                volume_usd: Some(10.0),
                volume_coin: None,
            },
        ];
        match score(&records, &ScoreThresholds::default()) {
            Err(TokenFilterError::MissingField { record, field }) => {
                assert_eq!(record, "BROKEN");
                assert_eq!(field, "volume_coin");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let r = AssetRecord {
            name: "X".to_string(),
            market_cap_usd: None,
            volume_usd: None,
            volume_coin: None,
        };
        let err = score_record(&r, &ScoreThresholds::default()).unwrap_err();
        assert!(err.to_string().contains("market_cap_usd"));
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let t = ScoreThresholds { t200pct: -2.0, ..Default::default() };
        let err = score(&[AssetRecord::new("A", 1.0, 1.0, 1.0)], &t).unwrap_err();
        assert!(matches!(err, TokenFilterError::InvalidThreshold { name: "t200pct", .. }));
    }

    #[test]
    fn test_total_points_serialized_first() {
        let s = score_record(&AssetRecord::new("A", 100.0, 60.0, 40.0), &ScoreThresholds::default()).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.starts_with(r#"{"total_points":1,"name":"A""#), "{json}");
        assert!(json.contains(r#""volume_200pct_points":0"#));
    }
}
