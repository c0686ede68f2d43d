//! tokenfilter-ranker: Heuristic volume-anomaly scoring.
//!
//! Five independent point rules compare an asset's 24h volume against its
//! market cap; the points are summed and the batch is ordered by the total.

pub mod rules;
pub mod scorer;
pub mod distribution;

pub use rules::{PointRule, RuleInputs};
pub use scorer::{score, score_record, PointBreakdown, ScoredAsset};
pub use distribution::ScoreDistribution;
