//! HTTP handlers for all web routes.

pub mod api;
pub mod dashboard;
pub mod system;

use chrono::{DateTime, Utc};
use tokenfilter_common::{Result, ScoreThresholds};
use tokenfilter_ranker::{score, PointRule, ScoreDistribution, ScoredAsset};
use tracing::info;

use crate::state::AppState;

/// Output of one fetch + score pass.
#[derive(Debug)]
pub struct ScoringRun {
    pub source: String,
    pub quote_currency: String,
    pub fetched_at: DateTime<Utc>,
    pub rows: Vec<ScoredAsset>,
    pub distribution: ScoreDistribution,
}

/// Fetch the current top list and score it. Every call re-fetches.
pub async fn run_scoring(state: &AppState, thresholds: &ScoreThresholds) -> Result<ScoringRun> {
    let snapshot = state
        .source
        .fetch_top_assets(state.config.provider.limit)
        .await?;
    let rows = score(&snapshot.records, thresholds)?;
    let distribution = ScoreDistribution::from_scored(&rows);

    info!(
        source = state.source.name(),
        assets = rows.len(),
        top = rows.first().map(|r| r.total_points).unwrap_or(0),
        "scored market snapshot"
    );

    Ok(ScoringRun {
        source: state.source.name().to_string(),
        quote_currency: snapshot.quote_currency,
        fetched_at: snapshot.fetched_at,
        rows,
        distribution,
    })
}

/// One summary line per rule at the given thresholds.
pub fn summary_lines(thresholds: &ScoreThresholds) -> Vec<String> {
    PointRule::ALL.iter().map(|rule| rule.summary(thresholds)).collect()
}
