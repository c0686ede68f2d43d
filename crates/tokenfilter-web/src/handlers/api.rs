//! JSON endpoints over the same scoring pass as the dashboard.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokenfilter_common::error::ApiError;
use tokenfilter_common::ScoreThresholds;
use tokenfilter_ranker::{PointRule, ScoreDistribution, ScoredAsset};

use crate::handlers::{run_scoring, summary_lines};
use crate::params::DashboardParams;
use crate::state::SharedState;
use crate::view::apply_view;

#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub source: String,
    pub fetched_at: DateTime<Utc>,
    pub thresholds: ScoreThresholds,
    pub summary: Vec<String>,
    pub distribution: ScoreDistribution,
    pub rows: Vec<ScoredAsset>,
}

/// GET /api/scores - scored rows, filtered/sorted like the table
pub async fn api_scores(
    State(state): State<SharedState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<ScoresResponse>, ApiError> {
    let thresholds = params.thresholds(&state.config.thresholds)?;
    let run = run_scoring(&state, &thresholds).await?;
    let rows = apply_view(&run.rows, &params.view_options())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ScoresResponse {
        source: run.source,
        fetched_at: run.fetched_at,
        thresholds,
        summary: summary_lines(&thresholds),
        distribution: run.distribution,
        rows,
    }))
}

#[derive(Debug, Serialize)]
pub struct RuleThreshold {
    pub key: &'static str,
    pub label: &'static str,
    pub column: &'static str,
    pub value: f64,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ThresholdsResponse {
    pub thresholds: ScoreThresholds,
    pub rules: Vec<RuleThreshold>,
}

/// GET /api/thresholds - configured defaults with their form labels
pub async fn api_thresholds(State(state): State<SharedState>) -> Json<ThresholdsResponse> {
    let thresholds = state.config.thresholds;
    let rules = PointRule::ALL
        .into_iter()
        .map(|rule| RuleThreshold {
            key: rule.threshold_key(),
            label: rule.form_label(),
            column: rule.column_label(),
            value: rule.threshold(&thresholds),
            summary: rule.summary(&thresholds),
        })
        .collect();
    Json(ThresholdsResponse { thresholds, rules })
}
