//! Dashboard page: threshold form, summary, distribution, table and the
//! selected-row detail.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::context;
use serde::Serialize;
use tokenfilter_common::error::ApiError;
use tokenfilter_common::ScoreThresholds;
use tokenfilter_ranker::{PointRule, ScoreDistribution};
use tracing::warn;

use crate::handlers::{run_scoring, summary_lines, ScoringRun};
use crate::params::{DashboardParams, LinkBuilder};
use crate::state::SharedState;
use crate::templates::{template_error, DASHBOARD};
use crate::view::{apply_view, column_views, detail_view, find_selected, row_views};

#[derive(Debug, Serialize)]
pub struct InputView {
    pub key: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct BucketView {
    pub points: usize,
    pub count: usize,
    /// Bar width in percent of the largest bucket.
    pub width: usize,
}

fn threshold_inputs(values: [String; 5]) -> Vec<InputView> {
    PointRule::ALL
        .into_iter()
        .zip(values)
        .map(|(rule, value)| InputView {
            key: rule.threshold_key(),
            label: rule.form_label(),
            hint: rule.column_label(),
            value,
        })
        .collect()
}

fn bucket_views(distribution: &ScoreDistribution) -> Vec<BucketView> {
    let max = distribution.max_bucket();
    distribution
        .by_total
        .iter()
        .enumerate()
        .rev()
        .map(|(points, &count)| BucketView {
            points,
            count,
            width: if max == 0 { 0 } else { count * 100 / max },
        })
        .collect()
}

/// Echo what the user typed so a rejected value can be corrected in place.
fn raw_values(params: &DashboardParams, defaults: &ScoreThresholds) -> [String; 5] {
    let raw = [
        &params.t5x,
        &params.t10x,
        &params.t50pct,
        &params.t100pct,
        &params.t200pct,
    ];
    let defaults = defaults.as_pairs();
    std::array::from_fn(|i| match raw[i] {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => defaults[i].1.to_string(),
    })
}

/// GET /
pub async fn dashboard(
    State(state): State<SharedState>,
    Query(params): Query<DashboardParams>,
) -> Result<Response, ApiError> {
    let options = params.view_options();
    let outcome = match params.thresholds(&state.config.thresholds) {
        Ok(thresholds) => run_scoring(&state, &thresholds)
            .await
            .map(|run| (thresholds, run)),
        Err(e) => Err(e),
    };

    let template = state.templates.get_template(DASHBOARD).map_err(template_error)?;
    let notes = &state.config.notes;
    let q = options.filter.clone().unwrap_or_default();
    let sort = options.sort.map(|s| s.key());
    let order = options.order.as_str();

    let (status, html) = match outcome {
        Ok((thresholds, run)) => {
            let ScoringRun {
                source,
                quote_currency,
                fetched_at,
                rows,
                distribution,
            } = run;
            let links = LinkBuilder::new(thresholds, options.clone());
            let visible = apply_view(&rows, &options);
            let values = thresholds.as_pairs().map(|(_, v)| v.to_string());

            let html = template
                .render(context! {
                    notes,
                    inputs => threshold_inputs(values),
                    q,
                    sort,
                    order,
                    summary => summary_lines(&thresholds),
                    buckets => bucket_views(&distribution),
                    rule_hits => &distribution.rule_hits,
                    columns => column_views(&options, &links),
                    rows => row_views(&visible, &options, &links),
                    detail => find_selected(&rows, &options).map(|row| detail_view(row, &thresholds)),
                    source,
                    quote_currency,
                    fetched_at => fetched_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                })
                .map_err(template_error)?;
            (StatusCode::OK, html)
        }
        Err(err) => {
            warn!(error = %err, "dashboard scoring failed");
            let html = template
                .render(context! {
                    notes,
                    inputs => threshold_inputs(raw_values(&params, &state.config.thresholds)),
                    q,
                    sort,
                    order,
                    error => err.to_string(),
                })
                .map_err(template_error)?;
            (err.status_code(), html)
        }
    };

    Ok((status, Html(html)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_views_scale_to_largest() {
        let distribution = ScoreDistribution {
            by_total: [4, 2, 0, 0, 1, 0],
            rule_hits: Vec::new(),
            assets: 7,
        };
        let buckets = bucket_views(&distribution);
        assert_eq!(buckets[0].points, 5);
        let zero = buckets.iter().find(|b| b.points == 0).unwrap();
        assert_eq!(zero.width, 100);
        let one = buckets.iter().find(|b| b.points == 1).unwrap();
        assert_eq!(one.width, 50);
    }

    #[test]
    fn test_raw_values_echo_input() {
        let params = DashboardParams {
            t5x: Some("abc".into()),
            t10x: Some("  ".into()),
            ..Default::default()
        };
        let values = raw_values(&params, &ScoreThresholds::default());
        assert_eq!(values[0], "abc");
        assert_eq!(values[1], "10");
        assert_eq!(values[2], "0.5");
    }
}
