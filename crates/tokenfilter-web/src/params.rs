//! Query-string parameters shared by the page and the JSON API.

use serde::Deserialize;
use tokenfilter_common::{Result, ScoreThresholds, TokenFilterError};
use url::form_urlencoded;

use crate::view::{SortColumn, SortOrder, ViewOptions};

/// Raw query parameters. Thresholds arrive as strings so that an emptied
/// form input falls back to the default instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardParams {
    pub t5x: Option<String>,
    pub t10x: Option<String>,
    pub t50pct: Option<String>,
    pub t100pct: Option<String>,
    pub t200pct: Option<String>,
    /// Name filter
    pub q: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    /// Single selected asset
    pub selected: Option<String>,
}

fn parse_threshold(name: &'static str, raw: Option<&str>, default: f64) -> Result<f64> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(s) => s.parse::<f64>().map_err(|_| TokenFilterError::UnparseableThreshold {
            name,
            raw: s.to_string(),
        }),
    }
}

impl DashboardParams {
    /// Thresholds from the query, defaults for absent inputs. Validated.
    pub fn thresholds(&self, defaults: &ScoreThresholds) -> Result<ScoreThresholds> {
        let thresholds = ScoreThresholds {
            t5x: parse_threshold("t5x", self.t5x.as_deref(), defaults.t5x)?,
            t10x: parse_threshold("t10x", self.t10x.as_deref(), defaults.t10x)?,
            t50pct: parse_threshold("t50pct", self.t50pct.as_deref(), defaults.t50pct)?,
            t100pct: parse_threshold("t100pct", self.t100pct.as_deref(), defaults.t100pct)?,
            t200pct: parse_threshold("t200pct", self.t200pct.as_deref(), defaults.t200pct)?,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Filter/sort/selection options. Unknown sort keys are ignored.
    pub fn view_options(&self) -> ViewOptions {
        let sort = self.sort.as_deref().and_then(SortColumn::from_key);
        let order = match self.order.as_deref() {
            Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            _ => sort.map(SortColumn::default_order).unwrap_or(SortOrder::Desc),
        };
        ViewOptions {
            filter: self.q.clone().filter(|q| !q.trim().is_empty()),
            sort,
            order,
            selected: self.selected.clone().filter(|s| !s.is_empty()),
        }
    }
}

/// Builds `/?...` links that carry the current thresholds and view state.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    thresholds: ScoreThresholds,
    view: ViewOptions,
}

impl LinkBuilder {
    pub fn new(thresholds: ScoreThresholds, view: ViewOptions) -> Self {
        Self { thresholds, view }
    }

    fn href(&self, view: &ViewOptions) -> String {
        let mut qs = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.thresholds.as_pairs() {
            qs.append_pair(key, &value.to_string());
        }
        if let Some(q) = &view.filter {
            qs.append_pair("q", q);
        }
        if let Some(sort) = view.sort {
            qs.append_pair("sort", sort.key());
            qs.append_pair("order", view.order.as_str());
        }
        if let Some(selected) = &view.selected {
            qs.append_pair("selected", selected);
        }
        format!("/?{}", qs.finish())
    }

    /// Link that sorts by `column`, flipping the order when it is already active.
    pub fn sort_href(&self, column: SortColumn) -> String {
        let order = if self.view.sort == Some(column) {
            self.view.order.flip()
        } else {
            column.default_order()
        };
        let view = ViewOptions {
            sort: Some(column),
            order,
            ..self.view.clone()
        };
        self.href(&view)
    }

    /// Link that selects `name`, or clears the selection if it is already selected.
    pub fn select_href(&self, name: &str) -> String {
        let selected = if self.view.selected.as_deref() == Some(name) {
            None
        } else {
            Some(name.to_string())
        };
        let view = ViewOptions {
            selected,
            ..self.view.clone()
        };
        self.href(&view)
    }
}
