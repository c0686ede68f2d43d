//! Filtering, sorting and selection over already-scored rows, plus the
//! serializable view models handed to the templates.

use std::cmp::Ordering;

use serde::Serialize;
use tokenfilter_ranker::{PointRule, ScoredAsset};

use crate::params::LinkBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    TotalPoints,
    Name,
    MarketCapUsd,
    VolumeUsd,
    VolumeCoin,
    Points(PointRule),
}

impl SortColumn {
    /// Columns in table order: total first, then the record, then each rule.
    pub fn all() -> Vec<SortColumn> {
        let mut columns = vec![
            SortColumn::TotalPoints,
            SortColumn::Name,
            SortColumn::MarketCapUsd,
            SortColumn::VolumeUsd,
            SortColumn::VolumeCoin,
        ];
        columns.extend(PointRule::ALL.into_iter().map(SortColumn::Points));
        columns
    }

    pub fn key(self) -> &'static str {
        match self {
            SortColumn::TotalPoints => "total_points",
            SortColumn::Name => "name",
            SortColumn::MarketCapUsd => "market_cap_usd",
            SortColumn::VolumeUsd => "volume_usd",
            SortColumn::VolumeCoin => "volume_coin",
            SortColumn::Points(PointRule::Volume5x) => "volume_5x_points",
            SortColumn::Points(PointRule::Volume10x) => "volume_10x_points",
            SortColumn::Points(PointRule::Volume50Pct) => "volume_50pct_points",
            SortColumn::Points(PointRule::Volume100Pct) => "volume_100pct_points",
            SortColumn::Points(PointRule::Volume200Pct) => "volume_200pct_points",
        }
    }

    pub fn from_key(key: &str) -> Option<SortColumn> {
        SortColumn::all().into_iter().find(|c| c.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::TotalPoints => "Total Points",
            SortColumn::Name => "Name",
            SortColumn::MarketCapUsd => "Market Cap",
            SortColumn::VolumeUsd => "Volume (USD)",
            SortColumn::VolumeCoin => "Volume (Coin)",
            SortColumn::Points(rule) => rule.column_label(),
        }
    }

    /// Names read alphabetically, numbers largest first.
    pub fn default_order(self) -> SortOrder {
        match self {
            SortColumn::Name => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    fn compare(self, a: &ScoredAsset, b: &ScoredAsset) -> Ordering {
        match self {
            SortColumn::TotalPoints => a.total_points.cmp(&b.total_points),
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::MarketCapUsd => a.market_cap_usd.total_cmp(&b.market_cap_usd),
            SortColumn::VolumeUsd => a.volume_usd.total_cmp(&b.volume_usd),
            SortColumn::VolumeCoin => a.volume_coin.total_cmp(&b.volume_coin),
            SortColumn::Points(rule) => a.points.get(rule).cmp(&b.points.get(rule)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flip(self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewOptions {
    /// Case-insensitive substring match on the asset name.
    pub filter: Option<String>,
    /// `None` keeps the scorer's order.
    pub sort: Option<SortColumn>,
    pub order: SortOrder,
    pub selected: Option<String>,
}

/// Filter then re-sort scored rows. The scorer's order is the tie-break
/// because `sort_by` is stable.
pub fn apply_view<'a>(rows: &'a [ScoredAsset], options: &ViewOptions) -> Vec<&'a ScoredAsset> {
    let needle = options.filter.as_ref().map(|f| f.trim().to_lowercase());
    let mut visible: Vec<&ScoredAsset> = rows
        .iter()
        .filter(|row| match &needle {
            Some(n) => row.name.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .collect();

    if let Some(column) = options.sort {
        visible.sort_by(|a, b| {
            let ord = column.compare(a, b);
            match options.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
    }
    visible
}

/// The selected row, if it is still among the scored rows.
pub fn find_selected<'a>(rows: &'a [ScoredAsset], options: &ViewOptions) -> Option<&'a ScoredAsset> {
    let name = options.selected.as_deref()?;
    rows.iter().find(|row| row.name == name)
}

/// Compact figure for table cells: `1.30T`, `45.2B`, `999`.
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];
    let abs = value.abs();
    for (scale, suffix) in UNITS {
        if abs >= scale {
            let scaled = value / scale;
            return if scaled.abs() >= 100.0 {
                format!("{:.0}{}", scaled, suffix)
            } else if scaled.abs() >= 10.0 {
                format!("{:.1}{}", scaled, suffix)
            } else {
                format!("{:.2}{}", scaled, suffix)
            };
        }
    }
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

// === Template view models ===

#[derive(Debug, Serialize)]
pub struct ColumnView {
    pub key: &'static str,
    pub label: &'static str,
    pub href: String,
    /// "▲" / "▼" on the active column, empty otherwise.
    pub indicator: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RowView {
    pub name: String,
    pub total_points: u8,
    pub market_cap: String,
    pub volume_usd: String,
    pub volume_coin: String,
    pub points: [u8; 5],
    pub href: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct RuleDetail {
    pub label: &'static str,
    pub volume: String,
    pub cutoff: String,
    pub points: u8,
}

#[derive(Debug, Serialize)]
pub struct DetailView {
    pub name: String,
    pub total_points: u8,
    pub market_cap: String,
    pub volume_usd: String,
    pub volume_coin: String,
    pub rules: Vec<RuleDetail>,
}

pub fn column_views(options: &ViewOptions, links: &LinkBuilder) -> Vec<ColumnView> {
    SortColumn::all()
        .into_iter()
        .map(|column| ColumnView {
            key: column.key(),
            label: column.label(),
            href: links.sort_href(column),
            indicator: match (options.sort == Some(column), options.order) {
                (true, SortOrder::Asc) => "▲",
                (true, SortOrder::Desc) => "▼",
                (false, _) => "",
            },
        })
        .collect()
}

pub fn row_views(rows: &[&ScoredAsset], options: &ViewOptions, links: &LinkBuilder) -> Vec<RowView> {
    rows.iter()
        .map(|row| RowView {
            name: row.name.clone(),
            total_points: row.total_points,
            market_cap: format_compact(row.market_cap_usd),
            volume_usd: format_compact(row.volume_usd),
            volume_coin: format_compact(row.volume_coin),
            points: row.points.as_array(),
            href: links.select_href(&row.name),
            selected: options.selected.as_deref() == Some(row.name.as_str()),
        })
        .collect()
}

pub fn detail_view(row: &ScoredAsset, thresholds: &tokenfilter_common::ScoreThresholds) -> DetailView {
    let inputs = row.inputs();
    DetailView {
        name: row.name.clone(),
        total_points: row.total_points,
        market_cap: format_compact(row.market_cap_usd),
        volume_usd: format_compact(row.volume_usd),
        volume_coin: format_compact(row.volume_coin),
        rules: PointRule::ALL
            .into_iter()
            .map(|rule| RuleDetail {
                label: rule.column_label(),
                volume: format_compact(rule.volume(&inputs)),
                cutoff: rule
                    .cutoff(thresholds, row.market_cap_usd)
                    .map(format_compact)
                    .unwrap_or_else(|| "n/a".to_string()),
                points: row.points.get(rule),
            })
            .collect(),
    }
}
