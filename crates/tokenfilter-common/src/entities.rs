//! Market data entities shared by the fetcher, the scorer and the web layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One asset's per-snapshot market data.
///
/// The numeric fields are optional because the provider does not guarantee
/// them; the scorer rejects a record that lacks any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Ticker-style identifier, unique within a batch (e.g. "BTC")
    pub name: String,
    /// Market capitalization in the quote currency
    pub market_cap_usd: Option<f64>,
    /// 24h volume denominated in the quote currency
    pub volume_usd: Option<f64>,
    /// 24h volume denominated in the base asset
    pub volume_coin: Option<f64>,
}

impl AssetRecord {
    /// Build a record with all numeric fields present.
    pub fn new(name: impl Into<String>, market_cap_usd: f64, volume_usd: f64, volume_coin: f64) -> Self {
        Self {
            name: name.into(),
            market_cap_usd: Some(market_cap_usd),
            volume_usd: Some(volume_usd),
            volume_coin: Some(volume_coin),
        }
    }
}

/// A batch of records as returned by one provider call, in provider order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub records: Vec<AssetRecord>,
    /// Quote currency the figures are expressed in (e.g. "USD")
    pub quote_currency: String,
    pub fetched_at: DateTime<Utc>,
}

impl MarketSnapshot {
    pub fn new(records: Vec<AssetRecord>, quote_currency: impl Into<String>) -> Self {
        Self {
            records,
            quote_currency: quote_currency.into(),
            fetched_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
