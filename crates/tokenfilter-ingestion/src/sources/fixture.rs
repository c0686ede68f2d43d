//! Fixed record list, for offline dashboards and tests.

use async_trait::async_trait;
use tokenfilter_common::{AssetRecord, MarketSnapshot, Result, TokenFilterError};
use tracing::debug;

use super::MarketSource;

pub struct FixtureSource {
    records: Vec<AssetRecord>,
    quote_currency: String,
}

impl FixtureSource {
    pub fn new(records: Vec<AssetRecord>, quote_currency: &str) -> Self {
        Self {
            records,
            quote_currency: quote_currency.to_string(),
        }
    }

    /// Load a JSON array of records, e.g.
    /// `[{"name":"BTC","market_cap_usd":1.0,"volume_usd":2.0,"volume_coin":3.0}]`.
    pub fn from_json_file(path: &str, quote_currency: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TokenFilterError::Config(format!("cannot read fixture {}: {}", path, e)))?;
        let records: Vec<AssetRecord> = serde_json::from_str(&content)?;
        debug!(path, count = records.len(), "loaded fixture records");
        Ok(Self::new(records, quote_currency))
    }
}

#[async_trait]
impl MarketSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch_top_assets(&self, limit: usize) -> Result<MarketSnapshot> {
        let records = self.records.iter().take(limit).cloned().collect();
        Ok(MarketSnapshot::new(records, self.quote_currency.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokenfilter_test_utils::sample_records;

    #[tokio::test]
    async fn test_limit_applies() {
        let source = FixtureSource::new(sample_records(), "USD");
        let snapshot = source.fetch_top_assets(3).await.unwrap();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.records[0].name, "BTC");
        assert_eq!(snapshot.quote_currency, "USD");
    }

    #[tokio::test]
    async fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_records()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let source = FixtureSource::from_json_file(file.path().to_str().unwrap(), "USD").unwrap();
        let snapshot = source.fetch_top_assets(100).await.unwrap();
        assert_eq!(snapshot.records, sample_records());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = FixtureSource::from_json_file("/nonexistent/records.json", "USD")
            .err()
            .unwrap();
        assert!(matches!(err, TokenFilterError::Config(_)));
    }
}
