//! Market data source clients.

pub mod cryptocompare;
pub mod fixture;

use std::sync::Arc;

use async_trait::async_trait;
use tokenfilter_common::{MarketSnapshot, ProviderConfig, ProviderKind, Result};

pub use cryptocompare::CryptoCompareClient;
pub use fixture::FixtureSource;

/// Common interface for all market data sources.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Short identifier shown in the page footer and API responses.
    fn name(&self) -> &str;

    /// Fetch the top `limit` assets by market cap, in provider order.
    async fn fetch_top_assets(&self, limit: usize) -> Result<MarketSnapshot>;
}

/// Build the source selected by `config.kind`.
pub fn source_from_config(config: &ProviderConfig) -> Result<Arc<dyn MarketSource>> {
    let source: Arc<dyn MarketSource> = match config.kind {
        ProviderKind::Cryptocompare => Arc::new(CryptoCompareClient::from_config(config)?),
        ProviderKind::Fixture => {
            let path = config.fixture_path.as_deref().unwrap_or("fixtures/records.json");
            Arc::new(FixtureSource::from_json_file(path, &config.quote_currency)?)
        }
    };
    Ok(source)
}
