//! CryptoCompare min-api client.
//!
//! Endpoint: https://min-api.cryptocompare.com/data/top/mktcapfull?limit=10&tsym=USD
//!
//! Field mapping per `Data[]` entry:
//!   CoinInfo.Name                → name
//!   RAW.{tsym}.MKTCAP            → market_cap_usd
//!   RAW.{tsym}.TOTALVOLUME24HTO  → volume_usd  (quote currency)
//!   RAW.{tsym}.TOTALVOLUME24H    → volume_coin (base asset)

use std::time::Duration;

use async_trait::async_trait;
use tokenfilter_common::http::HttpClient;
use tokenfilter_common::{AssetRecord, MarketSnapshot, ProviderConfig, Result, TokenFilterError};
use tracing::{debug, instrument, warn};

use super::MarketSource;

const TOP_LIST_PATH: &str = "/data/top/mktcapfull";

pub struct CryptoCompareClient {
    client: HttpClient,
    base_url: String,
    quote_currency: String,
    api_key: Option<String>,
}

impl CryptoCompareClient {
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let mut client = HttpClient::new(Duration::from_secs(config.timeout_secs))?;
        client.allow_domain(&config.host()?);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            quote_currency: config.quote_currency.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn top_list_url(&self) -> String {
        format!("{}{}", self.base_url, TOP_LIST_PATH)
    }
}

#[async_trait]
impl MarketSource for CryptoCompareClient {
    fn name(&self) -> &str {
        "cryptocompare"
    }

    #[instrument(skip(self))]
    async fn fetch_top_assets(&self, limit: usize) -> Result<MarketSnapshot> {
        let url = self.top_list_url();
        let mut request = self
            .client
            .get(&url)?
            .query(&[("limit", limit.to_string()), ("tsym", self.quote_currency.clone())]);

        if let Some(key) = &self.api_key {
            request = request.header("authorization", format!("Apikey {}", key));
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "CryptoCompare request failed");
            return Err(TokenFilterError::Provider(format!("HTTP status {}", status)));
        }

        let body = resp.json::<serde_json::Value>().await?;
        let mut records = parse_top_list(&body, &self.quote_currency)?;
        // the endpoint enforces a minimum page size of 10
        records.truncate(limit);

        debug!(count = records.len(), "CryptoCompare top list returned records");

        Ok(MarketSnapshot::new(records, self.quote_currency.clone()))
    }
}

/// Map a `mktcapfull` payload to records.
///
/// Entries without a `RAW.{tsym}` block keep `None` figures.
pub fn parse_top_list(body: &serde_json::Value, quote_currency: &str) -> Result<Vec<AssetRecord>> {
    if body["Response"].as_str() == Some("Error") {
        let message = body["Message"].as_str().unwrap_or("unknown error");
        return Err(TokenFilterError::Provider(message.to_string()));
    }

    let entries = body["Data"]
        .as_array()
        .ok_or_else(|| TokenFilterError::MalformedResponse("`Data` is not an array".into()))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let name = entry["CoinInfo"]["Name"].as_str().ok_or_else(|| {
                TokenFilterError::MalformedResponse(format!("entry {} has no CoinInfo.Name", i))
            })?;
            let quote = &entry["RAW"][quote_currency];

            Ok(AssetRecord {
                name: name.to_string(),
                market_cap_usd: quote["MKTCAP"].as_f64(),
                volume_usd: quote["TOTALVOLUME24HTO"].as_f64(),
                volume_coin: quote["TOTALVOLUME24H"].as_f64(),
            })
        })
        .collect()
}
