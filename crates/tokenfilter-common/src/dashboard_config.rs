//! Dashboard configuration.
//!
//! Loaded from an optional YAML/JSON file and then overridden by environment
//! variables (a `.env` file is honoured). Every section has defaults, so an
//! empty file or no file at all yields a working dashboard that queries
//! CryptoCompare for the top 10 assets in USD.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TokenFilterError};
use crate::thresholds::ScoreThresholds;

/// Env var naming a YAML config file to load.
pub const CONFIG_PATH_ENV: &str = "TOKENFILTER_CONFIG";

/// Complete dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Default threshold values pre-filled in the scoring form
    #[serde(default)]
    pub thresholds: ScoreThresholds,

    /// Market data provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Bullet points shown under "Filter criteria"
    #[serde(default = "default_notes")]
    pub notes: Vec<String>,
}

fn default_notes() -> Vec<String> {
    vec![
        "10m-400m mcap".to_string(),
        "Trading on Bybit, bn, okx".to_string(),
    ]
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            thresholds: ScoreThresholds::default(),
            provider: ProviderConfig::default(),
            server: ServerConfig::default(),
            notes: default_notes(),
        }
    }
}

// ── Provider ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Live CryptoCompare REST API
    Cryptocompare,
    /// Records read from a local JSON file
    Fixture,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_kind")]
    pub kind: ProviderKind,

    /// Base URL of the CryptoCompare min-api
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Quote currency symbol (`tsym`)
    #[serde(default = "default_quote_currency")]
    pub quote_currency: String,

    /// Number of top assets by market cap to fetch
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Optional CryptoCompare API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// JSON file of records, used when `kind` is `fixture`
    #[serde(default)]
    pub fixture_path: Option<String>,
}

fn default_kind() -> ProviderKind { ProviderKind::Cryptocompare }
fn default_base_url() -> String { "https://min-api.cryptocompare.com".to_string() }
fn default_quote_currency() -> String { "USD".to_string() }
fn default_limit() -> usize { 10 }
fn default_timeout_secs() -> u64 { 30 }

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            base_url: default_base_url(),
            quote_currency: default_quote_currency(),
            limit: default_limit(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            fixture_path: None,
        }
    }
}

impl ProviderConfig {
    /// Host part of `base_url`, used to seed the HTTP allowlist.
    pub fn host(&self) -> Result<String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| TokenFilterError::Config(format!("invalid provider base_url '{}': {}", self.base_url, e)))?;
        url.host_str()
            .map(str::to_string)
            .ok_or_else(|| TokenFilterError::Config(format!("provider base_url '{}' has no host", self.base_url)))
    }
}

// ── Server ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl DashboardConfig {
    /// Load from YAML file
    pub fn from_yaml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_json(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save to YAML file
    pub fn to_yaml(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the effective configuration for the running process:
    /// `.env`, then the file named by `TOKENFILTER_CONFIG`, then env overrides.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                tracing::info!(path = %path, "loading dashboard config");
                if path.ends_with(".json") {
                    Self::from_json(&path)?
                } else {
                    Self::from_yaml(&path)?
                }
            }
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-style overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("TOKENFILTER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("TOKENFILTER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| TokenFilterError::Config(format!("TOKENFILTER_PORT is not a port: {port}")))?;
        }
        if let Some(url) = lookup("TOKENFILTER_PROVIDER_URL") {
            self.provider.base_url = url;
        }
        if let Some(key) = lookup("CRYPTOCOMPARE_API_KEY") {
            if !key.trim().is_empty() {
                self.provider.api_key = Some(key);
            }
        }
        if let Some(path) = lookup("TOKENFILTER_FIXTURE") {
            self.provider.kind = ProviderKind::Fixture;
            self.provider.fixture_path = Some(path);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        if self.provider.limit == 0 {
            return Err(TokenFilterError::Config("provider.limit must be at least 1".into()));
        }
        match self.provider.kind {
            ProviderKind::Cryptocompare => {
                self.provider.host()?;
            }
            ProviderKind::Fixture => {
                if self.provider.fixture_path.is_none() {
                    return Err(TokenFilterError::Config(
                        "provider.fixture_path is required for the fixture provider".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
