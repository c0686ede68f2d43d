//! tokenfilter-common: Shared types, errors, configuration and the HTTP client
//! used across all tokenfilter crates.

pub mod error;
pub mod entities;
pub mod thresholds;
pub mod dashboard_config;
pub mod http;

// Re-export commonly used types
pub use entities::{AssetRecord, MarketSnapshot};
pub use thresholds::ScoreThresholds;
pub use dashboard_config::{DashboardConfig, ProviderConfig, ProviderKind, ServerConfig};
pub use error::{TokenFilterError, Result};
