//! tokenfilter-ingestion: Market data fetching.
//! - CryptoCompare top-by-market-cap client
//! - Fixture source for offline runs and tests

pub mod sources;

pub use sources::{source_from_config, MarketSource};
