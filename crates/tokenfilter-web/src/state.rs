//! Shared application state for the web server.

use std::sync::Arc;

use minijinja::Environment;
use tokenfilter_common::{DashboardConfig, Result};
use tokenfilter_ingestion::{source_from_config, MarketSource};

use crate::templates;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: DashboardConfig,
    pub source: Arc<dyn MarketSource>,
    pub templates: Environment<'static>,
}

impl AppState {
    /// State backed by the provider named in `config`.
    pub fn from_config(config: DashboardConfig) -> Result<Self> {
        let source = source_from_config(&config.provider)?;
        Self::with_source(config, source)
    }

    /// State backed by an explicit source, e.g. a fixture in tests.
    pub fn with_source(config: DashboardConfig, source: Arc<dyn MarketSource>) -> Result<Self> {
        Ok(Self {
            config,
            source,
            templates: templates::environment()?,
        })
    }
}

pub type SharedState = Arc<AppState>;
