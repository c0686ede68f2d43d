//! tokenfilter-web: Token filter dashboard.
//! Serves the scoring form, the sortable/filterable results table and a
//! small JSON API over the same scoring pass.

pub mod router;
pub mod handlers;
pub mod state;
pub mod params;
pub mod view;
pub mod templates;
