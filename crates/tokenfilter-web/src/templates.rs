//! Page templates, compiled into the binary.

use minijinja::Environment;
use tokenfilter_common::{Result, TokenFilterError};

pub const LAYOUT: &str = "layout.html";
pub const DASHBOARD: &str = "dashboard.html";

/// Environment with every page template registered. `.html` names get
/// HTML auto-escaping.
pub fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template(LAYOUT, include_str!("../templates/layout.html"))
        .map_err(template_error)?;
    env.add_template(DASHBOARD, include_str!("../templates/dashboard.html"))
        .map_err(template_error)?;
    Ok(env)
}

pub fn template_error(err: minijinja::Error) -> TokenFilterError {
    TokenFilterError::Other(anyhow::anyhow!("template error: {}", err))
}
