//! Page configuration: the embedded `panel.toml` plus `<meta>` overrides.

use homepanel_app::config::{ConfigError, PanelConfig};

const PANEL_TOML: &str = include_str!("../panel.toml");

/// Prefix of the `<meta name="...">` tags read as overrides.
const META_PREFIX: &str = "homepanel:";

/// Load the panel configuration for the current page.
///
/// # Errors
///
/// Returns an error if the embedded TOML is malformed or an override makes
/// the configuration invalid.
pub fn load() -> Result<PanelConfig, ConfigError> {
    PanelConfig::load(PANEL_TOML, meta_content)
}

fn meta_content(key: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!(r#"meta[name="{META_PREFIX}{key}"]"#);
    let element = document.query_selector(&selector).ok().flatten()?;
    element
        .get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
