use homepanel_adapter_dashboard_leptos::{App, config, logging};
use homepanel_app::config::PanelConfig;
use leptos::prelude::*;

fn main() {
    let config = config::load().unwrap_or_else(|err| {
        leptos::logging::error!("invalid panel configuration, using defaults: {err}");
        PanelConfig::default()
    });
    logging::init(&config.logging.filter);

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
