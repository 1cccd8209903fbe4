//! Browser dashboard for the home panel.
//!
//! Wires the [`Poller`] to browser adapters: `gloo-net` for the backend,
//! `gloo-timers` for the poll timers, and Leptos signals for the page.

use std::rc::Rc;

use homepanel_app::config::PanelConfig;
use homepanel_app::poller::Poller;
use homepanel_domain::room::ROOMS;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub mod api;
mod components;
pub mod config;
pub mod form;
pub mod logging;
pub mod scheduler;
pub mod view;

use api::HttpPanelApi;
use components::{AlarmPanel, RoomCard, SettingsPanel};
use form::SignalForm;
use scheduler::BrowserScheduler;
use view::SignalView;

/// Coordinator type running the page.
pub type PanelPoller = Poller<HttpPanelApi, SignalView, SignalForm, BrowserScheduler>;

/// Root application component.
///
/// Starts the coordinator on mount and stops its timers on unmount.
#[component]
pub fn App(config: PanelConfig) -> impl IntoView {
    let panel = SignalView::new();
    let form = SignalForm::new();
    let fields = form.fields().to_vec();

    let api = HttpPanelApi::new(config.endpoints.clone());
    let poller = Rc::new(Poller::new(api, panel, form, BrowserScheduler, config));
    poller.start();

    let poller = StoredValue::new_local(poller);
    on_cleanup(move || {
        poller.try_with_value(|poller| poller.shutdown());
    });

    let on_reset = Callback::new(move |()| {
        if let Some(poller) = poller.try_get_value() {
            spawn_local(async move { poller.reset_alarm().await });
        }
    });
    let on_save = Callback::new(move |()| {
        if let Some(poller) = poller.try_get_value() {
            spawn_local(async move { poller.save_settings().await });
        }
    });

    view! {
        <main class="panel">
            <section class="rooms">
                {ROOMS
                    .iter()
                    .zip(panel.rooms)
                    .map(|(room, reading)| view! { <RoomCard room=*room reading=reading/> })
                    .collect_view()}
            </section>
            <AlarmPanel panel=panel on_reset=on_reset/>
            <SettingsPanel fields=fields panel=panel on_save=on_save/>
        </main>
    }
}
