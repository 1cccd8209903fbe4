//! Transient status line under an action button.

use homepanel_app::ports::{StatusMessage, Tone};
use leptos::prelude::*;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "status-message text-success",
        Tone::Error => "status-message text-danger",
    }
}

/// Shows the current message of one slot, or nothing.
#[component]
pub fn StatusLine(
    /// Element id of the message container.
    id: &'static str,
    #[prop(into)] message: Signal<Option<StatusMessage>>,
) -> impl IntoView {
    view! {
        <p
            id=id
            class=move || message.get().map_or("status-message", |m| tone_class(m.tone))
        >
            {move || message.get().map(|m| m.text).unwrap_or_default()}
        </p>
    }
}
