//! Buttons that are disabled and relabelled while their request runs.

use homepanel_app::ports::{Control, ControlState};
use leptos::prelude::*;

/// How a control looks in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub label: &'static str,
    pub class: &'static str,
    pub disabled: bool,
}

#[must_use]
pub fn appearance(control: Control, state: ControlState) -> Appearance {
    match (control, state) {
        (Control::ResetAlarm, ControlState::Ready) => Appearance {
            label: "🔕 Reset Alarma",
            class: "btn btn-warning",
            disabled: false,
        },
        (Control::ResetAlarm, ControlState::Working) => Appearance {
            label: "🔄 Se resetează...",
            class: "btn btn-secondary",
            disabled: true,
        },
        (Control::SaveSettings, ControlState::Ready) => Appearance {
            label: "💾 Salvează Setările",
            class: "btn btn-primary",
            disabled: false,
        },
        (Control::SaveSettings, ControlState::Working) => Appearance {
            label: "💾 Salvare...",
            class: "btn btn-secondary",
            disabled: true,
        },
    }
}

/// Button bound to one [`Control`].
#[component]
pub fn ActionButton(
    control: Control,
    #[prop(into)] state: Signal<ControlState>,
    /// Invoked on click while the control is ready.
    on_press: Callback<()>,
) -> impl IntoView {
    let current = move || appearance(control, state.get());
    view! {
        <button
            type="button"
            class=move || current().class
            disabled=move || current().disabled
            on:click=move |_| {
                if state.get_untracked() == ControlState::Ready {
                    on_press.run(());
                }
            }
        >
            {move || current().label}
        </button>
    }
}
