//! Settings form: one input per numeric setting and a select per flag.

use homepanel_app::ports::Control;
use leptos::prelude::*;

use super::{ActionButton, StatusLine};
use crate::form::{FieldInput, FormField};
use crate::view::SignalView;

#[component]
fn SettingsField(field: FormField) -> impl IntoView {
    let value = field.value;
    let control = match field.input {
        FieldInput::Number => view! {
            <input
                id=field.name
                name=field.name
                type="number"
                step="any"
                class="form-control"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldInput::Choice(tokens) => view! {
            <select
                id=field.name
                name=field.name
                class="form-select"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value=tokens.on prop:selected=move || value.get() == tokens.on>
                    {tokens.on}
                </option>
                <option value=tokens.off prop:selected=move || value.get() == tokens.off>
                    {tokens.off}
                </option>
            </select>
        }
        .into_any(),
    };
    view! {
        <div class="settings-field">
            <label for=field.name>{field.label}</label>
            {control}
        </div>
    }
}

#[component]
pub fn SettingsPanel(
    fields: Vec<FormField>,
    panel: SignalView,
    on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="settings-panel">
            <h2>"Setări"</h2>
            <div class="settings-fields">
                {fields
                    .into_iter()
                    .map(|field| view! { <SettingsField field=field/> })
                    .collect_view()}
            </div>
            <ActionButton control=Control::SaveSettings state=panel.save_control on_press=on_save/>
            <StatusLine id="save_settings_msg" message=panel.settings_message/>
        </section>
    }
}
