//! Alarm LED, alarm sound and the reset button.

use homepanel_app::ports::Control;
use leptos::prelude::*;

use super::{ActionButton, StatusLine};
use crate::view::SignalView;

/// Sound played while the alarm is sounding.
const ALARM_SOUND: &str = "/alarm.wav";

#[component]
pub fn AlarmPanel(panel: SignalView, on_reset: Callback<()>) -> impl IntoView {
    let sounding = panel.alarm_sounding;
    view! {
        <section class="alarm-panel">
            <span
                id="alarma-led"
                class="alarm-led"
                style:display=move || if sounding.get() { "inline-block" } else { "none" }
            ></span>
            <audio id="alerta-audio" node_ref=panel.alarm_audio src=ALARM_SOUND preload="auto"></audio>
            <ActionButton control=Control::ResetAlarm state=panel.reset_control on_press=on_reset/>
            <StatusLine id="reset_msg" message=panel.reset_message/>
        </section>
    }
}
