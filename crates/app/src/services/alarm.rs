//! Alarm status poll task and the alarm reset action.

use std::rc::Rc;

use crate::poller::Poller;
use crate::ports::{
    Control, ControlState, MessageSlot, PanelApi, PanelView, Scheduler, SettingsForm,
    StatusMessage,
};
use crate::services::RESET_FAILED_TEXT;

impl<A, V, F, S> Poller<A, V, F, S>
where
    A: PanelApi,
    V: PanelView,
    S: Scheduler,
{
    /// Fetch the alarm status once and update the LED and audio.
    ///
    /// A failed fetch renders nothing, so the previous state stays on screen.
    pub async fn poll_alarm(&self) {
        match self.api.fetch_alarm_status().await {
            Ok(status) => self.view.render_alarm(status.indicator()),
            Err(err) => tracing::debug!(%err, "alarm status unavailable, keeping previous state"),
        }
    }
}

impl<A, V, F, S> Poller<A, V, F, S>
where
    A: PanelApi + 'static,
    V: PanelView + 'static,
    F: SettingsForm + 'static,
    S: Scheduler + 'static,
{
    /// Ask the backend to reset the alarm.
    ///
    /// The reset control is disabled while the request runs. On success the
    /// backend's text is shown and the alarm status is refreshed right away;
    /// on failure a fixed error is shown. Either way the message is cleared
    /// and the control restored once the display time has elapsed.
    pub async fn reset_alarm(self: &Rc<Self>) {
        self.view
            .set_control(Control::ResetAlarm, ControlState::Working);

        match self.api.reset_alarm().await {
            Ok(text) => {
                tracing::info!(response = %text, "alarm reset");
                self.view
                    .show_message(MessageSlot::AlarmReset, StatusMessage::success(text));
                self.spawn_with(|poller| async move { poller.poll_alarm().await });
            }
            Err(err) => {
                tracing::warn!(%err, "alarm reset failed");
                self.view.show_message(
                    MessageSlot::AlarmReset,
                    StatusMessage::error(RESET_FAILED_TEXT),
                );
            }
        }

        self.scheduler
            .sleep(self.config.messages.reset_display())
            .await;
        self.view.clear_message(MessageSlot::AlarmReset);
        self.view.set_control(Control::ResetAlarm, ControlState::Ready);
    }
}
