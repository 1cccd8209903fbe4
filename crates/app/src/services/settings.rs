//! Settings load and the settings save action.

use std::rc::Rc;

use homepanel_domain::settings::{Settings, SettingsSubmission, choice_tokens};

use crate::poller::Poller;
use crate::ports::{
    Control, ControlState, FieldKind, MessageSlot, PanelApi, PanelView, Scheduler, SettingsForm,
    StatusMessage,
};
use crate::services::SAVE_FAILED_TEXT;

impl<A, V, F, S> Poller<A, V, F, S>
where
    A: PanelApi,
    F: SettingsForm,
    S: Scheduler,
{
    /// Fetch the settings and copy them into the form.
    ///
    /// Keys without a matching field are skipped. Selects receive the
    /// field's true or false token, other fields the raw value. Returns the
    /// loaded settings, or `None` if the fetch failed (the form is then left
    /// untouched).
    #[tracing::instrument(skip(self))]
    pub async fn load_settings(&self) -> Option<Settings> {
        let settings = match self.api.fetch_settings().await {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(%err, "settings load failed");
                return None;
            }
        };

        for (name, value) in settings.iter() {
            match self.form.field_kind(name) {
                Some(FieldKind::Select) => {
                    let token = choice_tokens(name).token(value.as_flag());
                    self.form.set_value(name, token);
                }
                Some(FieldKind::Input) => self.form.set_value(name, &value.as_text()),
                None => tracing::trace!(name, "no form field for setting"),
            }
        }
        tracing::debug!(count = settings.len(), "settings loaded");

        Some(settings)
    }
}

impl<A, V, F, S> Poller<A, V, F, S>
where
    A: PanelApi + 'static,
    V: PanelView + 'static,
    F: SettingsForm + 'static,
    S: Scheduler + 'static,
{
    /// Submit the settings form.
    ///
    /// The save control is disabled while the request runs. On success the
    /// backend's text is shown and both poll timers are re-armed, so a new
    /// refresh period applies at once; on failure a fixed error is shown and
    /// the timers are left alone. The message is cleared and the control
    /// restored once the display time has elapsed.
    pub async fn save_settings(self: &Rc<Self>) {
        self.view
            .set_control(Control::SaveSettings, ControlState::Working);

        let submission = SettingsSubmission::collect(|name| self.form.value(name));

        match self.api.save_settings(&submission).await {
            Ok(text) => {
                tracing::info!(response = %text, "settings saved");
                self.view
                    .show_message(MessageSlot::Settings, StatusMessage::success(text));
                self.spawn_with(|poller| async move { poller.rearm().await });
            }
            Err(err) => {
                tracing::warn!(%err, "settings save failed");
                self.view.show_message(
                    MessageSlot::Settings,
                    StatusMessage::error(SAVE_FAILED_TEXT),
                );
            }
        }

        self.scheduler
            .sleep(self.config.messages.settings_display())
            .await;
        self.view.clear_message(MessageSlot::Settings);
        self.view
            .set_control(Control::SaveSettings, ControlState::Ready);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::fakes::{Harness, ViewEvent};
    use crate::ports::{
        ApiError, Control, ControlState, FieldKind, MessageSlot, SettingsForm, StatusMessage,
    };

    fn settings(json: &str) -> homepanel_domain::settings::Settings {
        serde_json::from_str(json).unwrap()
    }

    fn settings_page() -> Harness {
        Harness::with_form(|form| {
            form.add("pragPornire", FieldKind::Input, "");
            form.add("intervalActualizare", FieldKind::Input, "");
            form.add("modNoapte", FieldKind::Select, "Nu");
            form.add("releuManual", FieldKind::Select, "Nu");
            form.add("backupSetari", FieldKind::Select, "Inactiv");
        })
    }

    #[tokio::test]
    async fn should_copy_values_into_matching_fields() {
        let h = settings_page();
        *h.api.settings.borrow_mut() = Ok(settings(
            r#"{"pragPornire": 21.5, "intervalActualizare": "10", "necunoscut": "x"}"#,
        ));

        let loaded = h.poller.load_settings().await.unwrap();

        assert_eq!(loaded.len(), 3);
        assert_eq!(h.form.get("pragPornire").as_deref(), Some("21.5"));
        assert_eq!(h.form.get("intervalActualizare").as_deref(), Some("10"));
        assert_eq!(h.form.get("necunoscut"), None);
    }

    #[tokio::test]
    async fn should_write_choice_tokens_into_selects() {
        let h = settings_page();
        *h.api.settings.borrow_mut() = Ok(settings(
            r#"{"modNoapte": true, "releuManual": false, "backupSetari": true}"#,
        ));

        h.poller.load_settings().await;

        assert_eq!(h.form.get("modNoapte").as_deref(), Some("Da"));
        assert_eq!(h.form.get("releuManual").as_deref(), Some("Nu"));
        assert_eq!(h.form.get("backupSetari").as_deref(), Some("Activ"));
    }

    #[tokio::test]
    async fn should_leave_form_untouched_when_load_fails() {
        let h = settings_page();
        *h.api.settings.borrow_mut() = Err(ApiError::Status { status: 500 });

        let loaded = h.poller.load_settings().await;

        assert!(loaded.is_none());
        assert_eq!(h.form.get("modNoapte").as_deref(), Some("Nu"));
    }

    #[tokio::test]
    async fn should_submit_form_fields_and_encoded_choices() {
        let h = settings_page();
        h.form.set_value("pragPornire", "20");
        h.form.set_value("modNoapte", "Da");
        h.form.set_value("backupSetari", "Activ");

        h.poller.save_settings().await;

        let submissions = h.api.submissions.borrow();
        assert_eq!(submissions.len(), 1);
        let sent = &submissions[0];
        assert_eq!(sent.get("pragPornire"), Some("20"));
        assert_eq!(sent.get("intervalActualizare"), Some(""));
        assert_eq!(sent.get("pragOprire"), None);
        assert_eq!(sent.get("modNoapte"), Some("true"));
        assert_eq!(sent.get("releuManual"), Some("false"));
        assert_eq!(sent.get("backupSetari"), Some("true"));
    }

    #[tokio::test]
    async fn should_rearm_exactly_once_after_successful_save() {
        let h = settings_page();
        *h.api.settings.borrow_mut() = Ok(settings(r#"{"intervalActualizare": "15"}"#));

        h.poller.save_settings().await;
        h.scheduler.run_until_idle().await;

        assert_eq!(h.api.calls_to("settings"), 1);
        assert_eq!(h.scheduler.timers_created(), 2);
        assert_eq!(
            h.poller.armed_periods().temperature,
            Some(Duration::from_secs(15))
        );
    }

    #[tokio::test]
    async fn should_show_response_then_restore_save_control() {
        let h = settings_page();

        h.poller.save_settings().await;

        let events = h.view.events();
        assert_eq!(
            events.first(),
            Some(&ViewEvent::Control(
                Control::SaveSettings,
                ControlState::Working
            ))
        );
        assert!(events.contains(&ViewEvent::Message(
            MessageSlot::Settings,
            StatusMessage::success("Setari salvate")
        )));
        assert_eq!(h.view.message(MessageSlot::Settings), None);
        assert_eq!(h.view.control(Control::SaveSettings), ControlState::Ready);
        assert_eq!(h.scheduler.sleeps(), vec![Duration::from_secs(4)]);
    }

    #[tokio::test]
    async fn should_not_rearm_when_save_fails() {
        let h = settings_page();
        *h.api.save.borrow_mut() = Err(ApiError::Transport("offline".to_string()));

        h.poller.save_settings().await;
        h.scheduler.run_until_idle().await;

        assert_eq!(h.api.calls_to("settings"), 0);
        assert_eq!(h.scheduler.timers_created(), 0);
        assert!(h.view.events().contains(&ViewEvent::Message(
            MessageSlot::Settings,
            StatusMessage::error("Eroare la salvarea setărilor!")
        )));
        assert_eq!(h.view.control(Control::SaveSettings), ControlState::Ready);
        assert_eq!(h.scheduler.sleeps(), vec![Duration::from_secs(4)]);
    }
}
