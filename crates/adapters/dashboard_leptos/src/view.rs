//! Signal-backed [`PanelView`]: the coordinator writes signals, components read them.

use homepanel_app::ports::{Control, ControlState, MessageSlot, PanelView, StatusMessage};
use homepanel_domain::alarm::AlarmIndicator;
use homepanel_domain::room::{ROOM_COUNT, RoomReading};
use leptos::html::Audio;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Reactive state of the panel page.
///
/// Copyable handle; every field is an arena-backed signal.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub rooms: [RwSignal<RoomReading>; ROOM_COUNT],
    pub alarm_sounding: RwSignal<bool>,
    pub alarm_audio: NodeRef<Audio>,
    pub reset_message: RwSignal<Option<StatusMessage>>,
    pub settings_message: RwSignal<Option<StatusMessage>>,
    pub reset_control: RwSignal<ControlState>,
    pub save_control: RwSignal<ControlState>,
}

impl SignalView {
    /// Blank page: no readings yet, alarm silent, controls ready.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rooms: std::array::from_fn(|_| RwSignal::new(RoomReading::Invalid)),
            alarm_sounding: RwSignal::new(false),
            alarm_audio: NodeRef::new(),
            reset_message: RwSignal::new(None),
            settings_message: RwSignal::new(None),
            reset_control: RwSignal::new(ControlState::Ready),
            save_control: RwSignal::new(ControlState::Ready),
        }
    }

    fn message_signal(&self, slot: MessageSlot) -> RwSignal<Option<StatusMessage>> {
        match slot {
            MessageSlot::AlarmReset => self.reset_message,
            MessageSlot::Settings => self.settings_message,
        }
    }

    fn control_signal(&self, control: Control) -> RwSignal<ControlState> {
        match control {
            Control::ResetAlarm => self.reset_control,
            Control::SaveSettings => self.save_control,
        }
    }

    fn play_alarm(&self) {
        let Some(audio) = self.alarm_audio.get_untracked() else {
            return;
        };
        // Browsers reject playback until the user has interacted with the page.
        match audio.play() {
            Ok(playback) => leptos::task::spawn_local(async move {
                if let Err(err) = JsFuture::from(playback).await {
                    tracing::debug!(?err, "alarm audio playback refused");
                }
            }),
            Err(err) => tracing::debug!(?err, "alarm audio did not start"),
        }
    }

    fn stop_alarm(&self) {
        let Some(audio) = self.alarm_audio.get_untracked() else {
            return;
        };
        if let Err(err) = audio.pause() {
            tracing::debug!(?err, "alarm audio did not pause");
        }
        audio.set_current_time(0.0);
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelView for SignalView {
    fn render_room(&self, index: usize, reading: RoomReading) {
        match self.rooms.get(index) {
            Some(room) => room.set(reading),
            None => tracing::warn!(index, "no room at index"),
        }
    }

    fn render_alarm(&self, indicator: AlarmIndicator) {
        let sounding = indicator == AlarmIndicator::Sounding;
        self.alarm_sounding.set(sounding);
        if sounding {
            self.play_alarm();
        } else {
            self.stop_alarm();
        }
    }

    fn show_message(&self, slot: MessageSlot, message: StatusMessage) {
        self.message_signal(slot).set(Some(message));
    }

    fn clear_message(&self, slot: MessageSlot) {
        self.message_signal(slot).set(None);
    }

    fn set_control(&self, control: Control, state: ControlState) {
        self.control_signal(control).set(state);
    }
}
