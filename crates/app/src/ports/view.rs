//! Page ports: what the coordinator renders and the settings form it edits.

use std::rc::Rc;

use homepanel_domain::alarm::AlarmIndicator;
use homepanel_domain::room::RoomReading;

/// Container a status message is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageSlot {
    /// Next to the alarm reset button.
    AlarmReset,
    /// Below the settings form.
    Settings,
}

/// Whether a message reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    /// A success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    /// An error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }
}

/// User-triggered controls the coordinator disables while working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    ResetAlarm,
    SaveSettings,
}

/// Visual state of a [`Control`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    /// Enabled, original label and style.
    #[default]
    Ready,
    /// Disabled with its "working" label and style.
    Working,
}

/// Rendering surface of the panel.
pub trait PanelView {
    /// Show `reading` in the room at `index` (position in the room table).
    fn render_room(&self, index: usize, reading: RoomReading);

    /// Show or hide the alarm LED and play or rewind the alert audio.
    fn render_alarm(&self, indicator: AlarmIndicator);

    /// Write `message` into `slot`, replacing what was there.
    fn show_message(&self, slot: MessageSlot, message: StatusMessage);

    /// Empty `slot`.
    fn clear_message(&self, slot: MessageSlot);

    /// Put `control` into `state`.
    fn set_control(&self, control: Control, state: ControlState);
}

impl<T: PanelView> PanelView for Rc<T> {
    fn render_room(&self, index: usize, reading: RoomReading) {
        (**self).render_room(index, reading);
    }

    fn render_alarm(&self, indicator: AlarmIndicator) {
        (**self).render_alarm(indicator);
    }

    fn show_message(&self, slot: MessageSlot, message: StatusMessage) {
        (**self).show_message(slot, message);
    }

    fn clear_message(&self, slot: MessageSlot) {
        (**self).clear_message(slot);
    }

    fn set_control(&self, control: Control, state: ControlState) {
        (**self).set_control(control, state);
    }
}

/// How a settings field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text or number input; receives the raw value.
    Input,
    /// Two-option select; receives one of its choice tokens.
    Select,
}

/// The settings form, addressed by field name.
pub trait SettingsForm {
    /// Kind of the field named `name`, or `None` if the page has no such field.
    fn field_kind(&self, name: &str) -> Option<FieldKind>;

    /// Current displayed value of `name`, or `None` if absent.
    fn value(&self, name: &str) -> Option<String>;

    /// Replace the displayed value of `name`. No-op for unknown fields.
    fn set_value(&self, name: &str, value: &str);
}

impl<T: SettingsForm> SettingsForm for Rc<T> {
    fn field_kind(&self, name: &str) -> Option<FieldKind> {
        (**self).field_kind(name)
    }

    fn value(&self, name: &str) -> Option<String> {
        (**self).value(name)
    }

    fn set_value(&self, name: &str, value: &str) {
        (**self).set_value(name, value);
    }
}
