mod action_button;
mod alarm_panel;
mod room_card;
mod settings_panel;
mod status_message;

pub use action_button::ActionButton;
pub use alarm_panel::AlarmPanel;
pub use room_card::RoomCard;
pub use settings_panel::SettingsPanel;
pub use status_message::StatusLine;
