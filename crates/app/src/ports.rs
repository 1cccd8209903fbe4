//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the refresh coordinator and the outside
//! world: the backend, the page, and the event loop's timers.

pub mod api;
pub mod scheduler;
pub mod view;

pub use api::{ApiError, PanelApi};
pub use scheduler::Scheduler;
pub use view::{
    Control, ControlState, FieldKind, MessageSlot, PanelView, SettingsForm, StatusMessage, Tone,
};
