//! Poll tasks and user actions of the [`Poller`](crate::poller::Poller).
//!
//! Each file adds one group of operations to the coordinator. None of them
//! returns an error: failures are logged and rendered as degraded state.

mod alarm;
mod settings;
mod temperature;

/// Shown when the alarm reset request fails.
pub(crate) const RESET_FAILED_TEXT: &str = "Eroare la resetare!";

/// Shown when the settings save request fails.
pub(crate) const SAVE_FAILED_TEXT: &str = "Eroare la salvarea setărilor!";
