//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`;
//! the domain only knows about problems found in backend-supplied values.

/// Why a settings value could not be used as a refresh period.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The key is not present in the payload.
    #[error("setting {key} is missing")]
    Missing {
        /// Name of the missing setting.
        key: &'static str,
    },

    /// The value does not start with an integer.
    #[error("setting {key} is not a number: {value:?}")]
    NotANumber {
        /// Name of the setting.
        key: &'static str,
        /// The raw value as received.
        value: String,
    },

    /// The value parsed but is zero or negative.
    #[error("setting {key} must be positive, got {value}")]
    NotPositive {
        /// Name of the setting.
        key: &'static str,
        /// The parsed value.
        value: i64,
    },
}
