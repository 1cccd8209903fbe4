//! Alarm status reported by the backend relay controller.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Alarm state as returned by the alarm status endpoint.
///
/// Only a literal JSON `true` counts; missing fields, strings and numbers all
/// read as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmStatus {
    /// The alarm condition is active.
    #[serde(rename = "alarma", default, deserialize_with = "strict_true")]
    pub active: bool,
    /// The backend is inside its suppression/delay window.
    #[serde(rename = "ramas", default, deserialize_with = "strict_true")]
    pub suppressed: bool,
}

/// What the page should do with the alarm LED and audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmIndicator {
    /// Show the LED and play the alert.
    Sounding,
    /// Hide the LED, pause the alert and rewind it.
    Silent,
}

impl AlarmStatus {
    /// Create a status from its two flags.
    #[must_use]
    pub fn new(active: bool, suppressed: bool) -> Self {
        Self { active, suppressed }
    }

    /// The alarm is surfaced only when active and outside the delay window.
    #[must_use]
    pub fn indicator(&self) -> AlarmIndicator {
        if self.active && !self.suppressed {
            AlarmIndicator::Sounding
        } else {
            AlarmIndicator::Silent
        }
    }
}

fn strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}
