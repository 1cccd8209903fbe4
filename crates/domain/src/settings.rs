//! Settings: the open name → value mapping shared with the backend.
//!
//! The backend echoes whatever it stores; the front end performs no schema
//! validation on load. Only the refresh period is interpreted here.

mod schema;
mod value;

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SettingsError;

pub use schema::{
    CHOICE_FIELDS, ChoiceField, ChoiceTokens, GENERIC_TOKENS, NUMERIC_FIELDS, SettingsSubmission,
    choice_tokens,
};
pub use value::SettingValue;

/// Key carrying the temperature refresh period, in seconds.
pub const REFRESH_PERIOD_KEY: &str = "intervalActualizare";

/// Settings payload as loaded from the backend.
///
/// Non-scalar values (`null`, arrays, objects) are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Settings {
    values: BTreeMap<String, SettingValue>,
}

impl From<Map<String, Value>> for Settings {
    fn from(map: Map<String, Value>) -> Self {
        let values = map
            .into_iter()
            .filter_map(|(key, value)| SettingValue::from_json(value).map(|v| (key, v)))
            .collect();
        Self { values }
    }
}

impl Settings {
    /// Look up a single setting.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// Iterate over every setting, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of settings in the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Insert or replace a setting.
    pub fn insert(&mut self, key: impl Into<String>, value: SettingValue) {
        self.values.insert(key.into(), value);
    }

    /// Temperature refresh period taken from [`REFRESH_PERIOD_KEY`].
    ///
    /// The value is read as whole seconds from its leading integer, so
    /// `"10"`, `"10s"` and `10.7` all give ten seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the key is missing, does not start
    /// with an integer, or is not positive.
    pub fn refresh_period(&self) -> Result<Duration, SettingsError> {
        let key = REFRESH_PERIOD_KEY;
        let value = self.get(key).ok_or(SettingsError::Missing { key })?;
        let seconds = value
            .leading_integer()
            .ok_or_else(|| SettingsError::NotANumber {
                key,
                value: value.as_text(),
            })?;
        let seconds = u64::try_from(seconds)
            .ok()
            .filter(|s| *s > 0)
            .ok_or(SettingsError::NotPositive {
                key,
                value: seconds,
            })?;
        Ok(Duration::from_secs(seconds))
    }
}
