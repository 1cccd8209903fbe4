//! Configuration loading: TOML source with page-supplied overrides.
//!
//! Every field has a sensible default so the TOML source may be empty.
//! Overrides are looked up by key (`temperature-endpoint`, `log`) and take
//! precedence over the TOML values; the browser adapter reads them from
//! `<meta name="homepanel:…">` tags rendered by the backend.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Backend endpoint paths.
    pub endpoints: EndpointsConfig,
    /// Poll timer settings.
    pub polling: PollingConfig,
    /// How long status messages stay visible.
    pub messages: MessagesConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Paths of the backend endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Temperature readout (`{s1..s9}`).
    pub temperatures: String,
    /// Alarm status (`{alarma, ramas}`).
    pub alarm: String,
    /// Alarm reset (POST).
    pub alarm_reset: String,
    /// Settings load.
    pub settings: String,
    /// Settings save (POST, form-encoded).
    pub settings_save: String,
}

/// Poll timer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Period of the alarm status poll, in milliseconds.
    pub alarm_period_ms: u64,
    /// Temperature poll period used when settings do not provide one, in seconds.
    pub default_refresh_secs: u64,
}

/// Status message display durations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Alarm reset message, in milliseconds.
    pub reset_display_ms: u64,
    /// Settings save message, in milliseconds.
    pub settings_display_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl PanelConfig {
    /// Parse `source` as TOML, apply overrides, then validate.
    ///
    /// `lookup` returns the override for a key, if the page provides one.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or the result fails
    /// validation.
    pub fn load(
        source: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::from_toml_str(source)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(ConfigError::Parse)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("temperature-endpoint") {
            self.endpoints.temperatures = val;
        }
        if let Some(val) = lookup("log") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let endpoints = [
            ("temperatures", &self.endpoints.temperatures),
            ("alarm", &self.endpoints.alarm),
            ("alarm_reset", &self.endpoints.alarm_reset),
            ("settings", &self.endpoints.settings),
            ("settings_save", &self.endpoints.settings_save),
        ];
        for (name, path) in endpoints {
            if path.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "endpoint {name} must not be empty"
                )));
            }
        }
        if self.polling.alarm_period_ms == 0 {
            return Err(ConfigError::Validation(
                "alarm_period_ms must be non-zero".to_string(),
            ));
        }
        if self.polling.default_refresh_secs == 0 {
            return Err(ConfigError::Validation(
                "default_refresh_secs must be non-zero".to_string(),
            ));
        }
        if self.messages.reset_display_ms == 0 || self.messages.settings_display_ms == 0 {
            return Err(ConfigError::Validation(
                "message durations must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl PollingConfig {
    /// Alarm poll period.
    #[must_use]
    pub fn alarm_period(&self) -> Duration {
        Duration::from_millis(self.alarm_period_ms)
    }

    /// Fallback temperature poll period.
    #[must_use]
    pub fn default_refresh(&self) -> Duration {
        Duration::from_secs(self.default_refresh_secs)
    }
}

impl MessagesConfig {
    /// How long the alarm reset message stays visible.
    #[must_use]
    pub fn reset_display(&self) -> Duration {
        Duration::from_millis(self.reset_display_ms)
    }

    /// How long the settings save message stays visible.
    #[must_use]
    pub fn settings_display(&self) -> Duration {
        Duration::from_millis(self.settings_display_ms)
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            temperatures: "/temperaturi".to_string(),
            alarm: "/alarma".to_string(),
            alarm_reset: "/resetare-alarma".to_string(),
            settings: "/get_settings".to_string(),
            settings_save: "/setari".to_string(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            alarm_period_ms: 2000,
            default_refresh_secs: 5,
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            reset_display_ms: 2000,
            settings_display_ms: 4000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homepanel=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
