//! Backend port: the HTTP endpoints served by the panel controller.

use std::future::Future;
use std::rc::Rc;

use homepanel_domain::alarm::AlarmStatus;
use homepanel_domain::readout::TemperatureReadout;
use homepanel_domain::settings::{Settings, SettingsSubmission};

/// Error returned by [`PanelApi`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, …).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Calls made by the coordinator against the backend.
///
/// Futures are not required to be `Send`: the browser's fetch API lives on
/// the event-loop thread.
pub trait PanelApi {
    /// Fetch the `{s1..s9}` temperature readout.
    fn fetch_temperatures(&self) -> impl Future<Output = Result<TemperatureReadout, ApiError>>;

    /// Fetch the alarm status.
    fn fetch_alarm_status(&self) -> impl Future<Output = Result<AlarmStatus, ApiError>>;

    /// Ask the backend to reset the alarm; returns its status text.
    fn reset_alarm(&self) -> impl Future<Output = Result<String, ApiError>>;

    /// Fetch the stored settings.
    fn fetch_settings(&self) -> impl Future<Output = Result<Settings, ApiError>>;

    /// Submit settings as a form; returns the backend's status text.
    fn save_settings(
        &self,
        submission: &SettingsSubmission,
    ) -> impl Future<Output = Result<String, ApiError>>;
}

impl<T: PanelApi> PanelApi for Rc<T> {
    fn fetch_temperatures(&self) -> impl Future<Output = Result<TemperatureReadout, ApiError>> {
        (**self).fetch_temperatures()
    }

    fn fetch_alarm_status(&self) -> impl Future<Output = Result<AlarmStatus, ApiError>> {
        (**self).fetch_alarm_status()
    }

    fn reset_alarm(&self) -> impl Future<Output = Result<String, ApiError>> {
        (**self).reset_alarm()
    }

    fn fetch_settings(&self) -> impl Future<Output = Result<Settings, ApiError>> {
        (**self).fetch_settings()
    }

    fn save_settings(
        &self,
        submission: &SettingsSubmission,
    ) -> impl Future<Output = Result<String, ApiError>> {
        (**self).save_settings(submission)
    }
}
