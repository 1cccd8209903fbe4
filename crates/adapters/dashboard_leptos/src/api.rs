//! HTTP client for the panel controller, built on `gloo-net`.

use gloo_net::http::{Request, Response};
use homepanel_app::config::EndpointsConfig;
use homepanel_app::ports::{ApiError, PanelApi};
use homepanel_domain::alarm::AlarmStatus;
use homepanel_domain::readout::TemperatureReadout;
use homepanel_domain::settings::{Settings, SettingsSubmission};
use serde::de::DeserializeOwned;
use web_sys::UrlSearchParams;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// [`PanelApi`] over `fetch`, using the configured endpoint paths.
#[derive(Debug, Clone)]
pub struct HttpPanelApi {
    endpoints: EndpointsConfig,
}

impl HttpPanelApi {
    #[must_use]
    pub fn new(endpoints: EndpointsConfig) -> Self {
        Self { endpoints }
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Which HTTP responses count as an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accept {
    /// Only 2xx; anything else is a failure.
    Success,
    /// Any status; the body is the backend's message either way.
    AnyReply,
}

impl Accept {
    fn check(self, ok: bool, status: u16) -> Result<(), ApiError> {
        match self {
            Self::Success if !ok => Err(ApiError::Status { status }),
            Self::Success | Self::AnyReply => Ok(()),
        }
    }
}

fn check_response(resp: Response, accept: Accept) -> Result<Response, ApiError> {
    accept.check(resp.ok(), resp.status())?;
    Ok(resp)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = Request::get(url).send().await.map_err(transport)?;
    check_response(resp, Accept::Success)?
        .json()
        .await
        .map_err(decode)
}

/// Body of a reply shown to the user as is, whatever its status.
async fn read_text(resp: Response) -> Result<String, ApiError> {
    check_response(resp, Accept::AnyReply)?
        .text()
        .await
        .map_err(decode)
}

/// Encode the submission the way an HTML form post would.
fn form_body(submission: &SettingsSubmission) -> Result<UrlSearchParams, ApiError> {
    let params = UrlSearchParams::new()
        .map_err(|err| ApiError::Transport(format!("cannot build form body: {err:?}")))?;
    for (name, value) in submission.fields() {
        params.append(name, value);
    }
    Ok(params)
}

impl PanelApi for HttpPanelApi {
    async fn fetch_temperatures(&self) -> Result<TemperatureReadout, ApiError> {
        get_json(&self.endpoints.temperatures).await
    }

    async fn fetch_alarm_status(&self) -> Result<AlarmStatus, ApiError> {
        get_json(&self.endpoints.alarm).await
    }

    async fn reset_alarm(&self) -> Result<String, ApiError> {
        let resp = Request::post(&self.endpoints.alarm_reset)
            .send()
            .await
            .map_err(transport)?;
        read_text(resp).await
    }

    async fn fetch_settings(&self) -> Result<Settings, ApiError> {
        get_json(&self.endpoints.settings).await
    }

    async fn save_settings(&self, submission: &SettingsSubmission) -> Result<String, ApiError> {
        let request = Request::post(&self.endpoints.settings_save)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(form_body(submission)?)
            .map_err(transport)?;
        let resp = request.send().await.map_err(transport)?;
        read_text(resp).await
    }
}
