use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Which intake paths submit the selected file automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitTrigger {
    /// Picking submits; dropping only selects.
    #[default]
    PickerOnly,
    /// Both picking and dropping submit.
    Always,
    /// Neither path submits; an explicit upload action does.
    Explicit,
}

/// Client settings, persisted as camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Scheme, host and port of the analysis service, without a trailing slash.
    pub base_url: String,
    pub submit_trigger: SubmitTrigger,
    /// Issue the analysis-start call even when the upload failed.
    pub start_after_failed_upload: bool,
    /// Refuse a new submission while another is in flight.
    pub exclusive_submissions: bool,
    /// Per-request timeout; `None` leaves the transport default in place.
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            submit_trigger: SubmitTrigger::default(),
            start_after_failed_upload: false,
            exclusive_submissions: false,
            request_timeout_secs: None,
        }
    }
}
