//! Upload handoff models: what the backend returns and what a submission reports.

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by `POST /api/upload/video`.
///
/// Only `filename` matters to the handoff; the rest is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    pub filename: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Body of `POST /api/analysis/start`.
///
/// `filename` is only `None` when a start is forced after a failed upload, in
/// which case the key is omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl AnalysisRequest {
    pub fn for_outcome(outcome: &UploadOutcome) -> Self {
        Self {
            filename: outcome.filename().map(str::to_string),
        }
    }
}

/// Result of the upload phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Server-assigned filename.
    Success(String),
    /// Why the upload failed.
    Failure(String),
}

impl UploadOutcome {
    pub fn filename(&self) -> Option<&str> {
        match self {
            UploadOutcome::Success(name) => Some(name),
            UploadOutcome::Failure(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionState {
    Idle,
    Uploading,
    UploadSucceeded,
    UploadFailed,
    StartingAnalysis,
    Done,
}

/// What happened during one submission. Callers are free to drop it.
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub submission_id: String,
    pub file_name: String,
    pub outcome: UploadOutcome,
    /// Whether `POST /api/analysis/start` was issued. Its response is never inspected.
    pub analysis_requested: bool,
    /// States visited, starting at `Idle` and always ending at `Done`.
    pub trace: Vec<SubmissionState>,
}

/// One entry of `GET /api/upload/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUpload {
    pub filename: String,
    pub size: u64,
    #[serde(default)]
    pub created: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadListing {
    #[serde(default)]
    pub files: Vec<StoredUpload>,
}

/// Body of `GET /api/analysis/status/{filename}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStatus {
    pub filename: String,
    pub status: String,
    #[serde(default)]
    pub progress: f64,
}

/// Body of `GET /api/analysis/results/{filename}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub filename: String,
    pub status: String,
    #[serde(default)]
    pub results: serde_json::Value,
}
