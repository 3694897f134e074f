//! Upload coordinator: two-phase handoff of a selected file to the analysis service.
//!
//! Phase 1 uploads the bytes and yields an `UploadOutcome`. Phase 2 asks the
//! service to start analysis on the server-assigned filename. Phase 2 is guarded
//! by the outcome unless `start_after_failed_upload` is set, in which case it runs
//! regardless and sends an empty request after a failure.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::api::{AnalysisApi, VideoUploadParams};
use crate::error::AppError;
use crate::models::file::SelectedFile;
use crate::models::settings::AppSettings;
use crate::models::upload::{AnalysisRequest, SubmissionReport, SubmissionState, UploadOutcome};

/// Message shown to the user when phase 1 fails.
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";

/// Blocking, user-facing notification channel.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinatorOptions {
    pub start_after_failed_upload: bool,
    pub exclusive_submissions: bool,
}

impl From<&AppSettings> for CoordinatorOptions {
    fn from(settings: &AppSettings) -> Self {
        Self {
            start_after_failed_upload: settings.start_after_failed_upload,
            exclusive_submissions: settings.exclusive_submissions,
        }
    }
}

pub struct UploadCoordinator<A, N> {
    api: Arc<A>,
    notifier: Arc<N>,
    options: CoordinatorOptions,
    /// Submissions currently running, keyed by submission id, valued by file name.
    in_flight: Arc<Mutex<HashMap<String, String>>>,
}

impl<A, N> Clone for UploadCoordinator<A, N> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            notifier: self.notifier.clone(),
            options: self.options,
            in_flight: self.in_flight.clone(),
        }
    }
}

impl<A, N> UploadCoordinator<A, N>
where
    A: AnalysisApi + 'static,
    N: Notifier + 'static,
{
    pub fn new(api: Arc<A>, notifier: Arc<N>, options: CoordinatorOptions) -> Self {
        Self {
            api,
            notifier,
            options,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn in_flight_count(&self) -> usize {
        self.in_flight.lock().await.len()
    }

    /// Run one submission to completion.
    ///
    /// Upload failures are reported to the user and recorded in the report, not
    /// returned as errors. The only error is `AppError::Busy`, raised before any
    /// network call when exclusive submissions are enabled and another is running.
    pub async fn submit(&self, file: &SelectedFile) -> crate::error::Result<SubmissionReport> {
        let submission_id = uuid::Uuid::new_v4().simple().to_string();
        self.register(&submission_id, &file.name).await?;

        let report = self.run(submission_id.clone(), file).await;

        self.in_flight.lock().await.remove(&submission_id);
        Ok(report)
    }

    /// Start a submission on its own task and return immediately.
    pub fn spawn_submit(
        &self,
        file: SelectedFile,
    ) -> tokio::task::JoinHandle<crate::error::Result<SubmissionReport>> {
        let coordinator = self.clone();
        tokio::spawn(async move {
            let result = coordinator.submit(&file).await;
            if let Err(e) = &result {
                log::warn!("Submission for file '{}' not started: {}", file.name, e);
            }
            result
        })
    }

    async fn register(&self, submission_id: &str, file_name: &str) -> crate::error::Result<()> {
        let mut in_flight = self.in_flight.lock().await;
        if self.options.exclusive_submissions {
            if let Some(active) = in_flight.values().next() {
                return Err(AppError::Busy(format!(
                    "upload of '{}' is still in progress",
                    active
                )));
            }
        }
        in_flight.insert(submission_id.to_string(), file_name.to_string());
        Ok(())
    }

    async fn run(&self, submission_id: String, file: &SelectedFile) -> SubmissionReport {
        let mut trace = vec![SubmissionState::Idle];
        let mut advance = |state: SubmissionState| {
            log::debug!("Submission {}: -> {:?}", submission_id, state);
            trace.push(state);
        };

        advance(SubmissionState::Uploading);
        let outcome = match self.upload(file).await {
            Ok(filename) => {
                log::info!("Uploaded '{}' as '{}'", file.name, filename);
                UploadOutcome::Success(filename)
            }
            Err(e) => {
                log::error!("Upload failed for file '{}': {}", file.name, e);
                self.notifier.alert(UPLOAD_FAILED_MESSAGE);
                UploadOutcome::Failure(e.to_string())
            }
        };
        advance(if outcome.is_success() {
            SubmissionState::UploadSucceeded
        } else {
            SubmissionState::UploadFailed
        });

        let analysis_requested = outcome.is_success() || self.options.start_after_failed_upload;
        if analysis_requested {
            advance(SubmissionState::StartingAnalysis);
            let request = AnalysisRequest::for_outcome(&outcome);
            if let Err(e) = self.api.start_analysis(request).await {
                log::warn!("Analysis start for file '{}' failed: {}", file.name, e);
            }
        } else {
            log::info!("Skipping analysis start for '{}': upload did not succeed", file.name);
        }
        advance(SubmissionState::Done);

        SubmissionReport {
            submission_id,
            file_name: file.name.clone(),
            outcome,
            analysis_requested,
            trace,
        }
    }

    async fn upload(&self, file: &SelectedFile) -> crate::error::Result<String> {
        let data = read_file_data(&file.path).await?;
        let params = VideoUploadParams {
            data,
            file_name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        };
        let result = self.api.upload_video(params).await?;
        Ok(result.filename)
    }
}

/// Read a whole file without blocking the runtime.
pub async fn read_file_data(file_path: &str) -> crate::error::Result<Vec<u8>> {
    let file_path = file_path.to_string();
    tokio::task::spawn_blocking(move || std::fs::read(&file_path).map_err(AppError::from))
        .await
        .map_err(|e| AppError::Internal(format!("spawn_blocking join error: {}", e)))?
}
