//! In-memory collaborators for unit tests of the intake and coordinator.

use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::api::{AnalysisApi, VideoUploadParams};
use crate::error::AppError;
use crate::models::upload::{
    AnalysisRequest, AnalysisResults, AnalysisStatus, UploadListing, UploadResult,
};
use crate::services::upload_coordinator::Notifier;

#[derive(Default)]
pub(crate) struct FakeApi {
    /// `None` makes every upload fail with a 500.
    pub upload_filename: Option<String>,
    pub start_fails: bool,
    /// When set, uploads wait for a notification before completing.
    pub gate: Option<Arc<Notify>>,
    pub uploads: Mutex<Vec<(String, String, Vec<u8>)>>,
    pub starts: Mutex<Vec<AnalysisRequest>>,
}

impl FakeApi {
    pub fn accepting(filename: &str) -> Self {
        Self {
            upload_filename: Some(filename.to_string()),
            ..Self::default()
        }
    }

    pub fn starts(&self) -> Vec<AnalysisRequest> {
        self.starts.lock().unwrap().clone()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _, _)| name.clone())
            .collect()
    }
}

impl AnalysisApi for FakeApi {
    async fn upload_video(&self, params: VideoUploadParams) -> crate::error::Result<UploadResult> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.uploads
            .lock()
            .unwrap()
            .push((params.file_name, params.mime_type, params.data));
        match &self.upload_filename {
            Some(name) => Ok(UploadResult {
                filename: name.clone(),
                status: Some("success".into()),
                size: None,
                content_type: None,
            }),
            None => Err(AppError::Api(
                "upload failed: status=500, response=boom".into(),
            )),
        }
    }

    async fn start_analysis(&self, request: AnalysisRequest) -> crate::error::Result<()> {
        self.starts.lock().unwrap().push(request);
        if self.start_fails {
            return Err(AppError::Network("connection reset".into()));
        }
        Ok(())
    }

    async fn list_uploads(&self) -> crate::error::Result<UploadListing> {
        Ok(UploadListing { files: vec![] })
    }

    async fn delete_upload(&self, _filename: &str) -> crate::error::Result<()> {
        Ok(())
    }

    async fn analysis_status(&self, filename: &str) -> crate::error::Result<AnalysisStatus> {
        Err(AppError::Api(format!("no status for {}", filename)))
    }

    async fn analysis_results(&self, filename: &str) -> crate::error::Result<AnalysisResults> {
        Err(AppError::Api(format!("no results for {}", filename)))
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
