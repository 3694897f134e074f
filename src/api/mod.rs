//! Analysis service API abstraction layer.
//!
//! `AnalysisApi` is the only interface through which the client talks HTTP to the
//! analysis service. Upper layers (`services/`, `commands/`) call through this
//! trait and never build requests themselves, so the coordinator can be driven by
//! an in-memory implementation in tests.

use crate::error::AppError;
use crate::models::upload::{
    AnalysisRequest, AnalysisResults, AnalysisStatus, UploadListing, UploadResult,
};

/// Everything phase 1 needs to send one file.
#[derive(Debug)]
pub struct VideoUploadParams {
    pub data: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

/// Abstraction trait for analysis service interactions.
///
/// The current implementation is `AnalysisApiV1`. Uses return-position
/// `impl Future` so implementations stay generic rather than boxed.
pub trait AnalysisApi: Send + Sync {
    /// Store the file and return the server-assigned filename.
    ///
    /// Any non-2xx status is an error, as is a body without `filename`.
    fn upload_video(
        &self,
        params: VideoUploadParams,
    ) -> impl std::future::Future<Output = std::result::Result<UploadResult, AppError>> + Send;

    /// Ask the backend to start analysing a stored file.
    ///
    /// The response body is not interpreted; only transport failures and
    /// non-2xx statuses surface as errors.
    fn start_analysis(
        &self,
        request: AnalysisRequest,
    ) -> impl std::future::Future<Output = std::result::Result<(), AppError>> + Send;

    fn list_uploads(
        &self,
    ) -> impl std::future::Future<Output = std::result::Result<UploadListing, AppError>> + Send;

    fn delete_upload(
        &self,
        filename: &str,
    ) -> impl std::future::Future<Output = std::result::Result<(), AppError>> + Send;

    fn analysis_status(
        &self,
        filename: &str,
    ) -> impl std::future::Future<Output = std::result::Result<AnalysisStatus, AppError>> + Send;

    fn analysis_results(
        &self,
        filename: &str,
    ) -> impl std::future::Future<Output = std::result::Result<AnalysisResults, AppError>> + Send;
}

pub mod v1;
