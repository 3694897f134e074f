//! AnalysisApiV1: concrete implementation of the AnalysisApi trait over reqwest.
//!
//! All endpoints hang off the configured base URL; nothing here hardcodes a host.

use std::time::Duration;

use reqwest::{Response, Url};

use super::{AnalysisApi, VideoUploadParams};
use crate::error::AppError;
use crate::models::file::FALLBACK_MIME_TYPE;
use crate::models::settings::AppSettings;
use crate::models::upload::{
    AnalysisRequest, AnalysisResults, AnalysisStatus, UploadListing, UploadResult,
};

const USER_AGENT: &str = concat!("FootageUploader/", env!("CARGO_PKG_VERSION"));
const HEALTH_TIMEOUT_SECS: u64 = 5;

/// Multipart field name the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "file";

pub struct AnalysisApiV1 {
    client: reqwest::Client,
    base_url: Url,
}

impl AnalysisApiV1 {
    pub fn new(settings: &AppSettings) -> crate::error::Result<Self> {
        let base_url = parse_base_url(&settings.base_url)?;
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> crate::error::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Internal(format!("Base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn parse_base_url(raw: &str) -> crate::error::Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::Internal(format!("Invalid base URL '{}': {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(AppError::Internal(format!("Base URL cannot be a base: {}", raw)));
    }
    Ok(url)
}

/// MIME type to attach to the uploaded part.
///
/// An empty or unparseable declared type is sent as `application/octet-stream`,
/// the way a browser form does for files of unknown type.
pub(crate) fn upload_mime_type(declared: &str) -> &str {
    let declared = declared.trim();
    if !declared.is_empty()
        && reqwest::multipart::Part::bytes(Vec::new())
            .mime_str(declared)
            .is_ok()
    {
        declared
    } else {
        FALLBACK_MIME_TYPE
    }
}

/// Turn a non-2xx response into `AppError::Api`, keeping the body for diagnostics.
async fn ensure_success(resp: Response, action: &str) -> crate::error::Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(AppError::Api(format!(
        "{} failed: status={}, response={}",
        action,
        status.as_u16(),
        body
    )))
}

/// Parse a JSON body, reporting malformed payloads as API errors.
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: Response,
    action: &str,
) -> crate::error::Result<T> {
    let text = resp.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::Api(format!("{} returned unexpected body ({}): {}", action, e, text)))
}

impl AnalysisApi for AnalysisApiV1 {
    async fn upload_video(&self, params: VideoUploadParams) -> crate::error::Result<UploadResult> {
        let mime_type = upload_mime_type(&params.mime_type);
        if mime_type != params.mime_type {
            log::debug!(
                "Sending '{}' as {} (declared type '{}')",
                params.file_name,
                mime_type,
                params.mime_type
            );
        }
        let part = reqwest::multipart::Part::bytes(params.data)
            .file_name(params.file_name)
            .mime_str(mime_type)
            .map_err(|e| AppError::Internal(format!("MIME parse error: {}", e)))?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let url = self.endpoint(&["api", "upload", "video"])?;
        let resp = self.client.post(url).multipart(form).send().await?;
        let resp = ensure_success(resp, "upload").await?;
        read_json(resp, "upload").await
    }

    async fn start_analysis(&self, request: AnalysisRequest) -> crate::error::Result<()> {
        let url = self.endpoint(&["api", "analysis", "start"])?;
        let resp = self.client.post(url).json(&request).send().await?;
        let resp = ensure_success(resp, "analysis start").await?;
        log::debug!("Analysis start acknowledged: status={}", resp.status().as_u16());
        Ok(())
    }

    async fn list_uploads(&self) -> crate::error::Result<UploadListing> {
        let url = self.endpoint(&["api", "upload", "list"])?;
        let resp = ensure_success(self.client.get(url).send().await?, "list uploads").await?;
        read_json(resp, "list uploads").await
    }

    async fn delete_upload(&self, filename: &str) -> crate::error::Result<()> {
        let url = self.endpoint(&["api", "upload", filename])?;
        ensure_success(self.client.delete(url).send().await?, "delete upload").await?;
        Ok(())
    }

    async fn analysis_status(&self, filename: &str) -> crate::error::Result<AnalysisStatus> {
        let url = self.endpoint(&["api", "analysis", "status", filename])?;
        let resp = ensure_success(self.client.get(url).send().await?, "analysis status").await?;
        read_json(resp, "analysis status").await
    }

    async fn analysis_results(&self, filename: &str) -> crate::error::Result<AnalysisResults> {
        let url = self.endpoint(&["api", "analysis", "results", filename])?;
        let resp = ensure_success(self.client.get(url).send().await?, "analysis results").await?;
        read_json(resp, "analysis results").await
    }
}

/// Lightweight liveness check against `GET /health`.
///
/// Returns `false` on any failure (bad URL, network error, timeout, non-2xx).
/// An unreachable service is a normal state for the client, not an error.
pub async fn check_health(base_url: &str) -> bool {
    let url = match parse_base_url(base_url).and_then(|mut url| {
        url.path_segments_mut()
            .map_err(|_| AppError::Internal("Base URL cannot be a base".into()))?
            .pop_if_empty()
            .push("health");
        Ok(url)
    }) {
        Ok(u) => u,
        Err(_) => return false,
    };
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(HEALTH_TIMEOUT_SECS))
        .build()
    {
        Ok(c) => c,
        Err(_) => return false,
    };
    match client.get(url).send().await {
        Ok(resp) => resp.status().is_success(),
        Err(_) => false,
    }
}
