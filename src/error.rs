//! Application error type shared by every layer.

/// Errors raised while selecting, uploading, or handing off a video.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transport-level failure (connection refused, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered, but not with what the client expects.
    #[error("API error: {0}")]
    Api(String),
    #[error("IO error: {0}")]
    Io(String),
    /// Settings file could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Internal error: {0}")]
    Internal(String),
    /// A submission is already in flight and exclusive submissions are enabled.
    #[error("Busy: {0}")]
    Busy(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => AppError::Api(format!("status={}, {}", status.as_u16(), e)),
            None => AppError::Network(e.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", e))
    }
}
