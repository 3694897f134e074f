//! Handlers for the stored-upload and analysis-status commands.
//!
//! Each handler forwards to `AnalysisApi` and renders the answer as lines of
//! text for the console.

use crate::api::AnalysisApi;
use crate::models::upload::UploadListing;
use crate::services::file_intake::format_file_size;

pub async fn list_uploads<A: AnalysisApi>(api: &A) -> crate::error::Result<Vec<String>> {
    let listing = api.list_uploads().await?;
    Ok(render_listing(&listing))
}

pub async fn delete_upload<A: AnalysisApi>(api: &A, filename: &str) -> crate::error::Result<String> {
    api.delete_upload(filename).await?;
    log::info!("Deleted upload '{}'", filename);
    Ok(format!("Deleted {}", filename))
}

pub async fn analysis_status<A: AnalysisApi>(api: &A, filename: &str) -> crate::error::Result<String> {
    let status = api.analysis_status(filename).await?;
    Ok(format!(
        "{}: {} ({:.0}%)",
        status.filename, status.status, status.progress
    ))
}

pub async fn analysis_results<A: AnalysisApi>(
    api: &A,
    filename: &str,
) -> crate::error::Result<String> {
    let results = api.analysis_results(filename).await?;
    Ok(serde_json::to_string_pretty(&results)?)
}

/// One line per stored upload: name, human-readable size, creation time.
pub fn render_listing(listing: &UploadListing) -> Vec<String> {
    if listing.files.is_empty() {
        return vec!["No uploads".to_string()];
    }
    listing
        .files
        .iter()
        .map(|f| {
            format!(
                "{}\t{}\t{}",
                f.filename,
                format_file_size(f.size),
                f.created.as_deref().unwrap_or("-")
            )
        })
        .collect()
}
