//! Resume-enhancer backend collaborator: PDF upload + enhanced download.

#[cfg(test)]
#[path = "enhancer_test.rs"]
mod enhancer_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::EnhancedResume;

pub const ENHANCE_ENDPOINT: &str = "/api/resumeenhancer/enhance/";

const ENHANCE_FAILED: &str = "Failed to enhance resume. Please try again.";
const DOWNLOAD_FAILED: &str = "Failed to download enhanced resume. Please try again.";

pub fn enhanced_download_endpoint(id: i64) -> String {
    format!("/api/resumeenhancer/download/{id}/")
}

/// Upload a resume PDF for enhancement as multipart form data.
#[cfg(feature = "browser")]
pub async fn enhance(file: &web_sys::File) -> Result<EnhancedResume, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("form construction failed".to_owned()))?;
    form.append_with_blob("resume_file", file)
        .map_err(|_| ApiError::Transport("form construction failed".to_owned()))?;
    http::post_form(ENHANCE_ENDPOINT, &form, ENHANCE_FAILED).await
}

/// Download the enhanced PDF for a prior upload.
pub async fn download(id: i64) -> Result<Vec<u8>, ApiError> {
    http::get_blob(&enhanced_download_endpoint(id), DOWNLOAD_FAILED).await
}
