//! Resume-builder backend collaborator: CRUD plus PDF export.

#[cfg(test)]
#[path = "resumes_test.rs"]
mod resumes_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::Resume;

pub const RESUMES_ENDPOINT: &str = "/api/resumebuilder/resumes/";

const LIST_FAILED: &str = "Failed to load your resumes. Please try again.";
const CREATE_FAILED: &str = "Failed to create resume. Please try again.";
const DELETE_FAILED: &str = "Failed to delete resume. Please try again.";
const DOWNLOAD_FAILED: &str = "Failed to download resume. Please try again.";

pub fn resume_endpoint(id: i64) -> String {
    format!("{RESUMES_ENDPOINT}{id}/")
}

pub fn resume_download_endpoint(id: i64) -> String {
    format!("{RESUMES_ENDPOINT}{id}/download/")
}

/// Fetch the caller's resumes, newest first per backend ordering.
pub async fn list() -> Result<Vec<Resume>, ApiError> {
    let body: serde_json::Value = http::get_json(RESUMES_ENDPOINT, LIST_FAILED).await?;
    parse_resume_list(&body).ok_or_else(|| ApiError::Transport("unexpected resume list shape".to_owned()))
}

pub async fn create(title: &str) -> Result<Resume, ApiError> {
    let payload = serde_json::json!({ "title": title });
    http::post_json(RESUMES_ENDPOINT, &payload, CREATE_FAILED).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete(&resume_endpoint(id), DELETE_FAILED).await
}

/// Download a completed resume as a PDF blob.
pub async fn download(id: i64) -> Result<Vec<u8>, ApiError> {
    http::get_blob(&resume_download_endpoint(id), DOWNLOAD_FAILED).await
}

/// Accept both a plain array and a paginated `{"results": [...]}` body.
pub fn parse_resume_list(body: &serde_json::Value) -> Option<Vec<Resume>> {
    let items = body
        .get("results")
        .and_then(|results| results.as_array())
        .or_else(|| body.as_array())?;
    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}
