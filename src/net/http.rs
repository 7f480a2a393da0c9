//! Shared request helpers for the REST backend.
//!
//! Browser builds issue real HTTP calls via `gloo-net` and attach the stored
//! access token as a bearer credential; native builds return a transport
//! failure so callers stay compilable and testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-OK statuses are funneled through `parse_rejection`, so callers always
//! see the tagged `ApiError` union and never a panic.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;

#[cfg(feature = "browser")]
use crate::session::tokens::{BrowserTokenStore, TokenStore as _};

/// Error text for helpers invoked outside a browser build.
#[cfg(any(test, not(feature = "browser")))]
pub(crate) const OFFLINE_MESSAGE: &str = "not available outside the browser";

/// Format the Authorization header value for an access token.
#[cfg(any(test, feature = "browser"))]
fn bearer_value(access: &str) -> String {
    format!("Bearer {access}")
}

#[cfg(feature = "browser")]
fn bearer_header() -> Option<String> {
    BrowserTokenStore.load().map(|pair| bearer_value(&pair.access))
}

#[cfg(not(feature = "browser"))]
fn offline() -> ApiError {
    ApiError::Transport(OFFLINE_MESSAGE.to_owned())
}

/// GET a JSON document.
pub async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, ApiError> {
    #[cfg(feature = "browser")]
    {
        let mut request = gloo_net::http::Request::get(path);
        if let Some(bearer) = bearer_header() {
            request = request.header("Authorization", &bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_json(&response, fallback).await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (path, fallback);
        Err(offline())
    }
}

/// POST a JSON body and decode a JSON response.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    #[cfg(feature = "browser")]
    {
        let mut request = gloo_net::http::Request::post(path);
        if let Some(bearer) = bearer_header() {
            request = request.header("Authorization", &bearer);
        }
        let request = request
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_json(&response, fallback).await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (path, body, fallback);
        Err(offline())
    }
}

/// POST with an empty body and decode a JSON response.
pub async fn post_empty<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, ApiError> {
    #[cfg(feature = "browser")]
    {
        let mut request = gloo_net::http::Request::post(path);
        if let Some(bearer) = bearer_header() {
            request = request.header("Authorization", &bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_json(&response, fallback).await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (path, fallback);
        Err(offline())
    }
}

/// POST multipart form data and decode a JSON response. Browser only.
#[cfg(feature = "browser")]
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: &web_sys::FormData,
    fallback: &str,
) -> Result<T, ApiError> {
    let mut request = gloo_net::http::Request::post(path);
    if let Some(bearer) = bearer_header() {
        request = request.header("Authorization", &bearer);
    }
    let request = request
        .body(form.clone())
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_json(&response, fallback).await
}

/// GET a binary document (PDF blobs).
pub async fn get_blob(path: &str, fallback: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "browser")]
    {
        let mut request = gloo_net::http::Request::get(path);
        if let Some(bearer) = bearer_header() {
            request = request.header("Authorization", &bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(rejection(&response, fallback).await);
        }
        response
            .binary()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (path, fallback);
        Err(offline())
    }
}

/// DELETE a resource; success carries no body.
pub async fn delete(path: &str, fallback: &str) -> Result<(), ApiError> {
    #[cfg(feature = "browser")]
    {
        let mut request = gloo_net::http::Request::delete(path);
        if let Some(bearer) = bearer_header() {
            request = request.header("Authorization", &bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(rejection(&response, fallback).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (path, fallback);
        Err(offline())
    }
}

#[cfg(feature = "browser")]
async fn decode_json<T: DeserializeOwned>(
    response: &gloo_net::http::Response,
    fallback: &str,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(rejection(response, fallback).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "browser")]
async fn rejection(response: &gloo_net::http::Response, fallback: &str) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    crate::net::error::parse_rejection(&body, fallback)
}
