//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path segment escaped for use inside an API path
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Ответ пришёл для проекта, который уже не выбран
pub fn is_stale_response(current_ref: Option<&str>, requested_ref: &str) -> bool {
    current_ref != Some(requested_ref)
}

/// GET request with a JSON response
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_json(response).await
}

/// PATCH request with a JSON body and a JSON response
pub async fn patch_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::patch(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    let ok = response.ok();
    let status_text = response.status_text();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if !ok {
        return Err(error_message(status, &status_text, &text));
    }
    parse_body(&text)
}

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, String> {
    serde_json::from_str(text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Сервер кладёт текст ошибки в {"message": ...}; иначе берём текст статуса
fn error_message(status: u16, status_text: &str, body: &str) -> String {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| status_text.to_string());
    format!("{} (HTTP {})", message, status)
}
