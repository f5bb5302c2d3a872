//! API error types.

use thiserror::Error;

/// Errors returned by [`RecipeApi`](super::RecipeApi) calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend rejected the request with a structured `errors` payload
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Non-success status without an `errors` payload
    #[error("Server returned status {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    /// Request never produced a response (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(String),
    /// Response arrived but could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds an error from a failed response body.
    ///
    /// An `errors` field may be a string or a list of strings; lists are
    /// joined with newlines. A missing or blank `errors` falls back to
    /// [`ApiError::Status`], keeping DRF's `detail` message when present.
    pub fn from_body(status: u16, body: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(_) => return ApiError::Status { status, detail: None },
        };

        let message = match value.get("errors") {
            Some(serde_json::Value::String(message)) => message.trim().to_string(),
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s.trim().to_string(),
                    other => other.to_string(),
                })
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        if message.is_empty() {
            return ApiError::Status {
                status,
                detail: value
                    .get("detail")
                    .and_then(|d| d.as_str())
                    .map(str::to_string),
            };
        }
        ApiError::Rejected { status, message }
    }

    /// The user-facing message of a structured rejection, if any.
    pub fn errors(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_ref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Http(e.to_string())
        }
    }
}
