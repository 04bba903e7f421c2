//! Error types for DependencyTrack API operations.

use std::path::PathBuf;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// A non-200 response captured for diagnostics.
///
/// The body is read eagerly so the error can outlive the connection.
#[derive(Debug, Clone)]
pub struct FailedResponse {
    /// URL the request was sent to, including the query string.
    pub url: Url,
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body. Empty if it could not be read.
    pub body: String,
}

impl FailedResponse {
    /// Best-effort human readable message from the body.
    ///
    /// DependencyTrack usually answers with plain text, but some endpoints
    /// wrap errors in a JSON object with a `message` field.
    pub fn message(&self) -> String {
        let trimmed = self.body.trim();
        if trimmed.is_empty() {
            return self
                .status
                .canonical_reason()
                .unwrap_or("no response body")
                .to_string();
        }

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(trimmed) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }

        trimmed.to_string()
    }
}

/// Errors that can occur during DependencyTrack API operations.
#[derive(Debug, Error)]
pub enum DependencyTrackError {
    /// Configuration is missing or incomplete.
    #[error("DependencyTrack configuration required: {0}")]
    ConfigMissing(String),

    /// The server rejected the API key (401/403).
    #[error("{description}: authentication failed (HTTP {})", .response.status.as_u16())]
    Authentication {
        description: String,
        response: FailedResponse,
    },

    /// The server answered with a status other than 200.
    #[error("{description}: HTTP {} {}", .response.status.as_u16(), .response.message())]
    Api {
        description: String,
        response: FailedResponse,
    },

    /// The client was closed before the call.
    #[error("client has been closed")]
    Closed,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A local file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DependencyTrackError {
    /// The failed response attached to this error, if any.
    pub fn response(&self) -> Option<&FailedResponse> {
        match self {
            Self::Authentication { response, .. } | Self::Api { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP status code of the failed response, if any.
    pub fn status_code(&self) -> Option<u16> {
        self.response().map(|r| r.status.as_u16())
    }

    /// Returns true if the server rejected the credentials.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}

/// Result type alias for DependencyTrack operations.
pub type Result<T> = core::result::Result<T, DependencyTrackError>;
