//! Unified client error types.

use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum SendGridError {
    /// The decoded response body carried an `error` field. This is the one
    /// application-level failure the API reports; the string is the
    /// server-supplied message verbatim.
    #[error("API error: {0}")]
    Api(String),

    /// Transport failure (connect, DNS, timeout, malformed HTTP). Propagated
    /// from reqwest without wrapping.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was neither a JSON object nor an HTML page with a
    /// scrapeable `<title>`. Carries a snippet of the offending body.
    #[error("unrecognized response body: {0}")]
    MalformedBody(String),

    /// JSON-encoding an outbound value failed.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, SendGridError>;

/// A decoded API response payload: the JSON object the server returned.
pub type ApiResponse = serde_json::Map<String, serde_json::Value>;
