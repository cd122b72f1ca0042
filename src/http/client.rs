//! Low-level transport — `SendGridHttp`.
//!
//! One synchronous request per call, no retries. Decoding is tolerant of the
//! service edge returning an HTML error page in place of JSON: the page title
//! is lifted into a synthetic `error` payload so both shapes surface as the
//! same typed failure.

use crate::error::{ApiResponse, ApiResult, SendGridError};
use crate::params::Params;

use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP verb used for API calls.
///
/// The API accepts parameters either way; POST is the default since long
/// parameter values (JSON-encoded email entries, newsletter HTML bodies) do
/// not fit comfortably in a query string. GET is kept for compatibility with
/// deployments that speak the older revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMethod {
    Get,
    #[default]
    Post,
}

/// Blocking HTTP transport for the SendGrid REST API.
pub(crate) struct SendGridHttp {
    client: Client,
}

impl SendGridHttp {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Perform one request carrying `params` as the query string (GET) or
    /// urlencoded form body (POST), then decode the response payload.
    pub fn request(
        &self,
        method: RequestMethod,
        url: &str,
        params: &Params,
    ) -> ApiResult<ApiResponse> {
        let req = match method {
            RequestMethod::Get => self.client.get(url).query(params.pairs()),
            RequestMethod::Post => self.client.post(url).form(params.pairs()),
        };

        let body = req.send()?.text()?;
        tracing::trace!(bytes = body.len(), "received response body");

        let payload = decode_body(&body)?;
        if let Some(err) = payload.get("error") {
            let msg = match err {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(SendGridError::Api(msg));
        }
        Ok(payload)
    }
}

impl Clone for SendGridHttp {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

/// Decode a response body into a payload object.
///
/// Tries JSON first. A non-JSON body is assumed to be an HTML error page from
/// the transport/edge layer; its `<title>` becomes a synthetic `error`
/// payload. A body that is neither is unrecoverable.
fn decode_body(body: &str) -> ApiResult<ApiResponse> {
    if let Ok(payload) = serde_json::from_str::<ApiResponse>(body) {
        return Ok(payload);
    }
    if let Some(title) = html_title(body) {
        let mut payload = ApiResponse::new();
        payload.insert("error".to_string(), Value::String(title));
        return Ok(payload);
    }
    Err(SendGridError::MalformedBody(snippet(body)))
}

/// Extract the text of the first `<title>` element, case-insensitively.
fn html_title(body: &str) -> Option<String> {
    let lower = body.to_ascii_lowercase();
    let open = lower.find("<title")?;
    let open_end = open + lower[open..].find('>')? + 1;
    let close = open_end + lower[open_end..].find("</title>")?;
    let title = body[open_end..close].trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// First part of a body, for error messages.
fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_body_decodes_to_payload() {
        let payload = decode_body(r#"{"foo": "bar"}"#).unwrap();
        assert_eq!(payload.get("foo"), Some(&Value::String("bar".into())));
    }

    #[test]
    fn html_body_title_becomes_error_payload() {
        let body = "<html><head><title>Not Found</title></head><body>404</body></html>";
        let payload = decode_body(body).unwrap();
        assert_eq!(
            payload.get("error"),
            Some(&Value::String("Not Found".into()))
        );
    }

    #[test]
    fn title_extraction_is_case_insensitive_and_tolerates_attributes() {
        let body = r#"<HTML><TITLE lang="en"> Service Unavailable </TITLE></HTML>"#;
        assert_eq!(html_title(body).as_deref(), Some("Service Unavailable"));
    }

    #[test]
    fn empty_title_is_not_a_message() {
        assert_eq!(html_title("<title>   </title>"), None);
    }

    #[test]
    fn unparseable_body_is_a_malformed_body_error() {
        let err = decode_body("not json, not html").unwrap_err();
        assert!(matches!(err, SendGridError::MalformedBody(_)));
    }

    #[test]
    fn non_object_json_is_rejected() {
        // The API contract is a JSON object; a bare array or scalar has no
        // keys to inspect.
        assert!(matches!(
            decode_body("[1, 2, 3]").unwrap_err(),
            SendGridError::MalformedBody(_)
        ));
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        let long = "x".repeat(500);
        let s = snippet(&long);
        assert!(s.len() < 210);
        assert!(s.ends_with("..."));
    }
}
