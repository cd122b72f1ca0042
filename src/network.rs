//! Network constants for the SendGrid REST API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://sendgrid.com";

/// Response format suffix appended to every endpoint path.
pub const RESPONSE_FORMAT: &str = "json";
