//! High-level client — `SendGridClient` with nested sub-client accessors.
//!
//! Each API domain has its own sub-client in `domain/<name>.rs`. This module
//! keeps the builder, the credential pair, and the generic dispatch methods
//! every sub-client funnels through.

use crate::domain::identity::Identities;
use crate::domain::lists::Lists;
use crate::domain::newsletter::Newsletters;
use crate::domain::recipients::Recipients;
use crate::domain::schedule::Schedule;
use crate::error::{ApiResponse, ApiResult};
use crate::http::{RequestMethod, SendGridHttp};
use crate::method::{method_url, PathConvention};
use crate::params::Params;

use std::time::Duration;

/// The primary entry point for the SendGrid REST API client.
///
/// Provides nested sub-client accessors for each domain
/// (`client.newsletters()`, `client.lists()`, ...) plus [`call`] and
/// [`invoke`] for endpoints the typed layer does not wrap.
///
/// The client holds only the credential pair and a shared transport; all
/// methods take `&self`, so one instance can be used from multiple threads.
///
/// [`call`]: SendGridClient::call
/// [`invoke`]: SendGridClient::invoke
#[derive(Clone)]
pub struct SendGridClient {
    pub(crate) http: SendGridHttp,
    base_url: String,
    convention: PathConvention,
    request_method: RequestMethod,
    api_user: String,
    api_key: String,
}

impl SendGridClient {
    /// Create a client with default settings against the production API.
    pub fn new(api_user: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::builder(api_user, api_key).build()
    }

    pub fn builder(
        api_user: impl Into<String>,
        api_key: impl Into<String>,
    ) -> SendGridClientBuilder {
        SendGridClientBuilder::new(api_user, api_key)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn newsletters(&self) -> Newsletters<'_> {
        Newsletters { client: self }
    }

    pub fn lists(&self) -> Lists<'_> {
        Lists { client: self }
    }

    pub fn recipients(&self) -> Recipients<'_> {
        Recipients { client: self }
    }

    pub fn identities(&self) -> Identities<'_> {
        Identities { client: self }
    }

    pub fn schedule(&self) -> Schedule<'_> {
        Schedule { client: self }
    }

    // ── Generic dispatch ─────────────────────────────────────────────────

    /// Two-tier dispatch. Known convenience operation names are rewritten to
    /// their canonical remote names under the active [`PathConvention`];
    /// anything else is forwarded to [`invoke`] verbatim, so future or
    /// unwrapped endpoints stay reachable:
    ///
    /// ```rust,no_run
    /// # use sendgrid_rest::{Params, SendGridClient};
    /// # let client = SendGridClient::new("u", "k");
    /// client.call("some_future_endpoint", Params::from([("foo", "bar")]))?;
    /// # Ok::<(), sendgrid_rest::SendGridError>(())
    /// ```
    ///
    /// [`invoke`]: SendGridClient::invoke
    pub fn call(&self, name: &str, params: Params) -> ApiResult<ApiResponse> {
        let remote = self.convention.canonical_name(name);
        self.invoke(&remote, params)
    }

    /// Invoke a remote operation by its literal name.
    ///
    /// Merges the credentials into `params`, builds the URL from the name,
    /// performs exactly one blocking request, and returns the decoded payload
    /// or the typed failure. No retries.
    pub fn invoke(&self, method: &str, mut params: Params) -> ApiResult<ApiResponse> {
        params.set_credentials(&self.api_user, &self.api_key);
        let url = method_url(&self.base_url, self.convention, method);
        tracing::debug!(method, url = %url, verb = ?self.request_method, "dispatching API call");
        self.http.request(self.request_method, &url, &params)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct SendGridClientBuilder {
    api_user: String,
    api_key: String,
    base_url: String,
    convention: PathConvention,
    request_method: RequestMethod,
    timeout: Duration,
}

impl SendGridClientBuilder {
    pub fn new(api_user: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_user: api_user.into(),
            api_key: api_key.into(),
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            convention: PathConvention::default(),
            request_method: RequestMethod::default(),
            timeout: Duration::from_secs(crate::http::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the API origin (scheme + host). Mainly for test stubs.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Select which revision of the newsletter URL convention to speak.
    pub fn path_convention(mut self, convention: PathConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Carry parameters in the query string (GET) or form body (POST).
    pub fn request_method(mut self, method: RequestMethod) -> Self {
        self.request_method = method;
        self
    }

    /// Set the per-request transport timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> SendGridClient {
        SendGridClient {
            http: SendGridHttp::new(self.timeout),
            base_url: self.base_url,
            convention: self.convention,
            request_method: self.request_method,
            api_user: self.api_user,
            api_key: self.api_key,
        }
    }
}
