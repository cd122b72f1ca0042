//! # sendgrid-rest
//!
//! A blocking Rust client for the SendGrid legacy REST API, centered on the
//! newsletter namespace: newsletters, recipient lists, list membership,
//! sender identities and delivery schedules.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — errors, network constants, the operation-name → URL mapping
//!    and the parameter multimap
//! 2. **Transport** — one blocking request per call via `reqwest`, with
//!    JSON/HTML-error-page response decoding
//! 3. **High-Level Client** — [`SendGridClient`] with nested sub-clients per
//!    API domain, plus a generic invoke-by-name escape hatch
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sendgrid_rest::prelude::*;
//!
//! # fn main() -> Result<(), SendGridError> {
//! let client = SendGridClient::new("api_user", "api_key");
//!
//! let lists = client.lists().get(None)?;
//! client.lists().email_add(
//!     "MyList",
//!     EmailEntry::with_name("a@example.com", "A"),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! Every call is synchronous and independent; the client holds nothing but
//! the credential pair and a shared transport, so a single instance can be
//! shared freely across threads.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified client error types.
pub mod error;

/// Operation-name → URL mapping and dispatch resolution.
pub mod method;

/// Network URL constants.
pub mod network;

/// Outbound call parameters.
pub mod params;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// Blocking HTTP transport and response decoding.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `SendGridClient` — the primary entry point.
pub mod client;

/// Domain sub-clients.
pub mod domain;

pub use client::{SendGridClient, SendGridClientBuilder};
pub use error::{ApiResponse, ApiResult, SendGridError};
pub use params::Params;

pub mod prelude {
    pub use crate::client::{SendGridClient, SendGridClientBuilder};

    pub use crate::domain::identity::{Identities, IdentityAddress};
    pub use crate::domain::lists::{EmailData, EmailEntry, Lists};
    pub use crate::domain::newsletter::Newsletters;
    pub use crate::domain::recipients::Recipients;
    pub use crate::domain::schedule::Schedule;

    // Dispatch + transport configuration
    pub use crate::http::RequestMethod;
    pub use crate::method::PathConvention;
    pub use crate::params::Params;

    // Errors
    pub use crate::error::{ApiResponse, ApiResult, SendGridError};

    // Network
    pub use crate::network::DEFAULT_API_URL;
}
