//! Blocking HTTP transport and response decoding.

mod client;

pub use client::RequestMethod;
pub(crate) use client::{SendGridHttp, DEFAULT_TIMEOUT_SECS};
