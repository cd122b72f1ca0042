//! Schedule sub-client — newsletter delivery scheduling.

use crate::client::SendGridClient;
use crate::error::{ApiResponse, ApiResult};
use crate::params::Params;

pub struct Schedule<'a> {
    pub(crate) client: &'a SendGridClient,
}

impl<'a> Schedule<'a> {
    /// Schedule a delivery time for an existing newsletter.
    ///
    /// `at` is an absolute timestamp, `after` a delay in minutes; the server
    /// treats an empty value as unset and delivers immediately if both are.
    pub fn add(&self, name: &str, at: Option<&str>, after: Option<&str>) -> ApiResult<ApiResponse> {
        let params = Params::new()
            .param("name", name)
            .param("at", at.unwrap_or(""))
            .param("after", after.unwrap_or(""));
        self.client.call("newsletter_schedule_add", params)
    }

    /// Retrieve the scheduled delivery time for an existing newsletter.
    pub fn get(&self, name: &str) -> ApiResult<ApiResponse> {
        self.client
            .call("newsletter_schedule_get", Params::new().param("name", name))
    }

    /// Cancel a scheduled send for a newsletter.
    pub fn delete(&self, name: &str) -> ApiResult<ApiResponse> {
        self.client
            .call("newsletter_schedule_delete", Params::new().param("name", name))
    }
}
