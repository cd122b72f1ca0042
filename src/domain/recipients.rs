//! Recipients sub-client — attaching recipient lists to newsletters.

use crate::client::SendGridClient;
use crate::error::{ApiResponse, ApiResult};
use crate::params::Params;

pub struct Recipients<'a> {
    pub(crate) client: &'a SendGridClient,
}

impl<'a> Recipients<'a> {
    /// Attach a recipient list to a newsletter.
    pub fn add(&self, name: &str, list: &str) -> ApiResult<ApiResponse> {
        let params = Params::new().param("name", name).param("list", list);
        self.client.call("newsletter_recipients_add", params)
    }

    /// Retrieve the recipient lists attached to an existing newsletter.
    pub fn get(&self, name: &str) -> ApiResult<ApiResponse> {
        self.client
            .call("newsletter_recipients_get", Params::new().param("name", name))
    }

    /// Detach a recipient list from a newsletter.
    pub fn delete(&self, name: &str, list: &str) -> ApiResult<ApiResponse> {
        let params = Params::new().param("name", name).param("list", list);
        self.client.call("newsletter_recipients_delete", params)
    }
}
