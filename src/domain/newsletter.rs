//! Newsletters sub-client — newsletter CRUD.

use crate::client::SendGridClient;
use crate::error::{ApiResponse, ApiResult};
use crate::params::Params;

pub struct Newsletters<'a> {
    pub(crate) client: &'a SendGridClient,
}

impl<'a> Newsletters<'a> {
    /// Create a new newsletter.
    pub fn add(
        &self,
        identity: &str,
        name: &str,
        subject: &str,
        text: &str,
        html: &str,
    ) -> ApiResult<ApiResponse> {
        let params = Params::new()
            .param("identity", identity)
            .param("name", name)
            .param("subject", subject)
            .param("text", text)
            .param("html", html);
        self.client.call("newsletter_add", params)
    }

    /// Edit an existing newsletter, optionally renaming it to `newname`.
    pub fn edit(
        &self,
        name: &str,
        newname: &str,
        identity: &str,
        subject: &str,
        text: &str,
        html: &str,
    ) -> ApiResult<ApiResponse> {
        let params = Params::new()
            .param("name", name)
            .param("newname", newname)
            .param("identity", identity)
            .param("subject", subject)
            .param("text", text)
            .param("html", html);
        self.client.call("newsletter_edit", params)
    }

    /// Retrieve the contents of an existing newsletter.
    pub fn get(&self, name: &str) -> ApiResult<ApiResponse> {
        self.client
            .call("newsletter_get", Params::new().param("name", name))
    }

    /// List all newsletters, or check whether `name` exists.
    pub fn list(&self, name: Option<&str>) -> ApiResult<ApiResponse> {
        let params = Params::new().param("name", name.unwrap_or(""));
        self.client.call("newsletter_list", params)
    }

    /// Remove an existing newsletter.
    pub fn delete(&self, name: &str) -> ApiResult<ApiResponse> {
        self.client
            .call("newsletter_delete", Params::new().param("name", name))
    }
}
