//! Identities sub-client — sender identity CRUD.

use crate::client::SendGridClient;
use crate::error::{ApiResponse, ApiResult};
use crate::params::Params;

/// Address fields for a sender identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl IdentityAddress {
    fn encode_into(&self, mut params: Params) -> Params {
        params.append("address", &self.address);
        params.append("city", &self.city);
        params.append("state", &self.state);
        params.append("zip", &self.zip);
        params.append("country", &self.country);
        params
    }
}

pub struct Identities<'a> {
    pub(crate) client: &'a SendGridClient,
}

impl<'a> Identities<'a> {
    /// Create a new sender identity.
    pub fn add(
        &self,
        identity: &str,
        name: &str,
        email: &str,
        address: &IdentityAddress,
    ) -> ApiResult<ApiResponse> {
        let params = Params::new()
            .param("identity", identity)
            .param("name", name)
            .param("email", email);
        self.client
            .call("newsletter_identity_add", address.encode_into(params))
    }

    /// Edit an existing sender identity, optionally renaming it.
    pub fn edit(
        &self,
        identity: &str,
        newidentity: Option<&str>,
        name: &str,
        email: &str,
        address: &IdentityAddress,
    ) -> ApiResult<ApiResponse> {
        let params = Params::new()
            .param("identity", identity)
            .param("newidentity", newidentity.unwrap_or(""))
            .param("name", name)
            .param("email", email);
        self.client
            .call("newsletter_identity_edit", address.encode_into(params))
    }

    /// Retrieve a sender identity.
    pub fn get(&self, identity: &str) -> ApiResult<ApiResponse> {
        let params = Params::new().param("identity", identity);
        self.client.call("newsletter_identity_get", params)
    }

    /// List all sender identities, or check whether one exists.
    pub fn list(&self, identity: Option<&str>) -> ApiResult<ApiResponse> {
        let params = Params::new().param("identity", identity.unwrap_or(""));
        self.client.call("newsletter_identity_list", params)
    }

    /// Remove a sender identity.
    pub fn delete(&self, identity: &str) -> ApiResult<ApiResponse> {
        let params = Params::new().param("identity", identity);
        self.client.call("newsletter_identity_delete", params)
    }
}
