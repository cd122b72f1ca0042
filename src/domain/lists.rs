//! Recipient-lists sub-client — list CRUD and email membership.

use crate::client::SendGridClient;
use crate::error::{ApiResponse, ApiResult};
use crate::params::Params;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recipient entry for [`Lists::email_add`].
///
/// Covers the common `email` + `name` shape; recipients with custom fields
/// can be passed as raw [`Value`] mappings instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailEntry {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailEntry {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

impl From<EmailEntry> for Value {
    fn from(entry: EmailEntry) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("email".to_string(), Value::String(entry.email));
        if let Some(name) = entry.name {
            map.insert("name".to_string(), Value::String(name));
        }
        Value::Object(map)
    }
}

/// Payload for adding recipients to a list: one mapping, or a sequence of
/// mappings. Each element is JSON-encoded on its own into a separate `data`
/// parameter, which is how the API distinguishes batch entries.
#[derive(Debug, Clone, PartialEq)]
pub enum EmailData {
    Single(Value),
    Batch(Vec<Value>),
}

impl EmailData {
    /// JSON-encode an arbitrary serializable recipient.
    pub fn single<T: Serialize>(entry: &T) -> serde_json::Result<Self> {
        Ok(EmailData::Single(serde_json::to_value(entry)?))
    }

    /// JSON-encode a sequence of serializable recipients.
    pub fn batch<T, I>(entries: I) -> serde_json::Result<Self>
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
    {
        let values = entries
            .into_iter()
            .map(|e| serde_json::to_value(&e))
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(EmailData::Batch(values))
    }

    /// Append one `data` pair per entry, each independently JSON-encoded.
    fn encode_into(&self, params: &mut Params) -> serde_json::Result<()> {
        match self {
            EmailData::Single(value) => {
                params.append("data", serde_json::to_string(value)?);
            }
            EmailData::Batch(values) => {
                for value in values {
                    params.append("data", serde_json::to_string(value)?);
                }
            }
        }
        Ok(())
    }
}

impl From<Value> for EmailData {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => EmailData::Batch(values),
            other => EmailData::Single(other),
        }
    }
}

impl From<Vec<Value>> for EmailData {
    fn from(values: Vec<Value>) -> Self {
        EmailData::Batch(values)
    }
}

impl From<EmailEntry> for EmailData {
    fn from(entry: EmailEntry) -> Self {
        EmailData::Single(entry.into())
    }
}

impl From<Vec<EmailEntry>> for EmailData {
    fn from(entries: Vec<EmailEntry>) -> Self {
        EmailData::Batch(entries.into_iter().map(Value::from).collect())
    }
}

pub struct Lists<'a> {
    pub(crate) client: &'a SendGridClient,
}

impl<'a> Lists<'a> {
    /// Create a new recipient list. `name` optionally sets the column name
    /// for the recipient name field.
    pub fn add(&self, list: &str, name: Option<&str>) -> ApiResult<ApiResponse> {
        let params = Params::new()
            .param("list", list)
            .param("name", name.unwrap_or(""));
        self.client.call("newsletter_lists_add", params)
    }

    /// Rename a recipient list.
    pub fn edit(&self, list: &str, newlist: &str) -> ApiResult<ApiResponse> {
        let params = Params::new().param("list", list).param("newlist", newlist);
        self.client.call("newsletter_lists_edit", params)
    }

    /// List all recipient lists on the account, or check whether a
    /// particular list exists.
    pub fn get(&self, list: Option<&str>) -> ApiResult<ApiResponse> {
        let params = Params::new().param("list", list.unwrap_or(""));
        self.client.call("newsletter_lists_get", params)
    }

    /// Remove a recipient list from the account.
    pub fn delete(&self, list: &str) -> ApiResult<ApiResponse> {
        self.client
            .call("newsletter_lists_delete", Params::new().param("list", list))
    }

    /// Add one or more emails to a recipient list.
    pub fn email_add(&self, list: &str, data: impl Into<EmailData>) -> ApiResult<ApiResponse> {
        let mut params = Params::new().param("list", list);
        data.into().encode_into(&mut params)?;
        self.client.call("newsletter_lists_email_add", params)
    }

    /// Get the email addresses and associated fields for a recipient list.
    pub fn email_get(&self, list: &str, email: Option<&str>) -> ApiResult<ApiResponse> {
        let params = Params::new()
            .param("list", list)
            .param("email", email.unwrap_or(""));
        self.client.call("newsletter_lists_email_get", params)
    }

    /// Remove one or more emails from a recipient list.
    pub fn email_delete(&self, list: &str, email: &str) -> ApiResult<ApiResponse> {
        let params = Params::new().param("list", list).param("email", email);
        self.client.call("newsletter_lists_email_delete", params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_mapping_encodes_to_one_data_param() {
        let data = EmailData::from(json!({"email": "a@example.com", "name": "A"}));
        let mut params = Params::new();
        data.encode_into(&mut params).unwrap();

        let values: Vec<&str> = params.get_all("data").collect();
        assert_eq!(values.len(), 1);
        let decoded: Value = serde_json::from_str(values[0]).unwrap();
        assert_eq!(decoded, json!({"email": "a@example.com", "name": "A"}));
    }

    #[test]
    fn sequence_encodes_each_element_independently() {
        let data = EmailData::from(json!([{"email": "a@x.com"}, {"email": "b@x.com"}]));
        let mut params = Params::new();
        data.encode_into(&mut params).unwrap();

        let values: Vec<&str> = params.get_all("data").collect();
        assert_eq!(values.len(), 2);
        assert_eq!(
            serde_json::from_str::<Value>(values[0]).unwrap(),
            json!({"email": "a@x.com"})
        );
        assert_eq!(
            serde_json::from_str::<Value>(values[1]).unwrap(),
            json!({"email": "b@x.com"})
        );
    }

    #[test]
    fn typed_entries_convert_like_raw_mappings() {
        let single: EmailData = EmailEntry::with_name("a@example.com", "A").into();
        assert_eq!(
            single,
            EmailData::Single(json!({"email": "a@example.com", "name": "A"}))
        );

        let batch: EmailData = vec![EmailEntry::new("a@x.com"), EmailEntry::new("b@x.com")].into();
        assert_eq!(
            batch,
            EmailData::Batch(vec![json!({"email": "a@x.com"}), json!({"email": "b@x.com"})])
        );
    }

    #[test]
    fn single_helper_encodes_a_serializable_entry() {
        let data = EmailData::single(&EmailEntry::new("a@x.com")).unwrap();
        assert_eq!(data, EmailData::Single(json!({"email": "a@x.com"})));
    }

    #[test]
    fn batch_helper_accepts_any_serializable_entries() {
        let data = EmailData::batch([
            EmailEntry::new("a@x.com"),
            EmailEntry::with_name("b@x.com", "B"),
        ])
        .unwrap();
        match data {
            EmailData::Batch(values) => assert_eq!(values.len(), 2),
            other => panic!("expected batch, got {other:?}"),
        }
    }
}
