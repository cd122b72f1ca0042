//! Outbound call parameters.
//!
//! The API takes flat `key=value` pairs (query string on GET, urlencoded form
//! on POST). Keys may repeat — the batch email-add operation sends one `data`
//! pair per entry — so this is an ordered multimap, not a plain map.

/// An ordered, multi-valued set of string parameters for one API call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append; returns `self` for chaining.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// Append a pair, allowing repeated keys.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Set a key to a single value, dropping any previous occurrences.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.0.retain(|(k, _)| *k != key);
        self.0.push((key, value.into()));
    }

    /// First value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .filter(move |(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw pairs, in wire order. Serializable as a urlencoded form.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Merge the client credentials into the set. Credentials win: any
    /// caller-supplied `api_user`/`api_key` pairs are discarded first, so the
    /// outbound set is always exactly the caller's keys plus the two
    /// credential fields from construction.
    pub(crate) fn set_credentials(&mut self, api_user: &str, api_key: &str) {
        self.set("api_user", api_user);
        self.set("api_key", api_key);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_set_is_caller_keys_plus_credentials() {
        let mut params = Params::new().param("list", "MyList").param("name", "A");
        params.set_credentials("user", "secret");

        let mut keys: Vec<&str> = params.pairs().iter().map(|(k, _)| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["api_key", "api_user", "list", "name"]);
        assert_eq!(params.get("api_user"), Some("user"));
        assert_eq!(params.get("api_key"), Some("secret"));
    }

    #[test]
    fn constructed_credentials_override_caller_supplied_ones() {
        let mut params = Params::new()
            .param("api_user", "spoofed")
            .param("api_key", "spoofed")
            .param("list", "MyList");
        params.set_credentials("real-user", "real-key");

        assert_eq!(params.get_all("api_user").collect::<Vec<_>>(), ["real-user"]);
        assert_eq!(params.get_all("api_key").collect::<Vec<_>>(), ["real-key"]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn repeated_keys_are_preserved_in_order() {
        let params = Params::new()
            .param("data", r#"{"email":"a@x.com"}"#)
            .param("data", r#"{"email":"b@x.com"}"#);
        assert_eq!(
            params.get_all("data").collect::<Vec<_>>(),
            [r#"{"email":"a@x.com"}"#, r#"{"email":"b@x.com"}"#]
        );
    }
}
