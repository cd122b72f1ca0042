//! Operation-name → URL mapping and dispatch resolution.
//!
//! The remote API addresses endpoints symbolically: an operation name like
//! `api_newsletter_lists_add` maps to `/api/newsletter/lists/add.json`, while
//! names outside the newsletter namespace map to dotted paths
//! (`profile_get` → `/profile.get.json`). The prefix that selects the
//! path-segment form differs between historical API revisions, so it is a
//! configuration point here rather than a hard-coded constant.

use crate::network::RESPONSE_FORMAT;
use std::borrow::Cow;

/// Which revision of the newsletter URL convention to speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathConvention {
    /// Marker `api_newsletter`; convenience operations are rewritten to
    /// `api_newsletter_*` remote names, yielding `/api/newsletter/...` URLs.
    /// This is the convention the current service edge expects.
    #[default]
    Api,
    /// Marker `newsletter`; convenience names go out unprefixed, yielding
    /// `/newsletter/...` URLs. Kept for compatibility with the older
    /// revision of the API.
    Legacy,
}

impl PathConvention {
    /// The prefix identifying operations that map to path-segment URLs.
    pub fn marker(&self) -> &'static str {
        match self {
            PathConvention::Api => "api_newsletter",
            PathConvention::Legacy => "newsletter",
        }
    }

    /// Resolve a convenience operation name to the remote name sent on the
    /// wire. First tier: names in [`KNOWN_OPERATIONS`] are rewritten per the
    /// active convention. Second tier: anything else is a literal remote
    /// operation name and passes through verbatim, so callers can reach
    /// endpoints the typed layer never wrapped.
    pub fn canonical_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if !KNOWN_OPERATIONS.contains(&name) {
            return Cow::Borrowed(name);
        }
        match self {
            PathConvention::Api => Cow::Owned(format!("api_{name}")),
            PathConvention::Legacy => Cow::Borrowed(name),
        }
    }
}

/// The closed set of convenience operation names the typed layer exposes.
pub const KNOWN_OPERATIONS: &[&str] = &[
    "newsletter_add",
    "newsletter_edit",
    "newsletter_get",
    "newsletter_list",
    "newsletter_delete",
    "newsletter_lists_add",
    "newsletter_lists_edit",
    "newsletter_lists_get",
    "newsletter_lists_delete",
    "newsletter_lists_email_add",
    "newsletter_lists_email_get",
    "newsletter_lists_email_delete",
    "newsletter_recipients_add",
    "newsletter_recipients_get",
    "newsletter_recipients_delete",
    "newsletter_identity_add",
    "newsletter_identity_edit",
    "newsletter_identity_get",
    "newsletter_identity_list",
    "newsletter_identity_delete",
    "newsletter_schedule_add",
    "newsletter_schedule_get",
    "newsletter_schedule_delete",
];

/// Build the full request URL for a remote operation name.
///
/// Names starting with the convention's newsletter marker have every
/// underscore replaced by a path separator; all other names have every
/// underscore replaced by a dot. Either way the path is suffixed with the
/// fixed response format.
pub fn method_url(base_url: &str, convention: PathConvention, method: &str) -> String {
    let path = if method.starts_with(convention.marker()) {
        method.replace('_', "/")
    } else {
        method.replace('_', ".")
    };
    format!(
        "{}/{}.{}",
        base_url.trim_end_matches('/'),
        path,
        RESPONSE_FORMAT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::DEFAULT_API_URL;

    #[test]
    fn newsletter_names_map_to_path_segments() {
        let url = method_url(
            DEFAULT_API_URL,
            PathConvention::Api,
            "api_newsletter_lists_email_add",
        );
        assert_eq!(
            url,
            "https://sendgrid.com/api/newsletter/lists/email/add.json"
        );
        // No dots inside the mapped path itself.
        let path = &url["https://sendgrid.com/".len()..url.len() - ".json".len()];
        assert!(!path.contains('.'));
    }

    #[test]
    fn other_names_map_to_dotted_segments() {
        let url = method_url(DEFAULT_API_URL, PathConvention::Api, "profile_get");
        assert_eq!(url, "https://sendgrid.com/profile.get.json");
        assert!(!url["https://sendgrid.com/".len()..].contains('/'));
    }

    #[test]
    fn legacy_convention_uses_bare_marker() {
        let url = method_url(
            DEFAULT_API_URL,
            PathConvention::Legacy,
            "newsletter_lists_get",
        );
        assert_eq!(url, "https://sendgrid.com/newsletter/lists/get.json");
    }

    #[test]
    fn unprefixed_newsletter_names_fall_in_the_dotted_domain() {
        // Under the Api convention an unprefixed newsletter name falls in the
        // dotted domain. Faithful to the historical behavior.
        let url = method_url(
            DEFAULT_API_URL,
            PathConvention::Api,
            "newsletter_lists_get",
        );
        assert_eq!(url, "https://sendgrid.com/newsletter.lists.get.json");
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let url = method_url("http://127.0.0.1:9/", PathConvention::Api, "profile_get");
        assert_eq!(url, "http://127.0.0.1:9/profile.get.json");
    }

    #[test]
    fn known_names_are_rewritten_per_convention() {
        assert_eq!(
            PathConvention::Api.canonical_name("newsletter_lists_add"),
            "api_newsletter_lists_add"
        );
        assert_eq!(
            PathConvention::Legacy.canonical_name("newsletter_lists_add"),
            "newsletter_lists_add"
        );
    }

    #[test]
    fn unknown_names_pass_through_verbatim() {
        assert_eq!(
            PathConvention::Api.canonical_name("some_future_endpoint"),
            "some_future_endpoint"
        );
    }

    #[test]
    fn every_known_operation_resolves_into_the_newsletter_namespace() {
        for name in KNOWN_OPERATIONS {
            let remote = PathConvention::Api.canonical_name(name);
            assert!(remote.starts_with(PathConvention::Api.marker()), "{name}");
        }
    }
}
