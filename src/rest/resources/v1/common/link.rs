use serde::{Deserialize, Serialize};

/// A HATEOAS link returned with every resource.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LinkDescription {
    /// The target URL.
    pub href: String,

    /// The link relation (e.g., `self`, `edit`, `approve`, `next`).
    pub rel: String,

    /// The HTTP method to use with `href`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Returns the `href` of the first link with relation `rel`.
#[must_use]
pub fn find_link<'a>(links: &'a [LinkDescription], rel: &str) -> Option<&'a str> {
    links
        .iter()
        .find(|link| link.rel == rel)
        .map(|link| link.href.as_str())
}
