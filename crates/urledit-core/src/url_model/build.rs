//! [`ParsedUrl`] → URL string.

use super::{ParsedUrl, DEFAULT_SCHEME, SCHEME_SEPARATOR};

/// Serializes `parsed` back into a URL string.
///
/// Order: `protocol://authority/path?query#fragment`. A missing protocol
/// becomes `http`; exactly one `/` separates authority and path; `?` is
/// omitted when no entry has a name; `#` is omitted for an empty fragment.
/// Values are written as-is. An entirely empty record builds to `""`.
pub fn build(parsed: &ParsedUrl) -> String {
    if parsed.is_empty() {
        return String::new();
    }

    let scheme = parsed.protocol.as_deref().unwrap_or(DEFAULT_SCHEME);
    let mut url = String::with_capacity(64);
    url.push_str(scheme);
    url.push_str(SCHEME_SEPARATOR);
    if let Some(authority) = &parsed.authority {
        url.push_str(authority);
    }
    url.push('/');
    url.push_str(parsed.path.strip_prefix('/').unwrap_or(&parsed.path));

    let query = parsed.query_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    if let Some(fragment) = parsed.fragment.as_deref().filter(|f| !f.is_empty()) {
        url.push('#');
        url.push_str(fragment);
    }
    url
}
