//! Form-level editing: turning a URL into editable fields and back.
//!
//! The free functions are pure; [`UrlEditor`] keeps the state a URL widget
//! needs (master URL, mode, form fields) and applies transitions
//! synchronously.

mod action;
mod session;

pub use action::{EditorAction, ParseActionError};
pub use session::{UrlEditor, ANALYTICS_CATEGORY};

use serde::{Deserialize, Serialize};

use crate::url_model::{decompose_with, serialize_query, QueryDelimiter, QueryParam, SCHEME_SEPARATOR};

/// Scheme used when rebuilding from the form and the host has none.
pub const FORM_DEFAULT_SCHEME: &str = "http";
/// Scheme used when a URL with no `://` is submitted.
pub const SUBMIT_DEFAULT_SCHEME: &str = "https";

/// Editable fields of the detailed form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    /// `protocol://authority`.
    pub host: String,
    pub path: String,
    pub params: Vec<QueryParam>,
    pub fragment: String,
}

pub fn rebuild_form_from_url(raw: &str) -> FormState {
    rebuild_form_from_url_with(raw, FORM_DEFAULT_SCHEME, QueryDelimiter::Ampersand)
}

/// Decomposes `raw` into form fields, splitting the query on `delimiter` and
/// using `default_scheme` when it has no protocol. Empty input gives a host
/// of just `default_scheme://`.
pub fn rebuild_form_from_url_with(
    raw: &str,
    default_scheme: &str,
    delimiter: QueryDelimiter,
) -> FormState {
    let parsed = decompose_with(raw, delimiter);
    let scheme = parsed.protocol.as_deref().unwrap_or(default_scheme);
    let mut host = format!("{scheme}{SCHEME_SEPARATOR}");
    if let Some(authority) = &parsed.authority {
        host.push_str(authority);
    }
    FormState {
        host,
        path: parsed.path,
        params: parsed.query_params,
        fragment: parsed.fragment.unwrap_or_default(),
    }
}

pub fn rebuild_url_from_form(form: &FormState) -> String {
    rebuild_url_from_form_with(form, FORM_DEFAULT_SCHEME, QueryDelimiter::Ampersand)
}

/// Joins form fields into a URL.
///
/// A host without `://` gets `default_scheme://`. Exactly one `/` separates
/// host and path (one leading `/` of the path is dropped). Entries with an
/// empty name are skipped; `?` and `#` only appear when something follows.
pub fn rebuild_url_from_form_with(
    form: &FormState,
    default_scheme: &str,
    delimiter: QueryDelimiter,
) -> String {
    let mut url = if form.host.contains(SCHEME_SEPARATOR) {
        form.host.clone()
    } else {
        format!("{default_scheme}{SCHEME_SEPARATOR}{}", form.host)
    };
    // A bare `scheme://` still needs the slash that ends the (empty) authority.
    if !url.ends_with('/') || url.ends_with(SCHEME_SEPARATOR) {
        url.push('/');
    }
    url.push_str(form.path.strip_prefix('/').unwrap_or(&form.path));

    let query = serialize_query(&form.params, delimiter);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    if !form.fragment.is_empty() {
        url.push('#');
        url.push_str(&form.fragment);
    }
    url
}

pub fn submit_url(raw: &str) -> String {
    submit_url_with(raw, SUBMIT_DEFAULT_SCHEME)
}

/// Prefixes `default_scheme://` when `raw` is non-empty and has no `://`.
pub fn submit_url_with(raw: &str, default_scheme: &str) -> String {
    if raw.is_empty() || raw.contains(SCHEME_SEPARATOR) {
        raw.to_string()
    } else {
        format!("{default_scheme}{SCHEME_SEPARATOR}{raw}")
    }
}
