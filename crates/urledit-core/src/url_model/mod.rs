//! URL decomposition and reconstruction.
//!
//! Splits a raw URL string into protocol, authority, path, ordered query
//! parameters and fragment, and serializes that record back into a URL.
//! Parsing never fails: malformed input degrades to empty fields.

mod build;
mod decompose;
mod delimiter;
mod query;

pub use build::build;
pub use decompose::{decompose, decompose_with};
pub use delimiter::{ParseDelimiterError, QueryDelimiter};
pub use query::{parse_query, serialize_query};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheme used by [`build`] when a non-empty record has no protocol.
pub const DEFAULT_SCHEME: &str = "http";

/// Separator between the protocol and the authority.
pub const SCHEME_SEPARATOR: &str = "://";

/// One `name[=value]` entry of a query string.
///
/// `value` is `None` when the entry had no `=` at all, and `Some("")` when it
/// had an `=` with nothing after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QueryParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl QueryParam {
    /// A `name=value` entry.
    pub fn pair(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A bare `name` entry with no `=`.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// Structured form of a URL produced by [`decompose`] and consumed by [`build`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedUrl {
    /// Scheme without `://` (e.g. `https`). `None` when the input had none.
    pub protocol: Option<String>,
    /// `host[:port]`.
    pub authority: Option<String>,
    /// Path without its leading `/`.
    pub path: String,
    /// Query entries in source order; duplicates and empty names allowed.
    pub query_params: Vec<QueryParam>,
    pub fragment: Option<String>,
    #[serde(default)]
    pub query_delimiter: QueryDelimiter,
}

impl ParsedUrl {
    /// True when every field is empty/default, i.e. the result of decomposing `""`.
    pub fn is_empty(&self) -> bool {
        self.protocol.is_none()
            && self.authority.is_none()
            && self.path.is_empty()
            && self.query_params.is_empty()
            && self.fragment.is_none()
    }

    /// The query string [`build`] would emit, without the leading `?`.
    pub fn query_string(&self) -> String {
        serialize_query(&self.query_params, self.query_delimiter)
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&build(self))
    }
}

/// Maps an empty slice to `None`.
fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests;
