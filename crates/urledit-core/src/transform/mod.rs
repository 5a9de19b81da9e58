//! Query parameter transformations: percent-encode, percent-decode and
//! delimiter substitution.
//!
//! Every function returns new values; inputs are never modified in place.

mod dedup;
mod percent;

pub use dedup::ParamDedup;
pub use percent::{decode_component, encode_component, QUERY_COMPONENT};

use crate::url_model::{build, decompose_with, ParsedUrl, QueryDelimiter, QueryParam};

/// Percent-encodes every name and value, keeping all entries.
///
/// Space becomes `%20`, never `+`.
pub fn encode_params(params: &[QueryParam]) -> Vec<QueryParam> {
    encode_params_with(params, ParamDedup::Preserve)
}

/// Percent-decodes every name and value, keeping all entries.
///
/// Malformed escapes are left as they are.
pub fn decode_params(params: &[QueryParam]) -> Vec<QueryParam> {
    decode_params_with(params, ParamDedup::Preserve)
}

pub fn encode_params_with(params: &[QueryParam], dedup: ParamDedup) -> Vec<QueryParam> {
    dedup.apply(map_params(params, encode_component))
}

pub fn decode_params_with(params: &[QueryParam], dedup: ParamDedup) -> Vec<QueryParam> {
    dedup.apply(map_params(params, decode_component))
}

fn map_params(params: &[QueryParam], f: fn(&str) -> String) -> Vec<QueryParam> {
    params
        .iter()
        .map(|p| QueryParam {
            name: f(&p.name),
            value: p.value.as_deref().map(f),
        })
        .collect()
}

/// Switches the delimiter used when `parsed` is serialized.
///
/// Names and values are untouched.
pub fn set_delimiter(parsed: ParsedUrl, delimiter: QueryDelimiter) -> ParsedUrl {
    ParsedUrl {
        query_delimiter: delimiter,
        ..parsed
    }
}

/// Decomposes `url` on `delimiter`, encodes its query entries and rebuilds it.
///
/// An empty `url` is returned unchanged.
pub fn encode_url_params(url: &str, delimiter: QueryDelimiter, dedup: ParamDedup) -> String {
    rewrite_query(url, delimiter, |parsed| ParsedUrl {
        query_params: encode_params_with(&parsed.query_params, dedup),
        ..parsed
    })
}

/// Decomposes `url` on `delimiter`, decodes its query entries and rebuilds it.
///
/// An empty `url` is returned unchanged.
pub fn decode_url_params(url: &str, delimiter: QueryDelimiter, dedup: ParamDedup) -> String {
    rewrite_query(url, delimiter, |parsed| ParsedUrl {
        query_params: decode_params_with(&parsed.query_params, dedup),
        ..parsed
    })
}

/// Replaces the other delimiter with `delimiter` in the query of `url`.
///
/// The query is split on `delimiter.other()`, so `;` inside a value of an
/// `&` query is never mistaken for a separator. An empty `url` is returned
/// unchanged.
pub fn replace_query_delimiter(url: &str, delimiter: QueryDelimiter) -> String {
    rewrite_query(url, delimiter.other(), |parsed| {
        set_delimiter(parsed, delimiter)
    })
}

fn rewrite_query(
    url: &str,
    delimiter: QueryDelimiter,
    f: impl FnOnce(ParsedUrl) -> ParsedUrl,
) -> String {
    if url.is_empty() {
        return String::new();
    }
    build(&f(decompose_with(url, delimiter)))
}
