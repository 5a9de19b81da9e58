//! Query string parsing and serialization.

use super::{QueryDelimiter, QueryParam};

/// Splits a raw query string (without `?`) into ordered entries.
///
/// Each entry splits on its first `=`. Empty segments (`a=1&&b=2`) are
/// skipped; an empty name with a value (`=x`) is kept.
pub fn parse_query(query: &str, delimiter: QueryDelimiter) -> Vec<QueryParam> {
    query
        .split(delimiter.as_char())
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => QueryParam::pair(name, value),
            None => QueryParam::flag(segment),
        })
        .collect()
}

/// Joins entries with `delimiter`, skipping entries with an empty name.
///
/// `=value` is written only when the value is present, so `Some("")`
/// serializes as `name=` and `None` as `name`. No encoding is applied.
pub fn serialize_query(params: &[QueryParam], delimiter: QueryDelimiter) -> String {
    let mut out = String::new();
    for param in params.iter().filter(|p| !p.name.is_empty()) {
        if !out.is_empty() {
            out.push(delimiter.as_char());
        }
        out.push_str(&param.name);
        if let Some(value) = &param.value {
            out.push('=');
            out.push_str(value);
        }
    }
    out
}
