//! Percent-encoding of query components.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped in a query name or value.
///
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`, so space is
/// written as `%20` and `/`, `&`, `;`, `=` are always escaped.
/// `!`, `'`, `(`, `)` and `*` stay as they are, the way `encodeURIComponent`
/// leaves them. Strict RFC 3986 query escaping would encode them too.
pub const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT).to_string()
}

/// Forgiving percent-decode.
///
/// `%` not followed by two hex digits is kept literally. If the decoded bytes
/// are not UTF-8 the input is returned unchanged.
pub fn decode_component(input: &str) -> String {
    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            tracing::warn!("leaving {:?} undecoded: {}", input, err);
            input.to_string()
        }
    }
}
