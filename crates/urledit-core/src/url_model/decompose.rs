//! Raw URL string → [`ParsedUrl`].

use super::query::parse_query;
use super::{non_empty, ParsedUrl, QueryDelimiter, SCHEME_SEPARATOR};

/// Borrowed slices of a raw URL before any field is owned.
#[derive(Debug, PartialEq, Eq)]
struct RawParts<'a> {
    protocol: Option<&'a str>,
    authority: &'a str,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

fn split_parts(raw: &str) -> RawParts<'_> {
    let (before_fragment, fragment) = match raw.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (raw, None),
    };
    let (before_query, query) = match before_fragment.split_once('?') {
        Some((head, query)) => (head, Some(query)),
        None => (before_fragment, None),
    };

    // `://` only separates a scheme when no `/` precedes it.
    let (protocol, rest) = match before_query.find(SCHEME_SEPARATOR) {
        Some(idx) if !before_query[..idx].contains('/') => (
            Some(&before_query[..idx]),
            &before_query[idx + SCHEME_SEPARATOR.len()..],
        ),
        _ => (None, before_query),
    };

    let (authority, path) = match rest.split_once('/') {
        Some((authority, path)) => (authority, path),
        None => (rest, ""),
    };

    RawParts {
        protocol,
        authority,
        path,
        query,
        fragment,
    }
}

/// Decomposes `raw` with the default `&` query delimiter.
///
/// Never fails: empty input yields [`ParsedUrl::default`], and missing
/// segments come back empty. No scheme default is applied here.
///
/// `decompose("http://example.com/search?q=a&lang=en#top")` gives protocol
/// `http`, authority `example.com`, path `search`, params `q=a`, `lang=en`
/// and fragment `top`.
///
/// The query is split on the default `&`; a `;` stays part of the value it
/// appears in. Use [`decompose_with`] for `;`-delimited queries.
pub fn decompose(raw: &str) -> ParsedUrl {
    decompose_with(raw, QueryDelimiter::default())
}

/// Decomposes `raw`, splitting the query on `delimiter`.
pub fn decompose_with(raw: &str, delimiter: QueryDelimiter) -> ParsedUrl {
    if raw.is_empty() {
        return ParsedUrl {
            query_delimiter: delimiter,
            ..ParsedUrl::default()
        };
    }

    let parts = split_parts(raw);
    let parsed = ParsedUrl {
        protocol: parts.protocol.and_then(non_empty),
        authority: non_empty(parts.authority),
        path: parts.path.to_string(),
        query_params: parts
            .query
            .map(|q| parse_query(q, delimiter))
            .unwrap_or_default(),
        fragment: parts.fragment.and_then(non_empty),
        query_delimiter: delimiter,
    };
    tracing::debug!(
        protocol = ?parsed.protocol,
        authority = ?parsed.authority,
        params = parsed.query_params.len(),
        "decomposed url"
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_full_url() {
        let parts = split_parts("https://h:8080/a/b?x=1#frag");
        assert_eq!(
            parts,
            RawParts {
                protocol: Some("https"),
                authority: "h:8080",
                path: "a/b",
                query: Some("x=1"),
                fragment: Some("frag"),
            }
        );
    }

    #[test]
    fn split_question_mark_inside_fragment() {
        let parts = split_parts("h/p#frag?not=query");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, Some("frag?not=query"));
    }

    #[test]
    fn split_scheme_separator_in_query_is_not_protocol() {
        let parts = split_parts("example.com/go?next=http://other");
        assert_eq!(parts.protocol, None);
        assert_eq!(parts.authority, "example.com");
        assert_eq!(parts.query, Some("next=http://other"));
    }

    #[test]
    fn split_scheme_separator_after_slash_is_not_protocol() {
        let parts = split_parts("example.com/a://b");
        assert_eq!(parts.protocol, None);
        assert_eq!(parts.authority, "example.com");
        assert_eq!(parts.path, "a://b");
    }
}
