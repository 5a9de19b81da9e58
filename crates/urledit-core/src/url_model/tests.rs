//! Decompose/build tests.

use super::*;

fn record(
    protocol: Option<&str>,
    authority: Option<&str>,
    path: &str,
    params: Vec<QueryParam>,
    fragment: Option<&str>,
) -> ParsedUrl {
    ParsedUrl {
        protocol: protocol.map(str::to_string),
        authority: authority.map(str::to_string),
        path: path.to_string(),
        query_params: params,
        fragment: fragment.map(str::to_string),
        query_delimiter: QueryDelimiter::Ampersand,
    }
}

#[test]
fn decompose_full_url() {
    let parsed = decompose("http://example.com/search?q=a&lang=en#top");
    assert_eq!(
        parsed,
        record(
            Some("http"),
            Some("example.com"),
            "search",
            vec![QueryParam::pair("q", "a"), QueryParam::pair("lang", "en")],
            Some("top"),
        )
    );
}

#[test]
fn decompose_empty_is_default() {
    let parsed = decompose("");
    assert!(parsed.is_empty());
    assert_eq!(parsed, ParsedUrl::default());
}

#[test]
fn build_empty_record_is_empty_string() {
    assert_eq!(build(&ParsedUrl::default()), "");
    assert_eq!(build(&decompose("")), "");
}

#[test]
fn decompose_without_scheme() {
    let parsed = decompose("localhost:8080/api/v1?debug");
    assert_eq!(parsed.protocol, None);
    assert_eq!(parsed.authority.as_deref(), Some("localhost:8080"));
    assert_eq!(parsed.path, "api/v1");
    assert_eq!(parsed.query_params, vec![QueryParam::flag("debug")]);
}

#[test]
fn decompose_host_only_variants() {
    let parsed = decompose("https://example.com");
    assert_eq!(parsed.authority.as_deref(), Some("example.com"));
    assert_eq!(parsed.path, "");
    assert!(parsed.query_params.is_empty());

    let parsed = decompose("https://example.com?x=1");
    assert_eq!(parsed.authority.as_deref(), Some("example.com"));
    assert_eq!(parsed.path, "");
    assert_eq!(parsed.query_params, vec![QueryParam::pair("x", "1")]);

    let parsed = decompose("example.com#only-frag");
    assert_eq!(parsed.authority.as_deref(), Some("example.com"));
    assert_eq!(parsed.fragment.as_deref(), Some("only-frag"));
}

#[test]
fn decompose_normalizes_empty_parts_to_none() {
    let parsed = decompose("://host/#");
    assert_eq!(parsed.protocol, None);
    assert_eq!(parsed.authority.as_deref(), Some("host"));
    assert_eq!(parsed.fragment, None);

    let parsed = decompose("http:///path");
    assert_eq!(parsed.protocol.as_deref(), Some("http"));
    assert_eq!(parsed.authority, None);
    assert_eq!(parsed.path, "path");
}

#[test]
fn decompose_keeps_semicolon_inside_value() {
    let parsed = decompose("http://h/p?a=1;b=2");
    assert_eq!(parsed.query_delimiter, QueryDelimiter::Ampersand);
    assert_eq!(parsed.query_params, vec![QueryParam::pair("a", "1;b=2")]);
}

#[test]
fn decompose_with_semicolon_delimiter() {
    let parsed = decompose_with("http://h/p?a=1;b=2&c", QueryDelimiter::Semicolon);
    assert_eq!(parsed.query_delimiter, QueryDelimiter::Semicolon);
    assert_eq!(
        parsed.query_params,
        vec![QueryParam::pair("a", "1"), QueryParam::pair("b", "2&c")]
    );
}

#[test]
fn semicolon_in_value_survives_rebuild() {
    for input in ["http://h/?a=x;y&", "http://h/?a=x;y&=z"] {
        let first = decompose(input);
        assert_eq!(first.query_params[0], QueryParam::pair("a", "x;y"));
        let second = decompose(&build(&first));
        assert_eq!(second.query_params, vec![QueryParam::pair("a", "x;y")]);
    }
}

#[test]
fn decompose_keeps_duplicate_names_in_order() {
    let parsed = decompose("h/?k=1&k=2&k=1");
    let values: Vec<_> = parsed
        .query_params
        .iter()
        .map(|p| p.value.as_deref().unwrap())
        .collect();
    assert_eq!(values, vec!["1", "2", "1"]);
}

#[test]
fn build_defaults_protocol_to_http() {
    let parsed = record(
        None,
        Some("x.com"),
        "p",
        vec![QueryParam::pair("a", "1")],
        Some(""),
    );
    assert_eq!(build(&parsed), "http://x.com/p?a=1");
}

#[test]
fn build_empty_host_with_path_still_prefixed() {
    let parsed = record(None, None, "p", vec![], None);
    assert_eq!(build(&parsed), "http:///p");
}

#[test]
fn build_strips_single_leading_slash() {
    let parsed = record(Some("https"), Some("h"), "/a/b", vec![], None);
    assert_eq!(build(&parsed), "https://h/a/b");
}

#[test]
fn build_omits_question_mark_when_all_names_empty() {
    let parsed = record(
        Some("https"),
        Some("h"),
        "p",
        vec![QueryParam::pair("", "v")],
        Some("f"),
    );
    assert_eq!(build(&parsed), "https://h/p#f");
    // The empty-named entry stays in the structured list.
    assert_eq!(parsed.query_params.len(), 1);
}

#[test]
fn build_uses_record_delimiter() {
    let mut parsed = record(
        Some("http"),
        Some("h"),
        "",
        vec![QueryParam::pair("a", "1"), QueryParam::pair("b", "2")],
        None,
    );
    parsed.query_delimiter = QueryDelimiter::Semicolon;
    assert_eq!(build(&parsed), "http://h/?a=1;b=2");
    assert_eq!(parsed.to_string(), "http://h/?a=1;b=2");
}

#[test]
fn build_does_not_encode() {
    let parsed = record(
        Some("http"),
        Some("h"),
        "p",
        vec![QueryParam::pair("a b", "c/d")],
        None,
    );
    assert_eq!(build(&parsed), "http://h/p?a b=c/d");
}

#[test]
fn round_trip_structural() {
    let inputs = [
        "http://example.com/search?q=a&lang=en#top",
        "https://user@host:443/a/b/c?x&y=&z=1#",
        "ftp://files.example.org/pub?a=1;b=2;c",
        "example.com/path?next=http://other/x#frag?x",
        "http://",
        "?only=query",
        "#just-fragment",
    ];
    for input in inputs {
        let first = decompose(input);
        let second = decompose(&build(&first));
        assert_eq!(second.authority, first.authority, "authority for {input}");
        assert_eq!(second.path, first.path, "path for {input}");
        assert_eq!(second.query_params, first.query_params, "params for {input}");
        assert_eq!(second.fragment, first.fragment, "fragment for {input}");
        assert_eq!(
            second.query_delimiter, first.query_delimiter,
            "delimiter for {input}"
        );
        if first.protocol.is_some() {
            assert_eq!(second.protocol, first.protocol, "protocol for {input}");
        } else {
            assert_eq!(second.protocol.as_deref(), Some(DEFAULT_SCHEME));
        }
    }
}

#[test]
fn parsed_url_serializes_to_json() {
    let parsed = decompose("https://h/p?a=1&flag");
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["protocol"], "https");
    assert_eq!(json["query_delimiter"], "&");
    assert_eq!(json["query_params"][0]["value"], "1");
    assert!(json["query_params"][1].get("value").is_none());
}
