//! Integration tests for credentials-field parsing.

use credfield::{Credentials, Error, Parser, WarningSink};

/// Sink that stores every warning for later assertions.
#[derive(Debug, Default)]
struct CollectSink {
    warnings: Vec<String>,
}

impl WarningSink for CollectSink {
    fn on_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

fn parse(input: &str) -> Credentials {
    Credentials::parse(Some(input)).unwrap()
}

fn parse_lenient(input: &str) -> (Credentials, Vec<String>) {
    let mut sink = CollectSink::default();
    let creds = Parser::new()
        .strict(false)
        .parse_with_sink(Some(input), &mut sink)
        .unwrap();
    (creds, sink.warnings)
}

#[test]
fn test_parse_token_only() {
    let creds = parse("Basic YWxhZGRpbjpvcGVuc2VzYW1l");
    assert_eq!(creds.scheme(), "Basic");
    assert_eq!(creds.token(), "YWxhZGRpbjpvcGVuc2VzYW1l");
    assert!(creds.params().is_empty());

    assert_eq!(parse("Bearer mF_9.B5f-4.1JqM"), Credentials::new("Bearer", "mF_9.B5f-4.1JqM"));
}

#[test]
fn test_parse_token_and_params() {
    assert_eq!(
        parse("Custom abc, k=v"),
        Credentials::from_single_value_params("Custom", "abc", [("k", "v")])
    );
    assert_eq!(
        parse("Custom abc, k=v, k2=v2"),
        Credentials::from_single_value_params("Custom", "abc", [("k", "v"), ("k2", "v2")])
    );
}

#[test]
fn test_parse_params_only() {
    let creds = parse("Digest realm=\"testrealm@host.com\", nonce=dcd98b7102dd2f0e");
    assert_eq!(creds.scheme(), "Digest");
    assert_eq!(creds.token(), "");
    assert_eq!(creds.params().get("realm"), Some("\"testrealm@host.com\""));
    assert_eq!(creds.params().get("nonce"), Some("dcd98b7102dd2f0e"));
}

#[test]
fn test_parameter_names_are_case_insensitive() {
    let creds = parse("Custom abc, Realm=x");
    assert_eq!(creds.params().get("realm"), Some("x"));
    assert_eq!(creds.params().get("REALM"), Some("x"));
    assert_eq!(parse("Custom abc, realm=x"), parse("Custom abc, REALM=x"));
}

#[test]
fn test_scheme_is_never_validated() {
    assert_eq!(parse("bASIc abc").scheme(), "bASIc");
    assert_eq!(parse("X-Custom?! abc").scheme(), "X-Custom?!");
}

#[test]
fn test_allows_missing_token() {
    let expected = Credentials::new("Custom", "");
    assert_eq!(parse("Custom"), expected);
    assert_eq!(parse("Custom "), expected);
    assert_eq!(parse("Custom   "), expected);
}

#[test]
fn test_empty_and_none_inputs() {
    assert_eq!(Credentials::parse(None).unwrap(), Credentials::none());
    assert_eq!(parse(""), Credentials::none());
}

#[test]
fn test_ignores_whitespace() {
    let expected = Credentials::from_single_value_params("Custom", "abc", [("k", "v")]);
    assert_eq!(parse("Custom abc, k=v"), expected);
    assert_eq!(parse("Custom abc,k=v"), expected);
    assert_eq!(parse("Custom abc , k = v"), expected);
    assert_eq!(parse("Custom   abc,   k  =  v  "), expected);
    assert_eq!(parse("Custom abc, k=v,"), expected);
    assert_eq!(parse("Custom abc, , k=v"), expected);
}

#[test]
fn test_allows_tabs() {
    let expected = Credentials::from_single_value_params("Custom", "abc", [("k", "v")]);
    assert_eq!(parse("Custom\tabc, k=v"), expected);
    assert_eq!(parse("Custom abc,\tk\t=\tv\t"), expected);
}

#[test]
fn test_dangling_equals_is_a_token68() {
    // `a=` has an empty value side, so the whole element is the token68
    // and its trailing `=` reads as padding.
    let creds = parse("Custom a=");
    assert_eq!(creds.token(), "a=");
    assert!(creds.params().is_empty());

    assert_eq!(parse("Custom ab=").token(), "ab=");
    // With a non-empty value it is a parameter instead.
    assert_eq!(parse("Custom a=b"), Credentials::from_single_value_params("Custom", "", [("a", "b")]));

    let creds = parse("Custom a=, k=v");
    assert_eq!(creds.token(), "a=");
    assert_eq!(creds.params().get("k"), Some("v"));
}

#[test]
fn test_empty_key_fails_as_token68() {
    let err = Credentials::parse(Some("Custom =v")).unwrap_err();
    assert!(matches!(err, Error::BadToken { .. }));
    assert_eq!(err.to_string(), "Bad token: =v");
}

#[test]
fn test_token68_equals_only_at_end() {
    assert_eq!(parse("Custom ab=").token(), "ab=");

    // Padding anywhere else fails the token68 check.
    let err = Credentials::parse(Some("Custom ==")).unwrap_err();
    assert_eq!(err.to_string(), "Bad token: ==");

    // With text on both sides of the first `=` the element is a
    // parameter, so the leftover `=` fails token validation instead.
    let err = Credentials::parse(Some("Custom a=b=")).unwrap_err();
    assert_eq!(err.to_string(), "Bad parameter: a=b=");
}

#[test]
fn test_multiple_token68_strict() {
    let err = Credentials::parse(Some("Custom a, b")).unwrap_err();
    assert!(matches!(err, Error::MultipleToken68));
    assert_eq!(err.to_string(), "Multiple token68 is not allowed");
}

#[test]
fn test_multiple_token68_lenient_keeps_first() {
    let (creds, warnings) = parse_lenient("Custom a, b");
    assert_eq!(creds.token(), "a");
    assert!(creds.params().is_empty());
    assert_eq!(warnings, ["Multiple token68 is not allowed"]);
}

#[test]
fn test_lenient_discards_second_dangling_equals() {
    let (creds, warnings) = parse_lenient("Custom a=, k=\t");
    assert_eq!(creds.token(), "a=");
    assert!(creds.params().is_empty());
    assert_eq!(warnings, ["Multiple token68 is not allowed"]);
}

#[test]
fn test_strict_bad_token() {
    let err = Credentials::parse(Some("Custom k?")).unwrap_err();
    assert!(matches!(err, Error::BadToken { .. }));
    assert_eq!(err.to_string(), "Bad token: k?");
}

#[test]
fn test_strict_bad_parameter() {
    let err = Credentials::parse(Some("Custom k, a?=b")).unwrap_err();
    assert!(matches!(err, Error::BadParameter { .. }));
    assert_eq!(err.to_string(), "Bad parameter: a?=b");
}

#[test]
fn test_lenient_keeps_bad_parameter() {
    let (creds, warnings) = parse_lenient("Custom k, a?=b");
    assert_eq!(creds.token(), "k");
    assert_eq!(creds.params().get("a?"), Some("b"));
    assert_eq!(warnings, ["Bad parameter: a?=b"]);
}

#[test]
fn test_lenient_keeps_bad_token() {
    let (creds, warnings) = parse_lenient("Custom k?");
    assert_eq!(creds.token(), "k?");
    assert_eq!(warnings, ["Bad token: k?"]);
}

#[test]
fn test_lenient_reports_every_violation_in_order() {
    let (creds, warnings) = parse_lenient("Custom a, b, c?=d?");
    assert_eq!(creds.token(), "a");
    assert_eq!(creds.params().get("c?"), Some("d?"));
    assert_eq!(
        warnings,
        ["Multiple token68 is not allowed", "Bad parameter: c?=d?"]
    );
}

#[test]
fn test_lenient_warning_matches_strict_error() {
    for input in ["Custom k?", "Custom k, a?=b", "Custom a, b", "Custom =v"] {
        let err = Credentials::parse(Some(input)).unwrap_err();
        let (_, warnings) = parse_lenient(input);
        assert_eq!(
            warnings.first().map(String::as_str),
            Some(err.to_string().as_str()),
            "mismatch for input {input:?}"
        );
    }
}

#[test]
fn test_unclosed_quoting_is_fatal_in_both_modes() {
    for input in ["Custom k=\"a", "Custom a, \"b\\\", c"] {
        let strict = Credentials::parse(Some(input)).unwrap_err();
        assert_eq!(strict.to_string(), "Unclosed quoted string");

        let mut sink = CollectSink::default();
        let lenient = Parser::new().strict(false).parse_with_sink(Some(input), &mut sink);
        assert!(matches!(lenient.unwrap_err(), Error::List(_)));
        assert!(sink.warnings.is_empty());
    }

    let err = Credentials::parse(Some("Custom k=\"a\\")).unwrap_err();
    assert_eq!(err.to_string(), "Unclosed quoted pair");
}

#[test]
fn test_quoted_values_are_kept_verbatim() {
    let creds = parse("Custom abc, k=\"a, b\"");
    assert_eq!(creds.params().get("k"), Some("\"a, b\""));

    let creds = parse("Custom k=\"a \\\"quoted\\\" part\"");
    assert_eq!(creds.params().get("k"), Some("\"a \\\"quoted\\\" part\""));
}

#[test]
fn test_repeated_parameter_values_keep_order() {
    let creds = parse("Custom abc, k=1, K=2, k=3");
    assert_eq!(creds.params().len(), 1);
    assert_eq!(creds.params().get("k"), Some("1"));
    assert_eq!(creds.params().get_all("K"), ["1", "2", "3"]);
}

#[test]
fn test_single_value_params_take_first() {
    let creds = parse("Custom abc, k=1, K=2, other=x");
    let pairs: Vec<_> = creds.single_value_params().collect();
    assert_eq!(pairs, [("k", "1"), ("other", "x")]);
}

#[test]
fn test_equality_ignores_key_case_but_not_values() {
    assert_eq!(parse("Custom abc, k=v"), parse("Custom abc, K=v"));
    assert_ne!(parse("Custom abc, k=v"), parse("Custom abc, k=V"));
    assert_ne!(parse("Custom abc, k=v"), parse("custom abc, k=v"));
}

#[test]
fn test_hash_agrees_with_equality() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    seen.insert(parse("Custom abc, k=v, realm=\"x\""));
    assert!(seen.contains(&parse("Custom abc, REALM=\"x\", K=v")));
    assert!(!seen.contains(&parse("Custom abc, k=v")));
}

#[test]
fn test_header_value_reconstruction() {
    assert_eq!(parse("Custom").to_string(), "Custom");
    assert_eq!(parse("Basic  abc=").to_string(), "Basic abc=");
    assert_eq!(
        parse("Custom abc,K=1, k=2,realm=\"a, b\"").to_string(),
        "Custom abc, K=1, K=2, realm=\"a, b\""
    );
}

#[test]
fn test_display_reparses_equal() {
    for input in [
        "Custom",
        "Basic YWxhZGRpbjpvcGVuc2VzYW1l",
        "Custom a=",
        "Digest realm=\"home, sweet\", nonce=abc, nc=00000001",
        "Custom abc, k=1, K=2, other=\"x\\\"y\"",
    ] {
        let creds = parse(input);
        assert_eq!(parse(&creds.to_string()), creds, "not idempotent for {input:?}");
    }
}
