use uri_locator::{ParseErrorKind::*, *};

#[test]
fn scheme_rules_differ() {
    assert!(has_valid_scheme("http:"));
    assert!(!has_valid_scheme(":missing"));
    assert!(has_valid_scheme("1http:"));
    assert!(has_valid_scheme(".:"));

    // The decoder is stricter.
    assert!(scan_scheme("1http:").is_err());
    assert!(decode_uri("1http://h/", Want::NONE).is_none());
    assert!(is_valid_location(Some("1http://h/")));
}

#[test]
fn valid_locations() {
    for s in [
        "file:///tmp/a%20file.txt",
        "http://ex.com/",
        "sftp://me@host:22/~/x?y=1#z",
        "x:",
        "http://ex.com/%7e%7E",
        "http://ex.com/%00",
    ] {
        assert!(is_valid_location(Some(s)), "{s:?}");
        assert_eq!(check_location(s), Ok(()));
    }
}

#[test]
fn invalid_locations() {
    assert!(!is_valid_location(None));
    assert!(!is_valid_location(Some("")));
    assert_eq!(check_location("").unwrap_err().kind(), EmptyOrNullInput);

    let e = check_location("file:///tmp/a file.txt").unwrap_err();
    assert_eq!(e.kind(), InvalidCharacter);
    assert_eq!(e.index(), 13);

    let e = check_location("http://ex.com/%zz").unwrap_err();
    assert_eq!(e.kind(), MalformedPercentEscape);
    assert_eq!(e.index(), 14);

    let e = check_location("http://ex.com/%a").unwrap_err();
    assert_eq!(e.kind(), MalformedPercentEscape);
    assert_eq!(e.index(), 14);

    let e = check_location("/tmp/a").unwrap_err();
    assert_eq!(e.kind(), MalformedScheme);
    assert_eq!(e.index(), 0);

    let e = check_location("http//ex.com").unwrap_err();
    assert_eq!(e.kind(), MalformedScheme);
    assert_eq!(e.index(), 4);

    for s in ["http://ex.com/\x7f", "http://ex.com/caf\u{e9}", "http://ex.com/\t", "x:\0"] {
        assert_eq!(check_location(s).unwrap_err().kind(), InvalidCharacter, "{s:?}");
    }
}

#[test]
fn error_display() {
    let e = check_location("http://ex.com/%zz").unwrap_err();
    assert_eq!(e.to_string(), "malformed percent-escape at index 14");

    let e = try_decode_uri("1x:", Want::ALL).unwrap_err();
    assert_eq!(e.to_string(), "malformed scheme at index 0");
}
