#![cfg(feature = "serde")]

use uri_locator::{decode_uri, UriComponents, Want};

#[test]
fn components_round_trip() {
    let c = decode_uri("sftp://me@host:22/a%20b", Want::ALL).unwrap();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(
        json,
        r#"{"scheme":"sftp","user":"me","host":"host","port":"22","path":"/a b"}"#
    );
    let back: UriComponents = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn want_from_json() {
    let want: Want = serde_json::from_str(
        r#"{"scheme":false,"user":false,"host":true,"port":false,"path":true}"#,
    )
    .unwrap();
    assert_eq!(
        want,
        Want {
            host: true,
            path: true,
            ..Want::NONE
        }
    );
}
