#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_locator::{decode_uri, has_valid_scheme, scan_scheme, Want};

fuzz_target!(|data: &str| {
    let Some(c) = decode_uri(data, Want::ALL) else {
        return;
    };
    assert!(scan_scheme(data).is_ok());
    assert!(has_valid_scheme(data));
    assert!(decode_uri(data, Want::NONE).is_some());

    let rebuilt = c.to_uri_string();
    assert_eq!(decode_uri(&rebuilt, Want::ALL).as_ref(), Some(&c), "{rebuilt:?}");

    let scheme = c.scheme.unwrap();
    assert!(data[..scheme.len()].eq_ignore_ascii_case(&scheme));

    if let Some(host) = &c.host {
        assert!(data[scheme.len() + 1..].starts_with("//"));
        assert!(!host.contains('/'));
        let path = c.path.as_deref().unwrap();
        assert!(path.is_empty() || path.starts_with('/'));
    } else {
        assert!(c.user.is_none() && c.port.is_none());
    }
});
