#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_locator::{has_valid_scheme, is_valid_location};

fuzz_target!(|data: &str| {
    if is_valid_location(Some(data)) {
        assert!(has_valid_scheme(data));
        assert!(data.bytes().all(|x| (0x21..0x7f).contains(&x)));
    }
});
