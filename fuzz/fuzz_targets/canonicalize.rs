#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_locator::{is_valid_location, Canonicalizer};

fuzz_target!(|data: &str| {
    let c = Canonicalizer::new().with_base_dir("/home/fuzz");
    if let Some(uri) = c.canonicalize(data) {
        assert!(is_valid_location(Some(&uri)));
    }
});
