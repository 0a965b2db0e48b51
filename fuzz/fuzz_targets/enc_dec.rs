#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_locator::enc::{decode, encode, table, validate};

fuzz_target!(|data: &str| {
    let encoded = encode(data, table::FILE_PATH);
    assert!(validate(&encoded, table::LOCATION).is_ok());
    if !data.contains('\0') {
        assert_eq!(decode(&encoded, table::NONE).unwrap(), data);
    }
});
