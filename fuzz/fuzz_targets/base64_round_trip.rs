#![no_main]

use libfuzzer_sys::fuzz_target;
use bufcodec::{base64_to_uint8, bytes_to_base64_url};

fuzz_target!(|data: Vec<u8>| {
    let encoded = bytes_to_base64_url(&data);

    // Verify: URL-safe alphabet, no padding
    assert!(!encoded.contains(['/', '+', '=']));

    // Verify: round-trip
    let decoded = base64_to_uint8(Some(encoded.as_str())).expect("own output must decode");
    assert_eq!(decoded, data);

    // Arbitrary text must never panic the decoder
    if let Ok(text) = std::str::from_utf8(&data) {
        let _ = base64_to_uint8(Some(text));
    }
});
