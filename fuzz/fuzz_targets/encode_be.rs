#![no_main]

use libfuzzer_sys::fuzz_target;
use bufcodec::encode_uint8_array_be;

fuzz_target!(|input: (u64, u8)| {
    let (n, len) = input;
    let len = len as usize % 16;
    let needed = (64 - n.leading_zeros() as usize).div_ceil(8);

    match encode_uint8_array_be(n, len) {
        Ok(out) => {
            assert!(needed <= len);
            assert_eq!(out.len(), len);

            // Verify: value survives a big-endian read of the output
            let value = out.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128);
            assert_eq!(value, n as u128);
        }
        Err(_) => assert!(needed > len),
    }
});
