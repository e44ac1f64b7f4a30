#![no_main]
use libfuzzer_sys::fuzz_target;
use mozlz4::{Decoder, DecoderConfig, DecodeError, MAGIC};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a whole container. Errors are expected; panics are not.
    let decoder = Decoder::new(DecoderConfig::new().with_max_decompressed_size(1 << 20));
    if let Ok(out) = decoder.decompress(data) {
        let declared = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        assert_eq!(out.len(), declared as usize);
    }

    // Same bytes as a payload behind a valid header, so the fuzzer spends its
    // time in the sequence decoder rather than on the signature check.
    if data.len() >= 2 {
        let declared = u32::from(u16::from_le_bytes([data[0], data[1]]));
        let mut raw = MAGIC.to_vec();
        raw.extend_from_slice(&declared.to_le_bytes());
        raw.extend_from_slice(&data[2..]);
        match decoder.decompress(&raw) {
            Ok(out) => assert_eq!(out.len(), declared as usize),
            Err(DecodeError::InvalidSignature | DecodeError::Truncated) => {
                panic!("valid header rejected")
            }
            Err(_) => {}
        }
    }
});
