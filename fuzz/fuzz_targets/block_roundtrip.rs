#![no_main]
use libfuzzer_sys::fuzz_target;
use mozlz4::container::wrap_block;
use mozlz4::{Backend, Decoder, DecoderConfig};

fuzz_target!(|data: &[u8]| {
    // Compress with an independent LZ4 block encoder, wrap, and decode back.
    let raw = wrap_block(data.len() as u32, &lz4_flex::block::compress(data));

    for &backend in Backend::available() {
        let decoder = Decoder::new(DecoderConfig::new().with_backend(backend));
        let recovered = decoder.decompress(&raw).unwrap_or_else(|e| {
            panic!("{backend}: valid container of {} bytes rejected: {e}", data.len())
        });
        assert_eq!(recovered, data, "{backend}: round-trip mismatch");
    }
});
