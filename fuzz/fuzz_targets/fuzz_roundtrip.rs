#![no_main]
use bitmap_plus_plus::{DecodeRequest, Limits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let limits = Limits::max_side(4096).with_max_pixels(4096 * 4096);
    let Ok(decoded) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };

    let reencoded = decoded.to_bytes().expect("decoded bitmap failed to encode");
    let Ok(decoded2) = DecodeRequest::new(&reencoded).decode() else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");
    assert_eq!(decoded.header(), decoded2.header());

    // Quarter turns and flips must stay lossless on anything that decodes
    assert_eq!(decoded.rotate_90_left().rotate_90_right(), decoded);
    assert_eq!(decoded.flip_h().flip_h(), decoded);
});
