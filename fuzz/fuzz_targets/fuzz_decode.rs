#![no_main]
use bitmap_plus_plus::{Bitmap, DecodeRequest, Limits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = DecodeRequest::new(data).probe();

    // Keep allocations bounded; the header may claim anything
    let limits = Limits::max_side(4096).with_max_pixels(4096 * 4096);
    let _ = DecodeRequest::new(data).with_limits(&limits).decode();
    if data.len() < 1 << 16 {
        let _ = Bitmap::from_bytes(data);
    }
});
