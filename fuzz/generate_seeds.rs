#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

/// Uncompressed 24-bit BMP with the given info header size and row order.
fn bmp(width: i32, height: i32, info_size: u32, top_down: bool) -> Vec<u8> {
    let stride = (width as usize * 3 + 3) & !3;
    let rows = stride * height as usize;
    let offset = 14 + info_size as usize;
    let mut out = vec![0u8; offset + rows];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&(out.len() as u32).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&(offset as u32).to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&info_size.to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    let h = if top_down { -height } else { height };
    out[22..26].copy_from_slice(&h.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    out[34..38].copy_from_slice(&(rows as u32).to_le_bytes()); // image size
    out[38..42].copy_from_slice(&2835i32.to_le_bytes());
    out[42..46].copy_from_slice(&2835i32.to_le_bytes());
    for (i, b) in out[offset..].iter_mut().enumerate() {
        *b = (i * 37) as u8;
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 40, false)).unwrap();
    fs::write(format!("{dir}/bmp_3x2.bmp"), bmp(3, 2, 40, false)).unwrap();
    fs::write(format!("{dir}/bmp_5x3_topdown.bmp"), bmp(5, 3, 40, true)).unwrap();
    fs::write(format!("{dir}/bmp_4x4_v4.bmp"), bmp(4, 4, 108, false)).unwrap();
    fs::write(format!("{dir}/bmp_2x2_v5.bmp"), bmp(2, 2, 124, false)).unwrap();

    // 8-bit header, rejected as unsupported
    let mut pal8 = bmp(2, 2, 40, false);
    pal8[28..30].copy_from_slice(&8u16.to_le_bytes());
    fs::write(format!("{dir}/bmp_pal8_header.bin"), pal8).unwrap();

    // Truncated/malformed seeds for edge coverage
    let full = bmp(7, 3, 40, false);
    fs::write(format!("{dir}/bmp_truncated.bin"), &full[..full.len() - 5]).unwrap();
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
