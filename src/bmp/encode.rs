//! BMP encoder: uncompressed 24-bit, bottom-up.

use alloc::vec::Vec;

use super::header::{BitmapHeader, HEADER_LEN};
use crate::error::{BitmapError, Result};
use crate::pixel::Pixel;

/// Encode top-row-first `pixels` as a BMP file.
///
/// `header` supplies the resolution fields; every other field is rewritten to
/// describe a `width` x `height` 24-bit image.
pub(crate) fn encode_bmp(
    pixels: &[Pixel],
    width: i32,
    height: i32,
    header: &BitmapHeader,
) -> Result<Vec<u8>> {
    let header = BitmapHeader::for_dimensions(width, height)?
        .with_resolution(header.x_pixels_per_meter, header.y_pixels_per_meter);
    let w = width as usize;
    let expected = w * height as usize;
    if pixels.len() != expected {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "pixel buffer holds {} pixels, {width}x{height} needs {expected}",
            pixels.len()
        )));
    }

    let mut out = Vec::with_capacity(header.file_size as usize);
    out.extend_from_slice(&header.to_bytes());

    let pad_bytes = header.size_image as usize / height as usize - w * 3;
    for row in pixels.chunks_exact(w).rev() {
        for p in row {
            out.extend_from_slice(&p.to_bgr());
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    debug_assert_eq!(out.len(), HEADER_LEN + header.size_image as usize);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rows_written_bottom_up_with_padding() {
        let pixels = vec![
            Pixel::new(1, 2, 3),
            Pixel::new(4, 5, 6),
            Pixel::new(7, 8, 9),
            Pixel::new(10, 11, 12),
        ];
        let out = encode_bmp(&pixels, 2, 2, &BitmapHeader::default()).unwrap();
        assert_eq!(out.len(), 54 + 2 * 8);
        // bottom row first, BGR, two padding bytes
        assert_eq!(&out[54..62], &[9, 8, 7, 12, 11, 10, 0, 0]);
        assert_eq!(&out[62..70], &[3, 2, 1, 6, 5, 4, 0, 0]);
    }

    #[test]
    fn keeps_resolution() {
        let src = BitmapHeader::default().with_resolution(3780, 3780);
        let out = encode_bmp(&[Pixel::default()], 1, 1, &src).unwrap();
        assert_eq!(&out[38..42], &3780i32.to_le_bytes());
        assert_eq!(&out[42..46], &3780i32.to_le_bytes());
    }

    #[test]
    fn rejects_empty_image() {
        assert!(matches!(
            encode_bmp(&[], 0, 0, &BitmapHeader::default()),
            Err(BitmapError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_image_too_large_to_save() {
        // checked before the pixel buffer is looked at
        assert!(matches!(
            encode_bmp(&[], 1, 1_100_000_000, &BitmapHeader::default()),
            Err(BitmapError::DimensionsTooLarge { .. })
        ));
    }
}
