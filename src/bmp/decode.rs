//! 24-bit uncompressed BMP row decoder.

use alloc::vec::Vec;

use super::header::BitmapHeader;
use crate::error::{BitmapError, Result};
use crate::pixel::Pixel;

/// Decode the pixel rows described by an already validated `header`.
///
/// Output is top row first regardless of the on-disk row order. Fails with
/// `UnexpectedEof` before allocating if the rows are not all present.
pub(crate) fn decode_rows(data: &[u8], header: &BitmapHeader) -> Result<Vec<Pixel>> {
    let width = header.width.unsigned_abs() as usize;
    let height = header.height.unsigned_abs() as usize;
    let too_large = || BitmapError::DimensionsTooLarge {
        width: header.width.into(),
        height: header.height.into(),
    };
    let stride = header.row_stride().ok_or_else(too_large)?;
    let data_len = stride.checked_mul(height).ok_or_else(too_large)?;
    let pixel_count = width.checked_mul(height).ok_or_else(too_large)?;

    let rows = data
        .get(header.offset_bits as usize..)
        .and_then(|d| d.get(..data_len))
        .ok_or(BitmapError::UnexpectedEof)?;

    let mut pixels = Vec::with_capacity(pixel_count);
    let mut push_row = |row: &[u8]| {
        pixels.extend(
            row[..width * 3]
                .chunks_exact(3)
                .map(|bgr| Pixel::from_bgr([bgr[0], bgr[1], bgr[2]])),
        );
    };
    if header.is_top_down() {
        rows.chunks_exact(stride).for_each(&mut push_row);
    } else {
        rows.chunks_exact(stride).rev().for_each(&mut push_row);
    }

    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    /// 2x2 image, bottom-up, rows padded from 6 to 8 bytes.
    fn two_by_two(top_down: bool) -> (BitmapHeader, Vec<u8>) {
        let mut header = BitmapHeader::for_dimensions(2, 2).unwrap();
        if top_down {
            header.height = -2;
        }
        let mut data = header.to_bytes().to_vec();
        // first stored row
        data.extend_from_slice(&[0, 0, 255, 0, 255, 0, 0, 0]);
        // second stored row
        data.extend_from_slice(&[255, 0, 0, 255, 255, 255, 0, 0]);
        (header, data)
    }

    #[test]
    fn bottom_up_rows_are_reversed() {
        let (header, data) = two_by_two(false);
        let pixels = decode_rows(&data, &header).unwrap();
        assert_eq!(
            pixels,
            vec![
                Pixel::new(0, 0, 255),
                Pixel::new(255, 255, 255),
                Pixel::new(255, 0, 0),
                Pixel::new(0, 255, 0),
            ]
        );
    }

    #[test]
    fn top_down_rows_keep_order() {
        let (header, data) = two_by_two(true);
        let pixels = decode_rows(&data, &header).unwrap();
        assert_eq!(pixels[0], Pixel::new(255, 0, 0));
        assert_eq!(pixels[3], Pixel::new(255, 255, 255));
    }

    #[test]
    fn missing_row_padding_is_eof() {
        let (header, mut data) = two_by_two(false);
        data.pop();
        assert!(matches!(
            decode_rows(&data, &header),
            Err(BitmapError::UnexpectedEof)
        ));
    }
}
