//! BMP codec for the uncompressed 24-bit subset.
//!
//! Use [`crate::DecodeRequest`], [`crate::EncodeRequest`] or the `Bitmap`
//! file methods.

mod decode;
mod encode;
mod header;

pub use header::{BITMAP_BUFFER_MAGIC, BitmapHeader};

use alloc::vec::Vec;
use log::debug;

use crate::bitmap::Bitmap;
use crate::error::{BitmapError, Result};
use crate::limits::Limits;
use crate::pixel::Pixel;

/// Decode a BMP file held in memory.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Bitmap> {
    let header = BitmapHeader::parse(data)?;
    let width = header.width.unsigned_abs();
    let height = header.height.unsigned_abs();
    if let Some(limits) = limits {
        let buffer_bytes = u64::from(width)
            * u64::from(height)
            * core::mem::size_of::<Pixel>() as u64;
        limits.check(width, height, buffer_bytes)?;
    }

    let pixels = decode::decode_rows(data, &header)?;
    debug!(
        "decoded {width}x{height} BMP ({} rows)",
        if header.is_top_down() { "top-down" } else { "bottom-up" }
    );

    let stored = BitmapHeader::for_dimensions(width as i32, height as i32)?
        .with_resolution(header.x_pixels_per_meter, header.y_pixels_per_meter);
    Bitmap::from_parts(stored, pixels)
}

/// Encode a bitmap, taking resolution fields from `header`.
pub(crate) fn encode(bitmap: &Bitmap, header: &BitmapHeader) -> Result<Vec<u8>> {
    if bitmap.is_empty() {
        return Err(BitmapError::InvalidDimensions {
            width: bitmap.width(),
            height: bitmap.height(),
        });
    }
    let out = encode::encode_bmp(bitmap.pixels(), bitmap.width(), bitmap.height(), header)?;
    debug!(
        "encoded {}x{} BMP, {} bytes",
        bitmap.width(),
        bitmap.height(),
        out.len()
    );
    Ok(out)
}
