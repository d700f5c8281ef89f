use alloc::vec::Vec;

use crate::bitmap::Bitmap;
use crate::bmp;
use crate::error::Result;

/// Builder for encoding a [`Bitmap`] as 24-bit uncompressed BMP.
///
/// By default the bitmap's own resolution fields are written.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    resolution: Option<(i32, i32)>,
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write these pixels-per-meter values instead of the bitmap's.
    pub fn with_resolution(mut self, x_pixels_per_meter: i32, y_pixels_per_meter: i32) -> Self {
        self.resolution = Some((x_pixels_per_meter, y_pixels_per_meter));
        self
    }

    /// Set the resolution from dots per inch, rounded to whole pixels per meter.
    pub fn with_dpi(self, dpi: u32) -> Self {
        let ppm = (f64::from(dpi) / 0.0254 + 0.5) as i32;
        self.with_resolution(ppm, ppm)
    }

    pub fn encode(&self, bitmap: &Bitmap) -> Result<Vec<u8>> {
        let header = match self.resolution {
            Some((x, y)) => bitmap.header().with_resolution(x, y),
            None => *bitmap.header(),
        };
        bmp::encode(bitmap, &header)
    }
}
