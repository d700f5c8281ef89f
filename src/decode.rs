use crate::bitmap::Bitmap;
use crate::bmp::{self, BitmapHeader};
use crate::error::Result;
use crate::limits::Limits;

/// Builder for decoding BMP bytes into a [`Bitmap`].
///
/// ```
/// use bitmap_plus_plus::{Bitmap, DecodeRequest, Limits};
///
/// let bytes = Bitmap::new(4, 4)?.to_bytes()?;
/// let limits = Limits::max_side(1024);
/// let bitmap = DecodeRequest::new(&bytes).with_limits(&limits).decode()?;
/// assert_eq!(bitmap.size(), 16);
/// # Ok::<(), bitmap_plus_plus::BitmapError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before the pixel buffer is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse and validate the headers only.
    pub fn probe(&self) -> Result<BitmapHeader> {
        BitmapHeader::parse(self.data)
    }

    pub fn decode(self) -> Result<Bitmap> {
        bmp::decode(self.data, self.limits)
    }
}
