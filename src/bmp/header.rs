//! BMP file header + BITMAPINFOHEADER.

use log::warn;

use crate::error::{BitmapError, Result};

/// The `BM` signature read as a little-endian `u16`.
pub const BITMAP_BUFFER_MAGIC: u16 = 0x4D42;

/// File header (14 bytes) plus BITMAPINFOHEADER (40 bytes).
pub(crate) const HEADER_LEN: usize = 54;
const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;

/// 72 DPI.
pub(crate) const DEFAULT_PIXELS_PER_METER: i32 = 2835;

const BI_RGB: u32 = 0;

/// Fields of the BMP file header and the DIB header that follows it.
///
/// Only the uncompressed 24-bit subset is produced or accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitmapHeader {
    pub magic: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset of the first pixel row.
    pub offset_bits: u32,
    /// DIB header size.
    pub size: u32,
    pub width: i32,
    /// Positive for bottom-up rows, negative for top-down.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub clr_used: u32,
    pub clr_important: u32,
}

impl Default for BitmapHeader {
    /// Header of a 0x0 image.
    fn default() -> Self {
        Self {
            magic: BITMAP_BUFFER_MAGIC,
            file_size: HEADER_LEN as u32,
            reserved1: 0,
            reserved2: 0,
            offset_bits: HEADER_LEN as u32,
            size: INFO_HEADER_LEN,
            width: 0,
            height: 0,
            planes: 1,
            bits_per_pixel: 24,
            compression: BI_RGB,
            size_image: 0,
            x_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            y_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            clr_used: 0,
            clr_important: 0,
        }
    }
}

/// Bytes per 24-bit row, padded to a multiple of 4.
pub(crate) fn row_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

impl BitmapHeader {
    /// Header describing an uncompressed, bottom-up 24-bit image.
    pub fn for_dimensions(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(BitmapError::InvalidDimensions { width, height });
        }
        let header = Self::describing(width, height);
        // an unsaturated file size is 54 plus a multiple of 4, never u32::MAX
        if header.file_size == u32::MAX {
            return Err(BitmapError::DimensionsTooLarge {
                width: width.into(),
                height: height.into(),
            });
        }
        Ok(header)
    }

    /// Like [`for_dimensions`](Self::for_dimensions) for dimensions already
    /// known to be positive, with the byte counts saturating at `u32::MAX`
    /// when the file would be too large to save.
    pub(crate) fn describing(width: i32, height: i32) -> Self {
        let size_image = row_stride(width.unsigned_abs())
            .and_then(|stride| stride.checked_mul(height.unsigned_abs() as usize))
            .and_then(|bytes| u32::try_from(bytes).ok())
            .unwrap_or(u32::MAX);
        Self {
            file_size: size_image.saturating_add(HEADER_LEN as u32),
            width,
            height,
            size_image,
            ..Self::default()
        }
    }

    pub fn with_resolution(mut self, x_pixels_per_meter: i32, y_pixels_per_meter: i32) -> Self {
        self.x_pixels_per_meter = x_pixels_per_meter;
        self.y_pixels_per_meter = y_pixels_per_meter;
        self
    }

    /// Rows are stored top row first.
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    /// Padded row length in bytes, `None` if it overflows.
    pub fn row_stride(&self) -> Option<usize> {
        row_stride(self.width.unsigned_abs())
    }

    /// Parse and validate the headers at the start of `data` without touching
    /// the pixel rows.
    ///
    /// Rejects everything outside the uncompressed 24-bit subset. DIB headers
    /// larger than BITMAPINFOHEADER (V2 to V5) are accepted and their extra
    /// fields skipped.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut cur = Cursor::new(data);

        let magic = cur.u16()?;
        if magic != BITMAP_BUFFER_MAGIC {
            return Err(BitmapError::UnrecognizedFormat);
        }
        let file_size = cur.u32()?;
        let reserved1 = cur.u16()?;
        let reserved2 = cur.u16()?;
        let offset_bits = cur.u32()?;

        let size = cur.u32()?;
        match size {
            40 | 52 | 56 | 108 | 124 => {}
            12 | 16 | 64 => {
                return Err(BitmapError::UnsupportedVariant(alloc::format!(
                    "OS/2 BMP info header ({size} bytes)"
                )));
            }
            _ => {
                return Err(BitmapError::InvalidHeader(alloc::format!(
                    "unknown BMP info header size: {size}"
                )));
            }
        }

        let header = Self {
            magic,
            file_size,
            reserved1,
            reserved2,
            offset_bits,
            size,
            width: cur.i32()?,
            height: cur.i32()?,
            planes: cur.u16()?,
            bits_per_pixel: cur.u16()?,
            compression: cur.u32()?,
            size_image: cur.u32()?,
            x_pixels_per_meter: cur.i32()?,
            y_pixels_per_meter: cur.i32()?,
            clr_used: cur.u32()?,
            clr_important: cur.u32()?,
        };
        header.validate(data.len())?;
        Ok(header)
    }

    fn validate(&self, data_len: usize) -> Result<()> {
        if self.planes != 1 {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP planes field is {}, expected 1",
                self.planes
            )));
        }
        if self.bits_per_pixel != 24 {
            return Err(BitmapError::UnsupportedVariant(alloc::format!(
                "BMP bit depth {} unsupported (expected 24)",
                self.bits_per_pixel
            )));
        }
        if self.compression != BI_RGB {
            return Err(BitmapError::UnsupportedVariant(alloc::format!(
                "BMP compression {} unsupported (expected BI_RGB)",
                self.compression
            )));
        }
        if self.width <= 0 {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP width is {}",
                self.width
            )));
        }
        if self.height == 0 || self.height == i32::MIN {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP height is {}",
                self.height
            )));
        }

        let headers_end = u64::from(FILE_HEADER_LEN) + u64::from(self.size);
        if u64::from(self.offset_bits) < headers_end {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "pixel data offset {} overlaps the headers ({headers_end} bytes)",
                self.offset_bits
            )));
        }
        if self.offset_bits as usize > data_len {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "pixel data offset {} is past the end of the file ({data_len} bytes)",
                self.offset_bits
            )));
        }
        if self.file_size as usize > data_len {
            return Err(BitmapError::UnexpectedEof);
        }

        if self.file_size != 0 && self.file_size as usize != data_len {
            warn!(
                "BMP file size field ({}) doesn't match actual size ({data_len})",
                self.file_size
            );
        }
        if self.reserved1 != 0 || self.reserved2 != 0 {
            warn!(
                "BMP reserved fields are non-zero ({}, {})",
                self.reserved1, self.reserved2
            );
        }
        Ok(())
    }

    /// Serialize as a 14-byte file header and a 40-byte BITMAPINFOHEADER.
    ///
    /// `size` and `offset_bits` are written as stored; the encoder always uses
    /// 40 and 54.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        let mut pos = 0;
        let mut put = |bytes: &[u8]| {
            out[pos..pos + bytes.len()].copy_from_slice(bytes);
            pos += bytes.len();
        };
        put(&self.magic.to_le_bytes());
        put(&self.file_size.to_le_bytes());
        put(&self.reserved1.to_le_bytes());
        put(&self.reserved2.to_le_bytes());
        put(&self.offset_bits.to_le_bytes());
        put(&self.size.to_le_bytes());
        put(&self.width.to_le_bytes());
        put(&self.height.to_le_bytes());
        put(&self.planes.to_le_bytes());
        put(&self.bits_per_pixel.to_le_bytes());
        put(&self.compression.to_le_bytes());
        put(&self.size_image.to_le_bytes());
        put(&self.x_pixels_per_meter.to_le_bytes());
        put(&self.y_pixels_per_meter.to_le_bytes());
        put(&self.clr_used.to_le_bytes());
        put(&self.clr_important.to_le_bytes());
        out
    }
}

// ── Cursor for reading little-endian fields from &[u8] ──────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .ok_or(BitmapError::UnexpectedEof)?;
        self.pos += N;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        Ok(buf)
    }

    fn u16(&mut self) -> Result<u16> {
        self.take().map(u16::from_le_bytes)
    }

    fn u32(&mut self) -> Result<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn i32(&mut self) -> Result<i32> {
        self.take().map(i32::from_le_bytes)
    }
}
