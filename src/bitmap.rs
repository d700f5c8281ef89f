use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::iter::Rev;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::bmp::BitmapHeader;
use crate::error::{BitmapError, Result};
use crate::pixel::Pixel;

/// An owned 24-bit RGB image.
///
/// Pixels are stored row-major, top row first: `(x, y)` lives at index
/// `y * width + x`. The buffer always holds exactly `width * height` pixels.
#[derive(Clone, Default)]
pub struct Bitmap {
    width: i32,
    height: i32,
    pixels: Vec<Pixel>,
    header: BitmapHeader,
}

impl Bitmap {
    /// A black `width` x `height` bitmap.
    ///
    /// Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let header = BitmapHeader::for_dimensions(width, height)?;
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            pixels: vec![Pixel::default(); len],
            header,
        })
    }

    /// A `width` x `height` bitmap filled with `color`.
    pub fn filled(width: i32, height: i32, color: Pixel) -> Result<Self> {
        let mut bitmap = Self::new(width, height)?;
        bitmap.clear(color);
        Ok(bitmap)
    }

    /// Build from a header and a top-row-first pixel buffer.
    pub(crate) fn from_parts(header: BitmapHeader, pixels: Vec<Pixel>) -> Result<Self> {
        let (width, height) = (header.width, header.height);
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "{width}x{height} header for a buffer of {} pixels",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
            header,
        })
    }

    /// A black bitmap of the given positive size that keeps this one's
    /// resolution. Unlike [`new`](Self::new) this never fails: sizes too large
    /// to save get saturated header byte counts and are rejected on save.
    pub(crate) fn with_same_resolution(&self, width: i32, height: i32) -> Self {
        let header = BitmapHeader::describing(width, height).with_resolution(
            self.header.x_pixels_per_meter,
            self.header.y_pixels_per_meter,
        );
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); width as usize * height as usize],
            header,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn size(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// The header `save` would write for this bitmap. An empty bitmap reports
    /// a 0x0 header. A rotated bitmap too large to save reports its byte
    /// counts saturated at `u32::MAX`.
    pub fn header(&self) -> &BitmapHeader {
        &self.header
    }

    /// Change the resolution written on save.
    pub fn set_resolution(&mut self, x_pixels_per_meter: i32, y_pixels_per_meter: i32) {
        self.header = self
            .header
            .with_resolution(x_pixels_per_meter, y_pixels_per_meter);
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Linear index of `(x, y)`, or `None` when outside the bitmap.
    pub(crate) fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> BitmapError {
        BitmapError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Result<&Pixel> {
        match self.offset(x, y) {
            Some(i) => Ok(&self.pixels[i]),
            None => Err(self.out_of_bounds(x, y)),
        }
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Result<&mut Pixel> {
        match self.offset(x, y) {
            Some(i) => Ok(&mut self.pixels[i]),
            None => Err(self.out_of_bounds(x, y)),
        }
    }

    pub fn set(&mut self, x: i32, y: i32, color: Pixel) -> Result<()> {
        *self.get_mut(x, y)? = color;
        Ok(())
    }

    /// Pixel at linear `index`.
    pub fn at(&self, index: usize) -> Result<&Pixel> {
        let len = self.pixels.len();
        self.pixels
            .get(index)
            .ok_or(BitmapError::IndexOutOfBounds { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Pixel> {
        let len = self.pixels.len();
        self.pixels
            .get_mut(index)
            .ok_or(BitmapError::IndexOutOfBounds { index, len })
    }

    /// Overwrite every pixel with `pixel`.
    pub fn clear(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// [`Bitmap::clear`] with black.
    pub fn clear_black(&mut self) {
        self.clear(Pixel::default());
    }

    /// Pixels in storage order, top row first.
    pub fn iter(&self) -> slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Pixel> {
        self.pixels.iter_mut()
    }

    /// Pixels in reverse storage order, last pixel of the bottom row first.
    pub fn iter_rev(&self) -> Rev<slice::Iter<'_, Pixel>> {
        self.pixels.iter().rev()
    }

    pub fn iter_rev_mut(&mut self) -> Rev<slice::IterMut<'_, Pixel>> {
        self.pixels.iter_mut().rev()
    }

    /// Rows of pixels, top row first.
    pub fn rows(&self) -> slice::ChunksExact<'_, Pixel> {
        // chunks_exact panics on 0; an empty bitmap has no pixels to chunk anyway
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    pub(crate) fn rows_mut(&mut self) -> slice::ChunksExactMut<'_, Pixel> {
        self.pixels.chunks_exact_mut(self.width.max(1) as usize)
    }
}

impl PartialEq for Bitmap {
    /// Same dimensions and the same pixels; headers are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }
}

impl Eq for Bitmap {}

impl Index<usize> for Bitmap {
    type Output = Pixel;

    fn index(&self, index: usize) -> &Pixel {
        &self.pixels[index]
    }
}

impl IndexMut<usize> for Bitmap {
    fn index_mut(&mut self, index: usize) -> &mut Pixel {
        &mut self.pixels[index]
    }
}

impl<'a> IntoIterator for &'a Bitmap {
    type Item = &'a Pixel;
    type IntoIter = slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Bitmap {
    type Item = &'a mut Pixel;
    type IntoIter = slice::IterMut<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("x_pixels_per_meter", &self.header.x_pixels_per_meter)
            .field("y_pixels_per_meter", &self.header.y_pixels_per_meter)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitmap({}, {})", self.width, self.height)
    }
}

#[cfg(feature = "imgref")]
impl Bitmap {
    /// Borrow the pixels as a 2-D image view.
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Pixel> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Copy into an [`imgref::ImgVec`] of `rgb::RGB8`.
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        imgref::ImgVec::new(
            self.pixels.iter().map(|&p| p.into()).collect(),
            self.width as usize,
            self.height as usize,
        )
    }

    /// Copy an `RGB8` image, honouring its stride.
    pub fn from_imgref(img: imgref::ImgRef<'_, rgb::RGB8>) -> Result<Self> {
        let too_large = || BitmapError::DimensionsTooLarge {
            width: img.width() as i64,
            height: img.height() as i64,
        };
        let width = i32::try_from(img.width()).map_err(|_| too_large())?;
        let height = i32::try_from(img.height()).map_err(|_| too_large())?;
        let mut out = Self::new(width, height)?;
        for (dst, src) in out.rows_mut().zip(img.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = (*s).into();
            }
        }
        Ok(out)
    }
}
