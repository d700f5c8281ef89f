//! # bitmap-plus-plus
//!
//! Owned 24-bit RGB bitmaps with pixel access, raster drawing, flips and
//! rotations, and a strict codec for uncompressed 24-bit BMP files.
//!
//! ## Features
//!
//! - **Pixel access**: checked `get`/`set` by coordinate, `at` by linear index,
//!   forward and reverse iteration in storage order (top row first).
//! - **Drawing**: lines, rectangles, triangles and circles, outlined or
//!   filled. Drawing clips to the bitmap instead of failing.
//! - **Transforms**: vertical/horizontal flips and quarter-turn rotations,
//!   each returning a new bitmap.
//! - **BMP**: encode and decode of uncompressed 24-bit BMP. Every other
//!   variant (palettes, RLE, bitfields, 32-bit) is rejected with an error
//!   rather than misread.
//!
//! ## Non-Goals
//!
//! - Other BMP bit depths and compression modes
//! - Alpha, colour management, anti-aliased drawing
//!
//! ## Usage
//!
//! ```no_run
//! use bitmap_plus_plus::{Bitmap, Pixel, color};
//!
//! let mut image = Bitmap::new(512, 240)?;
//! image.clear(Pixel::from_rgb(0x25292e));
//! image.draw_line(250, 50, 500, 50, color::YELLOW);
//! image.fill_circle(420, 170, 50, color::LIME);
//! image.rotate_90_right().save("primitives.bmp")?;
//!
//! let loaded = Bitmap::open("primitives.bmp")?;
//! assert_eq!(loaded.width(), 240);
//! # Ok::<(), bitmap_plus_plus::BitmapError>(())
//! ```
//!
//! ## Cargo features
//!
//! - `std` (default): file I/O (`open`, `load`, `save`) and the `Io` error.
//! - `rgb`: conversions between [`Pixel`] and `rgb::RGB8`.
//! - `imgref`: borrow a [`Bitmap`] as an `imgref::ImgRef`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitmap;
mod decode;
mod draw;
mod encode;
mod error;
mod file;
mod limits;
mod pixel;
mod transform;

pub mod bmp;
pub mod color;

// Re-exports
pub use bitmap::Bitmap;
pub use bmp::{BITMAP_BUFFER_MAGIC, BitmapHeader};
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use error::{BitmapError, ErrorKind, Result};
pub use limits::Limits;
pub use pixel::Pixel;
