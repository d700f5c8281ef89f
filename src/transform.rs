//! Flips and quarter-turn rotations. Each returns a new bitmap and leaves the
//! receiver untouched; the source resolution carries over.

use crate::bitmap::Bitmap;

impl Bitmap {
    /// Mirror top to bottom: `(x, y) -> (x, height - 1 - y)`.
    pub fn flip_v(&self) -> Bitmap {
        let mut out = self.clone();
        for (dst, src) in out.rows_mut().zip(self.rows().rev()) {
            dst.copy_from_slice(src);
        }
        out
    }

    /// Mirror left to right: `(x, y) -> (width - 1 - x, y)`.
    pub fn flip_h(&self) -> Bitmap {
        let mut out = self.clone();
        for row in out.rows_mut() {
            row.reverse();
        }
        out
    }

    /// Counter-clockwise quarter turn: `(x, y) -> (y, width - 1 - x)`.
    pub fn rotate_90_left(&self) -> Bitmap {
        let (w, h) = (self.width() as usize, self.height() as usize);
        self.rotated(|x, y| (y, w - 1 - x), h)
    }

    /// Clockwise quarter turn: `(x, y) -> (height - 1 - y, x)`.
    pub fn rotate_90_right(&self) -> Bitmap {
        let h = self.height() as usize;
        self.rotated(|x, y| (h - 1 - y, x), h)
    }

    /// Copy into a `height` x `width` bitmap, sending `(x, y)` to `map(x, y)`.
    fn rotated(&self, map: impl Fn(usize, usize) -> (usize, usize), out_width: usize) -> Bitmap {
        if self.is_empty() {
            return Bitmap::default();
        }
        let mut out = self.with_same_resolution(self.height(), self.width());
        let dst = out.pixels_mut();
        for (y, row) in self.rows().enumerate() {
            for (x, &p) in row.iter().enumerate() {
                let (nx, ny) = map(x, y);
                dst[ny * out_width + nx] = p;
            }
        }
        out
    }
}
