//! Raster drawing primitives.
//!
//! Everything here clips to the bitmap: pixels that fall outside
//! `[0, width) x [0, height)` are skipped and nothing returns an error.
//! Coordinates are widened to `i64` internally so no input can overflow.
//!
//! Filled shapes paint closed spans: both edge pixels of every scanline are
//! included, rows are walked top to bottom and spans left to right.

use crate::bitmap::Bitmap;
use crate::pixel::Pixel;

impl Bitmap {
    fn plot(&mut self, x: i64, y: i64, color: Pixel) {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return;
        }
        let i = y as usize * self.width() as usize + x as usize;
        self.pixels_mut()[i] = color;
    }

    /// Closed horizontal span from `x1` to `x2` on row `y`, in either order.
    fn hline(&mut self, x1: i64, x2: i64, y: i64, color: Pixel) {
        let (w, h) = (i64::from(self.width()), i64::from(self.height()));
        if y < 0 || y >= h {
            return;
        }
        let lo = x1.min(x2).max(0);
        let hi = x1.max(x2).min(w - 1);
        if lo > hi {
            return;
        }
        let row = y as usize * w as usize;
        self.pixels_mut()[row + lo as usize..=row + hi as usize].fill(color);
    }

    /// Closed vertical span from `y1` to `y2` on column `x`, in either order.
    fn vline(&mut self, x: i64, y1: i64, y2: i64, color: Pixel) {
        let (w, h) = (i64::from(self.width()), i64::from(self.height()));
        if x < 0 || x >= w {
            return;
        }
        let lo = y1.min(y2).max(0);
        let hi = y1.max(y2).min(h - 1);
        for y in lo..=hi {
            self.plot(x, y, color);
        }
    }

    /// Line from `(x1, y1)` to `(x2, y2)`, both ends included.
    ///
    /// One pixel per step along the major axis, the minor coordinate rounded
    /// to the nearest integer (halves round up). Only steps inside the bitmap
    /// are visited.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Pixel) {
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let (x2, y2) = (i64::from(x2), i64::from(y2));
        if y1 == y2 {
            return self.hline(x1, x2, y1, color);
        }
        if x1 == x2 {
            return self.vline(x1, y1, y2, color);
        }

        // every pixel of the line lies inside its bounding box
        let (w, h) = (i64::from(self.width()), i64::from(self.height()));
        if x1.max(x2) < 0 || y1.max(y2) < 0 || x1.min(x2) >= w || y1.min(y2) >= h {
            return;
        }

        let (dx, dy) = (x2 - x1, y2 - y1);
        if dx.abs() >= dy.abs() {
            for x in x1.min(x2).max(0)..=x1.max(x2).min(w - 1) {
                let y = y1 + round_ratio(dy, x - x1, dx);
                self.plot(x, y, color);
            }
        } else {
            for y in y1.min(y2).max(0)..=y1.max(y2).min(h - 1) {
                let x = x1 + round_ratio(dx, y - y1, dy);
                self.plot(x, y, color);
            }
        }
    }

    /// Fill `[x, x + width) x [y, y + height)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Pixel) {
        if width <= 0 || height <= 0 {
            return;
        }
        let x1 = i64::from(x) + i64::from(width) - 1;
        let (y0, y1) = (i64::from(y), i64::from(y) + i64::from(height) - 1);
        let lo = y0.max(0);
        let hi = y1.min(i64::from(self.height()) - 1);
        for row in lo..=hi {
            self.hline(i64::from(x), x1, row, color);
        }
    }

    /// Outline of the rectangle [`Bitmap::fill_rect`] would fill.
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Pixel) {
        if width <= 0 || height <= 0 {
            return;
        }
        let (x0, y0) = (i64::from(x), i64::from(y));
        let x1 = x0 + i64::from(width) - 1;
        let y1 = y0 + i64::from(height) - 1;
        self.hline(x0, x1, y0, color);
        self.hline(x0, x1, y1, color);
        self.vline(x0, y0, y1, color);
        self.vline(x1, y0, y1, color);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Pixel,
    ) {
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x3, y3, color);
        self.draw_line(x3, y3, x1, y1, color);
    }

    /// Scanline fill. Vertices are sorted by `y`; the upper part walks edges
    /// 0-1 and 0-2, the lower part 1-2 and 0-2. Edge positions truncate
    /// toward zero.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Pixel,
    ) {
        let mut v = [
            (i64::from(x1), i64::from(y1)),
            (i64::from(x2), i64::from(y2)),
            (i64::from(x3), i64::from(y3)),
        ];
        v.sort_by_key(|&(_, y)| y);
        let [(x0, y0), (x1, y1), (x2, y2)] = v;

        if y0 == y2 {
            let lo = x0.min(x1).min(x2);
            let hi = x0.max(x1).max(x2);
            return self.hline(lo, hi, y0, color);
        }

        let h = i64::from(self.height());
        let (dx01, dy01) = (x1 - x0, y1 - y0);
        let (dx02, dy02) = (x2 - x0, y2 - y0);
        let (dx12, dy12) = (x2 - x1, y2 - y1);

        // include y1 in the upper part only when the lower part is flat
        let last = if y1 == y2 { y1 } else { y1 - 1 };
        for y in y0.max(0)..=last.min(h - 1) {
            let a = x0 + edge_offset(dx01, y - y0, dy01);
            let b = x0 + edge_offset(dx02, y - y0, dy02);
            self.hline(a, b, y, color);
        }
        for y in (last + 1).max(0)..=y2.min(h - 1) {
            let a = x1 + edge_offset(dx12, y - y1, dy12);
            let b = x0 + edge_offset(dx02, y - y0, dy02);
            self.hline(a, b, y, color);
        }
    }

    /// Midpoint circle outline. A negative radius draws nothing.
    ///
    /// Only octant steps that can land on the bitmap are computed, so the
    /// cost follows the bitmap size rather than the radius.
    pub fn draw_circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: Pixel) {
        let Some(circle) = Octant::new(radius) else {
            return;
        };
        let (cx, cy) = (i64::from(center_x), i64::from(center_y));
        let (w, h) = (i64::from(self.width()), i64::from(self.height()));
        // each mirrored point has `x` as its offset along one axis
        let steps = visible_offsets(cx, w, circle.last).chain(visible_offsets(cy, h, circle.last));
        for x in steps {
            let y = circle.y_at(x);
            for (px, py) in [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ] {
                self.plot(px, py, color);
            }
        }
    }

    /// Filled circle covering every span between mirrored outline points.
    pub fn fill_circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: Pixel) {
        let Some(circle) = Octant::new(radius) else {
            return;
        };
        let (cx, cy) = (i64::from(center_x), i64::from(center_y));
        let h = i64::from(self.height());

        // rows `cy +- x`, half-width y(x)
        for x in visible_offsets(cy, h, circle.last) {
            let y = circle.y_at(x);
            self.hline(cx - y, cx + y, cy + x, color);
            self.hline(cx - y, cx + y, cy - x, color);
        }
        // rows `cy +- y`: spans on one row nest, so only the widest matters
        for y in visible_offsets(cy, h, i64::from(radius)) {
            if let Some(x) = circle.widest_step(y) {
                self.hline(cx - x, cx + x, cy + y, color);
                self.hline(cx - x, cx + x, cy - y, color);
            }
        }
    }
}

/// `num * t / den` rounded to the nearest integer, halves toward positive.
fn round_ratio(num: i64, t: i64, den: i64) -> i64 {
    let (mut n, mut d) = (i128::from(num) * i128::from(t), i128::from(den));
    if d < 0 {
        (n, d) = (-n, -d);
    }
    (2 * n + d).div_euclid(2 * d) as i64
}

/// Offsets `t` in `0..=max` for which `c + t` or `c - t` falls in `[0, n)`.
fn visible_offsets(c: i64, n: i64, max: i64) -> impl Iterator<Item = i64> {
    let ahead = (-c).max(0)..=(n - 1 - c).min(max);
    let behind = (c - n + 1).max(0)..=c.min(max);
    ahead.chain(behind)
}

/// First octant of a midpoint circle: steps `x` in `0..=last`, each with
/// `y(x)` the largest `y` such that `x^2 + (y - 1/2)^2 < r^2`.
struct Octant {
    r_sq: i64,
    last: i64,
}

impl Octant {
    fn new(radius: i32) -> Option<Self> {
        if radius < 0 {
            return None;
        }
        let r = i64::from(radius);
        let mut circle = Self {
            r_sq: r * r,
            last: r,
        };
        // the octant ends at the first step with y(x) <= x
        let (mut lo, mut hi) = (0, r);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if circle.y_at(mid) <= mid {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        circle.last = lo;
        Some(circle)
    }

    /// `x` must lie in `0..=r`.
    fn y_at(&self, x: i64) -> i64 {
        // largest y with y * (y - 1) < k
        let k = self.r_sq - x * x;
        let s = (4 * k as u64 + 1).isqrt() as i64;
        let y = (1 + s) / 2;
        if y * (y - 1) >= k { y - 1 } else { y }
    }

    /// Largest octant step whose `y(x)` equals `y`.
    fn widest_step(&self, y: i64) -> Option<i64> {
        // y(x) >= y  <=>  x^2 <= r^2 - y^2 + y - 1
        let bound = self.r_sq - y * y + y - 1;
        if bound < 0 {
            return None;
        }
        let x = (bound as u64).isqrt().min(self.last as u64) as i64;
        (self.y_at(x) == y).then_some(x)
    }
}

/// `dx * t / dt`, truncated toward zero. `|t| <= dt` keeps the result within `dx`.
fn edge_offset(dx: i64, t: i64, dt: i64) -> i64 {
    (i128::from(dx) * i128::from(t) / i128::from(dt)) as i64
}
