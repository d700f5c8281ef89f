//! Fills a bitmap with random colours through the mutable pixel iterator.
//!
//! Usage: `cargo run --example random_colors [OUTPUT_DIR]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use bitmap_plus_plus::{Bitmap, BitmapError, Pixel};

/// xorshift32; the state must never be zero.
struct XorShift(u32);

impl XorShift {
    fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or_default();
        Self(nanos | 1)
    }

    fn next_pixel(&mut self) -> Pixel {
        let mut s = self.0;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.0 = s;
        Pixel::from_rgb(s)
    }
}

fn main() -> Result<(), BitmapError> {
    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&dir)?;

    println!("Generating random color image...");
    let mut image = Bitmap::new(512, 512)?;
    let mut rng = XorShift::from_clock();
    for pixel in image.iter_mut() {
        pixel.assign(&rng.next_pixel());
    }

    let path = dir.join("random_colors.bmp");
    image.save(&path)?;
    println!("Saved: {}", path.display());
    println!("Total pixels: {}", image.size());
    Ok(())
}
