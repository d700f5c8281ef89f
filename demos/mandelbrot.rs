//! Renders the Mandelbrot set with smooth colouring through a jet colormap.
//!
//! Usage: `cargo run --release --example mandelbrot [OUTPUT_DIR]`

use std::path::PathBuf;

use bitmap_plus_plus::{Bitmap, BitmapError, Pixel};

const WIDTH: i32 = 640;
const HEIGHT: i32 = 480;
const MAX_ITERATIONS: u32 = 500;

/// Blue through cyan, yellow and red as `t` goes from 0 to 1.
fn jet(t: f64) -> Pixel {
    let t = t.clamp(0.0, 1.0);
    let channel = |offset: f64| {
        let v = 1.5 - (4.0 * t - offset).abs();
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    };
    Pixel::new(channel(3.0), channel(2.0), channel(1.0))
}

/// Colour for the point `c`, or `None` if it did not escape.
fn escape_color(cr: f64, ci: f64) -> Option<Pixel> {
    let (mut zr, mut zi) = (0.0f64, 0.0f64);
    for i in 0..MAX_ITERATIONS {
        (zr, zi) = (zr * zr - zi * zi + cr, 2.0 * zr * zi + ci);
        let norm_sq = zr * zr + zi * zi;
        if norm_sq > 4.0 {
            // continuous iteration count
            let smooth = f64::from(i) + 1.0 - norm_sq.sqrt().log2().log2();
            let t = (1.75 + smooth).log2() / f64::from(MAX_ITERATIONS).log2();
            return Some(jet(t));
        }
    }
    None
}

fn main() -> Result<(), BitmapError> {
    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&dir)?;

    println!("Generating Mandelbrot set ({WIDTH}x{HEIGHT})...");
    let mut image = Bitmap::new(WIDTH, HEIGHT)?;
    for y in 0..HEIGHT {
        if y % 50 == 0 {
            println!("Row: {y}/{HEIGHT}");
        }
        let ci = 2.0 * f64::from(y) / f64::from(HEIGHT) - 1.0;
        for x in 0..WIDTH {
            let cr = 1.5 * (2.0 * f64::from(x) / f64::from(WIDTH) - 1.0) - 0.5;
            if let Some(pixel) = escape_color(cr, ci) {
                image.set(x, y, pixel)?;
            }
        }
    }

    let path = dir.join("mandelbrot.bmp");
    image.save(&path)?;
    println!("Saved: {}", path.display());
    Ok(())
}
