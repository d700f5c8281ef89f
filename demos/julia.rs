//! Renders the classic Julia set `z -> z^2 + c` with `c = -0.7 + 0.27015i`,
//! coloured by escape time through an HSV hue wheel.
//!
//! Usage: `cargo run --release --example julia [OUTPUT_DIR]`

use std::path::PathBuf;

use bitmap_plus_plus::{Bitmap, BitmapError, Pixel};

const WIDTH: i32 = 640;
const HEIGHT: i32 = 480;
const MAX_ITERATIONS: u32 = 300;

// other constants worth trying: (-0.8, 0.156), (-0.4, 0.6), (0.285, 0.01)
const CR: f64 = -0.7;
const CI: f64 = 0.27015;

/// Fully saturated hue for `t` in `[0, 1)`, red through the spectrum and back.
fn hsv(t: f64) -> Pixel {
    let h = t.clamp(0.0, 1.0) * 6.0;
    let f = h.fract();
    let up = (f * 255.0).round() as u8;
    let down = 255 - up;
    match h as u32 {
        0 => Pixel::new(255, up, 0),
        1 => Pixel::new(down, 255, 0),
        2 => Pixel::new(0, 255, up),
        3 => Pixel::new(0, down, 255),
        4 => Pixel::new(up, 0, 255),
        _ => Pixel::new(255, 0, down),
    }
}

/// Colour for the starting point `z`, or `None` if it did not escape.
fn escape_color(mut zr: f64, mut zi: f64) -> Option<Pixel> {
    for i in 0..MAX_ITERATIONS {
        (zr, zi) = (zr * zr - zi * zi + CR, 2.0 * zr * zi + CI);
        if zr * zr + zi * zi > 4.0 {
            // 1000 colormap steps
            let index = 1000 * i / MAX_ITERATIONS;
            return Some(hsv(f64::from(index) / 1000.0));
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

    println!("Generating Julia set ({WIDTH}x{HEIGHT})...");
    println!("Constant: {CR} + {CI}i");
    let mut image = Bitmap::new(WIDTH, HEIGHT)?;
    for y in 0..HEIGHT {
        if y % 50 == 0 {
            println!("Row: {y}/{HEIGHT}");
        }
        let zi = 2.0 * f64::from(y) / f64::from(HEIGHT) - 1.0;
        for x in 0..WIDTH {
            let zr = 1.5 * (2.0 * f64::from(x) / f64::from(WIDTH) - 1.0);
            if let Some(pixel) = escape_color(zr, zi) {
                image.set(x, y, pixel)?;
            }
        }
    }

    let path = dir.join("julia.bmp");
    image.save(&path)?;
    println!("Saved: {}", path.display());
    Ok(())
}
