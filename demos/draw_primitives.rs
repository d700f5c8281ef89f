//! Draws one of each primitive onto a 512x240 canvas.
//!
//! Usage: `cargo run --example draw_primitives [OUTPUT_DIR]`

use std::path::PathBuf;

use bitmap_plus_plus::{Bitmap, BitmapError, Pixel, color};

fn main() -> Result<(), BitmapError> {
    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&dir)?;

    let mut image = Bitmap::new(512, 240)?;
    image.clear(Pixel::from_rgb(0x25292e));

    image.draw_line(250, 50, 500, 50, color::YELLOW);
    image.draw_rect(10, 10, 100, 100, color::RED);
    image.fill_rect(120, 10, 100, 100, color::WHITE);
    image.draw_triangle(60, 120, 10, 220, 120, 220, color::CYAN);
    image.fill_triangle(180, 120, 130, 220, 245, 220, color::MAGENTA);
    image.draw_circle(300, 170, 50, color::GRAY);
    image.fill_circle(420, 170, 50, color::LIME);

    let path = dir.join("primitives.bmp");
    image.save(&path)?;
    println!("Saved: {}", path.display());
    println!("Image size: {}x{}", image.width(), image.height());
    Ok(())
}
