//! Saves an asymmetric test image along with its flips and rotations.
//!
//! Usage: `cargo run --example transformations [OUTPUT_DIR]`

use std::path::PathBuf;

use bitmap_plus_plus::{Bitmap, BitmapError, color};

/// A blue "F" with a red dot in the top-right corner, so every orientation
/// is distinguishable.
fn test_image() -> Result<Bitmap, BitmapError> {
    let mut image = Bitmap::filled(200, 150, color::WHITE)?;
    image.fill_rect(20, 20, 20, 110, color::BLUE);
    image.fill_rect(40, 20, 80, 20, color::BLUE);
    image.fill_rect(40, 60, 50, 20, color::BLUE);
    image.fill_circle(160, 40, 25, color::RED);
    Ok(image)
}

fn main() -> Result<(), BitmapError> {
    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&dir)?;

    let original = test_image()?;
    let outputs = [
        ("transform_original.bmp", original.clone()),
        ("transform_flip_v.bmp", original.flip_v()),
        ("transform_flip_h.bmp", original.flip_h()),
        ("transform_rotate_left.bmp", original.rotate_90_left()),
        ("transform_rotate_right.bmp", original.rotate_90_right()),
        // flipping both ways is a half turn
        ("transform_rotate_180.bmp", original.flip_v().flip_h()),
    ];

    for (name, image) in &outputs {
        image.save(dir.join(name))?;
        println!("Saved: {name} ({}x{})", image.width(), image.height());
    }
    Ok(())
}
