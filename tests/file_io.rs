use std::path::PathBuf;

use bitmap_plus_plus::*;

/// A path in the temp dir unique to this test process.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bitmap-plus-plus-{}-{name}", std::process::id()))
}

fn sample() -> Bitmap {
    let mut image = Bitmap::filled(30, 17, color::WHITE).unwrap();
    image.fill_rect(2, 2, 10, 5, color::RED);
    image.draw_line(0, 16, 29, 0, color::BLUE);
    image.set(29, 16, color::GREEN).unwrap();
    image
}

#[test]
fn save_then_open() {
    let path = temp_path("roundtrip.bmp");
    let image = sample();
    image.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"BM");
    // 30 * 3 = 90 bytes per row, padded to 92
    assert_eq!(bytes.len(), 54 + 92 * 17);

    let loaded = Bitmap::open(&path).unwrap();
    assert_eq!(loaded, image);
    assert_eq!(*loaded.get(29, 16).unwrap(), color::GREEN);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_replaces_existing_bitmap() {
    let path = temp_path("load.bmp");
    let image = sample();
    image.save(&path).unwrap();

    let mut target = Bitmap::new(3, 3).unwrap();
    target.load(&path).unwrap();
    assert_eq!(target.width(), 30);
    assert_eq!(target.height(), 17);
    assert_eq!(target, image);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn resolution_survives_save() {
    let path = temp_path("dpi.bmp");
    let mut image = sample();
    image.set_resolution(3780, 1890);
    image.save(&path).unwrap();

    let loaded = Bitmap::open(&path).unwrap();
    assert_eq!(loaded.header().x_pixels_per_meter, 3780);
    assert_eq!(loaded.header().y_pixels_per_meter, 1890);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn failed_load_keeps_previous_contents() {
    let path = temp_path("garbage.bmp");
    std::fs::write(&path, b"this is not a bitmap at all, just some text").unwrap();

    let mut image = sample();
    let before = image.clone();
    let err = image.load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, BitmapError::UnrecognizedFormat));
    assert_eq!(image, before);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn truncated_file_keeps_previous_contents() {
    let path = temp_path("truncated.bmp");
    let bytes = sample().to_bytes().unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 10]).unwrap();

    let mut image = Bitmap::filled(2, 2, color::PURPLE).unwrap();
    let err = image.load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(image, Bitmap::filled(2, 2, color::PURPLE).unwrap());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_io_error() {
    let path = temp_path("does-not-exist.bmp");
    let err = Bitmap::open(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, BitmapError::Io(_)));

    let mut image = Bitmap::new(1, 1).unwrap();
    assert_eq!(image.load(&path).unwrap_err().kind(), ErrorKind::Io);
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let path = temp_path("no-such-dir").join("out.bmp");
    let err = sample().save(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn saving_empty_bitmap_fails() {
    let path = temp_path("empty.bmp");
    let err = Bitmap::default().save(&path).unwrap_err();
    assert!(matches!(err, BitmapError::InvalidDimensions { .. }));
    assert!(!path.exists());
}

#[test]
fn save_overwrites() {
    let path = temp_path("overwrite.bmp");
    Bitmap::filled(50, 50, color::RED).unwrap().save(&path).unwrap();
    let small = Bitmap::filled(2, 1, color::BLUE).unwrap();
    small.save(&path).unwrap();

    assert_eq!(std::fs::metadata(&path).unwrap().len(), 54 + 8);
    assert_eq!(Bitmap::open(&path).unwrap(), small);
    std::fs::remove_file(&path).unwrap();
}
