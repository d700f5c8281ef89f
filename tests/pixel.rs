use std::collections::HashSet;

use bitmap_plus_plus::*;

#[test]
fn default_is_black() {
    assert_eq!(Pixel::default(), Pixel::new(0, 0, 0));
    assert_eq!(Pixel::default(), color::BLACK);
}

#[test]
fn equality_is_per_channel() {
    assert_eq!(Pixel::new(1, 2, 3), Pixel::new(1, 2, 3));
    assert_ne!(Pixel::new(1, 2, 3), Pixel::new(1, 2, 4));
    assert_ne!(Pixel::new(1, 2, 3), Pixel::new(3, 2, 1));
}

#[test]
fn packed_and_array_conversions() {
    assert_eq!(Pixel::from(0x25292e), Pixel::new(0x25, 0x29, 0x2e));
    assert_eq!(Pixel::from([9, 8, 7]), Pixel::new(9, 8, 7));
    let channels: [u8; 3] = color::GOLD.into();
    assert_eq!(channels, [255, 215, 0]);
    assert_eq!(color::GOLD.to_rgb(), 0xFFD700);
}

#[test]
fn assign_copies_channels() {
    let mut p = Pixel::default();
    p.assign(&color::SALMON);
    assert_eq!(p, color::SALMON);
}

#[test]
fn display() {
    assert_eq!(color::CORAL.to_string(), "Pixel(255, 127, 80)");
}

#[test]
fn palette_values() {
    assert_eq!(color::RED, Pixel::new(255, 0, 0));
    assert_eq!(color::LIME, Pixel::new(0, 255, 0));
    assert_eq!(color::BLUE, Pixel::new(0, 0, 255));
    assert_eq!(color::WHITE, Pixel::new(255, 255, 255));
    assert_eq!(color::GRAY, Pixel::new(128, 128, 128));
    assert_eq!(color::AQUA, color::CYAN);
}

#[test]
fn palette_table() {
    assert_eq!(color::ALL.len(), 34);
    let names: HashSet<&str> = color::ALL.iter().map(|(n, _)| *n).collect();
    assert_eq!(names.len(), color::ALL.len());
    assert!(color::ALL.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn lookup_by_name() {
    assert_eq!(color::by_name("Tomato"), Some(color::TOMATO));
    assert_eq!(color::by_name("tomato"), Some(color::TOMATO));
    assert_eq!(color::by_name("TURQUOISE"), Some(color::TURQUOISE));
    assert_eq!(color::by_name("chartreuse"), None);
    assert_eq!(color::by_name(""), None);
}

#[cfg(feature = "rgb")]
#[test]
fn rgb8_conversion() {
    let p: rgb::RGB8 = color::INDIGO.into();
    assert_eq!((p.r, p.g, p.b), (75, 0, 130));
    assert_eq!(Pixel::from(p), color::INDIGO);
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_views() {
    let mut image = Bitmap::new(3, 2).unwrap();
    image.set(2, 1, color::RED).unwrap();

    let view = image.as_imgref();
    assert_eq!((view.width(), view.height()), (3, 2));
    assert_eq!(view.rows().nth(1).unwrap()[2], color::RED);

    let owned = image.to_imgvec();
    let back = Bitmap::from_imgref(owned.as_ref()).unwrap();
    assert_eq!(back, image);
}
