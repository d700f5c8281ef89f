use bitmap_plus_plus::*;

/// 4x3 black image with red, green and blue on the diagonal.
fn pattern() -> Bitmap {
    let mut image = Bitmap::new(4, 3).unwrap();
    image.set(0, 0, color::RED).unwrap();
    image.set(1, 1, color::GREEN).unwrap();
    image.set(2, 2, color::BLUE).unwrap();
    image
}

/// Pseudo-random image so identities are checked on every pixel.
fn noise(width: i32, height: i32, seed: u32) -> Bitmap {
    let mut image = Bitmap::new(width, height).unwrap();
    let mut state = seed.max(1);
    for p in image.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = Pixel::from_rgb(state);
    }
    image
}

fn at(image: &Bitmap, x: i32, y: i32) -> Pixel {
    *image.get(x, y).unwrap()
}

#[test]
fn flip_v_mirrors_rows() {
    let flipped = pattern().flip_v();
    assert_eq!((flipped.width(), flipped.height()), (4, 3));
    assert_eq!(at(&flipped, 0, 2), color::RED);
    assert_eq!(at(&flipped, 1, 1), color::GREEN);
    assert_eq!(at(&flipped, 2, 0), color::BLUE);
    assert_eq!(at(&flipped, 0, 0), color::BLACK);
}

#[test]
fn flip_h_mirrors_columns() {
    let flipped = pattern().flip_h();
    assert_eq!((flipped.width(), flipped.height()), (4, 3));
    assert_eq!(at(&flipped, 3, 0), color::RED);
    assert_eq!(at(&flipped, 2, 1), color::GREEN);
    assert_eq!(at(&flipped, 1, 2), color::BLUE);
}

#[test]
fn rotate_left_swaps_dimensions() {
    let rotated = pattern().rotate_90_left();
    assert_eq!((rotated.width(), rotated.height()), (3, 4));
    assert_eq!(at(&rotated, 0, 3), color::RED);
    assert_eq!(at(&rotated, 1, 2), color::GREEN);
    assert_eq!(at(&rotated, 2, 1), color::BLUE);
    assert_eq!(rotated.iter().filter(|p| **p == color::BLACK).count(), 9);
}

#[test]
fn rotate_right_swaps_dimensions() {
    let rotated = pattern().rotate_90_right();
    assert_eq!((rotated.width(), rotated.height()), (3, 4));
    assert_eq!(at(&rotated, 2, 0), color::RED);
    assert_eq!(at(&rotated, 1, 1), color::GREEN);
    assert_eq!(at(&rotated, 0, 2), color::BLUE);
}

#[test]
fn flips_are_involutions() {
    for (w, h) in [(1, 1), (4, 3), (7, 2), (16, 9)] {
        let image = noise(w, h, (w * 31 + h) as u32);
        assert_eq!(image.flip_v().flip_v(), image);
        assert_eq!(image.flip_h().flip_h(), image);
        // two flips make a half turn
        assert_eq!(
            image.flip_v().flip_h(),
            image.rotate_90_right().rotate_90_right()
        );
    }
}

#[test]
fn rotations_invert_each_other() {
    for (w, h) in [(1, 5), (4, 3), (9, 9), (13, 2)] {
        let image = noise(w, h, (w * 7 + h) as u32);
        assert_eq!(image.rotate_90_left().rotate_90_right(), image);
        assert_eq!(image.rotate_90_right().rotate_90_left(), image);

        let mut turned = image.clone();
        for _ in 0..4 {
            turned = turned.rotate_90_right();
        }
        assert_eq!(turned, image);
    }
}

#[test]
fn receiver_is_unchanged() {
    let image = pattern();
    let snapshot = image.clone();
    let _ = image.flip_v();
    let _ = image.flip_h();
    let _ = image.rotate_90_left();
    let _ = image.rotate_90_right();
    assert_eq!(image, snapshot);
}

#[test]
fn resolution_carries_over() {
    let mut image = pattern();
    image.set_resolution(3780, 3780);
    for out in [
        image.flip_v(),
        image.flip_h(),
        image.rotate_90_left(),
        image.rotate_90_right(),
    ] {
        assert_eq!(out.header().x_pixels_per_meter, 3780);
        assert_eq!(out.header().y_pixels_per_meter, 3780);
    }
    let rotated = image.rotate_90_left();
    assert_eq!(rotated.header().width, 3);
    assert_eq!(rotated.header().height, 4);
}

#[test]
fn empty_stays_empty() {
    let empty = Bitmap::default();
    assert!(empty.flip_v().is_empty());
    assert!(empty.flip_h().is_empty());
    assert!(empty.rotate_90_left().is_empty());
    assert!(empty.rotate_90_right().is_empty());
}
