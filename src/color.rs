//! Named colours.

use crate::pixel::Pixel;

pub const AQUA: Pixel = Pixel::new(0, 255, 255);
pub const BEIGE: Pixel = Pixel::new(245, 245, 220);
pub const BLACK: Pixel = Pixel::new(0, 0, 0);
pub const BLUE: Pixel = Pixel::new(0, 0, 255);
pub const BROWN: Pixel = Pixel::new(165, 42, 42);
pub const CHOCOLATE: Pixel = Pixel::new(210, 105, 30);
pub const CORAL: Pixel = Pixel::new(255, 127, 80);
pub const CRIMSON: Pixel = Pixel::new(220, 20, 60);
pub const CYAN: Pixel = Pixel::new(0, 255, 255);
pub const FIREBRICK: Pixel = Pixel::new(178, 34, 34);
pub const GOLD: Pixel = Pixel::new(255, 215, 0);
pub const GRAY: Pixel = Pixel::new(128, 128, 128);
pub const GREEN: Pixel = Pixel::new(0, 255, 0);
pub const INDIGO: Pixel = Pixel::new(75, 0, 130);
pub const LAVENDER: Pixel = Pixel::new(230, 230, 250);
pub const LIME: Pixel = Pixel::new(0, 255, 0);
pub const MAGENTA: Pixel = Pixel::new(255, 0, 255);
pub const MAROON: Pixel = Pixel::new(128, 0, 0);
pub const NAVY: Pixel = Pixel::new(0, 0, 128);
pub const OLIVE: Pixel = Pixel::new(128, 128, 0);
pub const ORANGE: Pixel = Pixel::new(255, 165, 0);
pub const PINK: Pixel = Pixel::new(255, 192, 203);
pub const PURPLE: Pixel = Pixel::new(128, 0, 128);
pub const RED: Pixel = Pixel::new(255, 0, 0);
pub const SALMON: Pixel = Pixel::new(250, 128, 114);
pub const SILVER: Pixel = Pixel::new(192, 192, 192);
pub const SNOW: Pixel = Pixel::new(255, 250, 250);
pub const TEAL: Pixel = Pixel::new(0, 128, 128);
pub const TOMATO: Pixel = Pixel::new(255, 99, 71);
pub const TURQUOISE: Pixel = Pixel::new(64, 224, 208);
pub const VIOLET: Pixel = Pixel::new(238, 130, 238);
pub const WHEAT: Pixel = Pixel::new(245, 222, 179);
pub const WHITE: Pixel = Pixel::new(255, 255, 255);
pub const YELLOW: Pixel = Pixel::new(255, 255, 0);

/// Every named colour, alphabetically.
pub const ALL: &[(&str, Pixel)] = &[
    ("Aqua", AQUA),
    ("Beige", BEIGE),
    ("Black", BLACK),
    ("Blue", BLUE),
    ("Brown", BROWN),
    ("Chocolate", CHOCOLATE),
    ("Coral", CORAL),
    ("Crimson", CRIMSON),
    ("Cyan", CYAN),
    ("Firebrick", FIREBRICK),
    ("Gold", GOLD),
    ("Gray", GRAY),
    ("Green", GREEN),
    ("Indigo", INDIGO),
    ("Lavender", LAVENDER),
    ("Lime", LIME),
    ("Magenta", MAGENTA),
    ("Maroon", MAROON),
    ("Navy", NAVY),
    ("Olive", OLIVE),
    ("Orange", ORANGE),
    ("Pink", PINK),
    ("Purple", PURPLE),
    ("Red", RED),
    ("Salmon", SALMON),
    ("Silver", SILVER),
    ("Snow", SNOW),
    ("Teal", TEAL),
    ("Tomato", TOMATO),
    ("Turquoise", TURQUOISE),
    ("Violet", VIOLET),
    ("Wheat", WHEAT),
    ("White", WHITE),
    ("Yellow", YELLOW),
];

/// Look up a named colour, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<Pixel> {
    ALL.iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, p)| p)
}
