//! Named color catalog.
//!
//! Every entry is a `const` [`Color`], evaluated at compile time. Using one
//! copies it, so the shared catalog can never be mutated through a caller:
//!
//! ```
//! use rgbapack_core::palette;
//!
//! let mut c = palette::RED;
//! c.mul_scalar(0.5);
//! assert_eq!(palette::RED.r, 1.0);
//!
//! assert_eq!(palette::named("Royal")?, palette::ROYAL);
//! # Ok::<(), rgbapack_core::ParseError>(())
//! ```
//!
//! Packed entries are written as RGBA8888 integers.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{ParseError, Result};

// ============================================================================
// Grays
// ============================================================================

/// Opaque white.
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// `#BFBFBF`
pub const LIGHT_GRAY: Color = Color::from_rgba8888(0xbfbfbfff);
/// `#7F7F7F`
pub const GRAY: Color = Color::from_rgba8888(0x7f7f7fff);
/// `#3F3F3F`
pub const DARK_GRAY: Color = Color::from_rgba8888(0x3f3f3fff);
/// Opaque black.
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// [`WHITE`] as float-encoded ABGR8888.
pub const WHITE_FLOAT_BITS: f32 = WHITE.to_float_bits();

/// Fully transparent black.
pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);
/// Alias of [`CLEAR`].
pub const TRANSPARENT: Color = CLEAR;

// ============================================================================
// Blues
// ============================================================================

/// Pure blue.
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
/// Half-intensity blue.
pub const NAVY: Color = Color::new(0.0, 0.0, 0.5, 1.0);
/// `#4169E1`
pub const ROYAL: Color = Color::from_rgba8888(0x4169e1ff);
/// `#708090`
pub const SLATE: Color = Color::from_rgba8888(0x708090ff);
/// `#87CEEB`
pub const SKY: Color = Color::from_rgba8888(0x87ceebff);
/// Green + blue.
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
/// Half-intensity cyan.
pub const TEAL: Color = Color::new(0.0, 0.5, 0.5, 1.0);

// ============================================================================
// Greens
// ============================================================================

/// Pure green.
pub const GREEN: Color = Color::from_rgba8888(0x00ff00ff);
/// `#7FFF00`
pub const CHARTREUSE: Color = Color::from_rgba8888(0x7fff00ff);
/// `#32CD32`
pub const LIME: Color = Color::from_rgba8888(0x32cd32ff);
/// `#228B22`
pub const FOREST: Color = Color::from_rgba8888(0x228b22ff);
/// `#6B8E23`
pub const OLIVE: Color = Color::from_rgba8888(0x6b8e23ff);

// ============================================================================
// Yellows and browns
// ============================================================================

/// Red + green.
pub const YELLOW: Color = Color::from_rgba8888(0xffff00ff);
/// `#FFD700`
pub const GOLD: Color = Color::from_rgba8888(0xffd700ff);
/// `#DAA520`
pub const GOLDENROD: Color = Color::from_rgba8888(0xdaa520ff);
/// `#FFA500`
pub const ORANGE: Color = Color::from_rgba8888(0xffa500ff);
/// `#8B4513`
pub const BROWN: Color = Color::from_rgba8888(0x8b4513ff);
/// `#D2B48C`
pub const TAN: Color = Color::from_rgba8888(0xd2b48cff);
/// `#B22222`
pub const FIREBRICK: Color = Color::from_rgba8888(0xb22222ff);

// ============================================================================
// Reds and purples
// ============================================================================

/// Pure red.
pub const RED: Color = Color::from_rgba8888(0xff0000ff);
/// `#FF341C`
pub const SCARLET: Color = Color::from_rgba8888(0xff341cff);
/// `#FF7F50`
pub const CORAL: Color = Color::from_rgba8888(0xff7f50ff);
/// `#FA8072`
pub const SALMON: Color = Color::from_rgba8888(0xfa8072ff);
/// `#FF69B4`
pub const PINK: Color = Color::from_rgba8888(0xff69b4ff);
/// Red + blue.
pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);
/// `#A020F0`
pub const PURPLE: Color = Color::from_rgba8888(0xa020f0ff);
/// `#EE82EE`
pub const VIOLET: Color = Color::from_rgba8888(0xee82eeff);
/// `#B03060`
pub const MAROON: Color = Color::from_rgba8888(0xb03060ff);

/// Every named color, with its lowercase name.
pub const ALL: &[(&str, Color)] = &[
    ("white", WHITE),
    ("light_gray", LIGHT_GRAY),
    ("gray", GRAY),
    ("dark_gray", DARK_GRAY),
    ("black", BLACK),
    ("clear", CLEAR),
    ("transparent", TRANSPARENT),
    ("blue", BLUE),
    ("navy", NAVY),
    ("royal", ROYAL),
    ("slate", SLATE),
    ("sky", SKY),
    ("cyan", CYAN),
    ("teal", TEAL),
    ("green", GREEN),
    ("chartreuse", CHARTREUSE),
    ("lime", LIME),
    ("forest", FOREST),
    ("olive", OLIVE),
    ("yellow", YELLOW),
    ("gold", GOLD),
    ("goldenrod", GOLDENROD),
    ("orange", ORANGE),
    ("brown", BROWN),
    ("tan", TAN),
    ("firebrick", FIREBRICK),
    ("red", RED),
    ("scarlet", SCARLET),
    ("coral", CORAL),
    ("salmon", SALMON),
    ("pink", PINK),
    ("magenta", MAGENTA),
    ("purple", PURPLE),
    ("violet", VIOLET),
    ("maroon", MAROON),
];

/// Name index, built on first lookup.
fn index() -> &'static HashMap<&'static str, Color> {
    static INDEX: OnceLock<HashMap<&'static str, Color>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let map: HashMap<_, _> = ALL.iter().copied().collect();
        debug!(entries = map.len(), "built palette name index");
        map
    })
}

/// Looks up a named color.
///
/// Case-insensitive; `-` and spaces are treated as `_`, so `"Light Gray"`,
/// `"light-gray"` and `"LIGHT_GRAY"` all resolve.
///
/// # Errors
///
/// [`ParseError::UnknownName`] if no entry matches.
pub fn named(name: &str) -> Result<Color> {
    let key: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect();

    match index().get(key.as_str()) {
        Some(c) => Ok(*c),
        None => {
            trace!(name, "unknown palette name");
            Err(ParseError::unknown_name(name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_packed_constants() {
        assert_eq!(RED.to_array(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(YELLOW.to_array(), [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(LIGHT_GRAY.to_hex_string(), "BFBFBFFF");
        assert_eq!(SKY.to_hex_string(), "87CEEBFF");
        assert_eq!(MAROON.to_hex_string(), "B03060FF");
    }

    #[test]
    fn test_gray() {
        assert_relative_eq!(GRAY.r, 0.498, epsilon = 1e-3);
        assert_eq!(GRAY.r, GRAY.g);
        assert_eq!(GRAY.g, GRAY.b);
        assert_eq!(GRAY.a, 1.0);
    }

    #[test]
    fn test_clear_and_transparent() {
        assert_eq!(CLEAR, TRANSPARENT);
        assert_eq!(CLEAR.to_int_bits(), 0);
    }

    #[test]
    fn test_white_float_bits() {
        assert_eq!(WHITE_FLOAT_BITS.to_bits(), 0xFEFF_FFFF);
        assert_eq!(Color::from_float_bits(WHITE_FLOAT_BITS), WHITE);
    }

    #[test]
    fn test_all_in_range_and_unique_names() {
        let names: std::collections::HashSet<_> = ALL.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), ALL.len());
        for (_, c) in ALL {
            assert!(c.to_array().iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_named() {
        assert_eq!(named("red").unwrap(), RED);
        assert_eq!(named("Light Gray").unwrap(), LIGHT_GRAY);
        assert_eq!(named(" dark-gray ").unwrap(), DARK_GRAY);
        assert_eq!(named("GOLDENROD").unwrap(), GOLDENROD);
        assert_eq!(
            named("octarine"),
            Err(ParseError::UnknownName { name: "octarine".into() })
        );
    }

    #[test]
    fn test_constants_are_copies() {
        let mut c = WHITE;
        c.mul_scalar(0.0);
        assert_eq!(WHITE.to_array(), [1.0; 4]);
    }
}
