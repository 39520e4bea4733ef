//! Runtime description of packed color layouts.
//!
//! [`PackedFormat`] lets code choose a layout at runtime (from a texture
//! header, a config value, ...) and still go through the exact functions in
//! [`pack`](crate::pack).
//!
//! # Usage
//!
//! ```rust
//! use rgbapack_core::{Color, PackedFormat};
//!
//! let fmt: PackedFormat = "rgb565".parse()?;
//! assert_eq!(fmt.bits(), 16);
//! assert!(!fmt.has_alpha());
//!
//! let packed = fmt.pack(&Color::rgb(1.0, 0.0, 0.0));
//! assert_eq!(packed, 0xF800);
//! # Ok::<(), rgbapack_core::ParseError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::ParseError;
use crate::pack;

/// Packed integer layout.
///
/// Variant names list channels from most to least significant bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackedFormat {
    /// `r:5 g:6 b:5`, 16 bits.
    Rgb565,
    /// `r:4 g:4 b:4 a:4`, 16 bits.
    Rgba4444,
    /// `r:8 g:8 b:8`, 24 bits.
    Rgb888,
    /// `r:8 g:8 b:8 a:8`, 32 bits.
    #[default]
    Rgba8888,
    /// `a:8 r:8 g:8 b:8`, 32 bits.
    Argb8888,
    /// `a:8 b:8 g:8 r:8`, 32 bits. Used by [`Color::to_int_bits`].
    Abgr8888,
}

impl PackedFormat {
    /// All formats.
    pub const ALL: [PackedFormat; 6] = [
        Self::Rgb565,
        Self::Rgba4444,
        Self::Rgb888,
        Self::Rgba8888,
        Self::Argb8888,
        Self::Abgr8888,
    ];

    /// Total number of bits used.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Rgb565 | Self::Rgba4444 => 16,
            Self::Rgb888 => 24,
            Self::Rgba8888 | Self::Argb8888 | Self::Abgr8888 => 32,
        }
    }

    /// Bit widths of `[r, g, b, a]`. Alpha is 0 when absent.
    #[inline]
    pub const fn channel_bits(&self) -> [u32; 4] {
        match self {
            Self::Rgb565 => [5, 6, 5, 0],
            Self::Rgba4444 => [4, 4, 4, 4],
            Self::Rgb888 => [8, 8, 8, 0],
            Self::Rgba8888 | Self::Argb8888 | Self::Abgr8888 => [8, 8, 8, 8],
        }
    }

    /// Largest field value for each of `[r, g, b, a]`, `2^bits - 1`.
    #[inline]
    pub const fn max_values(&self) -> [u32; 4] {
        let bits = self.channel_bits();
        [
            (1 << bits[0]) - 1,
            (1 << bits[1]) - 1,
            (1 << bits[2]) - 1,
            (1 << bits[3]) - 1,
        ]
    }

    /// Whether the layout stores alpha.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.channel_bits()[3] != 0
    }

    /// Mask of all bits the layout may set.
    #[inline]
    pub const fn mask(&self) -> u32 {
        match self.bits() {
            32 => u32::MAX,
            n => (1 << n) - 1,
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb565 => "rgb565",
            Self::Rgba4444 => "rgba4444",
            Self::Rgb888 => "rgb888",
            Self::Rgba8888 => "rgba8888",
            Self::Argb8888 => "argb8888",
            Self::Abgr8888 => "abgr8888",
        }
    }

    /// Packs a color's channels with truncating quantization.
    pub const fn pack(&self, c: &Color) -> u32 {
        match self {
            Self::Rgb565 => pack::rgb565(c.r, c.g, c.b),
            Self::Rgba4444 => pack::rgba4444(c.r, c.g, c.b, c.a),
            Self::Rgb888 => pack::rgb888(c.r, c.g, c.b),
            Self::Rgba8888 => pack::rgba8888(c.r, c.g, c.b, c.a),
            Self::Argb8888 => pack::argb8888(c.a, c.r, c.g, c.b),
            Self::Abgr8888 => pack::abgr8888(c.r, c.g, c.b, c.a),
        }
    }

    /// Unpacks into `[r, g, b, a]`. Formats without alpha report 1.0.
    pub const fn unpack(&self, value: u32) -> [f32; 4] {
        match self {
            Self::Rgb565 => {
                let [r, g, b] = pack::unpack_rgb565(value);
                [r, g, b, 1.0]
            }
            Self::Rgba4444 => pack::unpack_rgba4444(value),
            Self::Rgb888 => {
                let [r, g, b] = pack::unpack_rgb888(value);
                [r, g, b, 1.0]
            }
            Self::Rgba8888 => pack::unpack_rgba8888(value),
            Self::Argb8888 => pack::unpack_argb8888(value),
            Self::Abgr8888 => pack::unpack_abgr8888(value),
        }
    }

    /// Decodes into a new color.
    #[inline]
    pub const fn to_color(&self, value: u32) -> Color {
        Color::from_array(self.unpack(value))
    }

    /// Decodes into an existing color.
    ///
    /// Formats without alpha leave `color.a` unchanged.
    pub fn unpack_into(&self, color: &mut Color, value: u32) {
        match self {
            Self::Rgb565 => {
                color.set_rgb565(value);
            }
            Self::Rgb888 => {
                color.set_rgb888(value);
            }
            _ => {
                let [r, g, b, a] = self.unpack(value);
                color.set_rgba(r, g, b, a);
            }
        }
    }
}

impl fmt::Display for PackedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackedFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| ParseError::unknown_format(s))
    }
}
