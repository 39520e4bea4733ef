//! `RRGGBBAA` hex string encoding.
//!
//! The string layout is RGBA, most significant byte first. This is a
//! different order from [`Color::to_int_bits`], which is ABGR.
//!
//! - Formatting: [`Color::to_hex_string`], `Display` (uppercase), `{:x}` / `{:X}`
//! - Parsing: [`Color::from_hex`], [`Color::set_hex`], [`str::parse`]
//!
//! Parsing accepts an optional leading `#` followed by exactly 6 (`RRGGBB`,
//! opaque) or 8 (`RRGGBBAA`) hex digits, in either case.
//!
//! ```
//! use rgbapack_core::Color;
//!
//! let red: Color = "#FF0000".parse()?;
//! assert_eq!(red.to_string(), "FF0000FF");
//! assert_eq!(format!("{red:x}"), "ff0000ff");
//! # Ok::<(), rgbapack_core::ParseError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::color::Color;
use crate::error::{ParseError, Result};

/// Reads one hex digit.
#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses `RRGGBB` or `RRGGBBAA` (optional `#`) into `[r, g, b, a]` bytes.
///
/// Missing alpha reads as `0xFF`.
pub fn parse_rgba_bytes(hex: &str) -> Result<[u8; 4]> {
    let body = hex.strip_prefix('#').unwrap_or(hex);
    if body.is_empty() {
        trace!(input = hex, "rejecting empty hex color");
        return Err(ParseError::Empty);
    }

    let len = body.chars().count();
    if len != 6 && len != 8 {
        trace!(input = hex, len, "rejecting hex color length");
        return Err(ParseError::invalid_length(len));
    }

    let mut digits = [0_u8; 8];
    for (index, (slot, found)) in digits.iter_mut().zip(body.chars()).enumerate() {
        *slot = match u8::try_from(found).ok().and_then(nibble) {
            Some(d) => d,
            None => {
                trace!(input = hex, index, "rejecting non-hex digit");
                return Err(ParseError::invalid_digit(index, found));
            }
        };
    }

    let mut out = [0xFF_u8; 4];
    for (slot, pair) in out.iter_mut().zip(digits[..len].chunks_exact(2)) {
        *slot = (pair[0] << 4) | pair[1];
    }
    Ok(out)
}

impl Color {
    /// Parses `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
    ///
    /// Each byte is divided by 255. A missing alpha pair means opaque.
    ///
    /// # Errors
    ///
    /// [`ParseError`] for empty input, a body that is not 6 or 8 digits long,
    /// or a non-hex character.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut c = Self::default();
        c.set_hex(hex)?;
        Ok(c)
    }

    /// Parses a hex string into this color.
    ///
    /// On error the color is left unchanged.
    pub fn set_hex(&mut self, hex: &str) -> Result<&mut Self> {
        let [r, g, b, a] = parse_rgba_bytes(hex)?;
        Ok(self.set_rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ))
    }

    /// Formats as 8 uppercase hex digits, `RRGGBBAA`.
    ///
    /// Each channel is truncated (`floor(255 * c)`), matching the packers.
    pub fn to_hex_string(&self) -> String {
        format!("{self:08X}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.to_rgba8888())
    }
}

impl fmt::UpperHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_rgba8888(), f)
    }
}

impl fmt::LowerHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_rgba8888(), f)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct HexVisitor;

    impl Visitor<'_> for HexVisitor {
        type Value = Color;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an RRGGBB or RRGGBBAA hex color string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Color, E> {
            Color::from_hex(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
            deserializer.deserialize_str(HexVisitor)
        }
    }
}
