//! # rgbapack-core
//!
//! RGBA color value type and packed pixel format conversions.
//!
//! This crate provides a single value type, [`Color`], holding four `f32`
//! channels in the `[0, 1]` range, and the bit arithmetic that moves it in and
//! out of the fixed layouts consumed by graphics pipelines:
//!
//! - [`Color`] - Canonical float representation with chained, clamping mutators
//! - [`pack`] - Free pack/unpack functions for every supported layout
//! - [`PackedFormat`] - Runtime descriptor of a packed layout
//! - [`hsv`] - Hue/Saturation/Value round-trip
//! - [`hex`] - `RRGGBBAA` string encoding
//! - [`palette`] - Read-only catalog of named colors
//!
//! ## Quantization
//!
//! Float to integer packing truncates (`floor(c * max)`), it does not round.
//! Existing packed assets depend on this, so `0.999` packs to `254` in an
//! 8-bit channel, not `255`.
//!
//! ```
//! use rgbapack_core::prelude::*;
//!
//! let mut c = Color::new(1.0, 0.5, 0.0, 1.0);
//! c.mul_scalar(0.5).add_rgba(0.25, 0.0, 0.0, 0.0);
//!
//! assert_eq!(c.to_hex_string(), "BF3F007F");
//! assert_eq!(Color::from_rgba8888(0x7f7f7fff), palette::GRAY);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize [`Color`] as its `RRGGBBAA` hex string

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod format;
pub mod hex;
pub mod hsv;
pub mod pack;
pub mod palette;

// Re-exports for convenience
pub use color::{ChannelOrder, Color};
pub use error::{ParseError, Result};
pub use format::PackedFormat;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use rgbapack_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{ChannelOrder, Color};
    pub use crate::error::{ParseError, Result};
    pub use crate::format::PackedFormat;
    pub use crate::pack;
    pub use crate::palette;
}
