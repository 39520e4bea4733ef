//! The [`Color`] value type.
//!
//! A color holds four `f32` channels, nominally in `[0, 1]`. Every mutating
//! operation clamps all four channels before returning, so the range holds
//! after each step of a chain, not only at its end:
//!
//! ```
//! use rgbapack_core::Color;
//!
//! let mut c = Color::new(0.8, 0.5, 0.2, 1.0);
//! // 0.8 * 2.0 saturates to 1.0 before the subtraction runs.
//! c.mul_scalar(2.0).sub_rgba(0.5, 0.0, 0.0, 0.0);
//! assert_eq!(c.r, 0.5);
//! ```
//!
//! # Equality
//!
//! Two colors are equal when their ABGR8888 encodings ([`Color::to_int_bits`])
//! are equal. Colors whose floats differ but quantize to the same bytes compare
//! equal and hash the same.
//!
//! # Memory Layout
//!
//! `#[repr(C)]` with channels in `[R, G, B, A]` order.

use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

use crate::pack;

/// Clamps a channel into `[0, 1]`.
///
/// NaN maps to 0.0.
#[inline]
pub(crate) const fn clamp_unit(v: f32) -> f32 {
    if v >= 0.0 {
        if v > 1.0 { 1.0 } else { v }
    } else {
        0.0
    }
}

/// Channel order used by [`Color::channels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelOrder {
    /// `[r, g, b, a]`
    #[default]
    Rgba,
    /// `[a, r, g, b]`
    Argb,
    /// `[r, g, b]`, alpha dropped
    Rgb,
}

/// RGBA color with `f32` channels in `[0, 1]`.
///
/// # Construction
///
/// - [`Color::default`] - `(0, 0, 0, 0)`
/// - [`Color::new`] / [`Color::rgb`] - from channels, clamped
/// - [`Color::from_rgba8888`] and the other `from_*` decoders
/// - [`Color::from_hex`] / [`str::parse`]
///
/// Fields are public. Writing them directly skips clamping; call
/// [`Color::clamp`] afterwards if the value may be out of range.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Creates a color from channels, clamping each into `[0, 1]`.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Creates an opaque color (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color from a `[r, g, b, a]` array, clamped.
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    // ------------------------------------------------------------------------
    // Decoders
    // ------------------------------------------------------------------------

    /// Decodes an RGBA8888 integer (`r:8 g:8 b:8 a:8`).
    #[inline]
    pub const fn from_rgba8888(value: u32) -> Self {
        Self::from_array(pack::unpack_rgba8888(value))
    }

    /// Decodes an ARGB8888 integer (`a:8 r:8 g:8 b:8`).
    #[inline]
    pub const fn from_argb8888(value: u32) -> Self {
        Self::from_array(pack::unpack_argb8888(value))
    }

    /// Decodes an ABGR8888 integer (`a:8 b:8 g:8 r:8`).
    ///
    /// Inverse of [`Color::to_int_bits`].
    #[inline]
    pub const fn from_abgr8888(value: u32) -> Self {
        Self::from_array(pack::unpack_abgr8888(value))
    }

    /// Decodes a float produced by [`Color::to_float_bits`].
    ///
    /// Alpha is recovered to within one 8-bit step.
    #[inline]
    pub const fn from_float_bits(value: f32) -> Self {
        Self::from_array(pack::unpack_float_bits(value))
    }

    /// Decodes an RGBA4444 integer.
    #[inline]
    pub const fn from_rgba4444(value: u32) -> Self {
        Self::from_array(pack::unpack_rgba4444(value))
    }

    /// Decodes an RGB565 integer into an opaque color.
    #[inline]
    pub const fn from_rgb565(value: u32) -> Self {
        let [r, g, b] = pack::unpack_rgb565(value);
        Self::rgb(r, g, b)
    }

    /// Decodes an RGB888 integer into an opaque color.
    #[inline]
    pub const fn from_rgb888(value: u32) -> Self {
        let [r, g, b] = pack::unpack_rgb888(value);
        Self::rgb(r, g, b)
    }

    // ------------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------------

    /// Copies all channels from `other`.
    #[inline]
    pub fn set(&mut self, other: &Color) -> &mut Self {
        *self = *other;
        self
    }

    /// Sets all channels, then clamps.
    #[inline]
    pub fn set_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        self.r = r;
        self.g = g;
        self.b = b;
        self.a = a;
        self.clamp()
    }

    /// Sets all channels from an RGBA8888 integer.
    #[inline]
    pub fn set_rgba8888(&mut self, value: u32) -> &mut Self {
        let [r, g, b, a] = pack::unpack_rgba8888(value);
        self.set_rgba(r, g, b, a)
    }

    /// Sets all channels from an RGBA4444 integer.
    #[inline]
    pub fn set_rgba4444(&mut self, value: u32) -> &mut Self {
        let [r, g, b, a] = pack::unpack_rgba4444(value);
        self.set_rgba(r, g, b, a)
    }

    /// Sets all channels from an ARGB8888 integer.
    #[inline]
    pub fn set_argb8888(&mut self, value: u32) -> &mut Self {
        let [r, g, b, a] = pack::unpack_argb8888(value);
        self.set_rgba(r, g, b, a)
    }

    /// Sets all channels from an ABGR8888 integer.
    #[inline]
    pub fn set_abgr8888(&mut self, value: u32) -> &mut Self {
        let [r, g, b, a] = pack::unpack_abgr8888(value);
        self.set_rgba(r, g, b, a)
    }

    /// Sets all channels from a float-encoded ABGR8888 value.
    #[inline]
    pub fn set_float_bits(&mut self, value: f32) -> &mut Self {
        let [r, g, b, a] = pack::unpack_float_bits(value);
        self.set_rgba(r, g, b, a)
    }

    /// Sets RGB from an RGB565 integer. Alpha is left untouched.
    #[inline]
    pub fn set_rgb565(&mut self, value: u32) -> &mut Self {
        let [r, g, b] = pack::unpack_rgb565(value);
        self.set_rgba(r, g, b, self.a)
    }

    /// Sets RGB from an RGB888 integer. Alpha is left untouched.
    #[inline]
    pub fn set_rgb888(&mut self, value: u32) -> &mut Self {
        let [r, g, b] = pack::unpack_rgb888(value);
        self.set_rgba(r, g, b, self.a)
    }

    // ------------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------------

    /// Adds `other` channel-wise, then clamps.
    #[inline]
    pub fn add_color(&mut self, other: &Color) -> &mut Self {
        self.add_rgba(other.r, other.g, other.b, other.a)
    }

    /// Adds the given channel values, then clamps.
    #[inline]
    pub fn add_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        self.r += r;
        self.g += g;
        self.b += b;
        self.a += a;
        self.clamp()
    }

    /// Subtracts `other` channel-wise, then clamps.
    #[inline]
    pub fn sub_color(&mut self, other: &Color) -> &mut Self {
        self.sub_rgba(other.r, other.g, other.b, other.a)
    }

    /// Subtracts the given channel values, then clamps.
    #[inline]
    pub fn sub_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        self.r -= r;
        self.g -= g;
        self.b -= b;
        self.a -= a;
        self.clamp()
    }

    /// Multiplies by `other` channel-wise, then clamps.
    #[inline]
    pub fn mul_color(&mut self, other: &Color) -> &mut Self {
        self.mul_rgba(other.r, other.g, other.b, other.a)
    }

    /// Multiplies every channel, alpha included, by `value`, then clamps.
    #[inline]
    pub fn mul_scalar(&mut self, value: f32) -> &mut Self {
        self.mul_rgba(value, value, value, value)
    }

    /// Multiplies by the given channel values, then clamps.
    #[inline]
    pub fn mul_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        self.r *= r;
        self.g *= g;
        self.b *= b;
        self.a *= a;
        self.clamp()
    }

    /// Moves towards `target` by `t`, then clamps.
    ///
    /// `t` is not validated. Values outside `[0, 1]` extrapolate and the
    /// result is clamped.
    #[inline]
    pub fn lerp(&mut self, target: &Color, t: f32) -> &mut Self {
        self.lerp_rgba(target.r, target.g, target.b, target.a, t)
    }

    /// Moves towards the given channel values by `t`, then clamps.
    #[inline]
    pub fn lerp_rgba(&mut self, r: f32, g: f32, b: f32, a: f32, t: f32) -> &mut Self {
        self.r += t * (r - self.r);
        self.g += t * (g - self.g);
        self.b += t * (b - self.b);
        self.a += t * (a - self.a);
        self.clamp()
    }

    /// Clamps every channel into `[0, 1]`.
    #[inline]
    pub fn clamp(&mut self) -> &mut Self {
        self.r = clamp_unit(self.r);
        self.g = clamp_unit(self.g);
        self.b = clamp_unit(self.b);
        self.a = clamp_unit(self.a);
        self
    }

    /// Premultiply RGB by alpha.
    ///
    /// `(R, G, B, A) -> (R*A, G*A, B*A, A)`
    #[inline]
    pub fn premultiply_alpha(&mut self) -> &mut Self {
        self.r *= self.a;
        self.g *= self.a;
        self.b *= self.a;
        self
    }

    // ------------------------------------------------------------------------
    // Encoders
    // ------------------------------------------------------------------------

    /// Packs into ABGR8888 (`a:8 b:8 g:8 r:8`).
    #[inline]
    pub const fn to_int_bits(&self) -> u32 {
        pack::abgr8888(self.r, self.g, self.b, self.a)
    }

    /// Packs into ABGR8888 with an even alpha byte and reinterprets as `f32`.
    ///
    /// The result is never NaN or infinite. See [`pack::float_bits`].
    #[inline]
    pub const fn to_float_bits(&self) -> f32 {
        pack::float_bits(self.r, self.g, self.b, self.a)
    }

    /// Packs into RGBA8888.
    #[inline]
    pub const fn to_rgba8888(&self) -> u32 {
        pack::rgba8888(self.r, self.g, self.b, self.a)
    }

    /// Packs into ARGB8888.
    #[inline]
    pub const fn to_argb8888(&self) -> u32 {
        pack::argb8888(self.a, self.r, self.g, self.b)
    }

    /// Packs into RGBA4444.
    #[inline]
    pub const fn to_rgba4444(&self) -> u32 {
        pack::rgba4444(self.r, self.g, self.b, self.a)
    }

    /// Packs RGB into RGB565.
    #[inline]
    pub const fn to_rgb565(&self) -> u32 {
        pack::rgb565(self.r, self.g, self.b)
    }

    /// Packs RGB into RGB888.
    #[inline]
    pub const fn to_rgb888(&self) -> u32 {
        pack::rgb888(self.r, self.g, self.b)
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels as `[a, r, g, b]`.
    #[inline]
    pub const fn to_argb_array(&self) -> [f32; 4] {
        [self.a, self.r, self.g, self.b]
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn to_rgb_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels in the requested order.
    pub fn channels(&self, order: ChannelOrder) -> Vec<f32> {
        match order {
            ChannelOrder::Rgba => self.to_array().to_vec(),
            ChannelOrder::Argb => self.to_argb_array().to_vec(),
            ChannelOrder::Rgb => self.to_rgb_array().to_vec(),
        }
    }
}

impl PartialEq for Color {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_int_bits() == other.to_int_bits()
    }
}

impl Eq for Color {}

impl Hash for Color {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_int_bits().hash(state);
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self.add_color(&rhs);
        self
    }
}

impl Sub for Color {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self.sub_color(&rhs);
        self
    }
}

impl Mul for Color {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: Self) -> Self::Output {
        self.mul_color(&rhs);
        self
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: f32) -> Self::Output {
        self.mul_scalar(rhs);
        self
    }
}
