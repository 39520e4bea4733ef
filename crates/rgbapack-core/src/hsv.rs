//! Hue/Saturation/Value conversion.
//!
//! Hue is in degrees, saturation and value nominally in `[0, 1]`. HSV inputs
//! are deliberately not clamped so high-range values survive the intermediate
//! math; only the resulting RGB channels are clamped.
//!
//! # Hue wrapping
//!
//! Hue is reduced with a Euclidean remainder, so `h` and `h + 360 * k` give
//! the same color for any integer `k`, negative hues included.
//!
//! ```
//! use rgbapack_core::Color;
//!
//! let red = Color::from_hsv(0.0, 1.0, 1.0);
//! assert_eq!(red, Color::from_hsv(-360.0, 1.0, 1.0));
//! assert_eq!(red.to_hsv(), [0.0, 1.0, 1.0]);
//! ```

use crate::color::Color;

/// Splits a hue in degrees into a sector index `0..6` and the fractional
/// position inside that sector.
#[inline]
fn hue_sector(h: f32) -> (u32, f32) {
    let x = (h / 60.0 + 6.0).rem_euclid(6.0);
    let sector = x.floor();
    // rem_euclid can round up to exactly 6.0 for tiny negative inputs
    ((sector as u32) % 6, x - sector)
}

/// Converts HSV to `[r, g, b]` without clamping.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let (i, f) = hue_sector(h);
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Converts `[r, g, b]` to `[h, s, v]`.
///
/// Achromatic input (`max == min`) reports hue 0. Black reports saturation 0.
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let range = max - min;

    let h = if range == 0.0 {
        0.0
    } else if max == r {
        (60.0 * (g - b) / range + 360.0) % 360.0
    } else if max == g {
        60.0 * (b - r) / range + 120.0
    } else {
        60.0 * (r - g) / range + 240.0
    };
    let s = if max > 0.0 { 1.0 - min / max } else { 0.0 };

    [h, s, max]
}

impl Color {
    /// Creates an opaque color from hue (degrees), saturation and value.
    #[inline]
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let mut c = Self::rgb(0.0, 0.0, 0.0);
        c.set_hsv(h, s, v);
        c
    }

    /// Sets RGB from hue (degrees), saturation and value, then clamps.
    ///
    /// Alpha is left untouched. Inverse of [`Color::to_hsv`].
    #[inline]
    pub fn set_hsv(&mut self, h: f32, s: f32, v: f32) -> &mut Self {
        let [r, g, b] = hsv_to_rgb(h, s, v);
        self.set_rgba(r, g, b, self.a)
    }

    /// Sets RGB from an `[h, s, v]` array.
    #[inline]
    pub fn set_hsv_array(&mut self, hsv: [f32; 3]) -> &mut Self {
        self.set_hsv(hsv[0], hsv[1], hsv[2])
    }

    /// Extracts `[h, s, v]`. Inverse of [`Color::set_hsv`].
    #[inline]
    pub fn to_hsv(&self) -> [f32; 3] {
        rgb_to_hsv(self.to_rgb_array())
    }
}
