//! Packing and unpacking of raw channel values.
//!
//! Free functions for every supported layout, working on plain numbers with no
//! [`Color`](crate::Color) involved. Bit layouts are listed MSB to LSB:
//!
//! | Layout | Bits | Pack | Unpack |
//! |--------|------|------|--------|
//! | RGB565 | `r:5 g:6 b:5` | [`rgb565`] | [`unpack_rgb565`] |
//! | RGBA4444 | `r:4 g:4 b:4 a:4` | [`rgba4444`] | [`unpack_rgba4444`] |
//! | RGB888 | `r:8 g:8 b:8` | [`rgb888`] | [`unpack_rgb888`] |
//! | RGBA8888 | `r:8 g:8 b:8 a:8` | [`rgba8888`] | [`unpack_rgba8888`] |
//! | ARGB8888 | `a:8 r:8 g:8 b:8` | [`argb8888`] | [`unpack_argb8888`] |
//! | ABGR8888 | `a:8 b:8 g:8 r:8` | [`abgr8888`] | [`unpack_abgr8888`] |
//! | ABGR8888 as `f32` | as above, alpha even | [`float_bits`] | [`unpack_float_bits`] |
//!
//! # Quantization
//!
//! A float channel `c` maps to `floor(c * max)` where `max` is `2^bits - 1`.
//! This is truncation, not rounding, and is kept for bit compatibility with
//! existing packed data. Unpacking divides the field by `max`, so
//! `pack(unpack(n)) == n` for every packed `n`, while `unpack(pack(c)) == c`
//! only holds when `c` is a multiple of `1 / max`.
//!
//! No range checking is performed on float inputs. Values above 1.0 spill into
//! the neighbouring field; negative values and NaN saturate to 0.
//!
//! # Unpacked order
//!
//! Every `unpack_*` function returns channels in `[r, g, b]` or `[r, g, b, a]`
//! order regardless of the packed order.
//!
//! ```
//! use rgbapack_core::pack;
//!
//! let packed = pack::rgb565(1.0, 0.5, 0.0);
//! assert_eq!(packed, 0b11111_011111_00000);
//! assert_eq!(pack::unpack_rgb565(packed), [1.0, 31.0 / 63.0, 0.0]);
//! ```

/// Mask applied to ABGR8888 before reinterpreting as `f32`.
///
/// Clears the lowest alpha bit, which is also the lowest exponent bit of the
/// float. With that bit cleared the exponent can never be all ones, so the
/// result is never NaN or infinite.
pub const FLOAT_BITS_MASK: u32 = 0xFEFF_FFFF;

/// Maximum value of a 4-bit field.
pub const MAX_4: f32 = 15.0;
/// Maximum value of a 5-bit field.
pub const MAX_5: f32 = 31.0;
/// Maximum value of a 6-bit field.
pub const MAX_6: f32 = 63.0;
/// Maximum value of an 8-bit field.
pub const MAX_8: f32 = 255.0;

/// Truncating float to field quantization.
#[inline]
pub const fn quantize(c: f32, max: f32) -> u32 {
    (c * max) as u32
}

/// Field to unit float.
#[inline]
pub const fn dequantize(field: u32, max: f32) -> f32 {
    field as f32 / max
}

// ============================================================================
// Float channels -> packed
// ============================================================================

/// Packs `r, g, b` into RGB565.
#[inline]
pub const fn rgb565(r: f32, g: f32, b: f32) -> u32 {
    (quantize(r, MAX_5) << 11) | (quantize(g, MAX_6) << 5) | quantize(b, MAX_5)
}

/// Packs `r, g, b, a` into RGBA4444.
#[inline]
pub const fn rgba4444(r: f32, g: f32, b: f32, a: f32) -> u32 {
    (quantize(r, MAX_4) << 12)
        | (quantize(g, MAX_4) << 8)
        | (quantize(b, MAX_4) << 4)
        | quantize(a, MAX_4)
}

/// Packs `r, g, b` into RGB888.
#[inline]
pub const fn rgb888(r: f32, g: f32, b: f32) -> u32 {
    (quantize(r, MAX_8) << 16) | (quantize(g, MAX_8) << 8) | quantize(b, MAX_8)
}

/// Packs `r, g, b, a` into RGBA8888.
#[inline]
pub const fn rgba8888(r: f32, g: f32, b: f32, a: f32) -> u32 {
    (quantize(r, MAX_8) << 24)
        | (quantize(g, MAX_8) << 16)
        | (quantize(b, MAX_8) << 8)
        | quantize(a, MAX_8)
}

/// Packs `a, r, g, b` into ARGB8888.
///
/// Arguments follow the packed order, alpha first.
#[inline]
pub const fn argb8888(a: f32, r: f32, g: f32, b: f32) -> u32 {
    (quantize(a, MAX_8) << 24)
        | (quantize(r, MAX_8) << 16)
        | (quantize(g, MAX_8) << 8)
        | quantize(b, MAX_8)
}

/// Packs `r, g, b, a` into ABGR8888.
///
/// This is the layout used for [`Color::to_int_bits`](crate::Color::to_int_bits)
/// and for color equality.
#[inline]
pub const fn abgr8888(r: f32, g: f32, b: f32, a: f32) -> u32 {
    (quantize(a, MAX_8) << 24)
        | (quantize(b, MAX_8) << 16)
        | (quantize(g, MAX_8) << 8)
        | quantize(r, MAX_8)
}

/// Packs 8-bit channels into ABGR8888.
#[inline]
pub const fn abgr8888_from_bytes(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | r as u32
}

/// Packs `r, g, b, a` into ABGR8888 and reinterprets it as an `f32`.
///
/// The lowest alpha bit is dropped (see [`FLOAT_BITS_MASK`]), so alpha only
/// keeps its even values. Decoding with [`unpack_float_bits`] is lossy for
/// alpha by at most one step.
#[inline]
pub const fn float_bits(r: f32, g: f32, b: f32, a: f32) -> f32 {
    f32::from_bits(abgr8888(r, g, b, a) & FLOAT_BITS_MASK)
}

/// Packs 8-bit channels into the float-encoded ABGR8888 layout.
#[inline]
pub const fn float_bits_from_bytes(r: u8, g: u8, b: u8, a: u8) -> f32 {
    f32::from_bits(abgr8888_from_bytes(r, g, b, a) & FLOAT_BITS_MASK)
}

/// Quantizes a single alpha value to 8 bits.
#[inline]
pub const fn alpha(a: f32) -> u32 {
    quantize(a, MAX_8)
}

/// Packs luminance and alpha into a 16-bit `l:8 a:8` value.
#[inline]
pub const fn luminance_alpha(luminance: f32, a: f32) -> u32 {
    (quantize(luminance, MAX_8) << 8) | quantize(a, MAX_8)
}

// ============================================================================
// Packed -> float channels
// ============================================================================

/// Unpacks RGB565 into `[r, g, b]`.
#[inline]
pub const fn unpack_rgb565(value: u32) -> [f32; 3] {
    [
        dequantize((value & 0x0000_F800) >> 11, MAX_5),
        dequantize((value & 0x0000_07E0) >> 5, MAX_6),
        dequantize(value & 0x0000_001F, MAX_5),
    ]
}

/// Unpacks RGBA4444 into `[r, g, b, a]`.
#[inline]
pub const fn unpack_rgba4444(value: u32) -> [f32; 4] {
    [
        dequantize((value & 0x0000_F000) >> 12, MAX_4),
        dequantize((value & 0x0000_0F00) >> 8, MAX_4),
        dequantize((value & 0x0000_00F0) >> 4, MAX_4),
        dequantize(value & 0x0000_000F, MAX_4),
    ]
}

/// Unpacks RGB888 into `[r, g, b]`.
#[inline]
pub const fn unpack_rgb888(value: u32) -> [f32; 3] {
    [
        dequantize((value & 0x00FF_0000) >> 16, MAX_8),
        dequantize((value & 0x0000_FF00) >> 8, MAX_8),
        dequantize(value & 0x0000_00FF, MAX_8),
    ]
}

/// Unpacks RGBA8888 into `[r, g, b, a]`.
#[inline]
pub const fn unpack_rgba8888(value: u32) -> [f32; 4] {
    [
        dequantize((value & 0xFF00_0000) >> 24, MAX_8),
        dequantize((value & 0x00FF_0000) >> 16, MAX_8),
        dequantize((value & 0x0000_FF00) >> 8, MAX_8),
        dequantize(value & 0x0000_00FF, MAX_8),
    ]
}

/// Unpacks ARGB8888 into `[r, g, b, a]`.
#[inline]
pub const fn unpack_argb8888(value: u32) -> [f32; 4] {
    [
        dequantize((value & 0x00FF_0000) >> 16, MAX_8),
        dequantize((value & 0x0000_FF00) >> 8, MAX_8),
        dequantize(value & 0x0000_00FF, MAX_8),
        dequantize((value & 0xFF00_0000) >> 24, MAX_8),
    ]
}

/// Unpacks ABGR8888 into `[r, g, b, a]`.
#[inline]
pub const fn unpack_abgr8888(value: u32) -> [f32; 4] {
    [
        dequantize(value & 0x0000_00FF, MAX_8),
        dequantize((value & 0x0000_FF00) >> 8, MAX_8),
        dequantize((value & 0x00FF_0000) >> 16, MAX_8),
        dequantize((value & 0xFF00_0000) >> 24, MAX_8),
    ]
}

/// Recovers the ABGR8888 integer from a float produced by [`float_bits`].
///
/// The stored alpha byte is always even; it is scaled by `255 / 254` and
/// OR-ed back so that a stored 254 comes back as 255.
#[inline]
pub const fn float_bits_to_abgr8888(value: f32) -> u32 {
    let bits = value.to_bits();
    let alpha = ((bits >> 24) as f32 * (255.0 / 254.0)) as u32;
    bits | (alpha << 24)
}

/// Unpacks a float-encoded ABGR8888 value into `[r, g, b, a]`.
#[inline]
pub const fn unpack_float_bits(value: f32) -> [f32; 4] {
    unpack_abgr8888(float_bits_to_abgr8888(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts() {
        assert_eq!(rgb565(1.0, 0.0, 0.0), 0xF800);
        assert_eq!(rgb565(0.0, 1.0, 0.0), 0x07E0);
        assert_eq!(rgb565(0.0, 0.0, 1.0), 0x001F);
        assert_eq!(rgba4444(1.0, 0.0, 1.0, 0.0), 0xF0F0);
        assert_eq!(rgb888(1.0, 0.0, 1.0), 0xFF00FF);
        assert_eq!(rgba8888(1.0, 0.0, 0.0, 1.0), 0xFF0000FF);
        assert_eq!(argb8888(1.0, 1.0, 0.0, 0.0), 0xFFFF0000);
        assert_eq!(abgr8888(1.0, 0.0, 0.0, 1.0), 0xFF0000FF);
        assert_eq!(abgr8888(0.0, 0.0, 1.0, 0.0), 0x00FF0000);
    }

    #[test]
    fn test_truncation_not_rounding() {
        assert_eq!(alpha(1.0), 255);
        assert_eq!(alpha(0.999), 254);
        assert_eq!(alpha(0.5), 127);
        assert_eq!(rgb565(0.99, 0.0, 0.0) >> 11, 30);
    }

    #[test]
    fn test_negative_and_nan_saturate() {
        assert_eq!(rgb888(-0.5, f32::NAN, 0.0), 0);
    }

    #[test]
    fn test_bytes_match_floats() {
        assert_eq!(
            abgr8888_from_bytes(0x12, 0x34, 0x56, 0x78),
            0x7856_3412
        );
        assert_eq!(
            abgr8888_from_bytes(255, 0, 0, 255),
            abgr8888(1.0, 0.0, 0.0, 1.0)
        );
        assert_eq!(
            float_bits_from_bytes(255, 255, 255, 255).to_bits(),
            float_bits(1.0, 1.0, 1.0, 1.0).to_bits()
        );
    }

    #[test]
    fn test_luminance_alpha() {
        assert_eq!(luminance_alpha(1.0, 0.0), 0xFF00);
        assert_eq!(luminance_alpha(0.0, 1.0), 0x00FF);
    }

    #[test]
    fn test_unpack_16bit_exhaustive() {
        for n in 0..=0xFFFFu32 {
            let [r, g, b] = unpack_rgb565(n);
            assert_eq!(rgb565(r, g, b), n);
            let [r, g, b, a] = unpack_rgba4444(n);
            assert_eq!(rgba4444(r, g, b, a), n);
        }
    }

    #[test]
    fn test_unpack_order_is_rgba() {
        let rgba = [1.0, 0.0, 0.0, 0.0];
        assert_eq!(unpack_rgba8888(0xFF00_0000), rgba);
        assert_eq!(unpack_argb8888(0x00FF_0000), rgba);
        assert_eq!(unpack_abgr8888(0x0000_00FF), rgba);
    }

    #[test]
    fn test_float_bits_clears_low_alpha_bit() {
        let bits = float_bits(1.0, 1.0, 1.0, 1.0).to_bits();
        assert_eq!(bits, 0xFEFF_FFFF);
        assert_eq!(float_bits_to_abgr8888(f32::from_bits(bits)), 0xFFFF_FFFF);
    }

    #[test]
    fn test_float_bits_never_nan() {
        for a in 0..=255u8 {
            for c in [0u8, 1, 0x7F, 0x80, 0xFE, 0xFF] {
                let f = float_bits_from_bytes(c, c, c, a);
                assert!(f.is_finite(), "alpha {a} channel {c} gave {f}");
            }
        }
    }

    #[test]
    fn test_float_bits_alpha_within_one_step() {
        for a in 0..=255u32 {
            let [_, _, _, back] = unpack_float_bits(float_bits(0.2, 0.4, 0.6, a as f32 / 255.0));
            let back = (back * 255.0) as i32;
            assert!((back - a as i32).abs() <= 1, "alpha {a} came back as {back}");
        }
    }
}
