//! Conversion property tests.
//!
//! Checks the quantization, round-trip and range guarantees across whole
//! packed domains rather than single values.

use approx::assert_abs_diff_eq;
use rgbapack_core::prelude::*;

fn in_range(c: &Color) -> bool {
    c.to_array().iter().all(|v| (0.0..=1.0).contains(v))
}

// ============================================================================
// Range
// ============================================================================

#[test]
fn mutators_keep_channels_in_range() {
    let inputs = [
        f32::NEG_INFINITY,
        -3.0,
        -1.0,
        -0.25,
        0.0,
        0.3,
        1.0,
        1.75,
        40.0,
        f32::INFINITY,
        f32::NAN,
    ];
    for &x in &inputs {
        for &y in &inputs {
            let base = Color::new(0.4, 0.6, 0.2, 0.9);
            let other = Color::new(x, y, x, y);

            let mut c = base;
            assert!(in_range(c.add_rgba(x, y, x, y)));
            let mut c2 = base;
            assert!(in_range(c2.sub_rgba(x, y, y, x)));
            let mut c3 = base;
            assert!(in_range(c3.mul_rgba(x, y, x, y)));
            let mut c4 = base;
            assert!(in_range(c4.mul_scalar(x)));
            let mut c5 = base;
            assert!(in_range(c5.lerp(&other, y)));
            let mut c6 = base;
            assert!(in_range(c6.lerp_rgba(x, y, x, y, x)));
            let mut c7 = base;
            assert!(in_range(c7.set_hsv(x * 100.0, y, x)));
            let mut c8 = base;
            assert!(in_range(c8.set_rgba(x, y, x, y)));
            let mut c9 = base;
            assert!(in_range(c9.premultiply_alpha()));
            let mut c10 = Color::new(0.0, 0.0, 0.0, 1.0);
            assert!(in_range(c10.mul_scalar(x)));
            let mut c11 = base;
            assert!(in_range(c11.lerp(&base, x)));

            assert!(in_range(&(base + other)));
            assert!(in_range(&(base - other)));
            assert!(in_range(&(base * other)));
            assert!(in_range(&(base * x)));
        }
    }
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn pack_of_unpack_is_identity_for_8bit_channels() {
    for v in 0..=255u32 {
        let spread = v | (v.wrapping_mul(7) & 0xFF) << 8 | (255 - v) << 16 | (v ^ 0x5A) << 24;
        assert_eq!(Color::from_rgba8888(spread).to_rgba8888(), spread);
        assert_eq!(Color::from_argb8888(spread).to_argb8888(), spread);
        assert_eq!(Color::from_abgr8888(spread).to_int_bits(), spread);
        let rgb = spread & 0xFF_FFFF;
        assert_eq!(Color::from_rgb888(rgb).to_rgb888(), rgb);
    }
}

#[test]
fn pack_of_unpack_is_identity_for_16bit_formats() {
    for n in 0..=0xFFFFu32 {
        assert_eq!(Color::from_rgb565(n).to_rgb565(), n);
        assert_eq!(Color::from_rgba4444(n).to_rgba4444(), n);
    }
}

#[test]
fn unpack_of_pack_is_identity_on_grid() {
    for fmt in PackedFormat::ALL {
        let [mr, mg, mb, ma] = fmt.max_values();
        let ma = if ma == 0 { 1 } else { ma };
        for k in 0..=mr.max(mg).max(mb) {
            let grid = |m: u32| (k.min(m)) as f32 / m as f32;
            let c = Color::new(grid(mr), grid(mg), grid(mb), grid(ma));
            let back = fmt.unpack(fmt.pack(&c));
            assert_eq!(back[0], c.r, "{fmt} r at {k}");
            assert_eq!(back[1], c.g, "{fmt} g at {k}");
            assert_eq!(back[2], c.b, "{fmt} b at {k}");
            if fmt.has_alpha() {
                assert_eq!(back[3], c.a, "{fmt} a at {k}");
            }
        }
    }
}

#[test]
fn hex_round_trip() {
    for v in (0..=255u32).step_by(5) {
        let c = Color::from_rgba8888(v << 24 | (255 - v) << 16 | (v / 2) << 8 | v);
        let back: Color = c.to_hex_string().parse().unwrap();
        assert_eq!(back, c);
        assert_eq!(back.to_array(), c.to_array());
    }

    assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0).to_string(), "FF0000FF");
    let red = Color::from_hex("FF0000FF").unwrap();
    assert_eq!(red.to_array(), [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn short_hex_is_rejected() {
    for s in ["#F00", "F00", "#FFFF", "12345", ""] {
        let err = Color::from_hex(s).unwrap_err();
        assert!(err.is_hex_error(), "{s}: {err}");
    }
}

// ============================================================================
// Float bits
// ============================================================================

#[test]
fn float_bits_never_nan_or_infinite() {
    for a in 0..=255u32 {
        for v in (0..=255u32).step_by(3) {
            let step = |x: u32| x as f32 / 255.0;
            let c = Color::new(step(v), step(255 - v), step(v), step(a));
            let f = c.to_float_bits();
            assert!(!f.is_nan() && !f.is_infinite(), "rgba ({v}, {}, {v}, {a})", 255 - v);
        }
    }
}

#[test]
fn float_bits_round_trip_within_one_alpha_step() {
    for a in 0..=255u32 {
        let c = Color::new(0.2, 0.4, 0.6, a as f32 / 255.0);
        let back = Color::from_float_bits(c.to_float_bits());
        assert_eq!(back.to_rgb888(), c.to_rgb888());
        assert_abs_diff_eq!(back.a, c.a, epsilon = 1.0 / 255.0 + 1e-6);
    }
}

// ============================================================================
// HSV
// ============================================================================

#[test]
fn hue_is_periodic() {
    for h in (0..360).step_by(15) {
        let h = h as f32 + 7.5;
        let base = Color::from_hsv(h, 0.8, 0.9);
        for k in [-3i32, -2, -1, 1, 2, 3] {
            let shifted = Color::from_hsv(h + 360.0 * k as f32, 0.8, 0.9);
            for (a, b) in base.to_array().iter().zip(shifted.to_array()) {
                assert_abs_diff_eq!(*a, b, epsilon = 1e-4);
            }
        }
    }
}

#[test]
fn achromatic_hsv() {
    let [h, s, v] = Color::new(0.5, 0.5, 0.5, 1.0).to_hsv();
    assert_eq!(h, 0.0);
    assert_eq!(s, 0.0);
    assert_eq!(v, 0.5);
}

#[test]
fn hsv_round_trip_on_8bit_grid() {
    for v in (0..=255u32).step_by(17) {
        let c = Color::from_rgb888(v << 16 | ((v * 3) % 256) << 8 | (255 - v));
        let mut back = Color::new(0.0, 0.0, 0.0, 1.0);
        back.set_hsv_array(c.to_hsv());
        for (a, b) in back.to_array().iter().zip(c.to_array()) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-5);
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

#[test]
fn gray_constant() {
    assert_eq!(palette::GRAY, Color::from_rgba8888(0x7f7f7fff));
    assert_abs_diff_eq!(palette::GRAY.r, 0.498, epsilon = 1e-3);
    assert_eq!(palette::GRAY.a, 1.0);
}

#[test]
fn palette_is_shared_read_only() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let (name, expected) = palette::ALL[i % palette::ALL.len()];
                assert_eq!(palette::named(name).unwrap(), expected);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
