//! Color utilities: HLS to RGB conversion and formatting
//!
//! Colors are planned in hue/lightness/saturation space and rendered as 8-bit
//! RGB. Channel scaling follows the `trunc(c * 256)` convention, clamped so a
//! full-intensity channel lands on 255 instead of overflowing.

use image::{Rgb, Rgba};

/// An 8-bit RGB color.
pub type Color = Rgb<u8>;

/// A color in hue/lightness/saturation space, each component nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

impl Hls {
    pub fn new(hue: f64, lightness: f64, saturation: f64) -> Self {
        Self { hue, lightness, saturation }
    }

    /// Bring all components into range: hue wraps modulo 1, lightness and
    /// saturation are clamped to `[0, 1]`. Non-finite components become 0.
    pub fn normalized(self) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            hue: wrap_unit(finite(self.hue)),
            lightness: finite(self.lightness).clamp(0.0, 1.0),
            saturation: finite(self.saturation).clamp(0.0, 1.0),
        }
    }

    /// Convert to floating-point RGB, each channel in `[0, 1]`.
    pub fn to_rgb_f64(self) -> [f64; 3] {
        let Hls { hue, lightness, saturation } = self.normalized();
        if saturation == 0.0 {
            return [lightness; 3];
        }

        let m2 = if lightness <= 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = 2.0 * lightness - m2;

        [
            hue_channel(m1, m2, hue + 1.0 / 3.0),
            hue_channel(m1, m2, hue),
            hue_channel(m1, m2, hue - 1.0 / 3.0),
        ]
    }

    /// Convert to an 8-bit RGB color.
    pub fn to_color(self) -> Color {
        let [r, g, b] = self.to_rgb_f64();
        Rgb([scale_channel(r), scale_channel(g), scale_channel(b)])
    }
}

/// Wrap a value into `[0, 1)`.
pub fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = wrap_unit(hue);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

/// Scale a `[0, 1]` channel to `0..=255` by truncating `c * 256`.
pub fn scale_channel(c: f64) -> u8 {
    let scaled = (c.clamp(0.0, 1.0) * 256.0) as u32;
    scaled.min(255) as u8
}

/// Opaque RGBA version of a color, used as a tint.
pub fn opaque(color: Color) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

/// Format a color as `#rrggbb`.
///
/// ```
/// use duckies::color::to_hex;
///
/// assert_eq!(to_hex(image::Rgb([255, 128, 0])), "#ff8000");
/// ```
pub fn to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}
