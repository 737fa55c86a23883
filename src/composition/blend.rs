//! Per-pixel operations for layering sprites

use image::{Rgba, RgbaImage};

use super::error::CompositionError;

/// Multiply every pixel of `sprite` by `tint`, channel by channel.
///
/// With an opaque tint the sprite's alpha is preserved. Returns a new image;
/// the source sprite is left untouched.
pub fn tint(sprite: &RgbaImage, tint: Rgba<u8>) -> RgbaImage {
    let mut out = sprite.clone();
    for pixel in out.pixels_mut() {
        *pixel = multiply_pixels(pixel, &tint);
    }
    out
}

/// Channel-wise multiply of two pixels, `a * b / 255` with truncation.
pub(crate) fn multiply_pixels(a: &Rgba<u8>, b: &Rgba<u8>) -> Rgba<u8> {
    let mul = |x: u8, y: u8| -> u8 { (x as u16 * y as u16 / 255) as u8 };
    Rgba([mul(a[0], b[0]), mul(a[1], b[1]), mul(a[2], b[2]), mul(a[3], b[3])])
}

/// Composite `layer` over `canvas` in place.
///
/// # Errors
///
/// Returns `CompositionError::SizeMismatch` and leaves the canvas untouched if
/// the two images differ in size.
pub fn composite_over(canvas: &mut RgbaImage, layer: &RgbaImage) -> Result<(), CompositionError> {
    if layer.dimensions() != canvas.dimensions() {
        return Err(CompositionError::SizeMismatch {
            layer: "layer".to_string(),
            size: layer.dimensions(),
            expected: canvas.dimensions(),
        });
    }

    for (dst, src) in canvas.pixels_mut().zip(layer.pixels()) {
        // Fully transparent source, skip
        if src[3] == 0 {
            continue;
        }
        *dst = blend_pixels(src, dst);
    }
    Ok(())
}

/// Porter-Duff "source over" for non-premultiplied pixels.
pub(crate) fn blend_pixels(src: &Rgba<u8>, dst: &Rgba<u8>) -> Rgba<u8> {
    let src_alpha = src[3] as f32 / 255.0;
    let dst_alpha = dst[3] as f32 / 255.0;

    // out_alpha = src_alpha + dst_alpha * (1 - src_alpha)
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

    if out_alpha == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    // out_color = (src_color * src_alpha + dst_color * dst_alpha * (1 - src_alpha)) / out_alpha
    let composite = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let result = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        (result.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([
        composite(src[0], dst[0]),
        composite(src[1], dst[1]),
        composite(src[2], dst[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}
