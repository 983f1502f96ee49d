//! Linear to display color conversion and 8-bit packing.

use umbra_math::clamp01;

use crate::Color;

/// sRGB transfer function for one channel, clamping the input to [0, 1].
///
/// The curve is evaluated in f64 so that 1.0 maps to exactly 1.0.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    let l = clamp01(linear);
    if l <= 0.0031308 {
        l * 12.92
    } else {
        (1.055 * f64::from(l).powf(1.0 / 2.4) - 0.055) as f32
    }
}

/// Apply [`linear_to_srgb`] to every channel.
#[inline]
pub fn linear_to_display(color: Color) -> Color {
    Color::new(
        linear_to_srgb(color.x),
        linear_to_srgb(color.y),
        linear_to_srgb(color.z),
    )
}

/// Clamp each channel, quantize to 8 bits and pack as `0xRRGGBB`.
#[inline]
pub fn color_to_u32(color: Color) -> u32 {
    let r = (clamp01(color.x) * 255.0) as u32;
    let g = (clamp01(color.y) * 255.0) as u32;
    let b = (clamp01(color.z) * 255.0) as u32;
    (r << 16) | (g << 8) | b
}

/// Split a packed `0xRRGGBB` value into its channels.
#[inline]
pub fn unpack_rgb(pixel: u32) -> [u8; 3] {
    [
        ((pixel >> 16) & 0xFF) as u8,
        ((pixel >> 8) & 0xFF) as u8,
        (pixel & 0xFF) as u8,
    ]
}
