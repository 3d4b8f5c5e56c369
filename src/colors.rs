//! Color space conversion helpers.
//!
//! Pure, stateless functions used by the driver and by callers that want to
//! work in HSV (more intuitive for hue rotations and color wheels) or apply
//! perceptual gamma correction.
//!
//! All functions work in `Srgb<u8>` / raw bytes to match the driver's
//! 8-bit-per-channel output domain.

use palette::{FromColor, Hsv, Srgb};

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
///
/// `hue` is in degrees (wraps at 360), `saturation` and `value` in 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb<u8> {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv).into_format()
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb<u8> {
    hsv(hue, 1.0, 1.0)
}

/// Linearly interpolates between two 8-bit values.
///
/// `t` is clamped to 0.0-1.0. The result is truncated toward zero so fade
/// math stays deterministic across platforms.
#[inline]
pub fn linear_interpolate(a: u8, b: u8, t: f32) -> u8 {
    let t = t.clamp(0.0, 1.0);
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8
}

/// Applies a perceptual gamma curve to a channel value.
///
/// Computes `round(255 * (value / 255)^gamma)`. A `gamma` of 2.2 gives the
/// conventional LED brightness curve.
#[inline]
pub fn gamma_correct(value: u8, gamma: f32) -> u8 {
    let normalized = f32::from(value) / 255.0;
    libm::roundf(255.0 * libm::powf(normalized, gamma)) as u8
}
