pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::{blend8, scale8},
};

pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
pub const GRAY: Rgb = rgb_from_u32(0x80_8080);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);

/// Saturation used by rainbow fills
const RAINBOW_SATURATION: u8 = 240;

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Add two colors channel by channel, clamping at 255
#[inline]
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Scale every channel of a color (0-255 = 0.0-1.0)
#[inline]
pub const fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Shorthand for converting an HSV triple to RGB
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Fill LEDs with a rainbow starting at `initial_hue`
///
/// Each following LED advances the hue by `delta_hue`, wrapping around the
/// color wheel.
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hue = initial_hue;
    for led in leds {
        *led = hsv(hue, RAINBOW_SATURATION, 255);
        hue = hue.wrapping_add(delta_hue);
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
