//! 8-bit math primitives
//!
//! Integer waveform and scaling helpers in the style of `FastLED`'s
//! `lib8tion`. Phase arguments wrap at 256, channel arithmetic saturates.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value, never dimming a non-zero value to zero
///
/// Keeps the faintest embers of a gradient visible.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Saturating 8-bit addition
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Saturating 8-bit subtraction
#[inline]
pub const fn qsub8(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Add `offset` to `value` and wrap the result into `0..modulo`
///
/// A zero modulo yields zero.
#[inline]
pub const fn add_mod(value: usize, offset: usize, modulo: usize) -> usize {
    if modulo == 0 {
        return 0;
    }
    (value % modulo + offset % modulo) % modulo
}

// Base and slope for each 16-step section of a quarter sine wave.
const SIN8_SECTIONS: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// Fast 8-bit sine approximation
///
/// Input is an angle on a 0-255 circle, output is 0-255 with 128 at zero
/// crossing (`sin8(64) == 255`, `sin8(192) == 1`).
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub const fn sin8(theta: u8) -> u8 {
    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F;

    let mut secoffset = offset & 0x0F;
    if theta & 0x40 != 0 {
        secoffset += 1;
    }

    let section = (offset >> 4) as usize;
    let b = SIN8_SECTIONS[section * 2];
    let m16 = SIN8_SECTIONS[section * 2 + 1];

    let mx = ((m16 as u16 * secoffset as u16) >> 4) as u8;
    let mut y = (mx + b) as i8;
    if theta & 0x80 != 0 {
        y = -y;
    }

    (y as i16 + 128) as u8
}

/// Triangle wave: 0 -> 254 -> 0 over one 0-255 cycle
#[inline]
pub const fn triwave8(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    j << 1
}

/// Triangle wave with eased (quadratic) slopes
#[inline]
pub fn quadwave8(i: u8) -> u8 {
    ease_in_out_quad(triwave8(i))
}

/// Ease in out quadratic
pub fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Map a normalized reading (0.0-1.0) to 0-255, clamping out of range input
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
