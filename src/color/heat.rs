use crate::{color::Rgb, math8::scale8_video};

/// Map a temperature (0-255) onto a black body style gradient
///
/// The range is split into three thirds: black to red, red to yellow and
/// yellow to white. The lowest non-zero temperatures keep a faint red glow.
#[inline]
pub const fn heat_color(temperature: u8) -> Rgb {
    // Scale down to 0..191 so each third spans 64 steps.
    let t192 = scale8_video(temperature, 191);

    // 0..63 inside the current third, stretched to 0..252
    let heatramp = (t192 & 0x3F) << 2;

    if t192 & 0x80 != 0 {
        // hottest
        Rgb {
            r: 255,
            g: 255,
            b: heatramp,
        }
    } else if t192 & 0x40 != 0 {
        // middle
        Rgb {
            r: 255,
            g: heatramp,
            b: 0,
        }
    } else {
        // coolest
        Rgb {
            r: heatramp,
            g: 0,
            b: 0,
        }
    }
}
