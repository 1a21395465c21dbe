//! Loudness trail: the RMS envelope scrolls along the strip
//!
//! Each frame shifts the strip by one pixel and paints the first pixel with
//! the current loudness as brightness and a slowly cycling hue.

use embassy_time::Duration;

use super::{Animation, POLL_DELAY};
use crate::{canvas::FrameContext, color::hsv, math8::unit_to_u8};

const SATURATION: u8 = 128;
const FRAME_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Default)]
pub struct RmsHueAnimation {
    hue: u8,
}

impl<const N: usize> Animation<N> for RmsHueAnimation {
    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        let Some(audio) = ctx.audio.as_deref_mut() else {
            return POLL_DELAY;
        };
        if !audio.rms_available() || !audio.peak_available() {
            return POLL_DELAY;
        }
        let power = unit_to_u8(audio.read_rms());

        let leds = ctx.canvas.leds_mut();
        if N > 1 {
            leds.copy_within(0..N - 1, 1);
        }
        if let Some(first) = leds.first_mut() {
            *first = hsv(self.hue, SATURATION, power);
        }
        self.hue = self.hue.wrapping_add(1);
        FRAME_DELAY
    }
}
