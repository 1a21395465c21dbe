//! Plasma: three sine waves interfering per color channel
//!
//! Red and green run at different spatial and temporal frequencies, blue
//! fills whatever energy the other two leave.

use embassy_time::Duration;

use super::Animation;
use crate::{canvas::FrameContext, color::Rgb, math8::sin8};

const BRIGHTNESS: u8 = 64;
const FRAME_DELAY: Duration = Duration::from_millis(1000 / 60);

#[derive(Debug, Clone, Default)]
pub struct PlasmaAnimation {
    steps: u8,
}

impl PlasmaAnimation {
    /// Color of pixel `index` at phase `steps`
    #[allow(clippy::cast_possible_truncation)]
    fn pixel(index: usize, len: usize, steps: u8) -> Rgb {
        // Position along the strip mapped onto 0..=127
        let span = (0x7F * index / len.saturating_sub(1).max(1)) as u8;
        let index8 = index as u8;

        let r = sin8(steps.wrapping_add(span.wrapping_mul(8)));
        let g = sin8(
            0u8.wrapping_sub(steps.wrapping_mul(2))
                .wrapping_sub(span.wrapping_mul(3))
                .wrapping_add(sin8(index8.wrapping_mul(2))),
        );
        let b = 255u8.saturating_sub(r).saturating_sub(g);

        Rgb { r, g, b }
    }
}

impl<const N: usize> Animation<N> for PlasmaAnimation {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        ctx.canvas.reset();
        ctx.canvas.set_brightness(BRIGHTNESS);
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        for (index, led) in ctx.canvas.leds_mut().iter_mut().enumerate() {
            *led = Self::pixel(index, N, self.steps);
        }
        self.steps = self.steps.wrapping_add(1);
        FRAME_DELAY
    }
}
