//! Raw spectrum: one pixel per FFT bin

use embassy_time::Duration;

use super::{Animation, POLL_DELAY};
use crate::{canvas::FrameContext, color::hsv, math8::unit_to_u8};

/// Hue distance between neighboring bins
const HUE_PER_BIN: u8 = 4;
const FRAME_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Default)]
pub struct FullFftAnimation;

impl<const N: usize> Animation<N> for FullFftAnimation {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        ctx.canvas.reset();
        ctx.canvas.set_brightness(255);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        let Some(audio) = ctx.audio.as_deref_mut() else {
            return POLL_DELAY;
        };
        if !audio.fft_available() {
            return POLL_DELAY;
        }

        let bins = audio.fft_bins().min(N);
        for bin in 0..bins {
            let value = unit_to_u8(audio.read_fft_bin(bin));
            let hue = (bin as u8).wrapping_mul(HUE_PER_BIN);
            ctx.canvas.set(bin, hsv(hue, 255, value));
        }
        audio.finish_fft();
        FRAME_DELAY
    }
}
