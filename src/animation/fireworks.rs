//! Fireworks: random sparks with smeared, fading trails
//!
//! Every frame halves the strip brightness, smears each pixel with a quarter
//! of its neighbors and drops new sparks. Once in a while a burst lights up
//! many pixels at once.

use embassy_time::Duration;
use fastrand::Rng;

use super::{Animation, random_pixel};
use crate::{
    canvas::FrameContext,
    color::{Rgb, hsv},
};

const FADE_AMOUNT: u8 = 127;
/// One in `BURST_ODDS` frames is a burst
const BURST_ODDS: u32 = 30;
/// One in `SPARK_ODDS` spark slots lights up on a normal frame
const SPARK_ODDS: u8 = 10;
const BURST_SATURATION: u8 = 200;
const FRAME_DELAY: Duration = Duration::from_millis(1000 / 20);
const DEFAULT_SEED: u64 = 0x00F1_2E00;

#[derive(Debug, Clone)]
pub struct FireworksAnimation {
    rng: Rng,
}

impl Default for FireworksAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FireworksAnimation {
    pub fn new() -> Self {
        Self {
            rng: Rng::with_seed(DEFAULT_SEED),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::with_seed(seed);
        self
    }
}

/// `current + previous/4 + next/4`, per channel, saturating
#[inline]
pub fn smear(previous: Rgb, current: Rgb, next: Rgb) -> Rgb {
    let channel = |p: u8, c: u8, n: u8| (p >> 2).saturating_add(c).saturating_add(n >> 2);
    Rgb {
        r: channel(previous.r, current.r, next.r),
        g: channel(previous.g, current.g, next.g),
        b: channel(previous.b, current.b, next.b),
    }
}

/// Smear every pixel except the first with its neighbors, in place
///
/// Runs left to right, so each pixel sees the already smeared previous one.
/// The last pixel wraps around to the first as its next neighbor.
pub fn smear_trails(leds: &mut [Rgb]) {
    let len = leds.len();
    for i in 1..len {
        leds[i] = smear(leds[i - 1], leds[i], leds[(i + 1) % len]);
    }
}

impl<const N: usize> Animation<N> for FireworksAnimation {
    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        let hue = self.rng.u8(..);
        let burst = self.rng.u32(0..BURST_ODDS) == 0;

        ctx.canvas.fade_to_black_by(FADE_AMOUNT);
        smear_trails(ctx.canvas.leds_mut());

        if burst {
            for _ in 0..(N / 10).max(1) {
                let index = random_pixel(&mut self.rng, N);
                ctx.canvas.set(index, hsv(hue, BURST_SATURATION, 255));
            }
        } else {
            for _ in 0..(N / 20).max(1) {
                if self.rng.u8(0..SPARK_ODDS) == 0 {
                    let index = random_pixel(&mut self.rng, N);
                    ctx.canvas.set(index, hsv(hue, 255, 255));
                }
            }
        }
        FRAME_DELAY
    }
}
