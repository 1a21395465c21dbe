//! Fairy dust: glowing rings orbiting along the strip
//!
//! Each ring follows a sine path at its own speed and pulses with a
//! triangle wave. The whole strip slowly breathes with the wall clock, and
//! optional glitter adds white sparkles.

use embassy_time::Duration;
use fastrand::Rng;

use super::{Animation, random_pixel};
use crate::{
    canvas::FrameContext,
    color::{WHITE, hsv, scale_color},
    math8::{quadwave8, scale8, sin8, triwave8},
};

pub const DEFAULT_RINGS: u8 = 3;

/// Half width of a ring in pixels
const RING_RADIUS: usize = 3;
const RING_SATURATION: u8 = 180;
/// Rings never pulse darker than this
const MIN_PULSE: u8 = 64;
const FADE_AMOUNT: u8 = 48;

const GLITTER_CHANCE: u8 = 40;
const GLITTER_LEVEL: u8 = 160;

// Brightness drift: MIN_BRIGHTNESS..MIN_BRIGHTNESS + BRIGHTNESS_RANGE
const MIN_BRIGHTNESS: u8 = 40;
const BRIGHTNESS_RANGE: u8 = 60;
/// Milliseconds per drift phase step, one full cycle is 256 steps
const DRIFT_STEP_MS: u64 = 64;

const FRAME_DELAY: Duration = Duration::from_millis(20);
const DEFAULT_SEED: u64 = 0xFA11_D057;

#[derive(Debug, Clone)]
pub struct FairyDustAnimation {
    rings: u8,
    glitter: bool,
    phase: u8,
    rng: Rng,
}

impl Default for FairyDustAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_RINGS, true)
    }
}

impl FairyDustAnimation {
    pub fn new(rings: u8, glitter: bool) -> Self {
        Self {
            rings,
            glitter,
            phase: 0,
            rng: Rng::with_seed(DEFAULT_SEED),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::with_seed(seed);
        self
    }

    pub const fn rings(&self) -> u8 {
        self.rings
    }

    #[allow(clippy::cast_possible_truncation)]
    fn drift_brightness(now_ms: u64) -> u8 {
        let drift = sin8((now_ms / DRIFT_STEP_MS) as u8);
        MIN_BRIGHTNESS.saturating_add(scale8(drift, BRIGHTNESS_RANGE))
    }

    /// Center pixel of a ring on a strip of `len` pixels
    fn ring_center(&self, ring: u8, offset: u8, len: usize) -> usize {
        let speed = ring.wrapping_add(1);
        let wave = sin8(self.phase.wrapping_mul(speed).wrapping_add(offset));
        usize::from(wave) * len.saturating_sub(1) / 255
    }
}

impl<const N: usize> Animation<N> for FairyDustAnimation {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        ctx.canvas.reset();
        ctx.canvas.set_brightness(Self::drift_brightness(ctx.now.as_millis()));
        self.phase = 0;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        ctx.canvas.fade_to_black_by(FADE_AMOUNT);
        ctx.canvas
            .set_brightness(Self::drift_brightness(ctx.now.as_millis()));

        if N > 0 {
            let spacing = (256 / usize::from(self.rings.max(1))) as u8;
            for ring in 0..self.rings {
                let offset = ring.wrapping_mul(spacing);
                let center = self.ring_center(ring, offset, N);
                let hue = self.phase.wrapping_add(offset);
                let pulse =
                    triwave8(self.phase.wrapping_mul(2).wrapping_add(offset)).max(MIN_PULSE);

                for step in 0..=2 * RING_RADIUS {
                    let distance = step.abs_diff(RING_RADIUS);
                    // 128 at the center, falling towards 0 at the rim
                    let falloff = 128 - (distance * 128 / (RING_RADIUS + 1)) as u8;
                    let glow = scale8(quadwave8(falloff), pulse);
                    let index = (center + step + N - RING_RADIUS % N) % N;
                    ctx.canvas.add(index, hsv(hue, RING_SATURATION, glow));
                }
            }

            if self.glitter && self.rng.u8(..) < GLITTER_CHANCE {
                let index = random_pixel(&mut self.rng, N);
                ctx.canvas.add(index, scale_color(WHITE, GLITTER_LEVEL));
            }
        }

        self.phase = self.phase.wrapping_add(1);
        FRAME_DELAY
    }
}
