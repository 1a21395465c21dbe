//! Moving rainbow with optional glitter
//!
//! The hue advances by one step per frame while every LED is offset by a
//! fixed hue delta from its neighbor.

use embassy_time::Duration;
use fastrand::Rng;

use super::{Animation, random_pixel};
use crate::{
    canvas::FrameContext,
    color::{WHITE, fill_rainbow},
};

const HUE_DELTA: u8 = 7;
const GLITTER_CHANCE: u8 = 80;
const BRIGHTNESS: u8 = 64;
// Glitter saturates pixels to white, so the whole strip runs dimmer
const GLITTER_BRIGHTNESS: u8 = 32;
const FRAME_DELAY: Duration = Duration::from_millis(1000 / 60);
const DEFAULT_SEED: u64 = 0x5241_494E;

#[derive(Debug, Clone)]
pub struct RainbowAnimation {
    hue: u8,
    glitter: bool,
    rng: Rng,
}

impl Default for RainbowAnimation {
    fn default() -> Self {
        Self::new(false)
    }
}

impl RainbowAnimation {
    pub fn new(glitter: bool) -> Self {
        Self {
            hue: 0,
            glitter,
            rng: Rng::with_seed(DEFAULT_SEED),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::with_seed(seed);
        self
    }

    pub const fn has_glitter(&self) -> bool {
        self.glitter
    }
}

impl<const N: usize> Animation<N> for RainbowAnimation {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        ctx.canvas.reset();
        ctx.canvas.set_brightness(if self.glitter {
            GLITTER_BRIGHTNESS
        } else {
            BRIGHTNESS
        });
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        fill_rainbow(ctx.canvas.leds_mut(), self.hue, HUE_DELTA);
        if self.glitter && self.rng.u8(..) < GLITTER_CHANCE {
            let index = random_pixel(&mut self.rng, N);
            ctx.canvas.add(index, WHITE);
        }
        self.hue = self.hue.wrapping_add(1);
        FRAME_DELAY
    }
}
