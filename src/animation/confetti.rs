//! Confetti: colored specks that blink in and fade out
//!
//! [`ConfettiAnimation`] drops one speck per frame, [`RmsConfettiAnimation`]
//! only when the audio peak crosses a threshold, with more specks for louder
//! peaks.

use embassy_time::Duration;
use fastrand::Rng;

use super::{Animation, random_pixel};
use crate::{canvas::FrameContext, color::hsv};

const FADE_AMOUNT: u8 = 10;
const SPECK_SATURATION: u8 = 200;
const HUE_SPREAD: u8 = 64;
const FRAME_DELAY: Duration = Duration::from_millis(1000 / 60);

/// Frames per hue step
const CONFETTI_HUE_FRAMES: u8 = 8;
const RMS_CONFETTI_HUE_FRAMES: u8 = 4;

/// Peak level that triggers specks by default
pub const DEFAULT_PEAK_THRESHOLD: f32 = 0.05;

const CONFETTI_SEED: u64 = 0xC0FF_E771;
const RMS_CONFETTI_SEED: u64 = 0xC0FF_E772;

#[derive(Debug, Clone)]
pub struct ConfettiAnimation {
    hue: u8,
    counter: u8,
    rng: Rng,
}

impl Default for ConfettiAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfettiAnimation {
    pub fn new() -> Self {
        Self {
            hue: 0,
            counter: 0,
            rng: Rng::with_seed(CONFETTI_SEED),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::with_seed(seed);
        self
    }
}

impl<const N: usize> Animation<N> for ConfettiAnimation {
    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        ctx.canvas.fade_to_black_by(FADE_AMOUNT);

        let index = random_pixel(&mut self.rng, N);
        let hue = self.hue.wrapping_add(self.rng.u8(0..HUE_SPREAD));
        ctx.canvas.add(index, hsv(hue, SPECK_SATURATION, 255));

        if self.counter % CONFETTI_HUE_FRAMES == 0 {
            self.hue = self.hue.wrapping_add(1);
        }
        self.counter = self.counter.wrapping_add(1);
        FRAME_DELAY
    }
}

#[derive(Debug, Clone)]
pub struct RmsConfettiAnimation {
    hue: u8,
    counter: u8,
    threshold: f32,
    rng: Rng,
}

impl Default for RmsConfettiAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_PEAK_THRESHOLD)
    }
}

impl RmsConfettiAnimation {
    /// Create an animation reacting to peaks above `threshold` (0.0-1.0)
    pub fn new(threshold: f32) -> Self {
        Self {
            hue: 0,
            counter: 0,
            threshold,
            rng: Rng::with_seed(RMS_CONFETTI_SEED),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::with_seed(seed);
        self
    }

    pub const fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl<const N: usize> Animation<N> for RmsConfettiAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        // Fading is harmless without audio, old specks keep dying out.
        ctx.canvas.fade_to_black_by(FADE_AMOUNT);

        if let Some(audio) = ctx.audio.as_deref_mut() {
            if audio.peak_available() {
                let peak = audio.read_peak().clamp(0.0, 1.0);
                if peak > self.threshold {
                    let color = hsv(
                        self.hue.wrapping_add((peak * 128.0) as u8),
                        SPECK_SATURATION,
                        255,
                    );
                    // one for sure, more for louder peaks
                    let specks = 1 + (peak * 4.0) as u8;
                    for _ in 0..specks {
                        let index = random_pixel(&mut self.rng, N);
                        ctx.canvas.add(index, color);
                    }
                }
            }
        }

        if self.counter % RMS_CONFETTI_HUE_FRAMES == 0 {
            self.hue = self.hue.wrapping_add(1);
        }
        self.counter = self.counter.wrapping_add(1);
        FRAME_DELAY
    }
}
