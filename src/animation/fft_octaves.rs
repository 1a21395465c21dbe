//! Octave spectrum, heavily inspired by buzzandy's music reactive LED strip
//!
//! The eight octave magnitudes are painted onto every second LED, with the
//! LEDs in between interpolated, and the pattern repeats along the strip.
//! Beats shift the pattern and pump the global brightness; a very strong
//! beat flashes the whole strip gray.

use embassy_time::Duration;

use super::{Animation, POLL_DELAY};
use crate::{
    canvas::FrameContext,
    color::{GRAY, Rgb, hsv},
    math8::{add_mod, blend8},
    spectrum::{
        BEAT_THRESHOLD, DEFAULT_GAIN, NUM_OCTAVES, Octaves, beat_strength,
        octave_magnitudes,
    },
};

/// Beat at which the strip flashes
const FLASH_BEAT: u8 = 7;
const FLASH_BRIGHTNESS: u8 = 120;

/// Octave painted first; raise it to skip the DC-heavy low octaves
const START_OCTAVE: usize = 0;
/// Octaves plus the interpolated LEDs between them
const SPECTRUM_WIDTH: usize = (NUM_OCTAVES - START_OCTAVE) * 2 - 1;
/// Hue offset between repetitions
const REPETITION_HUE: u8 = 30;
const MIN_SATURATION: u8 = 150;

const FRAME_DELAY: Duration = Duration::from_millis(10);
const SLOW_FRAME_DELAY: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Default)]
pub struct FftOctavesAnimation {
    /// Beat whose brightness is applied, `None` right after `init`
    last_beat: Option<u8>,
    shift: usize,
}

impl FftOctavesAnimation {
    /// Global brightness for a beat below the flash level
    pub const fn beat_brightness(beat: u8) -> u8 {
        40u8.saturating_add(beat.saturating_mul(beat).saturating_mul(5))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn paint<const N: usize>(&self, ctx: &mut FrameContext<'_, N>, octaves: &Octaves) {
        for repetition in 0..N / SPECTRUM_WIDTH {
            let start = SPECTRUM_WIDTH * repetition;
            let hue_offset = (repetition as u8).wrapping_mul(REPETITION_HUE);

            for octave in START_OCTAVE..NUM_OCTAVES {
                let magnitude = octaves[octave];
                let color = hsv(
                    magnitude.wrapping_add(hue_offset),
                    blend8(MIN_SATURATION, 255, magnitude),
                    magnitude,
                );
                let index = add_mod(start + octave * 2, self.shift, N);
                ctx.canvas.set(index, color);
            }

            for octave in START_OCTAVE..NUM_OCTAVES - 1 {
                let before = add_mod(start + octave * 2, self.shift, N);
                let between = add_mod(before, 1, N);
                let after = add_mod(before, 2, N);
                let midpoint = average(ctx.canvas.get(before), ctx.canvas.get(after));
                ctx.canvas.set(between, midpoint);
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn average(a: Rgb, b: Rgb) -> Rgb {
    let mean = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
    Rgb {
        r: mean(a.r, b.r),
        g: mean(a.g, b.g),
        b: mean(a.b, b.b),
    }
}

impl<const N: usize> Animation<N> for FftOctavesAnimation {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        ctx.canvas.reset();
        ctx.canvas.set_brightness(255);
        self.last_beat = None;
        self.shift = 0;
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        let Some(audio) = ctx.audio.as_deref_mut() else {
            return POLL_DELAY;
        };
        if !audio.fft_available() || !audio.peak_available() {
            return POLL_DELAY;
        }

        let octaves = octave_magnitudes(audio, DEFAULT_GAIN);
        audio.finish_fft();
        let beat = beat_strength(&octaves, BEAT_THRESHOLD);

        if beat >= FLASH_BEAT {
            ctx.canvas.fill(GRAY);
            ctx.canvas.set_brightness(FLASH_BRIGHTNESS);
            return FRAME_DELAY;
        } else if self.last_beat != Some(beat) {
            ctx.canvas.set_brightness(Self::beat_brightness(beat));
            self.last_beat = Some(beat);
        }

        self.paint(ctx, &octaves);

        if beat > 0 && N > 0 {
            let step = usize::from((beat + 4) / 2 - 2);
            self.shift = (self.shift + step) % N;
        }

        if (4..FLASH_BEAT).contains(&beat) {
            SLOW_FRAME_DELAY
        } else {
            FRAME_DELAY
        }
    }
}
