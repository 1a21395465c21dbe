//! Visualize the light sensor on the strip
//!
//! - blue bar: raw light level
//! - red bar: darkness debouncer progress
//! - green first pixel: darkness detected

use embassy_time::Duration;

use super::Animation;
use crate::{canvas::FrameContext, color::BLACK};

/// Full scale of the 12-bit light level
const LIGHT_LEVEL_MAX: usize = 4095;

const LIGHT_CHANNEL: u8 = 30;
const DEBOUNCE_CHANNEL: u8 = 60;
const DARK_CHANNEL: u8 = 100;
const FRAME_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Default)]
pub struct SensorDebugAnimation;

impl<const N: usize> Animation<N> for SensorDebugAnimation {
    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        let leds = ctx.canvas.leds_mut();
        leds.fill(BLACK);

        let light = usize::from(ctx.ambient.light_level()).min(LIGHT_LEVEL_MAX);
        let light_leds = light * N / LIGHT_LEVEL_MAX;
        for led in leds.iter_mut().take(light_leds) {
            led.b = LIGHT_CHANNEL;
        }

        let debounce_leds = usize::from(ctx.ambient.darkness_progress()) * N / 255;
        for led in leds.iter_mut().take(debounce_leds) {
            led.r = DEBOUNCE_CHANNEL;
        }

        if ctx.ambient.is_dark() {
            if let Some(first) = leds.first_mut() {
                first.g = DARK_CHANNEL;
            }
        }
        FRAME_DELAY
    }
}
