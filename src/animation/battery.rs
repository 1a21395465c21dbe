//! Battery gauge
//!
//! Lights a bar proportional to the charge, colored from red (empty) to
//! green (full). Without a gauge reading the first pixel blinks dim red.

use embassy_time::Duration;

use super::Animation;
use crate::{
    canvas::FrameContext,
    color::{BLACK, Rgb, blend_colors},
};

const EMPTY: Rgb = Rgb { r: 255, g: 0, b: 0 };
const FULL: Rgb = Rgb { r: 0, g: 255, b: 0 };
const NO_READING: Rgb = Rgb { r: 40, g: 0, b: 0 };

const BRIGHTNESS: u8 = 48;
const FRAME_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Default)]
pub struct BatteryAnimation {
    blink: bool,
}

impl<const N: usize> Animation<N> for BatteryAnimation {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        ctx.canvas.reset();
        ctx.canvas.set_brightness(BRIGHTNESS);
        self.blink = false;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        let leds = ctx.canvas.leds_mut();
        leds.fill(BLACK);

        let Some(percent) = ctx.ambient.battery_level() else {
            self.blink = !self.blink;
            if self.blink {
                if let Some(first) = leds.first_mut() {
                    *first = NO_READING;
                }
            }
            return FRAME_DELAY;
        };

        let percent = usize::from(percent.min(100));
        let lit = (percent * N).div_ceil(100);
        let color = blend_colors(EMPTY, FULL, (percent * 255 / 100) as u8);
        for led in leds.iter_mut().take(lit) {
            *led = color;
        }
        FRAME_DELAY
    }
}
