//! Solid color fill
//!
//! Fills all LEDs with a single color at a fixed brightness.

use embassy_time::Duration;

use super::Animation;
use crate::{canvas::FrameContext, color::Rgb};

const DEFAULT_BRIGHTNESS: u8 = 64;
const FRAME_DELAY: Duration = Duration::from_millis(500);

/// Solid color animation - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct SolidColorAnimation {
    color: Rgb,
    brightness: u8,
}

impl SolidColorAnimation {
    /// Create a new solid color animation
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Set the global brightness applied on init
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Change the color, visible from the next frame on
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

impl<const N: usize> Animation<N> for SolidColorAnimation {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        ctx.canvas.reset();
        ctx.canvas.set_brightness(self.brightness);
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        ctx.canvas.fill(self.color);
        FRAME_DELAY
    }
}
