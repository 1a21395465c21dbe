//! Gravity dots: a handful of colored dots that drift, attract and merge
//!
//! Overlapping dots add up their light. When the dots have come to rest for
//! too long the animation restarts itself with fresh random dots.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Animation;
use crate::{
    canvas::FrameContext,
    color::BLACK,
    sim::{DotField, GravityFormula},
};

pub const NUM_DOTS: usize = 6;
/// Gravity radius in pixels
const GRAVITY_LIMIT: u8 = 3;
/// Velocity limit in pixels per frame
const MAX_SPEED: u8 = 2;

const BRIGHTNESS: u8 = 164;
const FRAME_DELAY: Duration = Duration::from_millis(1000 / 12);
const DEFAULT_SEED: u64 = 0x6AA7_D075;

#[derive(Debug, Clone)]
pub struct GravityDotsAnimation<const N: usize> {
    field: DotField<N, NUM_DOTS>,
}

impl<const N: usize> Default for GravityDotsAnimation<N> {
    fn default() -> Self {
        Self::new(GravityFormula::default())
    }
}

impl<const N: usize> GravityDotsAnimation<N> {
    pub fn new(formula: GravityFormula) -> Self {
        Self::with_seed(formula, DEFAULT_SEED)
    }

    pub fn with_seed(formula: GravityFormula, seed: u64) -> Self {
        Self {
            field: DotField::new(GRAVITY_LIMIT, MAX_SPEED, formula, seed),
        }
    }

    pub const fn field(&self) -> &DotField<N, NUM_DOTS> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut DotField<N, NUM_DOTS> {
        &mut self.field
    }
}

impl<const N: usize> Animation<N> for GravityDotsAnimation<N> {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        ctx.canvas.reset();
        ctx.canvas.set_brightness(BRIGHTNESS);
        self.field.reseed();
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        if self.field.step() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[GravityDotsAnimation.run] stalled for {} ticks, reseeding",
                self.field.stall_ticks()
            );
            self.init(ctx);
        }

        let leds = ctx.canvas.leds_mut();
        leds.fill(BLACK);
        self.field.render(leds);
        FRAME_DELAY
    }
}
