//! Fire: heat diffusion rendered through a black body gradient
//!
//! See [`HeatField`] for the simulation steps.

use embassy_time::Duration;

use super::Animation;
use crate::{canvas::FrameContext, sim::HeatField};

/// Default cooling, suggested range 20-100
pub const DEFAULT_COOLING: u8 = 60;
/// Default sparking chance out of 256, suggested range 50-200
pub const DEFAULT_SPARKING: u16 = 50;

const BRIGHTNESS: u8 = 32;
const FRAME_DELAY: Duration = Duration::from_millis(1000 / 10);
const DEFAULT_SEED: u64 = 0xF12E_2012;

#[derive(Debug, Clone)]
pub struct FireAnimation<const N: usize> {
    field: HeatField<N>,
}

impl<const N: usize> Default for FireAnimation<N> {
    fn default() -> Self {
        Self::new(DEFAULT_COOLING, DEFAULT_SPARKING)
    }
}

impl<const N: usize> FireAnimation<N> {
    /// Create a fire with custom cooling and sparking chance (out of 256)
    pub fn new(cooling: u8, sparking: u16) -> Self {
        Self {
            field: HeatField::new(cooling, sparking, DEFAULT_SEED),
        }
    }

    pub const fn field(&self) -> &HeatField<N> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut HeatField<N> {
        &mut self.field
    }
}

impl<const N: usize> Animation<N> for FireAnimation<N> {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        ctx.canvas.reset();
        ctx.canvas.set_brightness(BRIGHTNESS);
        self.field.clear();
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        self.field.tick(ctx.canvas.leds_mut());
        FRAME_DELAY
    }
}
