//! One-dimensional heat diffusion ("Fire2012" by Mark Kriegsman)
//!
//! Every tick runs four steps in a fixed order:
//! 1. All cells cool down a little
//! 2. Heat drifts towards higher indices and diffuses
//! 3. Sometimes a new spark ignites near index 0
//! 4. Cells are rendered through the heat gradient
//!
//! Reordering the steps changes the drift direction and the flame shape.

use fastrand::Rng;

use crate::color::{Rgb, heat_color};

/// Sparking chance that ignites on every tick
pub const ALWAYS_SPARK: u16 = 256;

// Sparks land in the first cells of the strip
const SPARK_CELLS: usize = 7;
const SPARK_MIN_HEAT: u8 = 160;

/// Array of per-cell temperatures sized to the strip
#[derive(Debug, Clone)]
pub struct HeatField<const N: usize> {
    heat: [u8; N],
    /// How much the air cools as it rises. Less cooling makes taller flames.
    cooling: u8,
    /// Chance out of 256 that a spark ignites on a tick
    sparking: u16,
    rng: Rng,
}

impl<const N: usize> HeatField<N> {
    pub fn new(cooling: u8, sparking: u16, seed: u64) -> Self {
        Self {
            heat: [0; N],
            cooling,
            sparking,
            rng: Rng::with_seed(seed),
        }
    }

    pub const fn cells(&self) -> &[u8; N] {
        &self.heat
    }

    pub fn cells_mut(&mut self) -> &mut [u8; N] {
        &mut self.heat
    }

    /// Cool every cell down to zero
    pub fn clear(&mut self) {
        self.heat.fill(0);
    }

    pub fn set_sparking(&mut self, sparking: u16) {
        self.sparking = sparking;
    }

    /// Advance the simulation by one frame and render it
    pub fn tick(&mut self, leds: &mut [Rgb; N]) {
        self.cool();
        self.drift();
        self.spark();
        self.render(leds);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cool(&mut self) {
        let max_cooling = (usize::from(self.cooling) * 10 / N.max(1) + 2).min(255) as u8;
        for cell in &mut self.heat {
            *cell = cell.saturating_sub(self.rng.u8(0..max_cooling));
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn drift(&mut self) {
        for k in (2..N).rev() {
            let below = u16::from(self.heat[k - 1]);
            let further = u16::from(self.heat[k - 2]);
            self.heat[k] = ((below + further * 2) / 3) as u8;
        }
    }

    fn spark(&mut self) {
        if N == 0 || u16::from(self.rng.u8(..)) >= self.sparking {
            return;
        }
        let cell = self.rng.usize(0..SPARK_CELLS) % N;
        self.heat[cell] = self.heat[cell].saturating_add(self.rng.u8(SPARK_MIN_HEAT..=255));
    }

    fn render(&self, leds: &mut [Rgb; N]) {
        for (led, &temperature) in leds.iter_mut().zip(self.heat.iter()) {
            *led = heat_color(temperature);
        }
    }
}
