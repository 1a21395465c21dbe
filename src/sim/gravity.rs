//! Colored dots pulling on each other along a circular strip
//!
//! Positions and velocities are kept in sub-pixel units so dots glide
//! between LEDs instead of jumping.

use fastrand::Rng;

use crate::color::{Rgb, add_colors, hsv, scale_color};

/// Sub-pixel steps per LED
pub const SUBPIXELS: i32 = 16;

/// Accumulated zero-velocity observations that count as a stalled field
pub const STALL_LIMIT: u16 = 1024;

const DOT_SATURATION: u8 = 255;
const DOT_VALUE: u8 = 128;

/// Gravity expression used between two close dots
///
/// The classic expression `limit - d*d/limit + (d == 0) ? 1 - random(0, 2) : 0`
/// parses with the ternary swallowing the whole sum. `Observed` keeps that
/// behavior (a 0 or 1 pixel nudge); `Corrected` applies the inverse-square
/// falloff and only adds the random term for overlapping dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityFormula {
    #[default]
    Observed,
    Corrected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub color: Rgb,
    /// Position in sub-pixels, `0..N * SUBPIXELS`
    pub position: i32,
    /// Velocity in sub-pixels per frame
    pub velocity: i32,
}

impl Dot {
    const DARK: Self = Self {
        color: Rgb { r: 0, g: 0, b: 0 },
        position: 0,
        velocity: 0,
    };
}

/// Fixed set of dots on a strip of `N` pixels
#[derive(Debug, Clone)]
pub struct DotField<const N: usize, const DOTS: usize> {
    dots: [Dot; DOTS],
    /// Pairs closer than this (in sub-pixels) attract each other
    radius: i32,
    /// Velocity limit in sub-pixels per frame
    max_speed: i32,
    formula: GravityFormula,
    zero_move_ticks: u16,
    rng: Rng,
}

impl<const N: usize, const DOTS: usize> DotField<N, DOTS> {
    /// Create a field with randomly seeded dots
    ///
    /// `radius` and `max_speed` are given in whole pixels.
    pub fn new(radius: u8, max_speed: u8, formula: GravityFormula, seed: u64) -> Self {
        let mut field = Self {
            dots: [Dot::DARK; DOTS],
            radius: i32::from(radius) * SUBPIXELS,
            max_speed: i32::from(max_speed) * SUBPIXELS,
            formula,
            zero_move_ticks: 0,
            rng: Rng::with_seed(seed),
        };
        field.reseed();
        field
    }

    pub const fn dots(&self) -> &[Dot; DOTS] {
        &self.dots
    }

    pub fn dots_mut(&mut self) -> &mut [Dot; DOTS] {
        &mut self.dots
    }

    pub const fn formula(&self) -> GravityFormula {
        self.formula
    }

    pub const fn max_speed(&self) -> i32 {
        self.max_speed
    }

    /// Accumulated zero-velocity count since the last moving frame
    pub const fn stall_ticks(&self) -> u16 {
        self.zero_move_ticks
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    const fn span() -> i32 {
        N as i32 * SUBPIXELS
    }

    /// Redraw colors, positions and velocities
    #[allow(clippy::cast_possible_truncation)]
    pub fn reseed(&mut self) {
        let hue_step = (255 / DOTS.max(1)) as u8;
        let mut hue = self.rng.u8(..);
        let span = Self::span();

        for dot in &mut self.dots {
            dot.color = hsv(hue, DOT_SATURATION, DOT_VALUE);
            hue = hue.wrapping_add(hue_step);
            dot.velocity = self.rng.i32(-self.max_speed..=self.max_speed);
            dot.position = if span > 0 { self.rng.i32(0..span) } else { 0 };
        }
        self.zero_move_ticks = 0;
    }

    /// Apply gravity and move every dot by one frame
    ///
    /// Returns `true` once the field has stalled for longer than
    /// [`STALL_LIMIT`]; the caller is expected to reseed it.
    pub fn step(&mut self) -> bool {
        for first in 0..DOTS {
            for second in first + 1..DOTS {
                let distance = self.dots[first].position - self.dots[second].position;
                if distance.abs() >= self.radius {
                    continue;
                }

                let gravity = self.gravity(distance);
                if distance < 0 {
                    self.dots[first].velocity += gravity;
                    self.dots[second].velocity -= gravity;
                } else {
                    self.dots[first].velocity -= gravity;
                    self.dots[second].velocity += gravity;
                }
            }
        }

        let span = Self::span();
        let mut stalled: u16 = 0;
        for dot in &mut self.dots {
            dot.velocity = dot.velocity.clamp(-self.max_speed, self.max_speed);
            if span > 0 {
                dot.position = (dot.position + dot.velocity).rem_euclid(span);
            }
            if dot.velocity == 0 {
                stalled += 1;
            }
        }

        if stalled > 0 {
            self.zero_move_ticks = self.zero_move_ticks.saturating_add(stalled);
        } else {
            self.zero_move_ticks = 0;
        }

        self.zero_move_ticks > STALL_LIMIT
    }

    fn gravity(&mut self, distance: i32) -> i32 {
        let falloff = self.radius - distance * distance / self.radius;
        let overlap = distance == 0;
        match self.formula {
            GravityFormula::Observed => {
                if falloff + i32::from(overlap) != 0 {
                    SUBPIXELS * (1 - self.rng.i32(0..2))
                } else {
                    0
                }
            }
            GravityFormula::Corrected => {
                let nudge = if overlap {
                    SUBPIXELS * (1 - self.rng.i32(0..2))
                } else {
                    0
                };
                falloff + nudge
            }
        }
    }

    /// Add every dot onto the strip, split between its two nearest pixels
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render(&self, leds: &mut [Rgb; N]) {
        if N == 0 {
            return;
        }
        for dot in &self.dots {
            let pixel = (dot.position / SUBPIXELS) as usize % N;
            let fraction = dot.position % SUBPIXELS;
            let weight_next = (fraction * 256 / SUBPIXELS) as u8;

            let next = (pixel + 1) % N;
            leds[pixel] = add_colors(leds[pixel], scale_color(dot.color, 255 - weight_next));
            leds[next] = add_colors(leds[next], scale_color(dot.color, weight_next));
        }
    }
}
