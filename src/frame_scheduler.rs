//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{
    OutputDriver,
    animation::Animation,
    canvas::{Canvas, FrameContext},
    sensors::{AmbientSensors, AudioFeatures},
};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable driver step that owns the canvas, the output and one animation.
///
/// This scheduler:
/// - Builds the frame context for every call
/// - Runs the animation and pushes the canvas to the output driver
/// - Paces frames with the delay the animation asked for
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(AnimationId::Plasma.to_slot(WHITE), driver);
/// scheduler.init(Instant::from_millis(now_ms()), &ambient, None);
///
/// loop {
///     let now = Instant::from_millis(now_ms());
///     let result = scheduler.tick(now, &ambient, None);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, A: Animation<N>, const N: usize> {
    output: O,
    animation: A,
    canvas: Canvas<N>,
    next_frame: Instant,
}

impl<O: OutputDriver, A: Animation<N>, const N: usize> FrameScheduler<O, A, N> {
    /// Create a new frame scheduler with a black canvas.
    pub fn new(animation: A, driver: O) -> Self {
        Self {
            output: driver,
            animation,
            canvas: Canvas::new(),
            next_frame: Instant::from_millis(0),
        }
    }

    /// Run the animation's `init` and make the next `tick` due at `now`.
    pub fn init(
        &mut self,
        now: Instant,
        ambient: &dyn AmbientSensors,
        audio: Option<&mut dyn AudioFeatures>,
    ) {
        let mut ctx = FrameContext {
            canvas: &mut self.canvas,
            now,
            ambient,
            audio: audio.map(|audio| audio as &mut dyn AudioFeatures),
        };
        self.animation.init(&mut ctx);
        self.next_frame = now;
    }

    /// Process one frame and return timing information.
    ///
    /// The next deadline is measured from `now`, so a late driver never
    /// produces catch-up bursts.
    pub fn tick(
        &mut self,
        now: Instant,
        ambient: &dyn AmbientSensors,
        audio: Option<&mut dyn AudioFeatures>,
    ) -> FrameResult {
        let mut ctx = FrameContext {
            canvas: &mut self.canvas,
            now,
            ambient,
            audio: audio.map(|audio| audio as &mut dyn AudioFeatures),
        };
        let delay = self.animation.run(&mut ctx);

        self.canvas.push(&mut self.output);
        self.next_frame = now + delay;

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: delay,
        }
    }

    /// Whether the next frame is due.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Replace the animation and hand back the previous one.
    ///
    /// The new animation is initialized on the next `init`.
    pub fn set_animation(&mut self, animation: A) -> A {
        core::mem::replace(&mut self.animation, animation)
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    pub fn canvas(&self) -> &Canvas<N> {
        &self.canvas
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
