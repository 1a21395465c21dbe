#![no_std]

pub mod animation;
pub mod canvas;
pub mod color;
pub mod frame_scheduler;
pub mod math8;
pub mod sensors;
pub mod sim;
pub mod spectrum;

pub use animation::{
    Animation, AnimationId, AnimationSlot, DarknessSwitch, POLL_DELAY, RotatingCollection,
};
pub use canvas::{Canvas, DEFAULT_BRIGHTNESS, FrameContext};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use sensors::{AmbientSensors, AmbientState, AudioFeatures, AudioSnapshot, SyntheticAudio};

pub use color::{Hsv, Rgb};
pub use math8::ease_in_out_quad;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Animations never touch the driver; the canvas is pushed to it once per
/// frame.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
