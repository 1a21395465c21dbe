//! Animation system
//!
//! Every animation implements the [`Animation`] trait. Combinators
//! ([`DarknessSwitch`], [`RotatingCollection`]) compose other animations,
//! and [`AnimationSlot`] stores any concrete animation without heap
//! allocation, addressed by a stable [`AnimationId`].

mod battery;
mod black;
mod confetti;
mod fairy_dust;
mod fft_octaves;
mod fire;
mod fireworks;
mod full_fft;
mod gravity_dots;
mod plasma;
mod rainbow;
mod rms_hue;
mod rotation;
mod sensor_debug;
mod solid_color;
mod switch;

use embassy_time::Duration;
use fastrand::Rng;

pub use battery::BatteryAnimation;
pub use black::BlackAnimation;
pub use confetti::{ConfettiAnimation, DEFAULT_PEAK_THRESHOLD, RmsConfettiAnimation};
pub use fairy_dust::{DEFAULT_RINGS, FairyDustAnimation};
pub use fft_octaves::FftOctavesAnimation;
pub use fire::{DEFAULT_COOLING, DEFAULT_SPARKING, FireAnimation};
pub use fireworks::{FireworksAnimation, smear, smear_trails};
pub use full_fft::FullFftAnimation;
pub use gravity_dots::{GravityDotsAnimation, NUM_DOTS};
pub use plasma::PlasmaAnimation;
pub use rainbow::RainbowAnimation;
pub use rms_hue::RmsHueAnimation;
pub use rotation::RotatingCollection;
pub use sensor_debug::SensorDebugAnimation;
pub use solid_color::SolidColorAnimation;
pub use strip_test::StripTestAnimation;
pub use switch::DarknessSwitch;

use crate::{canvas::FrameContext, color::Rgb};

/// Delay returned while an input is not ready yet
pub const POLL_DELAY: Duration = Duration::from_millis(2);

const ANIMATION_NAME_BLACK: &str = "black";
const ANIMATION_NAME_SOLID_COLOR: &str = "solid_color";
const ANIMATION_NAME_STRIP_TEST: &str = "strip_test";
const ANIMATION_NAME_SENSOR_DEBUG: &str = "sensor_debug";
const ANIMATION_NAME_BATTERY: &str = "battery";
const ANIMATION_NAME_PLASMA: &str = "plasma";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_RAINBOW_GLITTER: &str = "rainbow_glitter";
const ANIMATION_NAME_CONFETTI: &str = "confetti";
const ANIMATION_NAME_FIRE: &str = "fire";
const ANIMATION_NAME_FIREWORKS: &str = "fireworks";
const ANIMATION_NAME_GRAVITY_DOTS: &str = "gravity_dots";
const ANIMATION_NAME_FAIRY_DUST: &str = "fairy_dust";
const ANIMATION_NAME_RMS_HUE: &str = "rms_hue";
const ANIMATION_NAME_RMS_CONFETTI: &str = "rms_confetti";
const ANIMATION_NAME_FFT_OCTAVES: &str = "fft_octaves";
const ANIMATION_NAME_FULL_FFT: &str = "full_fft";

const ANIMATION_ID_BLACK: u8 = 0;
const ANIMATION_ID_SOLID_COLOR: u8 = 1;
const ANIMATION_ID_STRIP_TEST: u8 = 2;
const ANIMATION_ID_SENSOR_DEBUG: u8 = 3;
const ANIMATION_ID_BATTERY: u8 = 4;
const ANIMATION_ID_PLASMA: u8 = 5;
const ANIMATION_ID_RAINBOW: u8 = 6;
const ANIMATION_ID_RAINBOW_GLITTER: u8 = 7;
const ANIMATION_ID_CONFETTI: u8 = 8;
const ANIMATION_ID_FIRE: u8 = 9;
const ANIMATION_ID_FIREWORKS: u8 = 10;
const ANIMATION_ID_GRAVITY_DOTS: u8 = 11;
const ANIMATION_ID_FAIRY_DUST: u8 = 12;
const ANIMATION_ID_RMS_HUE: u8 = 13;
const ANIMATION_ID_RMS_CONFETTI: u8 = 14;
const ANIMATION_ID_FFT_OCTAVES: u8 = 15;
const ANIMATION_ID_FULL_FFT: u8 = 16;

pub trait Animation<const N: usize> {
    /// Reset shared and internal state before the animation becomes active
    ///
    /// May be called many times over the animation's life. The default
    /// blanks the canvas and restores the default brightness.
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        ctx.canvas.reset();
    }

    /// Render a single frame
    ///
    /// Returns how long the driver should wait before the next call. This is
    /// a hint; the driver may be late.
    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration;
}

impl<const N: usize, A: Animation<N> + ?Sized> Animation<N> for &mut A {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        (**self).init(ctx);
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        (**self).run(ctx)
    }
}

/// Uniformly random pixel index, 0 on an empty strip
pub(crate) fn random_pixel(rng: &mut Rng, len: usize) -> usize {
    if len == 0 { 0 } else { rng.usize(0..len) }
}

/// Animation slot - enum containing all concrete animations
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum AnimationSlot<const N: usize> {
    Black(BlackAnimation),
    SolidColor(SolidColorAnimation),
    StripTest(StripTestAnimation),
    SensorDebug(SensorDebugAnimation),
    Battery(BatteryAnimation),
    Plasma(PlasmaAnimation),
    /// Rainbow with or without glitter
    Rainbow(RainbowAnimation),
    Confetti(ConfettiAnimation),
    Fire(FireAnimation<N>),
    Fireworks(FireworksAnimation),
    GravityDots(GravityDotsAnimation<N>),
    FairyDust(FairyDustAnimation),
    RmsHue(RmsHueAnimation),
    RmsConfetti(RmsConfettiAnimation),
    FftOctaves(FftOctavesAnimation),
    FullFft(FullFftAnimation),
}

/// Known animation ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Black = ANIMATION_ID_BLACK,
    SolidColor = ANIMATION_ID_SOLID_COLOR,
    StripTest = ANIMATION_ID_STRIP_TEST,
    SensorDebug = ANIMATION_ID_SENSOR_DEBUG,
    Battery = ANIMATION_ID_BATTERY,
    Plasma = ANIMATION_ID_PLASMA,
    Rainbow = ANIMATION_ID_RAINBOW,
    RainbowGlitter = ANIMATION_ID_RAINBOW_GLITTER,
    Confetti = ANIMATION_ID_CONFETTI,
    Fire = ANIMATION_ID_FIRE,
    Fireworks = ANIMATION_ID_FIREWORKS,
    GravityDots = ANIMATION_ID_GRAVITY_DOTS,
    FairyDust = ANIMATION_ID_FAIRY_DUST,
    RmsHue = ANIMATION_ID_RMS_HUE,
    RmsConfetti = ANIMATION_ID_RMS_CONFETTI,
    FftOctaves = ANIMATION_ID_FFT_OCTAVES,
    FullFft = ANIMATION_ID_FULL_FFT,
}

impl AnimationId {
    /// Every id, in id order
    pub const ALL: [Self; 17] = [
        Self::Black,
        Self::SolidColor,
        Self::StripTest,
        Self::SensorDebug,
        Self::Battery,
        Self::Plasma,
        Self::Rainbow,
        Self::RainbowGlitter,
        Self::Confetti,
        Self::Fire,
        Self::Fireworks,
        Self::GravityDots,
        Self::FairyDust,
        Self::RmsHue,
        Self::RmsConfetti,
        Self::FftOctaves,
        Self::FullFft,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_BLACK => Self::Black,
            ANIMATION_ID_SOLID_COLOR => Self::SolidColor,
            ANIMATION_ID_STRIP_TEST => Self::StripTest,
            ANIMATION_ID_SENSOR_DEBUG => Self::SensorDebug,
            ANIMATION_ID_BATTERY => Self::Battery,
            ANIMATION_ID_PLASMA => Self::Plasma,
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            ANIMATION_ID_RAINBOW_GLITTER => Self::RainbowGlitter,
            ANIMATION_ID_CONFETTI => Self::Confetti,
            ANIMATION_ID_FIRE => Self::Fire,
            ANIMATION_ID_FIREWORKS => Self::Fireworks,
            ANIMATION_ID_GRAVITY_DOTS => Self::GravityDots,
            ANIMATION_ID_FAIRY_DUST => Self::FairyDust,
            ANIMATION_ID_RMS_HUE => Self::RmsHue,
            ANIMATION_ID_RMS_CONFETTI => Self::RmsConfetti,
            ANIMATION_ID_FFT_OCTAVES => Self::FftOctaves,
            ANIMATION_ID_FULL_FFT => Self::FullFft,
            _ => return None,
        })
    }

    /// Build the animation with its default parameters
    ///
    /// `color` is only used by the solid color animation.
    pub fn to_slot<const N: usize>(self, color: Rgb) -> AnimationSlot<N> {
        match self {
            Self::Black => AnimationSlot::Black(BlackAnimation),
            Self::SolidColor => AnimationSlot::SolidColor(SolidColorAnimation::new(color)),
            Self::StripTest => AnimationSlot::StripTest(StripTestAnimation::default()),
            Self::SensorDebug => AnimationSlot::SensorDebug(SensorDebugAnimation),
            Self::Battery => AnimationSlot::Battery(BatteryAnimation::default()),
            Self::Plasma => AnimationSlot::Plasma(PlasmaAnimation::default()),
            Self::Rainbow => AnimationSlot::Rainbow(RainbowAnimation::new(false)),
            Self::RainbowGlitter => AnimationSlot::Rainbow(RainbowAnimation::new(true)),
            Self::Confetti => AnimationSlot::Confetti(ConfettiAnimation::new()),
            Self::Fire => AnimationSlot::Fire(FireAnimation::default()),
            Self::Fireworks => AnimationSlot::Fireworks(FireworksAnimation::new()),
            Self::GravityDots => AnimationSlot::GravityDots(GravityDotsAnimation::default()),
            Self::FairyDust => AnimationSlot::FairyDust(FairyDustAnimation::default()),
            Self::RmsHue => AnimationSlot::RmsHue(RmsHueAnimation::default()),
            Self::RmsConfetti => AnimationSlot::RmsConfetti(RmsConfettiAnimation::default()),
            Self::FftOctaves => AnimationSlot::FftOctaves(FftOctavesAnimation::default()),
            Self::FullFft => AnimationSlot::FullFft(FullFftAnimation),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => ANIMATION_NAME_BLACK,
            Self::SolidColor => ANIMATION_NAME_SOLID_COLOR,
            Self::StripTest => ANIMATION_NAME_STRIP_TEST,
            Self::SensorDebug => ANIMATION_NAME_SENSOR_DEBUG,
            Self::Battery => ANIMATION_NAME_BATTERY,
            Self::Plasma => ANIMATION_NAME_PLASMA,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::RainbowGlitter => ANIMATION_NAME_RAINBOW_GLITTER,
            Self::Confetti => ANIMATION_NAME_CONFETTI,
            Self::Fire => ANIMATION_NAME_FIRE,
            Self::Fireworks => ANIMATION_NAME_FIREWORKS,
            Self::GravityDots => ANIMATION_NAME_GRAVITY_DOTS,
            Self::FairyDust => ANIMATION_NAME_FAIRY_DUST,
            Self::RmsHue => ANIMATION_NAME_RMS_HUE,
            Self::RmsConfetti => ANIMATION_NAME_RMS_CONFETTI,
            Self::FftOctaves => ANIMATION_NAME_FFT_OCTAVES,
            Self::FullFft => ANIMATION_NAME_FULL_FFT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Whether the animation needs audio features to draw anything
    ///
    /// All of them poll with [`POLL_DELAY`] without input except
    /// `RmsConfetti`, which keeps fading its old specks at its usual pace.
    pub const fn uses_audio(self) -> bool {
        matches!(
            self,
            Self::RmsHue | Self::RmsConfetti | Self::FftOctaves | Self::FullFft
        )
    }
}

impl<const N: usize> AnimationSlot<N> {
    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Black(_) => AnimationId::Black,
            Self::SolidColor(_) => AnimationId::SolidColor,
            Self::StripTest(_) => AnimationId::StripTest,
            Self::SensorDebug(_) => AnimationId::SensorDebug,
            Self::Battery(_) => AnimationId::Battery,
            Self::Plasma(_) => AnimationId::Plasma,
            Self::Rainbow(animation) if animation.has_glitter() => AnimationId::RainbowGlitter,
            Self::Rainbow(_) => AnimationId::Rainbow,
            Self::Confetti(_) => AnimationId::Confetti,
            Self::Fire(_) => AnimationId::Fire,
            Self::Fireworks(_) => AnimationId::Fireworks,
            Self::GravityDots(_) => AnimationId::GravityDots,
            Self::FairyDust(_) => AnimationId::FairyDust,
            Self::RmsHue(_) => AnimationId::RmsHue,
            Self::RmsConfetti(_) => AnimationId::RmsConfetti,
            Self::FftOctaves(_) => AnimationId::FftOctaves,
            Self::FullFft(_) => AnimationId::FullFft,
        }
    }

    /// Update the color of the solid color animation, ignored by the others
    pub fn set_color(&mut self, color: Rgb) {
        if let Self::SolidColor(animation) = self {
            animation.set_color(color);
        }
    }

    fn as_animation(&mut self) -> &mut dyn Animation<N> {
        match self {
            Self::Black(animation) => animation,
            Self::SolidColor(animation) => animation,
            Self::StripTest(animation) => animation,
            Self::SensorDebug(animation) => animation,
            Self::Battery(animation) => animation,
            Self::Plasma(animation) => animation,
            Self::Rainbow(animation) => animation,
            Self::Confetti(animation) => animation,
            Self::Fire(animation) => animation,
            Self::Fireworks(animation) => animation,
            Self::GravityDots(animation) => animation,
            Self::FairyDust(animation) => animation,
            Self::RmsHue(animation) => animation,
            Self::RmsConfetti(animation) => animation,
            Self::FftOctaves(animation) => animation,
            Self::FullFft(animation) => animation,
        }
    }
}

impl<const N: usize> Animation<N> for AnimationSlot<N> {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        self.as_animation().init(ctx);
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        self.as_animation().run(ctx)
    }
}
