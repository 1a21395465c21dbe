//! Pixel canvas and the per-frame context handed to animations

use embassy_time::Instant;

use crate::{
    OutputDriver,
    color::{BLACK, Rgb, add_colors, scale_color},
    math8::scale8,
    sensors::{AmbientSensors, AudioFeatures},
};

/// Brightness applied by [`Canvas::reset`]
pub const DEFAULT_BRIGHTNESS: u8 = 80;

/// Fixed-length pixel buffer with a global brightness scalar
///
/// Indices passed to the accessors wrap modulo the strip length.
#[derive(Debug, Clone)]
pub struct Canvas<const N: usize> {
    leds: [Rgb; N],
    brightness: u8,
}

impl<const N: usize> Default for Canvas<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Canvas<N> {
    /// Create a black canvas at default brightness
    pub const fn new() -> Self {
        Self {
            leds: [BLACK; N],
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Number of pixels on the strip
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Fill with black and restore the default brightness
    pub fn reset(&mut self) {
        self.fill(BLACK);
        self.brightness = DEFAULT_BRIGHTNESS;
    }

    pub fn fill(&mut self, color: Rgb) {
        self.leds.fill(color);
    }

    /// Read a pixel, black on an empty strip
    pub fn get(&self, index: usize) -> Rgb {
        if N == 0 {
            return BLACK;
        }
        self.leds[index % N]
    }

    pub fn set(&mut self, index: usize, color: Rgb) {
        if N == 0 {
            return;
        }
        self.leds[index % N] = color;
    }

    /// Add a color onto a pixel with saturating arithmetic
    pub fn add(&mut self, index: usize, color: Rgb) {
        if N == 0 {
            return;
        }
        let led = &mut self.leds[index % N];
        *led = add_colors(*led, color);
    }

    /// Dim every pixel by `amount`/256
    pub fn fade_to_black_by(&mut self, amount: u8) {
        let keep = 255 - amount;
        for led in &mut self.leds {
            *led = scale_color(*led, keep);
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub const fn leds(&self) -> &[Rgb; N] {
        &self.leds
    }

    pub fn leds_mut(&mut self) -> &mut [Rgb; N] {
        &mut self.leds
    }

    /// Write the frame to the driver with global brightness applied
    ///
    /// The canvas itself is left untouched so animations can keep building
    /// on the unscaled pixels.
    pub fn push<O: OutputDriver + ?Sized>(&self, output: &mut O) {
        let mut frame = self.leds;
        apply_brightness(&mut frame, self.brightness);
        output.write(&frame);
    }
}

fn apply_brightness(frame: &mut [Rgb], brightness: u8) {
    if brightness == u8::MAX {
        return;
    }

    if brightness == 0 {
        frame.fill(BLACK);
        return;
    }

    for pixel in frame.iter_mut() {
        pixel.r = scale8(pixel.r, brightness);
        pixel.g = scale8(pixel.g, brightness);
        pixel.b = scale8(pixel.b, brightness);
    }
}

/// Everything an animation may touch during one `init()` or `run()` call
pub struct FrameContext<'a, const N: usize> {
    /// The single writable canvas
    pub canvas: &'a mut Canvas<N>,
    /// Monotonic clock, read once by the driver for this call
    pub now: Instant,
    /// Ambient light and battery readings
    pub ambient: &'a dyn AmbientSensors,
    /// Audio analysis, `None` when the board has no audio subsystem
    pub audio: Option<&'a mut dyn AudioFeatures>,
}

impl<'a, const N: usize> FrameContext<'a, N> {
    /// Context for a board without audio input
    pub fn new(canvas: &'a mut Canvas<N>, now: Instant, ambient: &'a dyn AmbientSensors) -> Self {
        Self {
            canvas,
            now,
            ambient,
            audio: None,
        }
    }

    /// Attach an audio source
    #[must_use]
    pub fn with_audio(mut self, audio: &'a mut dyn AudioFeatures) -> Self {
        self.audio = Some(audio);
        self
    }
}
