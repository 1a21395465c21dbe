//! Read-only views of the world outside the strip
//!
//! Darkness detection, battery and audio analysis are maintained by the
//! surrounding firmware. Animations only poll them once per frame and never
//! block waiting for fresh data.

mod ambient;
mod audio;
mod synthetic;

pub use ambient::AmbientState;
pub use audio::{AudioSnapshot, FFT_BINS};
pub use synthetic::SyntheticAudio;

/// Debounced ambient light readings
pub trait AmbientSensors {
    /// Whether the debounced light level is below the darkness threshold
    fn is_dark(&self) -> bool;

    /// Raw 12-bit light level (0-4095)
    fn light_level(&self) -> u16 {
        0
    }

    /// Progress of the darkness debouncer (0 = settled light, 255 = settled dark)
    fn darkness_progress(&self) -> u8 {
        if self.is_dark() { u8::MAX } else { 0 }
    }

    /// Battery charge in percent, if a gauge is present
    fn battery_level(&self) -> Option<u8> {
        None
    }
}

/// Audio analysis results
///
/// All readings are normalized to 0.0-1.0. RMS and peak readings are consumed
/// by reading them; an FFT frame stays readable until the animation calls
/// [`AudioFeatures::finish_fft`].
pub trait AudioFeatures {
    fn rms_available(&self) -> bool;

    fn read_rms(&mut self) -> f32;

    fn peak_available(&self) -> bool;

    fn read_peak(&mut self) -> f32;

    fn fft_available(&self) -> bool;

    /// Number of readable FFT bins
    fn fft_bins(&self) -> usize;

    /// Magnitude of a single bin, 0.0 for bins out of range
    fn read_fft_bin(&mut self, bin: usize) -> f32;

    /// Sum of the bins `first..=last`
    fn read_fft_bins(&mut self, first: usize, last: usize) -> f32 {
        (first..=last).map(|bin| self.read_fft_bin(bin)).sum()
    }

    /// Mark the current FFT frame as consumed
    fn finish_fft(&mut self) {}
}
