//! Octave bands and beat detection on top of a 256 point FFT
//!
//! Magnitudes and the beat estimate are recomputed every frame; nothing here
//! keeps state between frames.

use crate::{math8::unit_to_u8, sensors::AudioFeatures};

/// Number of octave bands (log2 of the 256 point FFT size)
pub const NUM_OCTAVES: usize = 8;

/// Default gain applied to raw bin sums before clamping
pub const DEFAULT_GAIN: f32 = 1.8;

/// Magnitude an octave must exceed to count towards the beat
pub const BEAT_THRESHOLD: u8 = 180;

/// Inclusive FFT bin ranges of each octave
pub const OCTAVE_BINS: [(usize, usize); NUM_OCTAVES] = [
    (0, 0),
    (1, 1),
    (2, 3),
    (4, 7),
    (8, 16),
    (17, 32),
    (33, 64),
    (65, 127),
];

/// 8-bit magnitude per octave
pub type Octaves = [u8; NUM_OCTAVES];

/// Read the current FFT frame into eight octave magnitudes
///
/// Each band is `clamp(gain * sum(bins), 0, 1) * 255`.
pub fn octave_magnitudes<A: AudioFeatures + ?Sized>(audio: &mut A, gain: f32) -> Octaves {
    let mut octaves = [0; NUM_OCTAVES];
    for (magnitude, &(first, last)) in octaves.iter_mut().zip(OCTAVE_BINS.iter()) {
        *magnitude = unit_to_u8(gain * audio.read_fft_bins(first, last));
    }
    octaves
}

/// Count loud octaves as a coarse transient detector
///
/// Octave 0 is mostly DC offset and is ignored. The top octave counts twice
/// so cymbals and snares weigh more, giving a result in `0..=8`.
pub fn beat_strength(octaves: &Octaves, threshold: u8) -> u8 {
    let loud = |magnitude: &u8| u8::from(*magnitude > threshold);

    let beat: u8 = octaves.iter().skip(1).map(loud).sum();
    beat + loud(&octaves[NUM_OCTAVES - 1])
}
