use embassy_time::{Duration, Instant};

use super::{AudioFeatures, AudioSnapshot, FFT_BINS};

const DEFAULT_BEAT_MS: u64 = 500; // 120 BPM

// Envelope decay constants
const KICK_DECAY_MS: f32 = 90.0;
const HAT_DECAY_MS: f32 = 35.0;

// Bins shaped by each voice
const KICK_BINS: core::ops::Range<usize> = 0..8;
const HAT_BINS: core::ops::Range<usize> = 48..FFT_BINS;

const NOISE_FLOOR: f32 = 0.02;
const MELODY_PERIOD_MS: f32 = 7_000.0;

/// Deterministic kick/hi-hat pattern for driving audio animations without
/// a microphone
///
/// Kicks land on every beat, hi-hats halfway between beats, and a slow
/// "melody" tone sweeps across the middle of the spectrum.
#[derive(Debug, Clone)]
pub struct SyntheticAudio {
    beat: Duration,
    snapshot: AudioSnapshot<FFT_BINS>,
}

impl Default for SyntheticAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticAudio {
    pub const fn new() -> Self {
        Self {
            beat: Duration::from_millis(DEFAULT_BEAT_MS),
            snapshot: AudioSnapshot::new(),
        }
    }

    /// Set the beat interval
    #[must_use]
    pub fn with_beat(mut self, beat: Duration) -> Self {
        self.beat = beat;
        self
    }

    /// Publish the readings for the given moment
    #[allow(clippy::cast_precision_loss)]
    pub fn update(&mut self, now: Instant) {
        let beat_ms = self.beat.as_millis().max(2);
        let phase_ms = now.as_millis() % beat_ms;
        let half = beat_ms / 2;

        let kick = libm::expf(-(phase_ms as f32) / KICK_DECAY_MS);
        let hat = if phase_ms >= half {
            libm::expf(-((phase_ms - half) as f32) / HAT_DECAY_MS)
        } else {
            0.0
        };

        let melody_phase = (now.as_millis() as f32 / MELODY_PERIOD_MS) * core::f32::consts::TAU;
        let melody_center = 24.0 + 16.0 * libm::sinf(melody_phase);

        let fft = self.snapshot.fft_mut();
        for (bin, value) in fft.iter_mut().enumerate() {
            let mut magnitude = NOISE_FLOOR;
            if KICK_BINS.contains(&bin) {
                magnitude += kick * (1.0 - bin as f32 / KICK_BINS.end as f32);
            }
            if HAT_BINS.contains(&bin) {
                magnitude += hat * 0.08;
            }
            let distance = libm::fabsf(bin as f32 - melody_center);
            magnitude += 0.3 * libm::expf(-distance * distance / 8.0);
            *value = magnitude.min(1.0);
        }

        self.snapshot.publish_rms((0.1 + 0.6 * kick + 0.2 * hat).min(1.0));
        self.snapshot.publish_peak(kick.max(hat * 0.7));
    }
}

impl AudioFeatures for SyntheticAudio {
    fn rms_available(&self) -> bool {
        self.snapshot.rms_available()
    }

    fn read_rms(&mut self) -> f32 {
        self.snapshot.read_rms()
    }

    fn peak_available(&self) -> bool {
        self.snapshot.peak_available()
    }

    fn read_peak(&mut self) -> f32 {
        self.snapshot.read_peak()
    }

    fn fft_available(&self) -> bool {
        self.snapshot.fft_available()
    }

    fn fft_bins(&self) -> usize {
        self.snapshot.fft_bins()
    }

    fn read_fft_bin(&mut self, bin: usize) -> f32 {
        self.snapshot.read_fft_bin(bin)
    }

    fn finish_fft(&mut self) {
        self.snapshot.finish_fft();
    }
}
