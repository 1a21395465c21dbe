use super::AudioFeatures;

/// Bin count of a 256 point FFT
pub const FFT_BINS: usize = 128;

/// Latest audio analysis results, published by the capture pipeline
///
/// Readings behave like one-shot mailboxes: publishing marks them
/// available, reading RMS or peak takes them, and an FFT frame is released
/// with [`AudioFeatures::finish_fft`].
#[derive(Debug, Clone)]
pub struct AudioSnapshot<const BINS: usize = FFT_BINS> {
    rms: Option<f32>,
    peak: Option<f32>,
    fft: [f32; BINS],
    fft_fresh: bool,
}

impl<const BINS: usize> Default for AudioSnapshot<BINS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const BINS: usize> AudioSnapshot<BINS> {
    pub const fn new() -> Self {
        Self {
            rms: None,
            peak: None,
            fft: [0.0; BINS],
            fft_fresh: false,
        }
    }

    pub fn publish_rms(&mut self, rms: f32) {
        self.rms = Some(rms);
    }

    pub fn publish_peak(&mut self, peak: f32) {
        self.peak = Some(peak);
    }

    /// Publish a new FFT frame
    ///
    /// Missing trailing bins are zeroed, extra bins are dropped.
    pub fn publish_fft(&mut self, bins: &[f32]) {
        for (dst, src) in self
            .fft
            .iter_mut()
            .zip(bins.iter().copied().chain(core::iter::repeat(0.0)))
        {
            *dst = src;
        }
        self.fft_fresh = true;
    }

    /// Mutable access to the FFT frame for in-place producers
    ///
    /// Marks the frame as fresh.
    pub fn fft_mut(&mut self) -> &mut [f32; BINS] {
        self.fft_fresh = true;
        &mut self.fft
    }
}

impl<const BINS: usize> AudioFeatures for AudioSnapshot<BINS> {
    fn rms_available(&self) -> bool {
        self.rms.is_some()
    }

    fn read_rms(&mut self) -> f32 {
        self.rms.take().unwrap_or(0.0)
    }

    fn peak_available(&self) -> bool {
        self.peak.is_some()
    }

    fn read_peak(&mut self) -> f32 {
        self.peak.take().unwrap_or(0.0)
    }

    fn fft_available(&self) -> bool {
        self.fft_fresh
    }

    fn fft_bins(&self) -> usize {
        BINS
    }

    fn read_fft_bin(&mut self, bin: usize) -> f32 {
        self.fft.get(bin).copied().unwrap_or(0.0)
    }

    fn finish_fft(&mut self) {
        self.fft_fresh = false;
    }
}
