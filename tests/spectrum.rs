mod tests {
    use strip_animations::{
        sensors::{AudioFeatures, AudioSnapshot, FFT_BINS},
        spectrum::{BEAT_THRESHOLD, NUM_OCTAVES, OCTAVE_BINS, beat_strength, octave_magnitudes},
    };

    #[test]
    fn test_beat_counts_top_octave_twice() {
        let octaves = [0, 200, 200, 0, 0, 0, 0, 200];
        assert_eq!(beat_strength(&octaves, BEAT_THRESHOLD), 4);
    }

    #[test]
    fn test_beat_ignores_lowest_octave() {
        let octaves = [255, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(beat_strength(&octaves, BEAT_THRESHOLD), 0);

        let everything = [255; NUM_OCTAVES];
        assert_eq!(beat_strength(&everything, BEAT_THRESHOLD), 8);
    }

    #[test]
    fn test_beat_threshold_is_exclusive() {
        let octaves = [0, 180, 181, 0, 0, 0, 0, 0];
        assert_eq!(beat_strength(&octaves, 180), 1);
    }

    #[test]
    fn test_octave_bins_cover_spectrum() {
        assert_eq!(OCTAVE_BINS[0], (0, 0));
        assert_eq!(OCTAVE_BINS[NUM_OCTAVES - 1].1, FFT_BINS - 1);
        for pair in OCTAVE_BINS.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
    }

    #[test]
    fn test_octave_magnitudes_clamp() {
        let mut audio = AudioSnapshot::<FFT_BINS>::new();
        let mut bins = [0.0; FFT_BINS];
        // octave 1 is bin 1 alone, octave 7 spans 65..=127
        bins[1] = 0.25;
        for bin in &mut bins[65..] {
            *bin = 0.5;
        }
        audio.publish_fft(&bins);

        let octaves = octave_magnitudes(&mut audio, 2.0);
        assert_eq!(octaves[0], 0);
        assert_eq!(octaves[1], 127);
        assert_eq!(octaves[2], 0);
        assert_eq!(octaves[7], 255);
    }

    #[test]
    fn test_fft_frame_released_after_finish() {
        let mut audio = AudioSnapshot::<FFT_BINS>::new();
        assert!(!audio.fft_available());

        audio.publish_fft(&[0.1; 4]);
        assert!(audio.fft_available());
        assert_eq!(audio.read_fft_bin(5), 0.0);

        audio.finish_fft();
        assert!(!audio.fft_available());
    }

    #[test]
    fn test_rms_and_peak_are_consumed() {
        let mut audio = AudioSnapshot::<FFT_BINS>::new();
        audio.publish_rms(0.5);
        audio.publish_peak(0.75);

        assert!(audio.rms_available());
        assert_eq!(audio.read_rms(), 0.5);
        assert!(!audio.rms_available());

        assert_eq!(audio.read_peak(), 0.75);
        assert!(!audio.peak_available());
    }
}
