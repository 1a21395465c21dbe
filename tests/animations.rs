mod tests {
    use strip_animations::{
        AmbientState, Animation, AnimationId, Canvas, Duration, FrameContext, Instant, POLL_DELAY,
        SyntheticAudio,
        animation::{
            BatteryAnimation, FftOctavesAnimation, SolidColorAnimation, StripTestAnimation, smear,
            smear_trails,
        },
        color::{BLACK, GRAY, Rgb, WHITE},
    };

    const LEDS: usize = 32;
    const ORANGE: Rgb = Rgb {
        r: 255,
        g: 128,
        b: 0,
    };

    #[test]
    fn test_every_animation_runs_without_audio() {
        let ambient = AmbientState::new(false).with_battery(50);
        for id in AnimationId::ALL {
            let mut canvas = Canvas::<LEDS>::new();
            let mut animation = id.to_slot::<LEDS>(ORANGE);
            assert_eq!(animation.id(), id);

            let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
            animation.init(&mut ctx);
            let delay = animation.run(&mut ctx);
            assert!(delay > Duration::from_millis(0), "{}", id.as_str());
        }
    }

    #[test]
    fn test_every_animation_runs_with_audio() {
        let ambient = AmbientState::new(true).with_light_level(1000);
        let mut audio = SyntheticAudio::new();
        for id in AnimationId::ALL {
            let mut canvas = Canvas::<LEDS>::new();
            let mut animation = id.to_slot::<LEDS>(ORANGE);

            for step in 0..20u64 {
                let now = Instant::from_millis(step * 25);
                audio.update(now);
                let mut ctx =
                    FrameContext::new(&mut canvas, now, &ambient).with_audio(&mut audio);
                if step == 0 {
                    animation.init(&mut ctx);
                }
                let delay = animation.run(&mut ctx);
                assert!(delay > Duration::from_millis(0), "{}", id.as_str());
            }
        }
    }

    #[test]
    fn test_audio_animations_poll_without_input() {
        let ambient = AmbientState::new(false);
        let polling = AnimationId::ALL
            .into_iter()
            .filter(|&id| id.uses_audio() && id != AnimationId::RmsConfetti);
        for id in polling {
            let mut canvas = Canvas::<LEDS>::new();
            let mut animation = id.to_slot::<LEDS>(ORANGE);
            let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
            animation.init(&mut ctx);
            assert_eq!(animation.run(&mut ctx), POLL_DELAY, "{}", id.as_str());
        }
    }

    #[test]
    fn test_rms_confetti_fades_without_audio() {
        let ambient = AmbientState::new(false);
        let mut canvas = Canvas::<LEDS>::new();
        canvas.fill(WHITE);
        let mut animation = AnimationId::RmsConfetti.to_slot::<LEDS>(ORANGE);

        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
        assert_eq!(animation.run(&mut ctx), Duration::from_millis(16));
        assert!(canvas.leds().iter().all(|&led| led.r < 255 && led.r > 0));
    }

    #[test]
    fn test_smear_trails_spreads_spark() {
        let spark = Rgb {
            r: 200,
            g: 100,
            b: 40,
        };
        let mut leds = [spark, BLACK, BLACK, BLACK];
        smear_trails(&mut leds);

        assert_eq!(
            leds,
            [
                spark,
                Rgb {
                    r: 50,
                    g: 25,
                    b: 10,
                },
                Rgb { r: 12, g: 6, b: 2 },
                Rgb {
                    r: 53,
                    g: 26,
                    b: 10,
                },
            ]
        );
    }

    #[test]
    fn test_smear_saturates() {
        let side = Rgb { r: 64, g: 8, b: 0 };
        let bright = Rgb {
            r: 250,
            g: 100,
            b: 255,
        };

        assert_eq!(
            smear(side, bright, side),
            Rgb {
                r: 255,
                g: 104,
                b: 255,
            }
        );
    }

    #[test]
    fn test_solid_color_fills_strip() {
        let ambient = AmbientState::new(false);
        let mut canvas = Canvas::<LEDS>::new();
        let mut animation = SolidColorAnimation::new(ORANGE).with_brightness(200);

        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
        Animation::<LEDS>::init(&mut animation, &mut ctx);
        Animation::<LEDS>::run(&mut animation, &mut ctx);

        assert!(canvas.leds().iter().all(|&led| led == ORANGE));
        assert_eq!(canvas.brightness(), 200);
    }

    #[test]
    fn test_black_clears_strip() {
        let ambient = AmbientState::new(false);
        let mut canvas = Canvas::<LEDS>::new();
        canvas.fill(WHITE);
        let mut animation = AnimationId::Black.to_slot::<LEDS>(ORANGE);

        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
        animation.init(&mut ctx);
        animation.run(&mut ctx);
        assert!(canvas.leds().iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_battery_bar_length() {
        let ambient = AmbientState::new(false).with_battery(50);
        let mut canvas = Canvas::<LEDS>::new();
        let mut animation = BatteryAnimation::default();

        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
        Animation::<LEDS>::init(&mut animation, &mut ctx);
        Animation::<LEDS>::run(&mut animation, &mut ctx);

        let lit = canvas.leds().iter().filter(|&&led| led != BLACK).count();
        assert_eq!(lit, LEDS / 2);
    }

    #[test]
    fn test_strip_test_walks() {
        let ambient = AmbientState::new(false);
        let mut canvas = Canvas::<LEDS>::new();
        let mut animation = StripTestAnimation::default();

        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
        Animation::<LEDS>::init(&mut animation, &mut ctx);
        Animation::<LEDS>::run(&mut animation, &mut ctx);
        Animation::<LEDS>::run(&mut animation, &mut ctx);

        assert_eq!(canvas.get(1), BLACK);
        assert_eq!(canvas.get(5), WHITE);
        assert_eq!(canvas.get(6), BLACK);
    }

    #[test]
    fn test_fft_octaves_flashes_on_strong_beat() {
        use strip_animations::sensors::{AudioSnapshot, FFT_BINS};

        let ambient = AmbientState::new(false);
        let mut canvas = Canvas::<LEDS>::new();
        let mut animation = FftOctavesAnimation::default();
        let mut audio = AudioSnapshot::<FFT_BINS>::new();
        audio.publish_fft(&[1.0; FFT_BINS]);
        audio.publish_peak(1.0);

        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient)
            .with_audio(&mut audio);
        Animation::<LEDS>::init(&mut animation, &mut ctx);
        Animation::<LEDS>::run(&mut animation, &mut ctx);

        assert!(canvas.leds().iter().all(|&led| led == GRAY));
    }

    #[test]
    fn test_fft_octaves_reinit_restores_beat_brightness() {
        use strip_animations::sensors::{AudioSnapshot, FFT_BINS};

        // octaves 1 to 3 loud, the rest silent
        let mut bins = [0.0; FFT_BINS];
        bins[1..=7].fill(1.0);

        let ambient = AmbientState::new(false);
        let mut canvas = Canvas::<LEDS>::new();
        let mut animation = FftOctavesAnimation::default();
        let mut audio = AudioSnapshot::<FFT_BINS>::new();
        let beat_brightness = FftOctavesAnimation::beat_brightness(3);

        audio.publish_fft(&bins);
        audio.publish_peak(1.0);
        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient)
            .with_audio(&mut audio);
        Animation::<LEDS>::init(&mut animation, &mut ctx);
        Animation::<LEDS>::run(&mut animation, &mut ctx);
        assert_eq!(ctx.canvas.brightness(), beat_brightness);

        Animation::<LEDS>::init(&mut animation, &mut ctx);
        assert_eq!(ctx.canvas.brightness(), 255);

        audio.publish_fft(&bins);
        audio.publish_peak(1.0);
        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(10), &ambient)
            .with_audio(&mut audio);
        Animation::<LEDS>::run(&mut animation, &mut ctx);
        assert_eq!(ctx.canvas.brightness(), beat_brightness);
    }

    #[test]
    fn test_beat_brightness_saturates() {
        assert_eq!(FftOctavesAnimation::beat_brightness(0), 40);
        assert_eq!(FftOctavesAnimation::beat_brightness(8), 255);
        assert!(FftOctavesAnimation::beat_brightness(3) > FftOctavesAnimation::beat_brightness(2));
    }
}
