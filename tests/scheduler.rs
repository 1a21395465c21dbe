mod tests {
    use strip_animations::{
        AmbientState, AnimationId, AnimationSlot, Canvas, Duration, FrameScheduler, Instant,
        OutputDriver, POLL_DELAY, Rgb, SyntheticAudio,
        color::{BLACK, WHITE},
    };

    const LEDS: usize = 10;

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    #[test]
    fn test_canvas_indices_wrap() {
        let mut canvas = Canvas::<LEDS>::new();
        canvas.set(LEDS + 2, WHITE);
        assert_eq!(canvas.get(2), WHITE);

        canvas.add(2, WHITE);
        assert_eq!(canvas.get(2), WHITE);

        canvas.fade_to_black_by(255);
        assert_eq!(canvas.get(2), BLACK);
    }

    #[test]
    fn test_empty_canvas_is_inert() {
        let mut canvas = Canvas::<0>::new();
        canvas.set(3, WHITE);
        canvas.add(3, WHITE);
        assert_eq!(canvas.get(3), BLACK);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_push_applies_brightness() {
        let mut canvas = Canvas::<LEDS>::new();
        let mut driver = RecordingDriver::default();
        canvas.fill(WHITE);

        canvas.set_brightness(128);
        canvas.push(&mut driver);
        assert_eq!(driver.frames[0][0], Rgb { r: 128, g: 128, b: 128 });
        // the canvas keeps unscaled pixels
        assert_eq!(canvas.get(0), WHITE);

        canvas.set_brightness(0);
        canvas.push(&mut driver);
        assert!(driver.frames[1].iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_scheduler_uses_animation_delay() {
        let ambient = AmbientState::new(false);
        let slot: AnimationSlot<LEDS> = AnimationId::SolidColor.to_slot(WHITE);
        let mut scheduler = FrameScheduler::new(slot, RecordingDriver::default());

        let start = Instant::from_millis(1_000);
        scheduler.init(start, &ambient, None);
        assert!(scheduler.is_due(start));

        let result = scheduler.tick(start, &ambient, None);
        assert_eq!(result.sleep_duration, Duration::from_millis(500));
        assert_eq!(result.next_deadline, start + Duration::from_millis(500));
        assert!(!scheduler.is_due(Instant::from_millis(1_200)));

        assert_eq!(scheduler.output().frames.len(), 1);
        assert_eq!(scheduler.output().frames[0].len(), LEDS);
        assert_ne!(scheduler.output().frames[0][0], BLACK);
    }

    #[test]
    fn test_set_animation_returns_previous() {
        let ambient = AmbientState::new(false);
        let slot: AnimationSlot<LEDS> = AnimationId::Plasma.to_slot(WHITE);
        let mut scheduler = FrameScheduler::new(slot, RecordingDriver::default());

        let previous = scheduler.set_animation(AnimationId::Black.to_slot(WHITE));
        assert_eq!(previous.id(), AnimationId::Plasma);
        assert_eq!(scheduler.animation().id(), AnimationId::Black);

        let now = Instant::from_millis(0);
        scheduler.init(now, &ambient, None);
        scheduler.tick(now, &ambient, None);
        assert!(scheduler.output().frames[0].iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_scheduler_polls_audio_animations() {
        let ambient = AmbientState::new(false);
        let slot: AnimationSlot<LEDS> = AnimationId::FullFft.to_slot(WHITE);
        let mut scheduler = FrameScheduler::new(slot, RecordingDriver::default());
        let mut audio = SyntheticAudio::new();

        let now = Instant::from_millis(0);
        scheduler.init(now, &ambient, Some(&mut audio));
        let result = scheduler.tick(now, &ambient, Some(&mut audio));
        assert_eq!(result.sleep_duration, POLL_DELAY);

        audio.update(now);
        let result = scheduler.tick(now, &ambient, Some(&mut audio));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }
}
