mod tests {
    use core::cell::Cell;

    use strip_animations::{
        AmbientState, Animation, Canvas, DarknessSwitch, Duration, FrameContext, Instant,
        RotatingCollection,
    };

    const LEDS: usize = 8;
    const PROBE_DELAY: Duration = Duration::from_millis(5);

    /// Counts lifecycle calls and records itself as the last runner
    struct Probe<'a> {
        id: usize,
        inits: Cell<u32>,
        runs: Cell<u32>,
        last_run: &'a Cell<Option<usize>>,
    }

    impl<'a> Probe<'a> {
        fn new(id: usize, last_run: &'a Cell<Option<usize>>) -> Self {
            Self {
                id,
                inits: Cell::new(0),
                runs: Cell::new(0),
                last_run,
            }
        }
    }

    impl<const N: usize> Animation<N> for Probe<'_> {
        fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
            ctx.canvas.reset();
            self.inits.set(self.inits.get() + 1);
        }

        fn run(&mut self, _ctx: &mut FrameContext<'_, N>) -> Duration {
            self.runs.set(self.runs.get() + 1);
            self.last_run.set(Some(self.id));
            PROBE_DELAY
        }
    }

    #[test]
    fn test_darkness_switch_inits_on_edges() {
        let last_run = Cell::new(None);
        let mut switch = DarknessSwitch::new(Probe::new(0, &last_run), Probe::new(1, &last_run));
        let mut canvas = Canvas::<LEDS>::new();

        let samples = [false, false, true, true, false];
        let mut ran = Vec::new();

        let ambient = AmbientState::new(samples[0]);
        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
        switch.init(&mut ctx);

        for (step, &dark) in samples.iter().enumerate() {
            let ambient = AmbientState::new(dark);
            let now = Instant::from_millis(step as u64 * 10);
            let mut ctx = FrameContext::new(&mut canvas, now, &ambient);
            assert_eq!(switch.run(&mut ctx), PROBE_DELAY);
            ran.push(last_run.get());
        }

        assert_eq!(ran, [Some(1), Some(1), Some(0), Some(0), Some(1)]);
        assert_eq!(switch.in_darkness().inits.get(), 1);
        assert_eq!(switch.in_daylight().inits.get(), 2);
        assert_eq!(switch.in_darkness().runs.get(), 2);
        assert_eq!(switch.in_daylight().runs.get(), 3);
        assert!(!switch.is_dark());
    }

    #[test]
    fn test_darkness_switch_starts_dark() {
        let last_run = Cell::new(None);
        let mut switch = DarknessSwitch::new(Probe::new(0, &last_run), Probe::new(1, &last_run));
        let mut canvas = Canvas::<LEDS>::new();
        let ambient = AmbientState::new(true);

        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
        switch.init(&mut ctx);
        switch.run(&mut ctx);

        assert!(switch.is_dark());
        assert_eq!(switch.in_darkness().inits.get(), 1);
        assert_eq!(switch.in_daylight().inits.get(), 0);
        assert_eq!(last_run.get(), Some(0));
    }

    #[test]
    fn test_rotation_cycles_children() {
        let last_run = Cell::new(None);
        let mut first = Probe::new(0, &last_run);
        let mut second = Probe::new(1, &last_run);
        let mut third = Probe::new(2, &last_run);
        let mut canvas = Canvas::<LEDS>::new();
        let ambient = AmbientState::new(false);

        let mut ran = Vec::new();
        {
            let mut rotation: RotatingCollection<'_, LEDS, 3> =
                RotatingCollection::new(Duration::from_millis(100), &mut first)
                    .with(&mut second)
                    .with(&mut third);
            assert_eq!(rotation.len(), 3);

            let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
            rotation.init(&mut ctx);

            for step in 0..10u64 {
                let now = Instant::from_millis(step * 40);
                let mut ctx = FrameContext::new(&mut canvas, now, &ambient);
                assert_eq!(rotation.run(&mut ctx), PROBE_DELAY);
                ran.push(last_run.get());
            }
            assert_eq!(rotation.cursor(), 0);
        }

        let expected = [0usize, 0, 0, 1, 1, 1, 2, 2, 2, 0].map(Some);
        assert_eq!(ran, expected);
        assert_eq!(first.inits.get(), 2);
        assert_eq!(second.inits.get(), 1);
        assert_eq!(third.inits.get(), 1);
    }

    #[test]
    fn test_rotation_rejects_overflow() {
        let last_run = Cell::new(None);
        let mut first = Probe::new(0, &last_run);
        let mut second = Probe::new(1, &last_run);

        let mut rotation: RotatingCollection<'_, LEDS, 1> =
            RotatingCollection::new(Duration::from_millis(100), &mut first);
        assert!(rotation.push(&mut second).is_err());
        assert_eq!(rotation.len(), 1);
    }

    #[test]
    fn test_rotation_arms_on_first_run_without_init() {
        let last_run = Cell::new(None);
        let mut first = Probe::new(0, &last_run);
        let mut second = Probe::new(1, &last_run);
        let mut canvas = Canvas::<LEDS>::new();
        let ambient = AmbientState::new(false);

        let mut rotation: RotatingCollection<'_, LEDS, 2> =
            RotatingCollection::new(Duration::from_millis(100), &mut first).with(&mut second);

        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(1_000), &ambient);
        rotation.run(&mut ctx);
        assert_eq!(rotation.cursor(), 0);

        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(1_101), &ambient);
        rotation.run(&mut ctx);
        assert_eq!(rotation.cursor(), 1);
        assert_eq!(last_run.get(), Some(1));
    }

    #[test]
    fn test_combinators_nest() {
        let last_run = Cell::new(None);
        let mut first = Probe::new(0, &last_run);
        let mut second = Probe::new(1, &last_run);
        let mut canvas = Canvas::<LEDS>::new();

        let rotation: RotatingCollection<'_, LEDS, 2> =
            RotatingCollection::new(Duration::from_millis(100), &mut first).with(&mut second);
        let mut switch = DarknessSwitch::new(rotation, Probe::new(9, &last_run));

        let ambient = AmbientState::new(true);
        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(0), &ambient);
        switch.init(&mut ctx);
        switch.run(&mut ctx);
        assert_eq!(last_run.get(), Some(0));

        let ambient = AmbientState::new(false);
        let mut ctx = FrameContext::new(&mut canvas, Instant::from_millis(10), &ambient);
        switch.run(&mut ctx);
        assert_eq!(last_run.get(), Some(9));
    }
}
