mod tests {
    use embassy_time::{Duration, Instant};
    use strip_composer::{
        CancelToken, OutputDriver, RunError, StripError,
        buffer::{BrightnessLevel, PixelBuffer},
        color::{BLACK, Rgb, WHITE},
        frame_clock::{ClockState, FrameClock, FrameContext, FrameSchedule, FrameTimer},
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    /// Simulated clock that only moves when slept on
    struct ManualTimer {
        now: Instant,
        sleeps: usize,
    }

    impl ManualTimer {
        fn new() -> Self {
            Self {
                now: Instant::from_millis(0),
                sleeps: 0,
            }
        }
    }

    impl FrameTimer for ManualTimer {
        fn now(&mut self) -> Instant {
            self.now
        }

        fn sleep(&mut self, duration: Duration) {
            self.now += duration;
            self.sleeps += 1;
        }
    }

    #[derive(Default)]
    struct RecordingOutput {
        frames: Vec<Vec<Rgb>>,
        fail_at: Option<usize>,
    }

    impl OutputDriver for RecordingOutput {
        type Error = &'static str;

        fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
            if self.fail_at == Some(self.frames.len()) {
                return Err("bus error");
            }
            self.frames.push(colors.to_vec());
            Ok(())
        }
    }

    fn schedule(duration_ms: u64, delay_ms: u64) -> FrameSchedule {
        FrameSchedule::new(
            Duration::from_millis(duration_ms),
            Duration::from_millis(delay_ms),
        )
    }

    #[test]
    fn test_zero_duration_renders_one_frame() {
        let mut clock = FrameClock::new(schedule(0, 100));
        let mut timer = ManualTimer::new();
        let mut buffer = PixelBuffer::<4>::new(4, BLACK).unwrap();
        let mut output = RecordingOutput::default();

        let summary = clock
            .run(&mut timer, &mut buffer, &mut output, None, |frame, _| {
                frame.fill_all(RED);
                Ok(())
            })
            .unwrap();

        assert_eq!(summary.frames, 1);
        assert!(!summary.cancelled);
        assert_eq!(summary.elapsed, Duration::from_millis(100));
        assert_eq!(output.frames, vec![vec![RED; 4]]);
        assert_eq!(clock.state(), ClockState::Stopped);
    }

    #[test]
    fn test_runs_until_duration() {
        let mut clock = FrameClock::new(schedule(1000, 100));
        let mut timer = ManualTimer::new();
        let mut buffer = PixelBuffer::<4>::new(2, BLACK).unwrap();
        let mut output = RecordingOutput::default();

        let summary = clock
            .run(&mut timer, &mut buffer, &mut output, None, |_, _| Ok(()))
            .unwrap();

        assert_eq!(summary.frames, 10);
        assert_eq!(output.frames.len(), 10);
        assert_eq!(timer.sleeps, 10);
    }

    #[test]
    fn test_partial_last_frame() {
        let mut clock = FrameClock::new(schedule(250, 100));
        let mut timer = ManualTimer::new();
        let mut buffer = PixelBuffer::<4>::new(2, BLACK).unwrap();
        let mut output = RecordingOutput::default();

        let summary = clock
            .run(&mut timer, &mut buffer, &mut output, None, |_, _| Ok(()))
            .unwrap();

        assert_eq!(summary.frames, 3);
        assert_eq!(summary.elapsed, Duration::from_millis(300));
    }

    #[test]
    fn test_frame_context_is_in_order() {
        let mut clock = FrameClock::new(schedule(300, 100));
        let mut timer = ManualTimer::new();
        let mut buffer = PixelBuffer::<4>::new(1, BLACK).unwrap();
        let mut output = RecordingOutput::default();
        let mut seen: Vec<FrameContext> = Vec::new();

        clock
            .run(&mut timer, &mut buffer, &mut output, None, |frame, ctx| {
                seen.push(ctx);
                let level = u8::try_from(ctx.index).unwrap_or(u8::MAX);
                frame.fill_all(Rgb::new(level, 0, 0));
                Ok(())
            })
            .unwrap();

        let indices: Vec<u32> = seen.iter().map(|ctx| ctx.index).collect();
        let elapsed: Vec<u64> = seen.iter().map(|ctx| ctx.elapsed.as_millis()).collect();
        assert_eq!(indices, [0, 1, 2]);
        assert_eq!(elapsed, [0, 100, 200]);
        let reds: Vec<u8> = output.frames.iter().map(|f| f[0].r).collect();
        assert_eq!(reds, [0, 1, 2]);
    }

    #[test]
    fn test_step_error_stops_without_flush() {
        let mut clock = FrameClock::new(schedule(1000, 100));
        let mut timer = ManualTimer::new();
        let mut buffer = PixelBuffer::<4>::new(4, BLACK).unwrap();
        let mut output = RecordingOutput::default();

        let result = clock.run(&mut timer, &mut buffer, &mut output, None, |_, ctx| {
            if ctx.index == 2 {
                return Err(StripError::ZeroSegmentLength);
            }
            Ok(())
        });

        assert_eq!(result, Err(RunError::Strip(StripError::ZeroSegmentLength)));
        assert_eq!(output.frames.len(), 2);
        assert_eq!(clock.state(), ClockState::Stopped);
    }

    #[test]
    fn test_output_error_aborts_run() {
        let mut clock = FrameClock::new(schedule(1000, 100));
        let mut timer = ManualTimer::new();
        let mut buffer = PixelBuffer::<4>::new(4, BLACK).unwrap();
        let mut output = RecordingOutput {
            fail_at: Some(1),
            ..RecordingOutput::default()
        };

        let result = clock.run(&mut timer, &mut buffer, &mut output, None, |_, _| Ok(()));

        assert_eq!(result, Err(RunError::Output("bus error")));
        assert_eq!(output.frames.len(), 1);
        assert_eq!(timer.sleeps, 1);
    }

    #[test]
    fn test_cancel_stops_after_current_frame() {
        let mut clock = FrameClock::new(schedule(10_000, 100));
        let mut timer = ManualTimer::new();
        let mut buffer = PixelBuffer::<4>::new(4, BLACK).unwrap();
        let mut output = RecordingOutput::default();
        let token = CancelToken::new();

        let summary = clock
            .run(&mut timer, &mut buffer, &mut output, Some(&token), |_, ctx| {
                if ctx.index == 3 {
                    token.cancel();
                }
                Ok(())
            })
            .unwrap();

        assert!(summary.cancelled);
        assert_eq!(summary.frames, 4);
        assert_eq!(output.frames.len(), 4);
    }

    #[test]
    fn test_pre_cancelled_token_still_renders_one_frame() {
        let mut clock = FrameClock::new(schedule(10_000, 100));
        let mut timer = ManualTimer::new();
        let mut buffer = PixelBuffer::<4>::new(4, BLACK).unwrap();
        let mut output = RecordingOutput::default();
        let token = CancelToken::new();
        token.cancel();

        let summary = clock
            .run(&mut timer, &mut buffer, &mut output, Some(&token), |_, _| Ok(()))
            .unwrap();

        assert_eq!(summary.frames, 1);
        assert!(summary.cancelled);
    }

    #[test]
    fn test_brightness_scales_output_only() {
        let level = BrightnessLevel::from_factor(0.1).unwrap();
        let mut clock = FrameClock::new(schedule(0, 10)).with_brightness(level);
        let mut timer = ManualTimer::new();
        let mut buffer = PixelBuffer::<4>::new(2, WHITE).unwrap();
        let mut output = RecordingOutput::default();

        clock
            .run(&mut timer, &mut buffer, &mut output, None, |_, _| Ok(()))
            .unwrap();

        assert_eq!(output.frames, vec![vec![Rgb::new(1, 1, 1); 2]]);
        assert_eq!(buffer.as_slice(), &[WHITE; 2]);
    }

    #[test]
    fn test_cancel_token_reset() {
        static TOKEN: CancelToken = CancelToken::new();
        assert!(!TOKEN.is_cancelled());
        TOKEN.cancel();
        assert!(TOKEN.is_cancelled());
        TOKEN.reset();
        assert!(!TOKEN.is_cancelled());
    }
}
