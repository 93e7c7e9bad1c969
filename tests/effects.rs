mod tests {
    use embassy_time::Duration;
    use rand::{SeedableRng, rngs::SmallRng};
    use strip_composer::{
        Effect, FrameContext,
        color::{BLACK, Rgb, WHITE, color_wheel},
        effect::{
            ChaseEffect, ChaseMode, FadeEffect, FrameSource, PulseEffect, PulseStyle,
            RainbowDirection, RainbowEffect, RandomColorEffect, SegmentEffect, SequenceEffect,
            SineFrames, SineWave, StaticColorEffect, TwinkleEffect,
        },
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn frame(index: u32) -> FrameContext {
        FrameContext {
            index,
            elapsed: Duration::from_millis(u64::from(index) * 100),
        }
    }

    fn at(elapsed_ms: u64) -> FrameContext {
        FrameContext {
            index: 0,
            elapsed: Duration::from_millis(elapsed_ms),
        }
    }

    #[test]
    fn test_static_color() {
        let mut leds = [BLACK; 3];
        StaticColorEffect::new(BLUE).render(frame(0), &mut leds, &[]);
        assert_eq!(leds, [BLUE; 3]);
    }

    #[test]
    fn test_sequence_wraps_palette() {
        let mut leds = [BLACK; 2];
        let mut effect = SequenceEffect;
        effect.render(frame(4), &mut leds, &[RED, GREEN, BLUE]);
        assert_eq!(leds, [GREEN; 2]);

        // nothing to show with an empty palette
        effect.render(frame(5), &mut leds, &[]);
        assert_eq!(leds, [GREEN; 2]);
    }

    #[test]
    fn test_segments() {
        let mut leds = [BLACK; 8];
        SegmentEffect::new(3, BLUE).render(frame(0), &mut leds, &[RED, GREEN]);
        assert_eq!(leds, [RED, RED, RED, GREEN, GREEN, GREEN, BLUE, BLUE]);

        let mut leds = [BLACK; 3];
        SegmentEffect::new(0, BLUE).render(frame(0), &mut leds, &[RED, GREEN]);
        assert_eq!(leds, [RED, GREEN, BLUE]);
    }

    #[test]
    fn test_rainbow_forward() {
        let mut leds = [BLACK; 4];
        RainbowEffect::default().render(frame(0), &mut leds, &[]);
        assert_eq!(
            leds,
            [
                color_wheel(0),
                color_wheel(64),
                color_wheel(128),
                color_wheel(192)
            ]
        );
        assert_eq!(leds[0], RED);
    }

    #[test]
    fn test_rainbow_moves_per_frame() {
        let mut effect = RainbowEffect::default().with_speed(4);
        let mut leds = [BLACK; 4];
        effect.render(frame(1), &mut leds, &[]);
        assert_eq!(leds[0], color_wheel(4));

        let mut effect = effect.with_direction(RainbowDirection::Backward);
        effect.render(frame(1), &mut leds, &[]);
        assert_eq!(leds[0], color_wheel(252));
    }

    #[test]
    fn test_rainbow_mirrored() {
        let mut leds = [BLACK; 4];
        RainbowEffect::default()
            .with_direction(RainbowDirection::Mirrored)
            .render(frame(0), &mut leds, &[]);
        assert_eq!(
            leds,
            [
                color_wheel(0),
                color_wheel(128),
                color_wheel(128),
                color_wheel(0)
            ]
        );
    }

    #[test]
    fn test_pulse_blink() {
        let mut effect = PulseEffect::new(Duration::from_millis(1000), PulseStyle::Blink);
        let palette = [RED, GREEN];
        let mut leds = [BLACK; 2];

        effect.render(at(0), &mut leds, &palette);
        assert_eq!(leds, [RED; 2]);

        effect.render(at(600), &mut leds, &palette);
        assert_eq!(leds, [BLACK; 2]);

        effect.render(at(1000), &mut leds, &palette);
        assert_eq!(leds, [GREEN; 2]);
    }

    #[test]
    fn test_pulse_breathe() {
        let mut effect = PulseEffect::new(Duration::from_millis(1000), PulseStyle::Breathe);
        let mut leds = [WHITE; 2];

        effect.render(at(0), &mut leds, &[RED]);
        assert_eq!(leds, [BLACK; 2]);

        effect.render(at(500), &mut leds, &[RED]);
        assert_eq!(leds, [RED; 2]);

        effect.render(at(250), &mut leds, &[RED]);
        assert!(leds[0].r > 0 && leds[0].r < 255);
    }

    #[test]
    fn test_pulse_zero_period_holds_color() {
        let mut effect = PulseEffect::new(Duration::from_millis(0), PulseStyle::Blink);
        let mut leds = [BLACK; 2];
        effect.render(at(1234), &mut leds, &[BLUE, RED]);
        assert_eq!(leds, [BLUE; 2]);
    }

    #[test]
    fn test_chase_wipe() {
        let mut effect = ChaseEffect::new(ChaseMode::Wipe);
        let palette = [RED, GREEN];
        let mut leds = [BLACK; 4];

        for index in 0..4 {
            effect.render(frame(index), &mut leds, &palette);
        }
        assert_eq!(leds, [RED; 4]);

        effect.render(frame(4), &mut leds, &palette);
        assert_eq!(leds, [GREEN, RED, RED, RED]);
    }

    #[test]
    fn test_chase_wraps_around() {
        let mut effect = ChaseEffect::new(ChaseMode::Chase)
            .with_length(2)
            .with_fade_rate(255);
        let mut leds = [BLACK; 5];
        effect.render(frame(4), &mut leds, &[RED]);
        assert_eq!(leds[4], RED);
        assert_eq!(leds[0], RED);
        assert_eq!(leds[2], BLACK);
    }

    #[test]
    fn test_chase_trail_fades() {
        let mut effect = ChaseEffect::new(ChaseMode::Chase)
            .with_length(1)
            .with_fade_rate(255);
        let mut leds = [BLACK; 5];
        effect.render(frame(0), &mut leds, &[WHITE]);
        effect.render(frame(1), &mut leds, &[WHITE]);
        assert_eq!(leds[1], WHITE);
        assert_eq!(leds[0], Rgb::new(23, 23, 23));
    }

    #[test]
    fn test_scanner_bounces() {
        let mut effect = ChaseEffect::new(ChaseMode::Scanner).with_length(1);
        let head = |effect: &mut ChaseEffect, index: u32| {
            let mut leds = [BLACK; 4];
            effect.render(frame(index), &mut leds, &[RED]);
            leds.iter().position(|&c| c == RED)
        };

        assert_eq!(head(&mut effect, 0), Some(0));
        assert_eq!(head(&mut effect, 3), Some(3));
        assert_eq!(head(&mut effect, 4), Some(2));
        assert_eq!(head(&mut effect, 6), Some(0));
    }

    #[test]
    fn test_scanner_block_fills_short_strip() {
        let mut effect = ChaseEffect::new(ChaseMode::Scanner).with_length(8);
        let mut leds = [BLACK; 3];
        effect.render(frame(5), &mut leds, &[BLUE]);
        assert_eq!(leds, [BLUE; 3]);
    }

    #[test]
    fn test_random_color_is_seed_stable() {
        let mut a = RandomColorEffect::new(SmallRng::seed_from_u64(9));
        let mut b = RandomColorEffect::new(SmallRng::seed_from_u64(9));
        let mut leds_a = [BLACK; 8];
        let mut leds_b = [BLACK; 8];
        for index in 0..3 {
            a.render(frame(index), &mut leds_a, &[]);
            b.render(frame(index), &mut leds_b, &[]);
            assert_eq!(leds_a, leds_b);
        }
    }

    #[test]
    fn test_twinkle_picks_palette_colors() {
        let palette = [RED, GREEN, BLUE];
        let mut effect = TwinkleEffect::new(SmallRng::seed_from_u64(11));
        let mut leds = [BLACK; 32];
        effect.render(frame(0), &mut leds, &palette);
        assert!(leds.iter().all(|c| palette.contains(c)));

        let mut leds = [WHITE; 4];
        effect.render(frame(1), &mut leds, &[]);
        assert_eq!(leds, [WHITE; 4]);
    }

    #[test]
    fn test_fade_effect() {
        let mut effect = FadeEffect::out(255);
        let mut leds = [WHITE; 2];
        effect.render(frame(0), &mut leds, &[]);
        assert_eq!(leds, [Rgb::new(23, 23, 23); 2]);

        for index in 1..30 {
            effect.render(frame(index), &mut leds, &[]);
        }
        assert_eq!(leds, [BLACK; 2]);
    }

    #[test]
    fn test_sine_wave_first_pixel() {
        let mut leds = [BLACK; 1];
        SineWave::default().render_step(0, &mut leds);
        assert_eq!(leds[0], Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_sine_frames_advance_and_restart() {
        let mut frames = SineFrames::default();
        let mut first = [BLACK; 6];
        let mut second = [BLACK; 6];

        frames.next_frame(&mut first);
        frames.next_frame(&mut second);
        assert_eq!(frames.step(), 2);
        // the wave travels one pixel per frame
        assert_eq!(second[..5], first[1..]);

        frames.restart();
        let mut again = [BLACK; 6];
        frames.next_frame(&mut again);
        assert_eq!(again, first);
    }

    #[test]
    fn test_sine_wave_as_effect_matches_frames() {
        let mut wave = SineWave::new([0.2, 0.3, 0.4]);
        let mut frames = SineFrames::new(wave);
        let mut from_effect = [BLACK; 5];
        let mut from_source = [BLACK; 5];
        for index in 0..3 {
            wave.render(frame(index), &mut from_effect, &[]);
            frames.next_frame(&mut from_source);
            assert_eq!(from_effect, from_source);
        }
    }
}
