mod tests {
    use strip_composer::{
        StripError,
        buffer::{BrightnessLevel, PixelBuffer},
        color::{BLACK, Rgb, WHITE},
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_new_fills_background() {
        let buffer = PixelBuffer::<8>::new(5, BLUE).unwrap();
        assert_eq!(buffer.len(), 5);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.background(), BLUE);
        assert!(buffer.as_slice().iter().all(|&c| c == BLUE));
    }

    #[test]
    fn test_new_rejects_bad_counts() {
        assert_eq!(
            PixelBuffer::<64>::new(0, BLACK),
            Err(StripError::InvalidLedCount {
                requested: 0,
                capacity: 64
            })
        );
        assert_eq!(
            PixelBuffer::<64>::new(65, BLACK),
            Err(StripError::InvalidLedCount {
                requested: 65,
                capacity: 64
            })
        );
    }

    #[test]
    fn test_fill_all() {
        for num_leds in [1, 8, 64] {
            let mut buffer = PixelBuffer::<64>::new(num_leds, BLACK).unwrap();
            buffer.fill_all(RED);
            assert_eq!(buffer.len(), num_leds);
            assert!(buffer.as_slice().iter().all(|&c| c == RED));
        }
    }

    #[test]
    fn test_clear_restores_background() {
        let mut buffer = PixelBuffer::<4>::new(4, GREEN).unwrap();
        buffer.fill_all(RED);
        buffer.clear();
        assert_eq!(buffer.as_slice(), &[GREEN; 4]);
    }

    #[test]
    fn test_set_and_get() {
        let mut buffer = PixelBuffer::<4>::new(3, BLACK).unwrap();
        buffer.set(2, RED).unwrap();
        assert_eq!(buffer.get(2), Some(RED));
        assert_eq!(buffer.get(3), None);
        assert_eq!(
            buffer.set(3, RED),
            Err(StripError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_fill_custom() {
        let mut buffer = PixelBuffer::<4>::new(3, BLACK).unwrap();
        buffer.fill_custom(&[RED, GREEN, BLUE]).unwrap();
        assert_eq!(buffer.as_slice(), &[RED, GREEN, BLUE]);

        assert_eq!(
            buffer.fill_custom(&[RED, GREEN]),
            Err(StripError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        // a rejected write leaves the buffer alone
        assert_eq!(buffer.as_slice(), &[RED, GREEN, BLUE]);
    }

    #[test]
    fn test_fill_segments() {
        let mut buffer = PixelBuffer::<8>::new(8, BLUE).unwrap();
        buffer.fill_segments(3, &[RED, GREEN]).unwrap();
        assert_eq!(
            buffer.as_slice(),
            &[RED, RED, RED, GREEN, GREEN, GREEN, BLUE, BLUE]
        );

        assert_eq!(
            buffer.fill_segments(0, &[RED]),
            Err(StripError::ZeroSegmentLength)
        );
    }

    #[test]
    fn test_fill_segments_more_values_than_segments() {
        let mut buffer = PixelBuffer::<4>::new(4, BLACK).unwrap();
        buffer.fill_segments(2, &[RED, GREEN, BLUE]).unwrap();
        assert_eq!(buffer.as_slice(), &[RED, RED, GREEN, GREEN]);
    }

    #[test]
    fn test_brightness_curve() {
        let curve: Vec<u8> = (0..10)
            .map(|i| BrightnessLevel::from_index(i).unwrap().curve())
            .collect();
        assert_eq!(curve, [1, 1, 3, 6, 11, 21, 40, 74, 137, 255]);
        assert_eq!(BrightnessLevel::FULL.curve(), 255);
    }

    #[test]
    fn test_brightness_curve_matches_exponential() {
        let base = (255f64.ln() / 255.0).exp();
        for k in 0..10u8 {
            let expected = (base.powf(255.0 * f64::from(k) / 9.0) + 1e-9) as u8;
            assert_eq!(
                BrightnessLevel::from_index(k).unwrap().curve(),
                expected,
                "k={k}"
            );
        }
    }

    #[test]
    fn test_brightness_apply_truncates_per_channel() {
        let level = BrightnessLevel::from_index(8).unwrap();
        assert_eq!(level.apply(Rgb::new(255, 100, 1)), Rgb::new(137, 53, 0));
        assert_eq!(BrightnessLevel::FULL.apply(Rgb::new(7, 8, 9)), Rgb::new(7, 8, 9));
    }

    #[test]
    fn test_brightness_levels() {
        assert_eq!(BrightnessLevel::from_factor(0.1).unwrap().index(), 0);
        assert_eq!(BrightnessLevel::from_factor(0.5).unwrap().index(), 4);
        assert_eq!(BrightnessLevel::from_factor(1.0), Ok(BrightnessLevel::FULL));
        for bad in [0.0, 0.55, 1.1, -0.3, 0.05] {
            assert_eq!(
                BrightnessLevel::from_factor(bad),
                Err(StripError::UnsupportedBrightnessLevel),
                "factor {bad}"
            );
        }
        assert_eq!(
            BrightnessLevel::from_index(10),
            Err(StripError::UnsupportedBrightnessLevel)
        );
    }

    #[test]
    fn test_apply_brightness() {
        let mut buffer = PixelBuffer::<4>::new(2, BLACK).unwrap();
        buffer.fill_custom(&[WHITE, Rgb::new(200, 200, 0)]).unwrap();

        let dimmed = buffer.apply_brightness(0.5).unwrap();
        assert_eq!(dimmed.as_slice(), &[Rgb::new(11, 11, 11), Rgb::new(8, 8, 0)]);

        let full = buffer.apply_brightness(1.0).unwrap();
        assert_eq!(full, buffer);

        // the source buffer is never scaled in place
        assert_eq!(buffer.get(0), Some(WHITE));
        assert_eq!(
            buffer.apply_brightness(0.25),
            Err(StripError::UnsupportedBrightnessLevel)
        );
    }

    #[test]
    fn test_fade_toward() {
        let mut buffer = PixelBuffer::<4>::new(4, WHITE).unwrap();
        buffer.fade_toward(BLACK, 255);
        assert!(buffer.as_slice().iter().all(|&c| c == Rgb::new(23, 23, 23)));
    }
}
