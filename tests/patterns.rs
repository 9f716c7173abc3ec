mod tests {
    use neostrip::patterns::{
        Comet, ElectricRain, Pattern, PatternRunner, RandomColors, RollingBit, StepOutcome,
    };
    use neostrip::{Duration, FrameBuffer, Rgb, SplitMix64};

    const BLACK: Rgb = Rgb::new(0, 0, 0);

    fn run_to_done<const N: usize>(
        pattern: &mut impl Pattern,
        frame: &FrameBuffer<N>,
        rng: &mut SplitMix64,
    ) -> u32 {
        let mut steps = 0;
        loop {
            match pattern.step(frame.handle(), rng) {
                StepOutcome::Sleep(_) => steps += 1,
                StepOutcome::Done => return steps,
            }
            assert!(steps < 100_000, "pattern cycle never finished");
        }
    }

    #[test]
    fn test_rolling_bit_first_step_groups() {
        let frame: FrameBuffer<8> = FrameBuffer::new();
        let mut rng = SplitMix64::new(7);
        let mut pattern = RollingBit::new();
        pattern.reset(frame.handle(), &mut rng);

        let outcome = pattern.step(frame.handle(), &mut rng);
        assert_eq!(outcome, StepOutcome::Sleep(Duration::from_millis(1000)));

        for group in frame.snapshot().chunks_exact(4) {
            assert_eq!(group[0], Rgb::new(0, 1, 0));
            assert_eq!(group[1], Rgb::new(1, 0, 0));
            assert_eq!(group[2], Rgb::new(0, 0, 1));
            assert_eq!(group[3], Rgb::new(1, 0, 1));
        }
    }

    #[test]
    fn test_rolling_bit_level_doubles_then_wraps() {
        let frame: FrameBuffer<8> = FrameBuffer::new();
        let mut rng = SplitMix64::new(7);
        let mut pattern = RollingBit::new();
        pattern.reset(frame.handle(), &mut rng);

        pattern.step(frame.handle(), &mut rng);
        pattern.step(frame.handle(), &mut rng);
        assert_eq!(frame.snapshot()[0].g, 2);

        // six more steps reach 0x80, the next wraps back to 1
        for _ in 0..6 {
            pattern.step(frame.handle(), &mut rng);
        }
        assert_eq!(frame.snapshot()[0].g, 0x80);
        pattern.step(frame.handle(), &mut rng);
        assert_eq!(frame.snapshot()[0].g, 1);
    }

    #[test]
    fn test_rolling_bit_cycle_length_and_trailing_clear() {
        let frame: FrameBuffer<8> = FrameBuffer::new();
        let mut rng = SplitMix64::new(42);
        let mut pattern = RollingBit::new();
        pattern.reset(frame.handle(), &mut rng);

        let steps = run_to_done(&mut pattern, &frame, &mut rng);
        assert!(steps == 16 || steps == 24, "unexpected cycle length {steps}");
        assert!(frame.snapshot().iter().all(|pixel| *pixel == BLACK));
    }

    #[test]
    fn test_electric_rain_first_step_lights_at_most_one_pixel() {
        let frame: FrameBuffer<8> = FrameBuffer::new();
        let mut rng = SplitMix64::new(3);
        let mut pattern = ElectricRain::new();
        pattern.reset(frame.handle(), &mut rng);

        let outcome = pattern.step(frame.handle(), &mut rng);
        assert_eq!(outcome, StepOutcome::Sleep(Duration::from_millis(100)));

        let lit = frame
            .snapshot()
            .iter()
            .filter(|pixel| **pixel != BLACK)
            .count();
        assert!(lit <= 1);
    }

    #[test]
    fn test_electric_rain_cycle_terminates() {
        let frame: FrameBuffer<8> = FrameBuffer::new();
        let mut rng = SplitMix64::new(11);
        let mut pattern = ElectricRain::new();
        pattern.reset(frame.handle(), &mut rng);

        let steps = run_to_done(&mut pattern, &frame, &mut rng);
        // at least one fade pass per droplet, 24 droplets minimum
        assert!(steps >= 24);
    }

    #[test]
    fn test_comet_first_step_ramp() {
        let frame: FrameBuffer<8> = FrameBuffer::new();
        let mut rng = SplitMix64::new(5);
        let mut pattern = Comet::new();
        pattern.reset(frame.handle(), &mut rng);
        pattern.step(frame.handle(), &mut rng);

        let snapshot = frame.snapshot();
        // exactly one channel carries the eye; find it from the head pixel
        let channel: fn(&Rgb) -> u8 = if snapshot[0].g != 0 {
            |pixel| pixel.g
        } else if snapshot[0].b != 0 {
            |pixel| pixel.b
        } else {
            |pixel| pixel.r
        };

        let levels: Vec<u8> = snapshot.iter().map(channel).collect();
        assert_eq!(levels, vec![1, 2, 5, 11, 11, 5, 2, 1]);
    }

    #[test]
    fn test_comet_clears_after_cycle() {
        let frame: FrameBuffer<8> = FrameBuffer::new();
        let mut rng = SplitMix64::new(9);
        let mut pattern = Comet::new();
        pattern.reset(frame.handle(), &mut rng);

        let steps = run_to_done(&mut pattern, &frame, &mut rng);
        assert!((80..=160).contains(&steps), "unexpected cycle length {steps}");
        assert!(frame.snapshot().iter().all(|pixel| *pixel == BLACK));
    }

    #[test]
    fn test_random_colors_levels_stay_below_cap() {
        let frame: FrameBuffer<16> = FrameBuffer::new();
        let mut rng = SplitMix64::new(21);
        let mut pattern = RandomColors::new();
        pattern.reset(frame.handle(), &mut rng);

        let outcome = pattern.step(frame.handle(), &mut rng);
        assert_eq!(outcome, StepOutcome::Sleep(Duration::from_millis(600)));

        for pixel in frame.snapshot() {
            assert!(pixel.r < 64 && pixel.g < 64 && pixel.b < 64);
        }
    }

    #[test]
    fn test_runner_standard_rotation_starts_with_rolling_bit() {
        let frame: FrameBuffer<8> = FrameBuffer::new();
        let mut runner = PatternRunner::standard(frame.handle(), SplitMix64::new(1));
        assert_eq!(runner.tick(), Duration::from_millis(1000));
    }

    #[test]
    fn test_runner_rotates_through_all_patterns() {
        let frame: FrameBuffer<8> = FrameBuffer::new();
        let mut runner = PatternRunner::standard(frame.handle(), SplitMix64::new(2));

        let mut rests = std::collections::HashSet::new();
        for _ in 0..2000 {
            rests.insert(runner.tick().as_millis());
        }
        // rolling bit, rain/comet, random colors cadences all show up
        assert!(rests.contains(&1000));
        assert!(rests.contains(&100));
        assert!(rests.contains(&600));
    }
}
