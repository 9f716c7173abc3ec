//! Random colors pattern
//!
//! Every step clears the strip, then lights roughly a quarter of the LEDs
//! with random channel levels under a per-LED random cap.

use embassy_time::Duration;

use super::{Pattern, StepOutcome};
use crate::Rgb;
use crate::frame::StripHandle;
use crate::rng::SplitMix64;

const STEP_REST: Duration = Duration::from_millis(600);

/// One in this many LEDs lights up per step.
const LIT_RATIO: u32 = 4;

/// Exclusive bound on a lit LED's brightness cap.
const LEVEL_CAP_BOUND: u32 = 64;

/// Randomized sparse color fills.
#[derive(Debug, Clone)]
pub struct RandomColors {
    steps_left: u32,
}

impl RandomColors {
    /// Create the pattern in its finished state; the runner resets it on
    /// entry.
    pub const fn new() -> Self {
        Self { steps_left: 0 }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for RandomColors {
    #[allow(clippy::cast_possible_truncation)]
    fn reset<const N: usize>(&mut self, strip: StripHandle<'_, N>, rng: &mut SplitMix64) {
        self.steps_left = strip.len() as u32 * (3 + rng.range(5));
    }

    #[allow(clippy::cast_possible_truncation)]
    fn step<const N: usize>(
        &mut self,
        strip: StripHandle<'_, N>,
        rng: &mut SplitMix64,
    ) -> StepOutcome {
        if self.steps_left == 0 {
            return StepOutcome::Done;
        }
        self.steps_left -= 1;

        strip.update(|pixels| {
            pixels.fill(Rgb::new(0, 0, 0));
            for pixel in pixels {
                if rng.range(LIT_RATIO) == 0 {
                    let cap = rng.range(LEVEL_CAP_BOUND);
                    pixel.g = rng.range(cap) as u8;
                    pixel.b = rng.range(cap) as u8;
                    pixel.r = rng.range(cap) as u8;
                }
            }
        });
        StepOutcome::Sleep(STEP_REST)
    }
}
