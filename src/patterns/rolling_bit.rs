//! Rolling bit pattern
//!
//! Walks a single set bit through the brightness byte of alternating
//! channels across groups of four LEDs, doubling the level every step
//! until it wraps back to 1.

use embassy_time::Duration;

use super::{Pattern, StepOutcome};
use crate::Rgb;
use crate::frame::StripHandle;
use crate::rng::SplitMix64;

const STEP_REST: Duration = Duration::from_millis(1000);

/// Single-bit brightness walk across channel groups.
#[derive(Debug, Clone)]
pub struct RollingBit {
    steps_left: u32,
    bit: u8,
    fresh: bool,
}

impl RollingBit {
    /// Create the pattern in its finished state; the runner resets it on
    /// entry.
    pub const fn new() -> Self {
        Self {
            steps_left: 0,
            bit: 0x01,
            fresh: false,
        }
    }
}

impl Default for RollingBit {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for RollingBit {
    #[allow(clippy::cast_possible_truncation)]
    fn reset<const N: usize>(&mut self, strip: StripHandle<'_, N>, rng: &mut SplitMix64) {
        self.steps_left = strip.len() as u32 * (2 + rng.range(2));
        self.bit = 0x01;
        self.fresh = true;
    }

    fn step<const N: usize>(
        &mut self,
        strip: StripHandle<'_, N>,
        _rng: &mut SplitMix64,
    ) -> StepOutcome {
        if self.steps_left == 0 {
            strip.clear();
            return StepOutcome::Done;
        }
        self.steps_left -= 1;

        if self.fresh {
            strip.clear();
            self.fresh = false;
        }

        let bit = self.bit;
        strip.update(|pixels| {
            for group in pixels.chunks_exact_mut(4) {
                group[0] = Rgb::new(0, bit, 0);
                group[1] = Rgb::new(bit, 0, 0);
                group[2] = Rgb::new(0, 0, bit);
                group[3] = Rgb::new(bit, 0, bit);
            }
        });

        self.bit = if self.bit == 0x80 { 0x01 } else { self.bit << 1 };
        StepOutcome::Sleep(STEP_REST)
    }
}
