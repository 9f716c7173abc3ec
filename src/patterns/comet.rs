//! Comet pattern
//!
//! A scanning eye that sweeps the strip back and forth in one randomly
//! chosen channel. Brightness ramps exponentially from the tail to the
//! head so the eye reads as a bright core with a dim trail.

use embassy_time::Duration;

use super::{Pattern, StepOutcome};
use crate::Rgb;
use crate::frame::StripHandle;
use crate::rng::SplitMix64;

const STEP_REST: Duration = Duration::from_millis(100);

/// Per-position brightness multiplier of the ramp.
const RAMP_BASE: f32 = 2.25;

/// Which channel the eye lights for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Green,
    Blue,
    Red,
}

impl Channel {
    fn roll(rng: &mut SplitMix64) -> Self {
        match rng.range(3) {
            0 => Self::Green,
            1 => Self::Blue,
            _ => Self::Red,
        }
    }

    fn paint(self, pixel: &mut Rgb, level: u8) {
        match self {
            Self::Green => pixel.g = level,
            Self::Blue => pixel.b = level,
            Self::Red => pixel.r = level,
        }
    }
}

/// Scanning eye with exponential luminance ramp.
#[derive(Debug, Clone)]
pub struct Comet {
    steps_left: u32,
    channel: Channel,
    offset: i32,
    direction: i32,
}

impl Comet {
    /// Create the pattern in its finished state; the runner resets it on
    /// entry.
    pub const fn new() -> Self {
        Self {
            steps_left: 0,
            channel: Channel::Green,
            offset: 0,
            direction: 1,
        }
    }
}

impl Default for Comet {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for Comet {
    #[allow(clippy::cast_possible_truncation)]
    fn reset<const N: usize>(&mut self, strip: StripHandle<'_, N>, rng: &mut SplitMix64) {
        self.steps_left = strip.len() as u32 * (10 + rng.range(10));
        self.channel = Channel::roll(rng);
        self.offset = 0;
        self.direction = 1;
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
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

        let len = N as i32;
        let offset = self.offset;
        let channel = self.channel;
        strip.update(|pixels| {
            pixels.fill(Rgb::new(0, 0, 0));
            for index in 0..len / 2 {
                // Saturating float-to-int cast caps the ramp at full
                // brightness on long strips.
                let level = libm::powf(RAMP_BASE, index as f32) as u8;
                for position in [offset + index, offset + len - (index + 1)] {
                    if (0..len).contains(&position) {
                        channel.paint(&mut pixels[position as usize], level);
                    }
                }
            }
        });

        self.offset += self.direction;
        if self.offset == len {
            self.direction = -1;
        }
        if self.offset == -len {
            self.direction = 1;
        }
        StepOutcome::Sleep(STEP_REST)
    }
}
