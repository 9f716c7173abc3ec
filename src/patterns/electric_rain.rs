//! Electric rain pattern
//!
//! Drops a randomly colored droplet on a random LED, then fades the whole
//! strip over a handful of passes before the next droplet lands.

use embassy_time::Duration;

use super::{Pattern, StepOutcome};
use crate::Rgb;
use crate::frame::StripHandle;
use crate::rng::SplitMix64;

const FADE_REST: Duration = Duration::from_millis(100);

/// Peak channel level a fresh droplet can land with.
const DROPLET_LEVEL_BOUND: u32 = 128;

/// A droplet gets 1..=FADE_PASS_BOUND fade passes before the next lands.
const FADE_PASS_BOUND: u32 = 10;

/// Random fading droplets.
#[derive(Debug, Clone)]
pub struct ElectricRain {
    droplets_left: u32,
    fade_passes_left: u32,
}

impl ElectricRain {
    /// Create the pattern in its finished state; the runner resets it on
    /// entry.
    pub const fn new() -> Self {
        Self {
            droplets_left: 0,
            fade_passes_left: 0,
        }
    }
}

impl Default for ElectricRain {
    fn default() -> Self {
        Self::new()
    }
}

/// Knock a random fraction (at least one count) off a lit channel.
#[allow(clippy::cast_possible_truncation)]
fn fade_channel(value: &mut u8, rng: &mut SplitMix64) {
    if *value > 0 {
        let fade = rng.range(u32::from(*value / 4) + 1) + 1;
        *value = value.saturating_sub(fade as u8);
    }
}

impl Pattern for ElectricRain {
    #[allow(clippy::cast_possible_truncation)]
    fn reset<const N: usize>(&mut self, strip: StripHandle<'_, N>, rng: &mut SplitMix64) {
        self.droplets_left = strip.len() as u32 * (3 + rng.range(5));
        self.fade_passes_left = 0;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn step<const N: usize>(
        &mut self,
        strip: StripHandle<'_, N>,
        rng: &mut SplitMix64,
    ) -> StepOutcome {
        if self.fade_passes_left == 0 {
            if self.droplets_left == 0 {
                return StepOutcome::Done;
            }
            self.droplets_left -= 1;

            let index = rng.range(strip.len() as u32) as usize;
            let droplet = Rgb::new(
                rng.range(DROPLET_LEVEL_BOUND) as u8,
                rng.range(DROPLET_LEVEL_BOUND) as u8,
                rng.range(DROPLET_LEVEL_BOUND) as u8,
            );
            strip.set_pixel(index, droplet);
            self.fade_passes_left = rng.range(FADE_PASS_BOUND) + 1;
        }

        self.fade_passes_left -= 1;
        strip.update(|pixels| {
            for pixel in pixels {
                fade_channel(&mut pixel.r, rng);
                fade_channel(&mut pixel.g, rng);
                fade_channel(&mut pixel.b, rng);
            }
        });
        StepOutcome::Sleep(FADE_REST)
    }
}
