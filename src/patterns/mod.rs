//! Producer patterns with compile-time known variants
//!
//! Patterns are producers: each one mutates the shared frame buffer
//! through the narrow strip API and reports how long to rest before its
//! next step. The rest always happens outside the buffer lock: a step's
//! multi-pixel pass is one `update` scan, then the pattern returns.
//!
//! All patterns are stored in an enum to avoid heap allocations.

mod comet;
mod electric_rain;
mod random_colors;
mod rolling_bit;

use embassy_time::Duration;
use heapless::Vec;

pub use comet::Comet;
pub use electric_rain::ElectricRain;
pub use random_colors::RandomColors;
pub use rolling_bit::RollingBit;

use crate::frame::StripHandle;
use crate::rng::SplitMix64;

/// Rest returned when every pattern in the rotation declines to run
/// (possible only on a zero-length strip).
const IDLE_REST: Duration = Duration::from_millis(100);

/// Maximum patterns one runner can rotate through.
pub const MAX_PATTERNS: usize = 8;

/// What a pattern wants after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step applied; rest this long before the next one.
    Sleep(Duration),
    /// Cycle finished; hand the strip to the next pattern.
    Done,
}

/// A producer animation driven in discrete steps.
pub trait Pattern {
    /// Re-roll per-cycle state for the given strip. Called every time the
    /// pattern re-enters the rotation.
    fn reset<const N: usize>(&mut self, strip: StripHandle<'_, N>, rng: &mut SplitMix64);

    /// Apply one step to the strip.
    fn step<const N: usize>(
        &mut self,
        strip: StripHandle<'_, N>,
        rng: &mut SplitMix64,
    ) -> StepOutcome;
}

/// Pattern slot - enum containing all shipped patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// Single-bit brightness walk across channel groups
    RollingBit(RollingBit),
    /// Random fading droplets
    ElectricRain(ElectricRain),
    /// Scanning eye with exponential luminance ramp
    Comet(Comet),
    /// Randomized sparse color fills
    RandomColors(RandomColors),
}

impl PatternSlot {
    /// Re-roll the contained pattern's cycle state.
    pub fn reset<const N: usize>(&mut self, strip: StripHandle<'_, N>, rng: &mut SplitMix64) {
        match self {
            Self::RollingBit(pattern) => pattern.reset(strip, rng),
            Self::ElectricRain(pattern) => pattern.reset(strip, rng),
            Self::Comet(pattern) => pattern.reset(strip, rng),
            Self::RandomColors(pattern) => pattern.reset(strip, rng),
        }
    }

    /// Apply one step of the contained pattern.
    pub fn step<const N: usize>(
        &mut self,
        strip: StripHandle<'_, N>,
        rng: &mut SplitMix64,
    ) -> StepOutcome {
        match self {
            Self::RollingBit(pattern) => pattern.step(strip, rng),
            Self::ElectricRain(pattern) => pattern.step(strip, rng),
            Self::Comet(pattern) => pattern.step(strip, rng),
            Self::RandomColors(pattern) => pattern.step(strip, rng),
        }
    }
}

/// Infinite rotation over a set of patterns.
///
/// Models the producer side of the system as an explicit scheduling loop:
/// the owning context calls [`PatternRunner::tick`], rests the returned
/// duration, and repeats forever. There is no exit; a caller that needs
/// cancellation checks its own signal between ticks.
pub struct PatternRunner<'a, const N: usize> {
    strip: StripHandle<'a, N>,
    rng: SplitMix64,
    slots: Vec<PatternSlot, MAX_PATTERNS>,
    current: usize,
    needs_reset: bool,
}

impl<'a, const N: usize> PatternRunner<'a, N> {
    /// Create a runner with an empty rotation.
    pub const fn new(strip: StripHandle<'a, N>, rng: SplitMix64) -> Self {
        Self {
            strip,
            rng,
            slots: Vec::new(),
            current: 0,
            needs_reset: true,
        }
    }

    /// Create a runner with the standard rotation: rolling bit, electric
    /// rain, comet, random colors.
    pub fn standard(strip: StripHandle<'a, N>, rng: SplitMix64) -> Self {
        let mut runner = Self::new(strip, rng);
        let _ = runner.push(PatternSlot::RollingBit(RollingBit::new()));
        let _ = runner.push(PatternSlot::ElectricRain(ElectricRain::new()));
        let _ = runner.push(PatternSlot::Comet(Comet::new()));
        let _ = runner.push(PatternSlot::RandomColors(RandomColors::new()));
        runner
    }

    /// Append a pattern to the rotation.
    ///
    /// Returns the slot back when the rotation is full.
    pub fn push(&mut self, slot: PatternSlot) -> Result<(), PatternSlot> {
        self.slots.push(slot)
    }

    /// Advance by one producer step and return how long to rest.
    ///
    /// A finished pattern hands the strip to the next one within the same
    /// call, so the returned rest always follows a real step.
    ///
    /// # Panics
    ///
    /// Panics when the rotation is empty.
    pub fn tick(&mut self) -> Duration {
        assert!(!self.slots.is_empty(), "pattern rotation is empty");

        // Bound the handoff chain to one full rotation in case every
        // pattern finishes without stepping.
        for _ in 0..=self.slots.len() {
            if self.needs_reset {
                self.slots[self.current].reset(self.strip, &mut self.rng);
                self.needs_reset = false;
            }
            match self.slots[self.current].step(self.strip, &mut self.rng) {
                StepOutcome::Sleep(rest) => return rest,
                StepOutcome::Done => {
                    self.current = (self.current + 1) % self.slots.len();
                    self.needs_reset = true;
                }
            }
        }
        IDLE_REST
    }
}
