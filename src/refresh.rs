//! Periodic frame transmission.
//!
//! One dedicated execution context owns a [`RefreshDriver`] and calls
//! [`RefreshDriver::tick`] on a fixed cadence. A tick runs one full cycle:
//!
//! 1. compose: zero-fill the payload, then encode every pixel in index
//!    order under a single frame-buffer lock acquisition;
//! 2. transmit: assert device select, push the whole payload in one
//!    contiguous bus write, deassert select.
//!
//! The idle rest between ticks belongs to the caller, which keeps the
//! driver free of any platform sleep primitive:
//!
//! ```ignore
//! loop {
//!     driver.tick();
//!     Timer::after(driver.refresh_interval()).await;
//! }
//! ```
//!
//! There is no recoverable error state: a failed bus write loses exactly
//! one frame and the next tick proceeds on cadence. Staying on schedule
//! beats retrying.

use embassy_time::Duration;

use crate::StripBus;
use crate::config::ProtocolConfig;
use crate::encoder;
use crate::frame::FrameBuffer;

/// Result of one transmission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameOutcome {
    /// The payload reached the bus.
    Sent,
    /// The bus rejected the write; this frame is lost, the next cycle
    /// proceeds normally.
    Dropped,
}

/// Periodic transmission driver for a strip of `N` pixels.
///
/// `P` is the payload size and must equal
/// [`ProtocolConfig::payload_len`] for `N`; compute it in const position:
///
/// ```ignore
/// const LED_COUNT: usize = 8;
/// static FRAME: FrameBuffer<LED_COUNT> = FrameBuffer::new();
///
/// let mut driver: RefreshDriver<_, LED_COUNT, { WS2812B.payload_len(LED_COUNT) }> =
///     RefreshDriver::new(&FRAME, bus, WS2812B);
/// ```
pub struct RefreshDriver<'a, B, const N: usize, const P: usize> {
    bus: B,
    buffer: &'a FrameBuffer<N>,
    config: ProtocolConfig,
    payload: [u8; P],
}

impl<'a, B: StripBus, const N: usize, const P: usize> RefreshDriver<'a, B, N, P> {
    /// Create a driver over `bus` for `buffer`.
    ///
    /// # Panics
    ///
    /// Panics when `P` does not match `config.payload_len(N)`. That is a
    /// wiring bug in the build, not a runtime condition.
    pub fn new(buffer: &'a FrameBuffer<N>, bus: B, config: ProtocolConfig) -> Self {
        assert!(
            P == config.payload_len(N),
            "payload buffer must be sized with ProtocolConfig::payload_len"
        );
        Self {
            bus,
            buffer,
            config,
            payload: [0; P],
        }
    }

    /// Rest the calling context should take between ticks.
    pub const fn refresh_interval(&self) -> Duration {
        self.config.refresh_interval
    }

    /// The protocol table this driver encodes with.
    pub const fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// Run one compose + transmit cycle.
    pub fn tick(&mut self) -> FrameOutcome {
        self.compose();
        self.transmit()
    }

    /// Release the bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    fn compose(&mut self) {
        // Zero-fill first so the reset preamble region is low no matter
        // what the previous cycle left behind.
        self.payload.fill(0);

        let config = self.config;
        let payload = &mut self.payload;
        self.buffer.with_frame(|pixels| {
            let mut offset = config.reset_len;
            for pixel in pixels {
                offset = encoder::encode_pixel(payload, offset, *pixel, &config);
            }
        });
    }

    fn transmit(&mut self) -> FrameOutcome {
        self.bus.select(true);
        let result = self.bus.write(&self.payload);
        self.bus.select(false);

        match result {
            Ok(()) => FrameOutcome::Sent,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("bus write failed, frame dropped");
                FrameOutcome::Dropped
            }
        }
    }
}
