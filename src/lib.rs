#![no_std]

pub mod config;
pub mod encoder;
pub mod frame;
pub mod patterns;
pub mod refresh;
pub mod rng;
pub mod spi;

pub use config::{ProtocolConfig, WS2812B};
pub use frame::{FrameBuffer, StripHandle};
pub use patterns::{Pattern, PatternRunner, PatternSlot, StepOutcome};
pub use refresh::{FrameOutcome, RefreshDriver};
pub use rng::SplitMix64;
pub use spi::SpiStripBus;

pub use embassy_time::Duration;
pub use smart_leds::RGB8;

/// Pixel color type, one 8-bit intensity per channel.
pub type Rgb = RGB8;

/// Abstract strip transport trait
///
/// Implement this trait to push encoded frames over different hardware
/// buses. The refresh driver is generic over this trait.
pub trait StripBus {
    /// Transport error reported by a failed frame write.
    type Error;

    /// Drive the device-select line; `true` selects the strip for a frame.
    fn select(&mut self, active: bool);

    /// Push one fully encoded frame payload as a single contiguous write.
    fn write(&mut self, payload: &[u8]) -> Result<(), Self::Error>;
}
