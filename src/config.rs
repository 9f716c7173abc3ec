//! Protocol timing configuration.
//!
//! The strip's single-wire protocol is approximated by shifting fixed byte
//! patterns ("symbols") out over the bus at a constant data rate. Which
//! patterns, how many per protocol bit, and how long the reset gap must be
//! are all properties of the LED device variant, so they live in a config
//! table rather than in the encoder.

use embassy_time::Duration;

/// Color channels per pixel (G, R, B).
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Protocol bits per color channel.
pub const BITS_PER_CHANNEL: usize = 8;

/// Waveform table for one addressable-LED protocol variant.
///
/// Fixed at build time; the channel order on the wire (green, red, blue)
/// is a device constraint baked into the encoder, not a field here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProtocolConfig {
    /// Bus symbol slots that encode one protocol bit.
    pub symbols_per_bit: usize,
    /// Symbol byte shifted out for a logical 0 bit.
    pub zero_symbol: u8,
    /// Symbol byte shifted out for a logical 1 bit.
    pub one_symbol: u8,
    /// Reset preamble length in symbols (held low to latch a frame).
    pub reset_len: usize,
    /// Rest between transmission cycles.
    pub refresh_interval: Duration,
    /// Bus data rate the symbol patterns were derived for.
    pub bus_rate_hz: u32,
}

impl ProtocolConfig {
    /// Payload size in bytes for a strip of `led_count` pixels: the reset
    /// preamble plus one symbol group per protocol bit.
    ///
    /// Usable in const position to size a driver's payload buffer:
    ///
    /// ```
    /// use neostrip::WS2812B;
    ///
    /// const LED_COUNT: usize = 8;
    /// const PAYLOAD: usize = WS2812B.payload_len(LED_COUNT);
    /// assert_eq!(PAYLOAD, 50 + 8 * 3 * 8);
    /// ```
    pub const fn payload_len(&self, led_count: usize) -> usize {
        self.reset_len
            + led_count * CHANNELS_PER_PIXEL * BITS_PER_CHANNEL * self.symbols_per_bit
    }
}

/// WS2812B profile for an 8 MHz bus.
///
/// At 8 MHz one symbol byte spans 1 us, one protocol bit slot. `0xFC`
/// holds the line high for six of its eight bus bits (~750 ns high,
/// ~250 ns low) which the device reads as a 1; `0xC0` is high for two
/// (~250 ns high, ~750 ns low), a 0. Both duty cycles sit inside the
/// device's sampling tolerance. Fifty low symbols give a ~50 us reset
/// gap, past the latch threshold of the B-variant parts this table was
/// tuned on.
pub const WS2812B: ProtocolConfig = ProtocolConfig {
    symbols_per_bit: 1,
    zero_symbol: 0xC0,
    one_symbol: 0xFC,
    reset_len: 50,
    refresh_interval: Duration::from_millis(20),
    bus_rate_hz: 8_000_000,
};
