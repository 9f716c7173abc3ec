//! Color byte to bus symbol encoding.
//!
//! Each protocol bit becomes one group of identical symbol bytes; the
//! symbol value selects which of the two waveform approximations the bus
//! reproduces. Encoding is allocation-free and runs once per channel per
//! pixel per frame, so it stays on the hot path of every refresh cycle.

use crate::Rgb;
use crate::config::ProtocolConfig;

/// Encode one color channel byte into `payload` starting at `offset`,
/// most significant bit first. Returns the offset past the written
/// symbols so channel encodings chain back to back.
///
/// Total over the full byte range; the caller guarantees `payload` has
/// room for `8 * config.symbols_per_bit` symbols at `offset`.
#[inline]
pub fn encode_byte(
    payload: &mut [u8],
    mut offset: usize,
    byte: u8,
    config: &ProtocolConfig,
) -> usize {
    for shift in (0..8).rev() {
        let symbol = if (byte >> shift) & 1 != 0 {
            config.one_symbol
        } else {
            config.zero_symbol
        };
        for _ in 0..config.symbols_per_bit {
            payload[offset] = symbol;
            offset += 1;
        }
    }
    offset
}

/// Encode one pixel's three channels in the G, R, B order the device
/// expects on the wire. Returns the advanced offset.
#[inline]
pub fn encode_pixel(
    payload: &mut [u8],
    offset: usize,
    pixel: Rgb,
    config: &ProtocolConfig,
) -> usize {
    let offset = encode_byte(payload, offset, pixel.g, config);
    let offset = encode_byte(payload, offset, pixel.r, config);
    encode_byte(payload, offset, pixel.b, config)
}
