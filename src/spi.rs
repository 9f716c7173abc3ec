//! SPI transport adapter.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::StripBus;

/// [`StripBus`] over an `embedded-hal` SPI bus with an active-low select
/// pin.
///
/// The symbol stream leaves on MOSI; SCK and MISO are unused by the strip
/// but belong to the bus. Configure the peripheral for the data rate the
/// protocol table was derived for (`ProtocolConfig::bus_rate_hz`), MSB
/// first.
pub struct SpiStripBus<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiStripBus<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Wrap an SPI peripheral and select pin.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Release the underlying peripherals.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> StripBus for SpiStripBus<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = SPI::Error;

    fn select(&mut self, active: bool) {
        // Active low. A select-pin error has no recovery path inside a
        // frame cycle; the write result decides the frame's fate.
        let result = if active {
            self.cs.set_low()
        } else {
            self.cs.set_high()
        };
        let _ = result;
    }

    fn write(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(payload)
    }
}
