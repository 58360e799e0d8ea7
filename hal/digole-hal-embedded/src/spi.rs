//! SPI transport

use digole_hal::spi::{READ_SETUP_NS, WRITE_SETUP_NS};
use digole_hal::{LinkError, SpiConfig, SpiWriteMode, Transport};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal::spi::{Operation, SpiDevice};

use crate::error::{pin_error, spi_error};

/// Transport over an SPI device
///
/// The module raises its data-out line when it has a byte to send; `ready`
/// watches that line so reads only start once there is something to read.
/// The device must be set up with [`SpiConfig::bus_mode`] and
/// `config.frequency`.
pub struct SpiTransport<S, R, D> {
    spi: S,
    ready: R,
    delay: D,
    config: SpiConfig,
}

impl<S, R, D> SpiTransport<S, R, D>
where
    S: SpiDevice,
    R: InputPin,
    D: DelayNs,
{
    /// Create a transport over a device set up for `config`
    pub fn new(spi: S, ready: R, delay: D, config: SpiConfig) -> Self {
        debug!(
            "spi transport at {} Hz, {}, {}",
            config.frequency,
            config.mode,
            config.write_mode
        );
        Self {
            spi,
            ready,
            delay,
            config,
        }
    }

    /// Current link configuration
    pub fn config(&self) -> &SpiConfig {
        &self.config
    }

    /// Give back the device, ready pin and delay
    pub fn release(self) -> (S, R, D) {
        (self.spi, self.ready, self.delay)
    }

    fn write_window(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        self.spi
            .transaction(&mut [Operation::DelayNs(WRITE_SETUP_NS), Operation::Write(bytes)])
            .map_err(spi_error)
    }
}

impl<S, R, D> Transport for SpiTransport<S, R, D>
where
    S: SpiDevice,
    R: InputPin,
    D: DelayNs,
{
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize, LinkError> {
        match self.config.write_mode {
            SpiWriteMode::Burst => self.write_window(data)?,
            SpiWriteMode::PerByte => {
                for byte in data {
                    self.write_window(core::slice::from_ref(byte))?;
                }
            }
        }
        Ok(data.len())
    }

    fn read_byte(&mut self) -> Result<u8, LinkError> {
        let ready = &mut self.ready;
        self.config
            .read_timeout
            .wait_until(&mut self.delay, || ready.is_high().map_err(pin_error))?;

        let mut buf = [0u8; 1];
        self.spi
            .transaction(&mut [Operation::DelayNs(READ_SETUP_NS), Operation::Read(&mut buf)])
            .map_err(spi_error)?;
        Ok(buf[0])
    }
}
