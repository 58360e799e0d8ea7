//! I2C transport

use digole_hal::{I2cConfig, LinkError, Transport};
use embedded_hal::i2c::I2c;

use crate::error::i2c_error;

/// Transport over an I2C bus
///
/// Every write is one bus transaction to the module's address. Reads
/// request exactly the bytes needed; the module stretches the clock until
/// it has them.
pub struct I2cTransport<I> {
    i2c: I,
    config: I2cConfig,
}

impl<I: I2c> I2cTransport<I> {
    /// Create a transport; the bus must already run at `config.frequency`
    pub fn new(i2c: I, config: I2cConfig) -> Self {
        debug!(
            "i2c transport at {=u8:#x}, {} Hz",
            config.address,
            config.frequency
        );
        Self { i2c, config }
    }

    /// Current link configuration
    pub fn config(&self) -> &I2cConfig {
        &self.config
    }

    /// 7-bit address transactions go to
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Follow an address change made with the `SI2CA` command
    pub fn set_address(&mut self, address: u8) {
        debug!("i2c address now {=u8:#x}", address);
        self.config = self.config.with_address(address);
    }

    /// Give back the bus
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> Transport for I2cTransport<I> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize, LinkError> {
        self.i2c
            .write(self.config.address, data)
            .map_err(i2c_error)?;
        Ok(data.len())
    }

    fn read_byte(&mut self) -> Result<u8, LinkError> {
        let mut buf = [0u8; 1];
        self.i2c
            .read(self.config.address, &mut buf)
            .map_err(i2c_error)?;
        Ok(buf[0])
    }

    fn read_u16(&mut self) -> Result<u16, LinkError> {
        let mut buf = [0u8; 2];
        self.i2c
            .read(self.config.address, &mut buf)
            .map_err(i2c_error)?;
        Ok(u16::from_be_bytes(buf))
    }
}
