//! Transport capability
//!
//! The command encoder needs exactly four primitives from a link: write one
//! byte, write a buffer, read one byte, read a 16-bit value. Everything else
//! (bus addressing, chip select, baud rate) is the transport's business.

/// Errors reported by a transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Bus or line error (framing, arbitration, pin failure)
    Bus,
    /// The module did not acknowledge its address or data
    Nack,
    /// Receive overrun
    Overrun,
    /// No data arrived within the configured read timeout
    ReadTimeout,
    /// Other error
    Other,
}

/// Byte channel to a Digole display module
///
/// Writes return the number of bytes the link accepted. A count lower than
/// requested is not an error at this layer; the encoder decides what a short
/// write means for the frame being sent.
///
/// Reads block until a byte arrives or the transport's read timeout expires,
/// in which case [`LinkError::ReadTimeout`] is returned.
pub trait Transport {
    /// Write a buffer, returning how many bytes were accepted
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize, LinkError>;

    /// Read a single byte from the module
    fn read_byte(&mut self) -> Result<u8, LinkError>;

    /// Write a single byte, returning 0 or 1
    fn write_byte(&mut self, byte: u8) -> Result<usize, LinkError> {
        self.write_bytes(&[byte])
    }

    /// Read a 16-bit value sent high byte first
    fn read_u16(&mut self) -> Result<u16, LinkError> {
        let high = self.read_byte()?;
        let low = self.read_byte()?;
        Ok(u16::from_be_bytes([high, low]))
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize, LinkError> {
        T::write_bytes(self, data)
    }

    fn read_byte(&mut self) -> Result<u8, LinkError> {
        T::read_byte(self)
    }

    fn write_byte(&mut self, byte: u8) -> Result<usize, LinkError> {
        T::write_byte(self, byte)
    }

    fn read_u16(&mut self) -> Result<u16, LinkError> {
        T::read_u16(self)
    }
}
